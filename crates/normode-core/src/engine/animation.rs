use nalgebra::{Point3, Vector3};

/// Builds one "there and back" sweep of displacement scales.
///
/// Produces `num_steps` evenly spaced values from `0` to `max_scale` inclusive,
/// followed by the same values reversed, so the result has `2 * num_steps`
/// entries and both endpoints appear twice.
///
/// ```
/// use normode::engine::animation::make_cycle;
///
/// assert_eq!(make_cycle(3, 1.0), vec![0.0, 0.5, 1.0, 1.0, 0.5, 0.0]);
/// ```
pub fn make_cycle(num_steps: usize, max_scale: f64) -> Vec<f64> {
    let forward: Vec<f64> = match num_steps {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let step = max_scale / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { max_scale } else { step * i as f64 })
                .collect()
        }
    };
    forward
        .iter()
        .copied()
        .chain(forward.iter().rev().copied())
        .collect()
}

/// Displaces every rest position along its displacement vector.
///
/// `positions[i] + displacement[i] * scale` for each atom. This is a straight-line
/// interpolation and only approximates the true curvilinear motion of a normal
/// mode. Callers pass slices of equal length; extra entries in the longer slice
/// are ignored.
pub fn frame_at(
    positions: &[Point3<f64>],
    displacement: &[Vector3<f64>],
    scale: f64,
) -> Vec<Point3<f64>> {
    debug_assert_eq!(positions.len(), displacement.len());
    positions
        .iter()
        .zip(displacement)
        .map(|(p, d)| p + d * scale)
        .collect()
}

/// One sampled animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Position of this frame inside its cycle.
    pub step: usize,
    pub scale: f64,
    pub positions: Vec<Point3<f64>>,
}

/// Pull-based, endless frame source for one vibrational mode.
///
/// Each call to `next` computes one frame from the rest geometry, the mode's
/// displacement vectors and the next scale of the cycle, wrapping around at the
/// end of the cycle. The consumer decides pacing and when to stop; nothing is
/// timed or threaded here.
#[derive(Debug, Clone)]
pub struct FrameSampler {
    rest: Vec<Point3<f64>>,
    displacement: Vec<Vector3<f64>>,
    cycle: Vec<f64>,
    cursor: usize,
}

impl FrameSampler {
    pub fn new(
        rest: Vec<Point3<f64>>,
        displacement: Vec<Vector3<f64>>,
        num_steps: usize,
        max_scale: f64,
    ) -> Self {
        Self {
            rest,
            displacement,
            cycle: make_cycle(num_steps, max_scale),
            cursor: 0,
        }
    }

    /// Number of frames in one full cycle.
    pub fn cycle_len(&self) -> usize {
        self.cycle.len()
    }

    /// Rewinds to the first frame of the cycle.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// Computes the frame for an arbitrary scale without moving the cursor.
    pub fn frame_for(&self, scale: f64) -> Vec<Point3<f64>> {
        frame_at(&self.rest, &self.displacement, scale)
    }
}

impl Iterator for FrameSampler {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let scale = *self.cycle.get(self.cursor)?;
        let frame = Frame {
            step: self.cursor,
            scale,
            positions: self.frame_for(scale),
        };
        self.cursor = (self.cursor + 1) % self.cycle.len();
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-12)
    }

    #[test]
    fn make_cycle_goes_there_and_back() {
        assert_eq!(make_cycle(3, 1.0), vec![0.0, 0.5, 1.0, 1.0, 0.5, 0.0]);
    }

    #[test]
    fn make_cycle_has_twice_the_steps() {
        for n in 1..8 {
            assert_eq!(make_cycle(n, 0.7).len(), 2 * n);
        }
    }

    #[test]
    fn make_cycle_handles_negative_and_large_scales() {
        assert!(approx_eq(
            &make_cycle(5, -2.0),
            &[0.0, -0.5, -1.0, -1.5, -2.0, -2.0, -1.5, -1.0, -0.5, 0.0]
        ));
        assert_eq!(make_cycle(2, 4.0), vec![0.0, 4.0, 4.0, 0.0]);
    }

    #[test]
    fn make_cycle_edge_step_counts() {
        assert!(make_cycle(0, 1.0).is_empty());
        assert_eq!(make_cycle(1, 1.0), vec![0.0, 0.0]);
    }

    #[test]
    fn frame_at_zero_scale_is_rest_geometry() {
        let rest = vec![Point3::new(1.0, 2.0, 3.0), Point3::new(-1.0, 0.0, 0.5)];
        let disp = vec![Vector3::new(0.1, 0.0, 0.0), Vector3::new(0.0, -0.2, 0.3)];

        assert_eq!(frame_at(&rest, &disp, 0.0), rest);
    }

    #[test]
    fn frame_at_unit_scale_adds_full_displacement() {
        let rest = vec![Point3::new(1.0, 2.0, 3.0), Point3::new(-1.0, 0.0, 0.5)];
        let disp = vec![Vector3::new(0.5, 0.0, 0.0), Vector3::new(0.0, -0.25, 0.5)];

        assert_eq!(
            frame_at(&rest, &disp, 1.0),
            vec![Point3::new(1.5, 2.0, 3.0), Point3::new(-1.0, -0.25, 1.0)]
        );
        assert_eq!(
            frame_at(&rest, &disp, -2.0),
            vec![Point3::new(0.0, 2.0, 3.0), Point3::new(-1.0, 0.5, -0.5)]
        );
    }

    #[test]
    fn sampler_cycles_indefinitely() {
        let sampler = FrameSampler::new(
            vec![Point3::origin()],
            vec![Vector3::new(1.0, 0.0, 0.0)],
            3,
            1.0,
        );
        assert_eq!(sampler.cycle_len(), 6);

        let xs: Vec<f64> = sampler.take(14).map(|f| f.positions[0].x).collect();
        assert_eq!(
            xs,
            vec![0.0, 0.5, 1.0, 1.0, 0.5, 0.0, 0.0, 0.5, 1.0, 1.0, 0.5, 0.0, 0.0, 0.5]
        );
    }

    #[test]
    fn sampler_reports_step_and_scale() {
        let mut sampler = FrameSampler::new(
            vec![Point3::origin()],
            vec![Vector3::new(0.0, 2.0, 0.0)],
            2,
            0.5,
        );
        let first = sampler.next().unwrap();
        let second = sampler.next().unwrap();

        assert_eq!((first.step, first.scale), (0, 0.0));
        assert_eq!((second.step, second.scale), (1, 0.5));
        assert_eq!(second.positions, vec![Point3::new(0.0, 1.0, 0.0)]);
    }

    #[test]
    fn restart_rewinds_to_first_frame() {
        let mut sampler = FrameSampler::new(
            vec![Point3::origin()],
            vec![Vector3::new(1.0, 0.0, 0.0)],
            4,
            3.0,
        );
        sampler.next();
        sampler.next();
        sampler.restart();
        assert_eq!(sampler.next().unwrap().step, 0);
    }

    #[test]
    fn sampler_with_no_steps_is_exhausted() {
        let mut sampler = FrameSampler::new(vec![Point3::origin()], vec![Vector3::zeros()], 0, 1.0);
        assert!(sampler.next().is_none());
    }
}
