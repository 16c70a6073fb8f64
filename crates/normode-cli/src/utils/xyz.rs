use nalgebra::Point3;
use normode::core::models::topology::BondGraph;
use normode::engine::animation::Frame;
use std::io::{self, Write};

/// Metadata carried on the comment line of every exported frame.
pub struct FrameHeader<'a> {
    pub mode_index: usize,
    pub frequency: f64,
    pub connections: Option<&'a BondGraph>,
}

impl FrameHeader<'_> {
    fn comment(&self, frame: &Frame) -> String {
        let mut comment = format!(
            "mode={} frequency={:.4} step={} scale={:.6}",
            self.mode_index, self.frequency, frame.step, frame.scale
        );
        if let Some(graph) = self.connections {
            let pairs: Vec<String> = graph
                .iter()
                .map(|c| {
                    let (a, b) = c.atoms();
                    format!("{}-{}", a, b)
                })
                .collect();
            comment.push_str(" connections=");
            comment.push_str(&pairs.join(","));
        }
        comment
    }
}

/// Appends one frame in XYZ format: atom count, comment, then one
/// `label x y z` row per atom.
pub fn write_frame<W: Write>(
    writer: &mut W,
    labels: &[&str],
    frame: &Frame,
    header: &FrameHeader,
) -> io::Result<()> {
    if labels.len() != frame.positions.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "frame has {} positions but {} labels were given",
                frame.positions.len(),
                labels.len()
            ),
        ));
    }

    writeln!(writer, "{}", labels.len())?;
    writeln!(writer, "{}", header.comment(frame))?;
    for (label, position) in labels.iter().zip(&frame.positions) {
        write_row(writer, label, position)?;
    }
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, label: &str, p: &Point3<f64>) -> io::Result<()> {
    writeln!(writer, "{:<3} {:>14.8} {:>14.8} {:>14.8}", label, p.x, p.y, p.z)
}
