use crate::core::io::error::ReportError;
use crate::core::io::geometry::GeometryParser;
use crate::core::io::traits::ReportSection;
use crate::core::io::vibration::VibrationParser;
use crate::core::models::geometry::Geometry;
use crate::core::models::mode::{ModeTable, VibrationalMode};
use crate::core::models::topology::BondGraph;
use crate::engine::animation::FrameSampler;
use crate::engine::config::{AnimationConfig, VisualizationConfig};
use crate::engine::connectivity;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use nalgebra::Point3;
use tracing::{info, instrument};

/// Everything a renderer needs to draw one calculation.
///
/// The geometry and mode table are fixed once the scene is built; animation
/// frames are produced on demand by [`Scene::animate`].
#[derive(Debug, Clone)]
pub struct Scene {
    pub geometry: Geometry,
    pub modes: ModeTable,
    /// `None` when connections are disabled in the configuration.
    pub connections: Option<BondGraph>,
    animation: AnimationConfig,
}

/// Parses `text` and resolves connectivity.
///
/// The report is scanned twice, once per parser. Any parse failure aborts the
/// whole preparation; nothing partial is returned.
#[instrument(skip_all, name = "visualize_workflow")]
pub fn prepare(
    text: &str,
    config: &VisualizationConfig,
    reporter: &ProgressReporter,
) -> Result<Scene, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Parsing geometry",
    });
    let mut geometries = GeometryParser::parse_str(text)?;
    let block_count = geometries.len();
    let geometry = geometries.pop().ok_or(ReportError::EmptyInput {
        section: "geometry",
    })?;
    info!(
        blocks = block_count,
        atoms = geometry.len(),
        "Selected the last geometry block."
    );
    reporter.report(Progress::StatusUpdate {
        text: format!("{} block(s), {} atoms", block_count, geometry.len()),
    });
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Parsing vibrational modes",
    });
    let modes = VibrationParser::parse_str(text)?;
    info!(modes = modes.len(), "Parsed vibrational modes.");
    let duplicates = modes.len() - modes.distinct_len();
    if duplicates > 0 {
        reporter.report(Progress::Message(format!(
            "{} mode(s) share a frequency with a later mode and resolve to it",
            duplicates
        )));
    }
    reporter.report(Progress::PhaseFinish);

    let connections = if config.show_connections {
        reporter.report(Progress::PhaseStart {
            name: "Resolving connectivity",
        });
        let graph = connectivity::resolve(&geometry, &config.bonds_per_type)?;
        reporter.report(Progress::PhaseFinish);
        Some(graph)
    } else {
        None
    };

    Ok(Scene {
        geometry,
        modes,
        connections,
        animation: config.animation.clone(),
    })
}

impl Scene {
    /// Returns the mode at `index` in file order.
    pub fn mode(&self, index: usize) -> Result<&VibrationalMode, EngineError> {
        self.modes.get(index).ok_or(EngineError::IndexOutOfRange {
            index,
            count: self.modes.len(),
        })
    }

    /// Starts an endless animation of the mode at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IndexOutOfRange`] for a bad index, or
    /// [`EngineError::ModeMismatch`] when the mode's rows do not line up with the
    /// geometry's atoms.
    pub fn animate(&self, index: usize) -> Result<FrameSampler, EngineError> {
        let mode = self.mode(index)?;
        mode.check_alignment(&self.geometry)?;
        Ok(FrameSampler::new(
            self.geometry.positions(),
            mode.vectors(),
            self.animation.steps,
            self.animation.displacement_scale,
        ))
    }

    /// Connection endpoints for the given frame positions, or nothing when
    /// connections are disabled.
    pub fn segments(&self, positions: &[Point3<f64>]) -> Vec<(Point3<f64>, Point3<f64>)> {
        self.connections
            .as_ref()
            .map(|graph| graph.segments(positions))
            .unwrap_or_default()
    }

    pub fn animation(&self) -> &AnimationConfig {
        &self.animation
    }
}
