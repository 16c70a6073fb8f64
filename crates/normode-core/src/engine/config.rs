use super::connectivity::BondCountTable;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Number of evenly spaced scales from rest to full displacement.
    pub steps: usize,
    /// Exaggeration factor applied to displacement vectors; may be negative.
    pub displacement_scale: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualizationConfig {
    pub bonds_per_type: BondCountTable,
    pub animation: AnimationConfig,
    pub show_connections: bool,
}

#[derive(Default)]
pub struct VisualizationConfigBuilder {
    bonds_per_type: Option<BondCountTable>,
    animation_steps: Option<usize>,
    displacement_scale: Option<f64>,
    show_connections: Option<bool>,
}

impl VisualizationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bonds_per_type(mut self, table: BondCountTable) -> Self {
        self.bonds_per_type = Some(table);
        self
    }
    pub fn animation_steps(mut self, steps: usize) -> Self {
        self.animation_steps = Some(steps);
        self
    }
    pub fn displacement_scale(mut self, scale: f64) -> Self {
        self.displacement_scale = Some(scale);
        self
    }
    pub fn show_connections(mut self, show: bool) -> Self {
        self.show_connections = Some(show);
        self
    }

    pub fn build(self) -> Result<VisualizationConfig, ConfigError> {
        let steps = self
            .animation_steps
            .ok_or(ConfigError::MissingParameter("animation_steps"))?;
        if steps == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "animation_steps",
                reason: "must be greater than zero".to_string(),
            });
        }
        let displacement_scale = self
            .displacement_scale
            .ok_or(ConfigError::MissingParameter("displacement_scale"))?;
        if !displacement_scale.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "displacement_scale",
                reason: format!("{displacement_scale} is not a finite number"),
            });
        }
        let show_connections = self.show_connections.unwrap_or(true);
        let bonds_per_type = match self.bonds_per_type {
            Some(table) => table,
            None if !show_connections => BondCountTable::default(),
            None => return Err(ConfigError::MissingParameter("bonds_per_type")),
        };

        Ok(VisualizationConfig {
            bonds_per_type,
            animation: AnimationConfig {
                steps,
                displacement_scale,
            },
            show_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> BondCountTable {
        [("H", 1), ("O", 2)].into_iter().collect()
    }

    #[test]
    fn build_succeeds_with_all_parameters() {
        let config = VisualizationConfigBuilder::new()
            .bonds_per_type(table())
            .animation_steps(12)
            .displacement_scale(-1.5)
            .show_connections(true)
            .build()
            .unwrap();

        assert_eq!(config.animation.steps, 12);
        assert_eq!(config.animation.displacement_scale, -1.5);
        assert!(config.show_connections);
        assert_eq!(config.bonds_per_type.get("O"), Some(2));
    }

    #[test]
    fn build_requires_steps_and_scale() {
        let missing_steps = VisualizationConfigBuilder::new()
            .bonds_per_type(table())
            .displacement_scale(1.0)
            .build();
        assert_eq!(
            missing_steps,
            Err(ConfigError::MissingParameter("animation_steps"))
        );

        let missing_scale = VisualizationConfigBuilder::new()
            .bonds_per_type(table())
            .animation_steps(4)
            .build();
        assert_eq!(
            missing_scale,
            Err(ConfigError::MissingParameter("displacement_scale"))
        );
    }

    #[test]
    fn build_rejects_zero_steps_and_non_finite_scale() {
        let zero = VisualizationConfigBuilder::new()
            .bonds_per_type(table())
            .animation_steps(0)
            .displacement_scale(1.0)
            .build();
        assert!(matches!(
            zero,
            Err(ConfigError::InvalidParameter {
                name: "animation_steps",
                ..
            })
        ));

        let nan = VisualizationConfigBuilder::new()
            .bonds_per_type(table())
            .animation_steps(3)
            .displacement_scale(f64::NAN)
            .build();
        assert!(matches!(
            nan,
            Err(ConfigError::InvalidParameter {
                name: "displacement_scale",
                ..
            })
        ));
    }

    #[test]
    fn bond_table_only_required_when_connections_are_shown() {
        let without = VisualizationConfigBuilder::new()
            .animation_steps(3)
            .displacement_scale(1.0)
            .show_connections(false)
            .build()
            .unwrap();
        assert!(without.bonds_per_type.is_empty());

        let with = VisualizationConfigBuilder::new()
            .animation_steps(3)
            .displacement_scale(1.0)
            .build();
        assert_eq!(with, Err(ConfigError::MissingParameter("bonds_per_type")));
    }
}
