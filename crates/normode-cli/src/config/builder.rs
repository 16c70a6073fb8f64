use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::AnimateArgs;
use crate::error::{CliError, Result};
use normode::engine::config as core_config;
use normode::engine::connectivity::BondCountTable;
use normode::engine::error::EngineError;
use std::str::FromStr;

pub fn build_config(args: &AnimateArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let file_config = apply_set_values(file_config, &args.set_values)?;

    let animation_steps = args
        .steps
        .or(file_config.animation_steps)
        .unwrap_or(defaults.animation_steps);
    let displacement_scale = args
        .scale
        .or(file_config.displacement_scale)
        .unwrap_or(defaults.displacement_scale);
    let show_connections = if args.no_connections {
        false
    } else {
        file_config
            .show_connections
            .unwrap_or(defaults.show_connections)
    };

    let mut bonds_per_type: BondCountTable = defaults.bonds_per_type.into_iter().collect();
    bonds_per_type.merge(file_config.bonds_per_type.into_iter().collect());

    if args.cycles == 0 {
        return Err(CliError::Argument(
            "--cycles must be at least 1".to_string(),
        ));
    }

    let core_config = core_config::VisualizationConfigBuilder::new()
        .bonds_per_type(bonds_per_type)
        .animation_steps(animation_steps)
        .displacement_scale(displacement_scale)
        .show_connections(show_connections)
        .build()
        .map_err(EngineError::from)?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        mode_index: args.mode,
        cycles: args.cycles,
        core_config,
    })
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let parts: Vec<_> = kv_pair.splitn(2, '=').collect();
        if parts.len() != 2 {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        }
        let key = parts[0].trim();
        let value_str = parts[1];

        match key {
            "animation-steps" => {
                config.animation_steps = Some(parse_value(key, value_str, "integer")?);
            }
            "displacement-scale" => {
                config.displacement_scale = Some(parse_value(key, value_str, "float")?);
            }
            "show-connections" => {
                config.show_connections = Some(parse_value(key, value_str, "boolean")?);
            }
            _ => match key.strip_prefix("bonds-per-type.") {
                Some(label) if !label.is_empty() => {
                    let count = parse_value(key, value_str, "integer")?;
                    config.bonds_per_type.insert(label.to_string(), count);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            },
        }
    }
    Ok(config)
}
