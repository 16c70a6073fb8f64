use crate::cli::AnimateArgs;
use crate::config::builder::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use crate::utils::xyz::{self, FrameHeader};
use normode::engine::progress::{Progress, ProgressReporter};
use normode::workflows::visualize;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::info;

pub fn run(args: AnimateArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = build_config(&args)?;

    info!("Reading report from {:?}", &app_config.input_path);
    let text = super::read_report(&app_config.input_path)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Preparing scene...");
    let scene = visualize::prepare(&text, &app_config.core_config, &reporter)?;
    let mode = scene.mode(app_config.mode_index)?;
    let frequency = mode.frequency;
    let sampler = scene.animate(app_config.mode_index)?;

    let frame_count = sampler
        .cycle_len()
        .checked_mul(app_config.cycles)
        .ok_or_else(|| {
            CliError::Argument(format!(
                "--cycles {} is too large: {} frames per cycle would overflow the frame count",
                app_config.cycles,
                sampler.cycle_len()
            ))
        })?;
    let animation = scene.animation();
    info!(
        mode = app_config.mode_index,
        frequency,
        steps = animation.steps,
        scale = animation.displacement_scale,
        frames = frame_count,
        "Exporting animation."
    );

    let labels: Vec<&str> = scene.geometry.labels().collect();
    let header = FrameHeader {
        mode_index: app_config.mode_index,
        frequency,
        connections: scene.connections.as_ref(),
    };

    let output_path = &app_config.output_path;
    let export_error = |source| CliError::Export {
        path: output_path.clone(),
        source,
    };
    let file = File::create(output_path).map_err(export_error)?;
    let mut writer = BufWriter::new(file);

    reporter.report(Progress::PhaseStart {
        name: "Writing frames",
    });
    reporter.report(Progress::TaskStart {
        total: frame_count as u64,
    });
    for frame in sampler.take(frame_count) {
        xyz::write_frame(&mut writer, &labels, &frame, &header).map_err(export_error)?;
        reporter.report(Progress::TaskIncrement { amount: 1 });
    }
    writer.flush().map_err(export_error)?;
    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    println!(
        "✓ Mode {} ({:.2} cm-1): {} frames written to {}",
        app_config.mode_index,
        frequency,
        frame_count,
        output_path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use normode::core::io::error::ReportError;
    use normode::engine::error::EngineError;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const REPORT: &str = "\
  Center     X           Y           Z         Mass
 ------------------------------------------------------
      O     0.000000    0.000000    0.000000   15.994915
      H     0.757000    0.586000    0.000000    1.007825
      H    -0.757000    0.586000    0.000000    1.007825

  Frequency:   1648.52
     X           Y           Z         mass
      O     0.000000   -0.070000    0.000000   15.994915
      H     0.430000    0.560000    0.000000    1.007825
      H    -0.430000    0.560000    0.000000    1.007825
";

    fn args_for(dir: &Path, mode: usize) -> AnimateArgs {
        let input = dir.join("water.out");
        fs::write(&input, REPORT).unwrap();
        AnimateArgs {
            input,
            mode,
            output: dir.join("water.xyz"),
            config: None,
            steps: Some(3),
            scale: Some(1.0),
            cycles: 2,
            no_connections: false,
            set_values: vec![],
        }
    }

    #[test]
    fn run_writes_requested_number_of_frames() {
        let dir = tempdir().unwrap();
        let args = args_for(dir.path(), 0);
        let output = args.output.clone();

        run(args).unwrap();

        let text = fs::read_to_string(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // 2 cycles of 6 frames, each frame 2 header lines + 3 atoms.
        assert_eq!(lines.len(), 12 * 5);
        assert_eq!(lines[0], "3");
        assert!(lines[1].starts_with("mode=0 frequency=1648.5200 step=0 scale=0.000000"));
        assert!(lines[1].ends_with("connections=0-1,0-2"));
        assert!(lines[5 * 6 + 1].contains("step=0"));
    }

    #[test]
    fn run_without_connections_omits_them_from_comments() {
        let dir = tempdir().unwrap();
        let mut args = args_for(dir.path(), 0);
        args.no_connections = true;
        let output = args.output.clone();

        run(args).unwrap();

        let text = fs::read_to_string(output).unwrap();
        assert!(!text.contains("connections="));
    }

    #[test]
    fn run_rejects_out_of_range_mode() {
        let dir = tempdir().unwrap();
        let args = args_for(dir.path(), 5);
        let output = args.output.clone();

        let err = run(args).unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(EngineError::IndexOutOfRange { index: 5, count: 1 })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn run_reports_missing_input_with_its_path() {
        let dir = tempdir().unwrap();
        let mut args = args_for(dir.path(), 0);
        let missing = dir.path().join("missing.out");
        args.input = missing.clone();

        let err = run(args).unwrap_err();
        assert!(matches!(
            err,
            CliError::Report {
                path,
                source: ReportError::Io(_),
            } if path == missing
        ));
    }

    #[test]
    fn run_rejects_cycle_counts_that_overflow() {
        let dir = tempdir().unwrap();
        let mut args = args_for(dir.path(), 0);
        args.cycles = usize::MAX;
        let output = args.output.clone();

        let err = run(args).unwrap_err();
        assert!(matches!(err, CliError::Argument(msg) if msg.contains("--cycles")));
        assert!(!output.exists());
    }
}
