use crate::cli::ModesArgs;
use crate::error::{CliError, Result};
use normode::core::io::geometry::final_geometry;
use normode::core::io::vibration::parse_vibrations;
use tracing::info;

pub fn run(args: ModesArgs) -> Result<()> {
    info!("Reading report from {:?}", &args.input);
    let text = super::read_report(&args.input)?;

    let report_error = |source| CliError::Report {
        path: args.input.clone(),
        source,
    };
    let geometry = final_geometry(&text).map_err(report_error)?;
    let modes = parse_vibrations(&text).map_err(report_error)?;
    info!(
        atoms = geometry.len(),
        modes = modes.len(),
        "Report parsed."
    );

    println!("Final geometry: {} atoms", geometry.len());
    println!("{:>5}  {:>12}  {:>5}  {}", "index", "freq (cm-1)", "rows", "status");
    for (index, frequency, mode) in modes.iter() {
        let status = match mode.check_alignment(&geometry) {
            Ok(()) => "ok".to_string(),
            Err(e) => e.to_string(),
        };
        println!(
            "{:>5}  {:>12.2}  {:>5}  {}",
            index,
            frequency,
            mode.len(),
            status
        );
    }
    if modes.distinct_len() < modes.len() {
        println!(
            "Note: {} duplicate frequencies share a single lookup entry.",
            modes.len() - modes.distinct_len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use normode::core::io::error::ReportError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn run_lists_modes_of_a_valid_report() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("h2.out");
        fs::write(
            &input,
            "Center X Y Z Mass\nH 0 0 0 1\nH 0.74 0 0 1\n\nFrequency: 4401.2\nX Y Z mass\nH -0.7 0 0 1\nH 0.7 0 0 1\n",
        )
        .unwrap();

        assert!(run(ModesArgs { input }).is_ok());
    }

    #[test]
    fn run_wraps_parse_failures_with_the_path() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("geometry-only.out");
        fs::write(&input, "Center X Y Z Mass\nH 0 0 0 1\n\n").unwrap();

        let err = run(ModesArgs {
            input: input.clone(),
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Report { path, .. } if path == input));
    }

    #[test]
    fn run_names_the_missing_input_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("absent.out");

        let err = run(ModesArgs {
            input: input.clone(),
        })
        .unwrap_err();
        assert!(matches!(
            &err,
            CliError::Report {
                path,
                source: ReportError::Io(_),
            } if *path == input
        ));
        assert!(err.to_string().contains("absent.out"));
    }
}
