//! Emission estimate CLI
//!
//! Usage:
//!   estimate [--input FILE] [--batch] [--report [FILE]]
//!
//! Reads one JSON request (or, with `--batch`, a JSON array of requests) from
//! FILE or stdin and prints the response JSON to stdout. `--report` also
//! writes the export report; FILE defaults to
//! `co2-emissions-report-YYYY-MM-DD.json`. Batch mode writes one report per
//! scenario with the index appended to the file stem.

use anyhow::{bail, Context, Result};
use carbon_estimator::{
    report_file_name, EmissionCalculator, EmissionReport, EstimateRequest, EstimateResponse, EstimationInput,
};
use carbon_estimator::wire::BatchEstimateResponse;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    batch: bool,
    /// `Some(None)` means `--report` with the default file name
    report: Option<Option<PathBuf>>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1).peekable();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--input" | "-i" => {
                let path = iter.next().context("--input requires a file path")?;
                args.input = Some(PathBuf::from(path));
            }
            "--batch" | "-b" => args.batch = true,
            "--report" | "-r" => {
                let path = iter.next_if(|next| !next.starts_with('-')).map(PathBuf::from);
                args.report = Some(path);
            }
            "--help" | "-h" => {
                println!("Usage: estimate [--input FILE] [--batch] [--report [FILE]]");
                std::process::exit(0);
            }
            other => bail!("Unknown argument: {}", other),
        }
    }
    Ok(args)
}

fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input: {:?}", path)),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn default_report_path() -> PathBuf {
    PathBuf::from(report_file_name(chrono::Local::now().date_naive()))
}

/// `report.json` → `report-3.json`
fn indexed_path(path: &Path, index: usize) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("report");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("json");
    path.with_file_name(format!("{}-{}.{}", stem, index, ext))
}

fn write_report(input: &EstimationInput, response: &EstimateResponse, path: &Path) -> Result<()> {
    EmissionReport::new(input, response.clone()).write_to(path)?;
    tracing::info!("Report written to {:?}", path);
    Ok(())
}

fn run_single(source: &str, report: Option<PathBuf>) -> Result<()> {
    let request: EstimateRequest = serde_json::from_str(source).context("Failed to parse request JSON")?;
    let input = request.into_input()?;

    let result = EmissionCalculator::new().calculate(&input)?;
    let response = EstimateResponse::from(result);

    println!("{}", serde_json::to_string_pretty(&response)?);

    if let Some(path) = report {
        write_report(&input, &response, &path)?;
    }
    Ok(())
}

fn run_batch(source: &str, report: Option<PathBuf>) -> Result<()> {
    let requests: Vec<EstimateRequest> =
        serde_json::from_str(source).context("Failed to parse batch JSON (expected an array)")?;
    tracing::info!("Loaded {} scenarios", requests.len());

    let parsed: Vec<_> = requests.into_iter().map(EstimateRequest::into_input).collect();
    let inputs: Vec<Option<EstimationInput>> = parsed.iter().map(|p| p.as_ref().ok().copied()).collect();

    let outcomes = EmissionCalculator::new()
        .calculate_parsed(parsed)
        .into_iter()
        .map(|outcome| outcome.map(EstimateResponse::from))
        .collect();

    let batch = BatchEstimateResponse::from_outcomes(outcomes);
    for err in &batch.errors {
        tracing::warn!("Scenario {} rejected: {}", err.index, err.error);
    }
    println!("{}", serde_json::to_string_pretty(&batch)?);

    if let Some(path) = report {
        write_batch_reports(&batch, &inputs, &path)?;
    }
    Ok(())
}

/// One report per successful scenario, named by its index in the batch
fn write_batch_reports(
    batch: &BatchEstimateResponse,
    inputs: &[Option<EstimationInput>],
    path: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(batch.results.len());
    for scenario in &batch.results {
        let input = inputs
            .get(scenario.index)
            .copied()
            .flatten()
            .with_context(|| format!("No parsed input for scenario {}", scenario.index))?;

        let target = indexed_path(path, scenario.index);
        write_report(&input, &scenario.response, &target)?;
        written.push(target);
    }
    Ok(written)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carbon_estimator=info,estimate=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = parse_args()?;
    let source = read_source(args.input.as_deref())?;
    let report = args.report.map(|p| p.unwrap_or_else(default_report_path));

    if args.batch {
        run_batch(&source, report)
    } else {
        run_single(&source, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_path() {
        let path = indexed_path(Path::new("out/co2-report.json"), 3);
        assert_eq!(path, PathBuf::from("out/co2-report-3.json"));
    }

    #[test]
    fn test_batch_reports_follow_scenario_index() {
        let requests: Vec<EstimateRequest> = serde_json::from_str(
            r#"[{"sector": "Retail"}, {"energy": "lots"}, {"output": -1}, {"transport": "ship"}]"#,
        )
        .unwrap();
        let parsed: Vec<_> = requests.into_iter().map(EstimateRequest::into_input).collect();
        let inputs: Vec<_> = parsed.iter().map(|p| p.as_ref().ok().copied()).collect();
        let outcomes = EmissionCalculator::new()
            .calculate_parsed(parsed)
            .into_iter()
            .map(|outcome| outcome.map(EstimateResponse::from))
            .collect();
        let batch = BatchEstimateResponse::from_outcomes(outcomes);

        let error_indices: Vec<_> = batch.errors.iter().map(|e| e.index).collect();
        assert_eq!(error_indices, vec![1, 2]);

        let dir = std::env::temp_dir().join(format!("carbon-estimate-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let written = write_batch_reports(&batch, &inputs, &dir.join("report.json")).unwrap();

        assert_eq!(written, vec![dir.join("report-0.json"), dir.join("report-3.json")]);

        let third: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&written[1]).unwrap()).unwrap();
        assert_eq!(third["inputs"]["transport"], "ship");

        let first: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&written[0]).unwrap()).unwrap();
        assert_eq!(first["inputs"]["sector"], "Retail");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
