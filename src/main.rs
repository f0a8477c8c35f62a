//! Pipeline entrypoint: read the four CSV sources, build the feature matrix,
//! score it through the ONNX model, and emit one JSON verdict line per user.
//! Structural input errors abort before the scorer is invoked.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{error, info};
use uba_pipeline::{
    config::PipelineConfig,
    error::PipelineError,
    features::{FeaturePipeline, FEATURE_COLUMNS},
    ingest,
    logging::StructuredLogger,
    model::OnnxScorer,
    risk::{RiskEngine, Verdict},
};

fn open_input(path: &Path, input: &'static str) -> Result<File, PipelineError> {
    File::open(path).map_err(|e| PipelineError::UnparseableInput {
        input,
        reason: format!("{}: {}", path.display(), e),
    })
}

fn run(config: &PipelineConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let logon = ingest::read_logon(open_input(&config.inputs.logon, "logon")?)?;
    let files = ingest::read_file_events(open_input(&config.inputs.file, "file")?)?;
    let emails = ingest::read_email(open_input(&config.inputs.email, "email")?)?;
    let psycho = ingest::read_psychometric(open_input(&config.inputs.psychometric, "psychometric")?)?;

    let matrix = FeaturePipeline::new().run(&logon, &files, &emails, &psycho);

    let scorer = OnnxScorer::load(&config.model_path, FEATURE_COLUMNS.len())?;
    let engine = RiskEngine::new(config.risk.clone());
    let verdicts = engine.classify(&matrix, &scorer)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for v in &verdicts {
        let line = serde_json::to_string(v)?;
        writeln!(out, "{}", line)?;
    }

    let anomalous = verdicts
        .iter()
        .filter(|v| v.verdict == Verdict::Anomalous)
        .count();
    info!(users = verdicts.len(), anomalous, "scoring complete");
    Ok(())
}

fn main() {
    let config_path = std::env::var("UBA_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = PipelineConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);
    info!(inputs = ?config.inputs, "UBA pipeline starting");

    if let Err(e) = run(&config) {
        error!(error = %e, "pipeline failed; no verdicts emitted");
        std::process::exit(1);
    }
}
