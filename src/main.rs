//! `aihe-engine` - Scores AIHE assessments from JSON.
//!
//! Reads an `AssessmentInput` document (or an array of them with `--batch`)
//! from a file or stdin and prints the scored result as JSON on stdout.
//! Logs go to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde_json::{json, Value};
use tokio::io::AsyncReadExt;

use aihe_engine::adapters::{BuiltinCatalogSource, TracingEventPublisher, YamlFileCatalogSource};
use aihe_engine::application::{
    ScoreAssessmentCommand, ScoreAssessmentHandler, ScoreAssessmentResult, ScoreBatchHandler,
};
use aihe_engine::config::{AppConfig, LoggingConfig};
use aihe_engine::domain::assessment::{AssessmentEngine, AssessmentInput};
use aihe_engine::domain::foundation::{AssessmentId, DomainError, OrganisationId};
use aihe_engine::ports::ReferenceCatalogSource;

#[derive(Parser, Debug)]
#[command(name = "aihe-engine")]
#[command(about = "Score AIHE AI-maturity assessments")]
struct Args {
    /// Assessment input JSON file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Treat the input as a JSON array of assessments
    #[arg(long)]
    batch: bool,

    /// Print compact instead of pretty JSON
    #[arg(long)]
    compact: bool,

    /// Assessment ID to report in the published event (single mode only)
    #[arg(long, conflicts_with = "batch")]
    assessment_id: Option<AssessmentId>,

    /// Organisation the assessment belongs to (single mode only)
    #[arg(long, conflicts_with = "batch")]
    organisation_id: Option<OrganisationId>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    init_tracing(&config.logging)?;

    let source: Box<dyn ReferenceCatalogSource> = match &config.catalog.path {
        Some(path) => Box::new(YamlFileCatalogSource::new(path)),
        None => Box::new(BuiltinCatalogSource),
    };
    let catalogs = source
        .load()
        .await
        .with_context(|| format!("Failed to load catalogs from {}", source.describe()))?;
    tracing::info!(
        source = %source.describe(),
        archetypes = catalogs.archetypes.len(),
        critical_pairs = catalogs.critical_pairs.len(),
        "Reference catalogs loaded"
    );

    let engine = AssessmentEngine::new(catalogs, config.engine.scoring_parameters())?;
    let handler = Arc::new(ScoreAssessmentHandler::new(
        engine,
        Arc::new(TracingEventPublisher::new()),
    ));

    let raw = read_input(args.input.as_ref()).await?;
    let output = if args.batch {
        let inputs: Vec<AssessmentInput> =
            serde_json::from_str(&raw).context("Input is not a JSON array of assessments")?;
        let commands = inputs.into_iter().map(ScoreAssessmentCommand::new).collect();
        let results = ScoreBatchHandler::new(handler).handle(commands).await;
        Value::Array(results.into_iter().map(render).collect())
    } else {
        let input: AssessmentInput =
            serde_json::from_str(&raw).context("Input is not a valid assessment")?;
        let mut command = ScoreAssessmentCommand::new(input);
        if let Some(assessment_id) = args.assessment_id {
            command.assessment_id = assessment_id;
        }
        if let Some(organisation_id) = args.organisation_id {
            command = command.with_organisation(organisation_id);
        }
        let outcome = handler.handle(command).await?;
        serde_json::to_value(&outcome.result)?
    };

    let text = if args.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{}", text);
    Ok(())
}

fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_writer(std::io::stderr);

    let initialised = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    initialised.map_err(|e| anyhow!("Failed to initialise tracing: {}", e))
}

async fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("Failed to read stdin")?;
            Ok(raw)
        }
    }
}

fn render(outcome: Result<ScoreAssessmentResult, DomainError>) -> Value {
    match outcome {
        Ok(outcome) => json!({
            "assessment_id": outcome.assessment_id.to_string(),
            "result": outcome.result,
        }),
        Err(err) => json!({
            "error": {
                "code": err.code.to_string(),
                "message": err.message,
                "details": err.details,
            }
        }),
    }
}
