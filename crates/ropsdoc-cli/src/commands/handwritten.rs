//! Handwritten command - transcribe a handwritten document and extract
//! its summary and identity fields.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use ropsdoc_core::{
    AzureDocumentBackend, AzureOpenAiBackend, HandwrittenPipeline, HandwrittenResult,
    NationalIdPolicy, RecordStore, SqliteStore, prepare_file, validate_identity,
};

use super::{OutputFormat, ensure_input, load_config, spinner};

/// Arguments for the handwritten command.
#[derive(Args)]
pub struct HandwrittenArgs {
    /// Handwritten document scan (PDF, JPEG or PNG)
    #[arg(required = true)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Save the result to the database once any CNP found is valid
    #[arg(long)]
    save: bool,
}

pub async fn run(args: HandwrittenArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    ensure_input(&args.input)?;
    info!("Processing file: {}", args.input.display());

    let pb = spinner("Preparing document...")?;
    let document = prepare_file(&args.input, &config.input)?;

    pb.set_message("Transcribing and extracting...");
    let pipeline = HandwrittenPipeline::new(
        AzureDocumentBackend::new(config.document_intelligence.clone())?,
        AzureOpenAiBackend::new(config.openai.clone())?,
    )
    .with_sampling(config.openai.sampling.clone())
    .with_summary_language(config.extraction.summary_language.as_str());
    let result = pipeline.process(&document).await;
    pb.finish_and_clear();
    let result = result?;

    println!("{}", format_result(&result, args.format)?);

    validate_identity(&result.identity, NationalIdPolicy::IfPresent)?;

    if args.save {
        let store = SqliteStore::new(&config.store.database_path);
        let id = store.save_transcript(&result)?;
        eprintln!(
            "{} Saved as record {} in {}",
            style("✓").green(),
            id,
            store.path().display()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_result(result: &HandwrittenResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => {
            let mut output = String::new();

            output.push_str("Transcript:\n");
            output.push_str(&format!("{}\n\n", result.transcript));
            output.push_str("Summary:\n");
            output.push_str(&format!("{}\n\n", result.summary));
            output.push_str(&format!("First name: {}\n", result.identity.first_name));
            output.push_str(&format!("Last name:  {}\n", result.identity.last_name));
            output.push_str(&format!("CNP:        {}", result.identity.national_id));

            Ok(output)
        }
    }
}
