//! Id command - extract name and CNP from an identity card.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use ropsdoc_core::{
    AzureDocumentBackend, ExtractedIdentity, IdDocumentExtractor, NationalIdPolicy,
    RecordStore, SqliteStore, prepare_file, validate_identity,
};

use super::{OutputFormat, ensure_input, load_config, spinner};

/// Arguments for the id command.
#[derive(Args)]
pub struct IdArgs {
    /// ID card scan (PDF, JPEG or PNG)
    #[arg(required = true)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Save the result to the database once the CNP is valid
    #[arg(long)]
    save: bool,
}

pub async fn run(args: IdArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    ensure_input(&args.input)?;
    info!("Processing file: {}", args.input.display());

    let pb = spinner("Preparing document...")?;
    let document = prepare_file(&args.input, &config.input)?;

    pb.set_message("Recognizing ID document...");
    let extractor = IdDocumentExtractor::new(AzureDocumentBackend::new(
        config.document_intelligence.clone(),
    )?);
    let identity = extractor.extract(&document).await;
    pb.finish_and_clear();
    let identity = identity?;

    println!("{}", format_identity(&identity, args.format)?);

    validate_identity(&identity, NationalIdPolicy::Required)?;
    eprintln!("{} CNP {} is valid", style("✓").green(), identity.national_id);

    if args.save {
        let store = SqliteStore::new(&config.store.database_path);
        let id = store.save_identity(&identity)?;
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

fn format_identity(identity: &ExtractedIdentity, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(identity)?),
        OutputFormat::Text => Ok(format!(
            "First name: {}\nLast name:  {}\nCNP:        {}",
            identity.first_name, identity.last_name, identity.national_id
        )),
    }
}
