//! Validate command - check a CNP without calling any backend.

use clap::Args;
use console::style;

use ropsdoc_core::is_valid_cnp;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Personal numeric code (13 digits)
    cnp: String,
}

pub async fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let cnp = args.cnp.trim();

    if !is_valid_cnp(cnp) {
        anyhow::bail!("{} is not a valid CNP", cnp);
    }

    println!("{} {} is a valid CNP", style("✓").green(), cnp);
    Ok(())
}
