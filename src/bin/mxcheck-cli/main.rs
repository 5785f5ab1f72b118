use anyhow::{Context, Result, bail};

use mxcheck_lib::validate_all;

mod args;
mod output;

fn main() -> Result<()> {
    let cli = args::Cli::parse();

    let mut emails = cli.emails.clone();
    if let Some(path) = &cli.file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read '{}'", path.display()))?;
        emails.extend(content.lines().map(str::to_string));
    }

    if emails.iter().all(|line| line.trim().is_empty()) {
        bail!("no email addresses provided");
    }

    let results = validate_all(&emails, &cli.settings());
    output::write_report(&results, &cli)?;

    // Per-address validation failures are data, not process errors: normal
    // completion exits 0 whatever the verdicts say.
    Ok(())
}
