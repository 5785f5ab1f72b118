#[cfg(any(feature = "with-serde", feature = "with-csv"))]
use anyhow::Context;
use anyhow::{Result, bail};

use crate::args::Cli;
use mxcheck_lib::ValidationResult;

pub fn write_report(results: &[ValidationResult], cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => write_human(results),
        "json" => write_json(results, cli),
        "ndjson" => write_ndjson(results, cli),
        "csv" => write_csv(results, cli),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}

fn write_human(results: &[ValidationResult]) -> Result<()> {
    println!();
    println!("Email Validation Results:");
    println!("{}", "-".repeat(60));
    for row in results {
        println!("{:<40} — {}", row.email, row.message);
    }
    println!("{}", "-".repeat(60));
    println!();
    println!("Total checked: {}", results.len());
    Ok(())
}

#[cfg(feature = "with-serde")]
fn write_json(results: &[ValidationResult], cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(results)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[ValidationResult], _: &Cli) -> Result<()> {
    bail!("format=json requires the 'with-serde' feature")
}

#[cfg(feature = "with-serde")]
fn write_ndjson(results: &[ValidationResult], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut buf = Vec::new();
        for row in results {
            let line = serde_json::to_string(row)?;
            buf.extend_from_slice(line.as_bytes());
            buf.push(b'\n');
        }
        write_all_atomically(path, &buf)?;
    } else {
        for row in results {
            println!("{}", serde_json::to_string(row)?);
        }
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson(_: &[ValidationResult], _: &Cli) -> Result<()> {
    bail!("format=ndjson requires the 'with-serde' feature")
}

#[cfg(feature = "with-csv")]
fn write_csv(results: &[ValidationResult], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in results {
            wtr.write_record(csv_record(row))?;
        }
        let data = wtr.into_inner()?;
        write_all_atomically(path, &data)?;
    } else {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        for row in results {
            wtr.write_record(csv_record(row))?;
        }
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &[ValidationResult], _: &Cli) -> Result<()> {
    bail!("format=csv requires the 'with-csv' feature")
}

#[cfg(feature = "with-csv")]
fn csv_record(row: &ValidationResult) -> [&str; 3] {
    [
        row.email.as_str(),
        if row.valid { "true" } else { "false" },
        row.message.as_str(),
    ]
}

#[cfg(any(feature = "with-serde", feature = "with-csv"))]
fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}
