use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use mxcheck_lib::ResolverSettings;

#[derive(Parser)]
#[command(name = "mxcheck-cli")]
pub struct Cli {
    /// addresses to check, one result row per address
    pub emails: Vec<String>,

    /// read addresses from a file, one per line (blank lines ignored)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// DNS query timeout in milliseconds (0 keeps the resolver default)
    #[arg(long, default_value_t = 5_000)]
    pub timeout: u64,

    /// DNS retry attempts per query
    #[arg(long, default_value_t = 2)]
    pub attempts: usize,

    /// nameserver IP to query instead of the system configuration (repeatable)
    #[arg(long = "nameserver")]
    pub nameservers: Vec<IpAddr>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// write the report to a file instead of stdout (JSON/NDJSON/CSV)
    #[arg(long)]
    pub out: Option<String>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn settings(&self) -> ResolverSettings {
        ResolverSettings {
            timeout_ms: self.timeout,
            attempts: self.attempts,
            nameservers: self.nameservers.clone(),
        }
    }
}
