use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Decode a JWT and print its header, payload and signature.
/// The signature is not verified.
#[derive(Parser, Debug)]
#[command(name = "jwt-debug", version, about)]
struct Args {
    /// Compact JWT (header.payload.signature)
    #[arg(allow_hyphen_values = true)]
    token: Option<String>,

    /// Print a single JSON document instead of the sectioned report
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Anything after the token is ignored
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
    _rest: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let Some(token) = args.token else {
        let program = std::env::args().next().unwrap_or_else(|| "jwt-debug".into());
        eprintln!("Usage: {program} <token>");
        std::process::exit(1);
    };

    let mut stdout = io::stdout().lock();
    if args.json {
        let report = jwt_debug::json_report(&token);
        writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        // Decode failures are already reported; the exit status stays 0.
        let ok = jwt_debug::debug_token(&mut stdout, &token)?;
        tracing::debug!(ok, "analysis finished");
    }

    Ok(())
}
