//! SVT CLI - issue, inspect and verify Signed Validation Tokens.

use clap::{Parser, Subcommand};

mod commands;
mod input;
mod logging;
mod output;

use commands::{canonicalize, inspect, issue, verify};
use logging::LogFormat;

#[derive(Parser)]
#[command(name = "svt")]
#[command(about = "Signed Validation Token issuance and verification CLI")]
struct Cli {
    /// Diagnostic log format (filter with RUST_LOG)
    #[arg(long, value_enum, global = true, default_value = "pretty")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue a token from precomputed validation evidence
    Issue {
        /// PKCS#8 PEM private key
        #[arg(long)]
        key: String,
        /// PEM certificate chain, leaf first
        #[arg(long)]
        certs: String,
        /// JWS algorithm (RS256, PS384, ES512, ...)
        #[arg(long)]
        alg: String,
        /// Signing profile JSON file
        #[arg(long)]
        profile: String,
        /// Validation evidence JSON file
        #[arg(long)]
        evidence: String,
        /// Document the evidence was produced for
        #[arg(long)]
        document: Option<String>,
    },
    /// Show token header and claims without verifying
    Inspect {
        /// Compact token, or a file containing one
        token: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify token signature, payload encoding and expiry
    Verify {
        /// Compact token, or a file containing one
        token: String,
        /// PEM signer certificate (default: embedded x5c chain)
        #[arg(long)]
        cert: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show canonical bytes for input JSON
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    let result = match cli.command {
        Commands::Issue {
            key,
            certs,
            alg,
            profile,
            evidence,
            document,
        } => issue::run(key, certs, alg, profile, evidence, document),
        Commands::Inspect { token, json } => inspect::run(token, json),
        Commands::Verify { token, cert, json } => verify::run(token, cert, json),
        Commands::Canonicalize { input } => canonicalize::run(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
