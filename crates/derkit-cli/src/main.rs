use clap::{Parser, Subcommand};
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

mod check_der;
mod hex_cmd;
mod input;
mod octet;
mod parity;
mod pbe;
mod prehash;

/// derkit: DER, hex and key-export helpers.
#[derive(Parser)]
#[command(name = "derkit")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a file is structurally valid DER.
    CheckDer {
        /// Input file (use - for stdin).
        file: String,
        /// Maximum constructed nesting depth (unlimited when omitted).
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Extract the payload of an OCTET STRING and print it as hex.
    Octet {
        /// Input file (use - for stdin).
        file: String,
        /// Reject the constructed (BER) form.
        #[arg(long)]
        der_only: bool,
    },
    /// Normalize hex text: whitespace and an odd trailing digit are dropped.
    Hex {
        text: String,
    },
    /// Frame a digest for HashML-DSA or HashSLH-DSA signing.
    Prehash {
        #[arg(long, value_enum)]
        family: prehash::Family,
        /// Dotted OID of the hash algorithm.
        #[arg(long)]
        hash_oid: String,
        /// Digest, in hex.
        #[arg(long)]
        digest: String,
        /// Context string, in hex.
        #[arg(long)]
        context: Option<String>,
    },
    /// Show the PBE parameters of a PKCS#12 export parameter set.
    Pbe {
        /// 0 = default, 1 = 3DES/SHA1, 2 = AES-256/SHA256.
        #[arg(long, allow_negative_numbers = true)]
        selector: i32,
    },
    /// Set odd parity on each byte of a DES key given in hex.
    Parity {
        key: String,
    },
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let targets = match std::env::var("RUST_LOG") {
        Ok(var) => var.parse::<Targets>()?,
        Err(_) => Targets::new().with_default(LevelFilter::WARN),
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::TRACE)
        .finish()
        .with(targets)
        .try_init()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing() {
        eprintln!("Error: invalid RUST_LOG: {e}");
        std::process::exit(2);
    }

    let result = match &cli.command {
        Commands::CheckDer { file, max_depth } => check_der::run(file, *max_depth),
        Commands::Octet { file, der_only } => octet::run(file, *der_only),
        Commands::Hex { text } => hex_cmd::run(text),
        Commands::Prehash {
            family,
            hash_oid,
            digest,
            context,
        } => prehash::run(*family, hash_oid, digest, context.as_deref()),
        Commands::Pbe { selector } => pbe::run(*selector),
        Commands::Parity { key } => parity::run(key),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
