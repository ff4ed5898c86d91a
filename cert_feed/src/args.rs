//! Command-line arguments for the certificate feed.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use cert_common::country::CountryCode;
use clap::Parser;

/// Parsed command-line arguments.
///
/// `threads` and `quotes` are positional and typed as unsigned integers, so
/// missing, non-numeric, or negative values are rejected by clap before any
/// record is generated. Zero values pass parsing and are rejected by the
/// batch producer's precondition check.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of worker threads to spread generation across.
    pub threads: u32,

    /// Total number of certificate updates to generate.
    pub quotes: u32,

    /// Two-letter ISIN country prefix for generated identifiers.
    #[clap(long, value_enum, default_value_t = CountryCode::DE)]
    pub country: CountryCode,

    /// Emit records as JSON objects instead of comma-separated lines.
    #[clap(long)]
    pub json: bool,
}
