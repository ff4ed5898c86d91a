//! Certificate Feed — generates a fixed-size batch of synthetic certificate
//! quote updates across worker threads and prints them to stdout, one record
//! per line.
//!
//! Usage example (CLI):
//! ```bash
//! cert_feed 4 1000
//! cert_feed 4 1000 --country fr --json
//! ```
//!
//! The first positional argument is the worker thread count, the second the
//! total number of records. Records are comma-separated
//! (`timestamp,isin,bidPrice,bidSize,askPrice,askSize`) by default, or JSON
//! objects with `--json`. Diagnostics go to stderr via the logger, so stdout
//! carries nothing but records.
#![warn(missing_docs)]
mod args;
pub mod model;

use crate::args::Args;
use crate::model::batch_producer::BatchProducer;
use crate::model::certificate_update::CertificateUpdate;
use cert_common::FeedError;
use cert_common::Result;
use clap::Parser;
use log::info;
use std::io::{self, Write};
use std::time::Instant;

/// Writes the batch to a locked stdout handle in the order the producer
/// returned it, one record per line.
fn write_batch(batch: &[CertificateUpdate], json: bool) -> Result<(), FeedError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for update in batch {
        if json {
            writeln!(out, "{}", update.to_json()?)?;
        } else {
            writeln!(out, "{}", update)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<(), FeedError> {
    init_logger();
    let args = Args::parse();

    let producer = BatchProducer::new(args.threads as usize, args.quotes as usize, args.country);
    let started = Instant::now();
    let batch = producer.produce()?;
    info!(
        "Generated {} records on {} threads in {:?}",
        batch.len(),
        args.threads,
        started.elapsed()
    );

    write_batch(&batch, args.json)
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
