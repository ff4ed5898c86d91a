//! Concurrent batch generation of certificate updates.
//!
//! The `BatchProducer` splits a requested record count as evenly as possible
//! across a configured number of worker threads. Each worker accumulates its
//! sub-batch in a local `Vec` using its own thread-local RNG, then hands the
//! finished sub-batch back over a `crossbeam_channel`. The producer joins
//! every worker before draining the channel, so the merged batch is complete
//! by the time it is returned.
//!
//! Design notes:
//! - No shared mutable state between workers: the only cross-thread traffic
//!   is the one sub-batch message per worker at the end of its run.
//! - Worker i is assigned `quotes / threads` records plus one extra while
//!   `i < quotes % threads`; the shares sum to exactly `quotes`. Workers
//!   with an empty share (when `threads > quotes`) are never spawned.
//! - Batch order reflects completion order across workers, not request
//!   order.

use crate::model::certificate_update::CertificateUpdate;
use cert_common::country::CountryCode;
use cert_common::{FeedError, Result};
use crossbeam_channel::unbounded;
use log::{debug, info};
use std::thread;

/// Multi-threaded producer for a fixed-size batch of certificate updates.
pub struct BatchProducer {
    threads: usize,
    quotes: usize,
    country: CountryCode,
}

impl BatchProducer {
    /// Creates a producer for `quotes` records spread over up to `threads`
    /// workers, generating identifiers with the given `country` prefix.
    pub fn new(threads: usize, quotes: usize, country: CountryCode) -> Self {
        BatchProducer {
            threads,
            quotes,
            country,
        }
    }

    /// Generates the full batch and returns it once every worker finished.
    ///
    /// Fails before any work begins if either count is zero. Afterwards
    /// generation is total: the returned batch always holds exactly the
    /// requested number of records. A panic inside a worker is surfaced as
    /// `FeedError::WorkerPanic`.
    pub fn produce(&self) -> Result<Vec<CertificateUpdate>> {
        if self.threads == 0 || self.quotes == 0 {
            return Err(FeedError::EmptyBatchRequest {
                threads: self.threads,
                quotes: self.quotes,
            });
        }

        let (batch_tx, batch_rx) = unbounded::<Result<Vec<CertificateUpdate>>>();
        let base_share = self.quotes / self.threads;
        let extra = self.quotes % self.threads;
        let mut handles = Vec::with_capacity(self.threads);

        for worker in 0..self.threads {
            let share = base_share + usize::from(worker < extra);
            if share == 0 {
                continue;
            }
            let tx = batch_tx.clone();
            let country = self.country;

            handles.push(thread::spawn(move || {
                debug!(
                    "Worker {} generating {} records (thread {:?})",
                    worker,
                    share,
                    thread::current().id()
                );
                let sub_batch: Result<Vec<CertificateUpdate>> = (0..share)
                    .map(|_| CertificateUpdate::generate_new(country))
                    .collect();
                // Receiver outlives all workers; a failed send only happens
                // if the producer itself already bailed out.
                let _ = tx.send(sub_batch);
            }));
        }
        drop(batch_tx);

        info!(
            "Spawned {} workers for {} records",
            handles.len(),
            self.quotes
        );

        // Join barrier: every worker has delivered its sub-batch once this
        // loop completes, so draining the channel below cannot block.
        for handle in handles {
            handle.join().map_err(|_| FeedError::WorkerPanic)?;
        }

        let mut batch = Vec::with_capacity(self.quotes);
        for sub_batch in batch_rx {
            batch.extend(sub_batch?);
        }
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cert_common::isin;

    fn produce(threads: usize, quotes: usize) -> Result<Vec<CertificateUpdate>> {
        BatchProducer::new(threads, quotes, CountryCode::DE).produce()
    }

    #[test]
    fn produces_exact_count_single_thread() {
        assert_eq!(produce(1, 7).unwrap().len(), 7);
    }

    #[test]
    fn produces_exact_count_more_threads_than_quotes() {
        assert_eq!(produce(8, 3).unwrap().len(), 3);
    }

    #[test]
    fn produces_exact_count_threads_equal_quotes() {
        assert_eq!(produce(5, 5).unwrap().len(), 5);
    }

    #[test]
    fn produces_exact_count_uneven_split() {
        assert_eq!(produce(3, 10).unwrap().len(), 10);
    }

    #[test]
    fn rejects_zero_threads() {
        assert!(matches!(
            produce(0, 10),
            Err(FeedError::EmptyBatchRequest { threads: 0, .. })
        ));
    }

    #[test]
    fn rejects_zero_quotes() {
        assert!(matches!(
            produce(4, 0),
            Err(FeedError::EmptyBatchRequest { quotes: 0, .. })
        ));
    }

    #[test]
    fn batch_records_are_valid_end_to_end() {
        let batch = produce(4, 10).unwrap();
        assert_eq!(batch.len(), 10);
        for update in &batch {
            assert_eq!(update.isin.len(), isin::ISIN_LEN);
            let (base, check) = update.isin.split_at(isin::ISIN_LEN - 1);
            let expected: u32 = check.parse().unwrap();
            assert_eq!(isin::check_digit(base).unwrap(), expected);

            assert!(update.bid_price >= 100.0 && update.bid_price <= 200.0);
            assert!(update.ask_price >= 100.0 && update.ask_price <= 200.0);
            assert!((1000..=5000).contains(&update.bid_size));
            assert!((1000..=10000).contains(&update.ask_size));

            let line = update.to_string();
            assert_eq!(line.split(',').count(), 6);
        }
    }

    #[test]
    fn honors_requested_country_prefix() {
        let batch = BatchProducer::new(2, 6, CountryCode::FR).produce().unwrap();
        assert!(batch.iter().all(|u| u.isin.starts_with("FR")));
    }
}
