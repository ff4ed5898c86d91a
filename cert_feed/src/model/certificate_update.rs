//! Certificate update data model and encoding helpers.
//!
//! A `CertificateUpdate` is one synthetic market data record: a millisecond
//! UTC timestamp, a freshly generated ISIN, and randomized bid/ask prices
//! and sizes. Instances are immutable once constructed. This module also
//! provides the comma-separated text form written to stdout and a JSON
//! encoding helper.

use cert_common::country::CountryCode;
use cert_common::isin;
use cert_common::Result;
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound (inclusive) for bid and ask prices.
pub const PRICE_MIN: f64 = 100.00;
/// Upper bound (inclusive) for bid and ask prices.
pub const PRICE_MAX: f64 = 200.00;
/// Inclusive bid size range.
pub const BID_SIZE_RANGE: (u32, u32) = (1000, 5000);
/// Inclusive ask size range.
pub const ASK_SIZE_RANGE: (u32, u32) = (1000, 10000);

/// One synthetic certificate quote update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateUpdate {
    /// UTC timestamp in milliseconds since Unix epoch.
    pub timestamp: i64,
    /// 12-character checksum-valid security identifier.
    pub isin: String,
    /// Bid price in [100.00, 200.00], two decimal places.
    pub bid_price: f64,
    /// Bid size in [1000, 5000].
    pub bid_size: u32,
    /// Ask price in [100.00, 200.00], two decimal places.
    pub ask_price: f64,
    /// Ask size in [1000, 10000].
    pub ask_size: u32,
}

impl CertificateUpdate {
    /// Generate a new `CertificateUpdate` with randomized fields.
    ///
    /// Uses the calling thread's local RNG for all draws, so workers on
    /// different threads get independent streams with no shared state.
    ///
    /// - country: ISIN prefix for the generated identifier.
    /// - Returns: a fully-populated record stamped with the current wall clock.
    pub fn generate_new(country: CountryCode) -> Result<CertificateUpdate> {
        let mut rng = rand::rng();
        Ok(CertificateUpdate {
            timestamp: Utc::now().timestamp_millis(),
            isin: isin::generate_for(country)?,
            bid_price: round_to_cents(rng.random_range(PRICE_MIN..=PRICE_MAX)),
            bid_size: rng.random_range(BID_SIZE_RANGE.0..=BID_SIZE_RANGE.1),
            ask_price: round_to_cents(rng.random_range(PRICE_MIN..=PRICE_MAX)),
            ask_size: rng.random_range(ASK_SIZE_RANGE.0..=ASK_SIZE_RANGE.1),
        })
    }

    /// Encode the record as a JSON object string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }
}

impl fmt::Display for CertificateUpdate {
    /// Comma-separated record line:
    /// `timestamp,isin,bidPrice,bidSize,askPrice,askSize`, prices with
    /// exactly two decimal digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{:.2},{},{:.2},{}",
            self.timestamp, self.isin, self.bid_price, self.bid_size, self.ask_price, self.ask_size
        )
    }
}

/// Rounds a price to two decimal places, ties away from zero.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_range(update: &CertificateUpdate) {
        assert!(update.bid_price >= PRICE_MIN && update.bid_price <= PRICE_MAX);
        assert!(update.ask_price >= PRICE_MIN && update.ask_price <= PRICE_MAX);
        assert!(update.bid_size >= BID_SIZE_RANGE.0 && update.bid_size <= BID_SIZE_RANGE.1);
        assert!(update.ask_size >= ASK_SIZE_RANGE.0 && update.ask_size <= ASK_SIZE_RANGE.1);
    }

    #[test]
    fn generated_fields_stay_in_range() {
        for _ in 0..100 {
            let update = CertificateUpdate::generate_new(CountryCode::DE).unwrap();
            assert_in_range(&update);
        }
    }

    #[test]
    fn prices_have_at_most_two_decimals() {
        for _ in 0..100 {
            let update = CertificateUpdate::generate_new(CountryCode::DE).unwrap();
            for price in [update.bid_price, update.ask_price] {
                let cents = price * 100.0;
                assert!((cents - cents.round()).abs() < 1e-6, "price {price} not rounded to cents");
            }
        }
    }

    #[test]
    fn round_to_cents_rounds_to_nearest() {
        assert_eq!(round_to_cents(123.456), 123.46);
        assert_eq!(round_to_cents(150.004), 150.00);
        assert_eq!(round_to_cents(199.996), 200.00);
    }

    #[test]
    fn display_is_six_comma_separated_fields() {
        let update = CertificateUpdate {
            timestamp: 1700000000123,
            isin: "DE1234567896".to_string(),
            bid_price: 101.5,
            bid_size: 1200,
            ask_price: 102.25,
            ask_size: 9000,
        };
        assert_eq!(
            update.to_string(),
            "1700000000123,DE1234567896,101.50,1200,102.25,9000"
        );
    }

    #[test]
    fn json_round_trip() {
        let update = CertificateUpdate::generate_new(CountryCode::FR).unwrap();
        let json = update.to_json().unwrap();
        let decoded: CertificateUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.isin, update.isin);
        assert_eq!(decoded.timestamp, update.timestamp);
    }
}
