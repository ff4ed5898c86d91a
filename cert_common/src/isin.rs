//! ISIN generation and check-digit computation.
//!
//! An ISIN (International Securities Identification Number) is a 12-character
//! identifier composed of a 2-letter country prefix, 9 digits, and one check
//! digit computed with the ISO 7064 mod-10 ("Luhn-style") algorithm. The
//! functions here are stateless and safe to call from any number of threads
//! concurrently; randomness comes from the calling thread's local generator.
//!
//! `check_digit` is exposed on its own so callers can validate identifiers
//! independently of generation. It fails fast on any character outside
//! `A-Z` / `0-9` rather than producing a silently wrong digit.

use rand::Rng;

use crate::country::CountryCode;
use crate::error::FeedError;
use crate::result::Result;

/// Total length of a generated identifier: 2 letters + 9 digits + check digit.
pub const ISIN_LEN: usize = 12;

/// Number of random digits between the country prefix and the check digit.
const BODY_DIGITS: usize = 9;

/// Generates a valid ISIN with the default `DE` prefix.
pub fn generate() -> Result<String> {
    generate_for(CountryCode::default())
}

/// Generates a valid ISIN for the given country prefix.
///
/// The base is the two prefix letters followed by nine uniformly drawn
/// digits; the check digit over that base is appended. Uses the calling
/// thread's local RNG, so concurrent callers never contend.
pub fn generate_for(country: CountryCode) -> Result<String> {
    let mut rng = rand::rng();
    let mut base = country.to_string();

    for _ in 0..BODY_DIGITS {
        let digit: u8 = rng.random_range(0..10);
        base.push((b'0' + digit) as char);
    }

    let check = check_digit(&base)?;
    base.push((b'0' + check as u8) as char);
    Ok(base)
}

/// Computes the ISIN check digit for an 11-character base.
///
/// Steps:
/// - expand letters to their two-digit codes via [`char_to_number`], digits
///   pass through unchanged;
/// - walk the expanded digit sequence from its least-significant end,
///   doubling every digit at an even position;
/// - sum the decimal digits of every (possibly doubled) value;
/// - the check digit is `(10 - sum % 10) % 10`.
///
/// Returns `FeedError::InvalidIsinChar` if the base contains anything other
/// than uppercase letters and decimal digits.
pub fn check_digit(base: &str) -> Result<u32> {
    let mut digits: Vec<u32> = Vec::with_capacity(base.len() * 2);
    for c in base.chars() {
        match c {
            '0'..='9' => digits.push(c as u32 - '0' as u32),
            'A'..='Z' => {
                let value = char_to_number(c)?;
                digits.push(value / 10);
                digits.push(value % 10);
            }
            _ => return Err(FeedError::InvalidIsinChar(c)),
        }
    }

    let mut sum = 0;
    for (i, &digit) in digits.iter().rev().enumerate() {
        let mut value = digit;
        if i % 2 == 0 {
            value *= 2;
        }
        sum += value / 10 + value % 10;
    }
    Ok((10 - (sum % 10)) % 10)
}

/// Converts an uppercase letter to its ISIN numeric value: `A = 10 … Z = 35`.
///
/// Any other character is a contract violation reported as
/// `FeedError::InvalidIsinChar`.
pub fn char_to_number(c: char) -> Result<u32> {
    match c {
        'A'..='Z' => Ok(c as u32 - 'A' as u32 + 10),
        _ => Err(FeedError::InvalidIsinChar(c)),
    }
}
