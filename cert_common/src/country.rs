//! ISIN country-code prefixes shared across the workspace.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Set of supported two-letter ISIN country prefixes.
///
/// The string form of each variant is exactly the two uppercase letters that
/// open the identifier. `DE` is the default used when no country is chosen.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum CountryCode {
    DE,
    FR,
    GB,
    US,
    NL,
    CH,
    AT,
    IT,
    ES,
    LU,
    SE,
    JP,
}

impl Default for CountryCode {
    fn default() -> Self {
        CountryCode::DE
    }
}
