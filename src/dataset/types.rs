//! Core data types for the launch table
//!
//! - `LaunchRecord`: one row of the source CSV
//! - `Outcome`: binary launch result (`class` column)
//! - `SiteSelection`: dropdown value, either every site or one of them
//! - `PayloadRange`: closed payload interval from the range slider

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire value of the "every site" dropdown option
pub const ALL_SITES: &str = "ALL";

/// A single launch, immutable once loaded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Launch site identifier, e.g. `KSC LC-39A`
    pub launch_site: String,
    /// Payload mass in kilograms, never negative
    pub payload_mass_kg: f64,
    /// Whether the first stage landed
    pub outcome: Outcome,
    /// Booster family label used for colouring, e.g. `FT`
    pub booster_version_category: String,
    /// Sequential flight number, when the source carries it
    #[serde(default)]
    pub flight_number: Option<u32>,
    /// Full booster version string, when the source carries it
    #[serde(default)]
    pub booster_version: Option<String>,
}

impl LaunchRecord {
    /// Create a record with only the required columns
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version_category: booster_version_category.into(),
            flight_number: None,
            booster_version: None,
        }
    }

    /// Builder method: set the flight number
    pub fn flight_number(mut self, flight_number: u32) -> Self {
        self.flight_number = Some(flight_number);
        self
    }

    /// Builder method: set the booster version
    pub fn booster_version(mut self, version: impl Into<String>) -> Self {
        self.booster_version = Some(version.into());
        self
    }

    /// Check whether this launch belongs to the selection
    pub fn matches_site(&self, selection: &SiteSelection) -> bool {
        match selection {
            SiteSelection::All => true,
            SiteSelection::Site(site) => self.launch_site == *site,
        }
    }
}

/// Launch outcome as encoded by the `class` column
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// `class == 0`
    Failure,
    /// `class == 1`
    Success,
}

impl Outcome {
    /// Numeric class as stored in the source table
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(class: u8) -> Result<Self, Self::Error> {
        match class {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("class must be 0 or 1, got {}", other)),
        }
    }
}

/// Dropdown selection driving both charts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    /// Every launch site
    All,
    /// One specific launch site
    Site(String),
}

impl SiteSelection {
    pub fn site(name: impl Into<String>) -> Self {
        SiteSelection::Site(name.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }

    /// Value used on the wire and in the dropdown
    pub fn as_value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        SiteSelection::from(value.to_string())
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        selection.as_value().to_string()
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// Closed payload interval `[low, high]` in kilograms
///
/// The slider keeps `low <= high`; an inverted range is not rejected here,
/// it just contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive on both ends
    pub fn contains(&self, payload_kg: f64) -> bool {
        payload_kg >= self.low && payload_kg <= self.high
    }

    /// Check whether `other` lies entirely inside this range
    pub fn covers(&self, other: &PayloadRange) -> bool {
        self.low <= other.low && other.high <= self.high
    }
}

impl From<(f64, f64)> for PayloadRange {
    fn from((low, high): (f64, f64)) -> Self {
        Self { low, high }
    }
}

impl From<PayloadRange> for (f64, f64) {
    fn from(range: PayloadRange) -> Self {
        (range.low, range.high)
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
