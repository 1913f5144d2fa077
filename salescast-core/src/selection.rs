//! User selections coming from the dashboard controls.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{CatalogError, Category, CompanySize, Genre, PlatformTier, Rating};
use crate::constants::{PRICE_DEFAULT, SCORE_DEFAULT};

const SHOW_ALL_VALUE: &str = "Show All";
const SHOW_ALL_LABEL: &str = "Show All Possible Results";

/// Company dropdown value: one size bucket, or every bucket at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyChoice {
    Size(CompanySize),
    ShowAll,
}

impl CompanyChoice {
    /// Dropdown options in display order.
    pub const OPTIONS: [Self; 4] = [
        Self::Size(CompanySize::Large),
        Self::Size(CompanySize::Medium),
        Self::Size(CompanySize::Small),
        Self::ShowAll,
    ];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Size(size) => size.value(),
            Self::ShowAll => SHOW_ALL_VALUE,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Size(size) => size.label(),
            Self::ShowAll => SHOW_ALL_LABEL,
        }
    }
}

impl fmt::Display for CompanyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for CompanyChoice {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == SHOW_ALL_VALUE {
            return Ok(Self::ShowAll);
        }
        CompanySize::parse_value(s)
            .map(Self::Size)
            .map_err(|_| CatalogError::UnknownCategory {
                kind: CompanySize::KIND,
                value: s.to_string(),
            })
    }
}

impl Serialize for CompanyChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

impl<'de> Deserialize<'de> for CompanyChoice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Current state of every dashboard control. Dropdowns start unset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub company: Option<CompanyChoice>,
    #[serde(default)]
    pub critic_score: f64,
    #[serde(default)]
    pub genre: Option<Genre>,
    #[serde(default)]
    pub platform: Option<PlatformTier>,
    #[serde(default = "default_price")]
    pub price: f64,
    #[serde(default)]
    pub rating: Option<Rating>,
}

const fn default_price() -> f64 {
    PRICE_DEFAULT
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            company: None,
            critic_score: SCORE_DEFAULT,
            genre: None,
            platform: None,
            price: PRICE_DEFAULT,
            rating: None,
        }
    }
}

impl Selection {
    /// All four categorical choices are set, so a prediction can be made.
    #[must_use]
    pub fn complete(&self) -> Option<CompleteSelection> {
        Some(CompleteSelection {
            company: self.company?,
            critic_score: self.critic_score,
            genre: self.genre?,
            platform: self.platform?,
            price: self.price,
            rating: self.rating?,
        })
    }

    /// Build a selection from raw dropdown strings, treating blanks as unset.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] for any value outside the lookup table.
    pub fn from_raw(raw: &RawSelection) -> Result<Self, CatalogError> {
        Ok(Self {
            company: parse_optional(raw.company.as_deref())?,
            critic_score: raw.critic_score,
            genre: parse_optional(raw.genre.as_deref())?,
            platform: parse_optional(raw.platform.as_deref())?,
            price: raw.price,
            rating: parse_optional(raw.rating.as_deref())?,
        })
    }
}

fn parse_optional<T>(raw: Option<&str>) -> Result<Option<T>, CatalogError>
where
    T: FromStr<Err = CatalogError>,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

/// Selection with every dropdown filled in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompleteSelection {
    pub company: CompanyChoice,
    pub critic_score: f64,
    pub genre: Genre,
    pub platform: PlatformTier,
    pub price: f64,
    pub rating: Rating,
}

/// Control values as the UI layer hands them over, before catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSelection {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub critic_score: f64,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default = "default_price")]
    pub price: f64,
    #[serde(default)]
    pub rating: Option<String>,
}

impl Default for RawSelection {
    fn default() -> Self {
        Self {
            company: None,
            critic_score: SCORE_DEFAULT,
            genre: None,
            platform: None,
            price: PRICE_DEFAULT,
            rating: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_full() -> RawSelection {
        RawSelection {
            company: Some("Large Company".into()),
            critic_score: 8.5,
            genre: Some("Action".into()),
            platform: Some("PC".into()),
            price: 59.99,
            rating: Some("Level1".into()),
        }
    }

    #[test]
    fn default_selection_matches_initial_controls() {
        let sel = Selection::default();
        assert!((sel.price - 19.99).abs() < f64::EPSILON);
        assert!(sel.critic_score.abs() < f64::EPSILON);
        assert!(sel.complete().is_none());
    }

    #[test]
    fn raw_selection_parses_into_complete() {
        let sel = Selection::from_raw(&raw_full()).unwrap();
        let complete = sel.complete().expect("all dropdowns set");
        assert_eq!(complete.company, CompanyChoice::Size(CompanySize::Large));
        assert_eq!(complete.platform, PlatformTier::Pc);
        assert_eq!(complete.rating, Rating::Level1);
    }

    #[test]
    fn blank_dropdowns_are_unset() {
        let raw = RawSelection {
            genre: Some("   ".into()),
            ..raw_full()
        };
        let sel = Selection::from_raw(&raw).unwrap();
        assert!(sel.genre.is_none());
        assert!(sel.complete().is_none());
    }

    #[test]
    fn unknown_company_is_rejected() {
        let raw = RawSelection {
            company: Some("Huge Company".into()),
            ..raw_full()
        };
        let err = Selection::from_raw(&raw).unwrap_err();
        assert!(err.to_string().contains("Huge Company"));
    }

    #[test]
    fn show_all_round_trips_through_serde() {
        assert_eq!("Show All".parse::<CompanyChoice>().unwrap(), CompanyChoice::ShowAll);
        let json = serde_json::to_string(&CompanyChoice::ShowAll).unwrap();
        assert_eq!(json, "\"Show All\"");
        let back: CompanyChoice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CompanyChoice::ShowAll);
        let sized: CompanyChoice = serde_json::from_str("\"Medium Company\"").unwrap();
        assert_eq!(sized, CompanyChoice::Size(CompanySize::Medium));
    }
}
