//! Echo text shown under each control.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::Category;
use crate::constants::ECHO_UNSET;
use crate::numbers::display_float;
use crate::selection::{CompanyChoice, Selection};

/// Dashboard control that owns an echo line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlId {
    Price,
    CriticScore,
    Company,
    Genre,
    Rating,
    Platform,
}

impl ControlId {
    pub const ALL: [Self; 6] = [
        Self::Price,
        Self::CriticScore,
        Self::Company,
        Self::Genre,
        Self::Rating,
        Self::Platform,
    ];

    /// DOM id of the control element.
    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::CriticScore => "critic-score",
            Self::Company => "company",
            Self::Genre => "genre",
            Self::Rating => "rating",
            Self::Platform => "platform",
        }
    }

    /// Current value of this control, formatted for echo.
    #[must_use]
    pub fn current_value(self, selection: &Selection) -> String {
        fn or_unset(value: Option<&str>) -> String {
            value.unwrap_or(ECHO_UNSET).to_string()
        }

        match self {
            Self::Price => display_float(selection.price),
            Self::CriticScore => display_float(selection.critic_score),
            Self::Company => or_unset(selection.company.map(CompanyChoice::value)),
            Self::Genre => or_unset(selection.genre.map(Category::value)),
            Self::Rating => or_unset(selection.rating.map(Category::value)),
            Self::Platform => or_unset(selection.platform.map(Category::value)),
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// `You have selected "<value>"`.
#[must_use]
pub fn echo_text(value: &str) -> String {
    format!("You have selected \"{value}\"")
}

/// Echo line for `control` given the current selection.
#[must_use]
pub fn echo_for(control: ControlId, selection: &Selection) -> String {
    echo_text(&control.current_value(selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Genre, PlatformTier, Rating};

    #[test]
    fn default_sliders_echo_like_the_controls() {
        let sel = Selection::default();
        assert_eq!(echo_for(ControlId::Price, &sel), "You have selected \"19.99\"");
        assert_eq!(
            echo_for(ControlId::CriticScore, &sel),
            "You have selected \"0.0\""
        );
    }

    #[test]
    fn unset_dropdowns_echo_none() {
        let sel = Selection::default();
        for control in [
            ControlId::Company,
            ControlId::Genre,
            ControlId::Rating,
            ControlId::Platform,
        ] {
            assert_eq!(echo_for(control, &sel), "You have selected \"None\"");
        }
    }

    #[test]
    fn set_dropdowns_echo_their_wire_value() {
        let sel = Selection {
            company: Some(CompanyChoice::ShowAll),
            genre: Some(Genre::VisualNovel),
            platform: Some(PlatformTier::Handheld),
            rating: Some(Rating::Level4),
            price: 5.0,
            critic_score: 7.25,
        };
        assert_eq!(ControlId::Company.current_value(&sel), "Show All");
        assert_eq!(ControlId::Genre.current_value(&sel), "Visual Novel");
        assert_eq!(ControlId::Platform.current_value(&sel), "Handheld");
        assert_eq!(ControlId::Rating.current_value(&sel), "Level4");
        assert_eq!(ControlId::Price.current_value(&sel), "5.0");
        assert_eq!(ControlId::CriticScore.current_value(&sel), "7.25");
    }
}
