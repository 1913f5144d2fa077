//! Category catalog backing the one-hot feature blocks.
//!
//! Each categorical predictor is a closed enum. The `feature_index` of every
//! variant is the column the model was trained with inside that block, which
//! is not always declaration order (see [`Rating`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{
    COMPANY_OFFSET, COMPANY_WIDTH, GENRE_OFFSET, GENRE_WIDTH, PLATFORM_OFFSET, PLATFORM_WIDTH,
    RATING_OFFSET, RATING_WIDTH,
};

/// Raised when a raw dropdown value is not part of the lookup table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown {kind} value {value:?}")]
    UnknownCategory { kind: &'static str, value: String },
}

/// Shared surface of the categorical predictors.
pub trait Category: Copy + Sized + 'static {
    /// Human name of the block, used in errors and feature names.
    const KIND: &'static str;
    /// First column of the one-hot block in the feature vector.
    const OFFSET: usize;
    /// Width of the one-hot block in the feature vector.
    const WIDTH: usize;
    /// Every variant, in dropdown order.
    const ALL: &'static [Self];

    /// Wire value emitted by the dropdown and stored in the dataset.
    fn value(self) -> &'static str;

    /// Display label shown in the dropdown.
    fn label(self) -> &'static str {
        self.value()
    }

    /// Column inside the one-hot block.
    fn feature_index(self) -> usize;

    /// Resolve a raw dropdown value.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCategory`] if the value is not in the table.
    fn parse_value(raw: &str) -> Result<Self, CatalogError> {
        let trimmed = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.value() == trimmed)
            .ok_or_else(|| CatalogError::UnknownCategory {
                kind: Self::KIND,
                value: raw.to_string(),
            })
    }
}

/// Publisher scale bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "Large Company")]
    Large,
    #[serde(rename = "Medium Company")]
    Medium,
    #[serde(rename = "Small Company")]
    Small,
}

impl Category for CompanySize {
    const KIND: &'static str = "company size";
    const OFFSET: usize = COMPANY_OFFSET;
    const WIDTH: usize = COMPANY_WIDTH;
    const ALL: &'static [Self] = &[Self::Large, Self::Medium, Self::Small];

    fn value(self) -> &'static str {
        match self {
            Self::Large => "Large Company",
            Self::Medium => "Medium Company",
            Self::Small => "Small Company",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Large => "Large Company(Published > 100 games)",
            Self::Medium => "Medium Company(Published > 50 games)",
            Self::Small => "Small Company(Published <= 50 games)",
        }
    }

    fn feature_index(self) -> usize {
        match self {
            Self::Large => 0,
            Self::Medium => 1,
            Self::Small => 2,
        }
    }
}

/// Coarse ESRB rating tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Level1,
    Level2,
    Level3,
    Level4,
}

impl Category for Rating {
    const KIND: &'static str = "rating";
    const OFFSET: usize = RATING_OFFSET;
    const WIDTH: usize = RATING_WIDTH;
    const ALL: &'static [Self] = &[Self::Level1, Self::Level2, Self::Level3, Self::Level4];

    fn value(self) -> &'static str {
        match self {
            Self::Level1 => "Level1",
            Self::Level2 => "Level2",
            Self::Level3 => "Level3",
            Self::Level4 => "Level4",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Level1 => "Everyone(E, EC, E10)",
            Self::Level2 => "Teenager",
            Self::Level3 => "M",
            Self::Level4 => "Pending/Unknown",
        }
    }

    // Column order follows the fitted model, not the tier number.
    fn feature_index(self) -> usize {
        match self {
            Self::Level1 => 0,
            Self::Level4 => 1,
            Self::Level2 => 2,
            Self::Level3 => 3,
        }
    }
}

/// Release platform tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformTier {
    #[serde(rename = "PC")]
    Pc,
    Handheld,
    #[serde(rename = "Game Console")]
    GameConsole,
}

impl Category for PlatformTier {
    const KIND: &'static str = "platform";
    const OFFSET: usize = PLATFORM_OFFSET;
    const WIDTH: usize = PLATFORM_WIDTH;
    const ALL: &'static [Self] = &[Self::Pc, Self::Handheld, Self::GameConsole];

    fn value(self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::Handheld => "Handheld",
            Self::GameConsole => "Game Console",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::Handheld => "Handheld(PSV, NS)",
            Self::GameConsole => "Console(PS3, PS4, XBOX)",
        }
    }

    fn feature_index(self) -> usize {
        match self {
            Self::GameConsole => 0,
            Self::Handheld => 1,
            Self::Pc => 2,
        }
    }
}

/// Game genre. Declaration order is the one-hot column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    #[serde(rename = "Action-Adventure")]
    ActionAdventure,
    Adventure,
    Fighting,
    #[serde(rename = "MMO")]
    Mmo,
    Misc,
    Music,
    Party,
    Platform,
    Puzzle,
    Racing,
    #[serde(rename = "Role-Playing")]
    RolePlaying,
    Shooter,
    Simulation,
    Sports,
    Strategy,
    #[serde(rename = "Visual Novel")]
    VisualNovel,
}

impl Category for Genre {
    const KIND: &'static str = "genre";
    const OFFSET: usize = GENRE_OFFSET;
    const WIDTH: usize = GENRE_WIDTH;
    const ALL: &'static [Self] = &[
        Self::Action,
        Self::ActionAdventure,
        Self::Adventure,
        Self::Fighting,
        Self::Mmo,
        Self::Misc,
        Self::Music,
        Self::Party,
        Self::Platform,
        Self::Puzzle,
        Self::Racing,
        Self::RolePlaying,
        Self::Shooter,
        Self::Simulation,
        Self::Sports,
        Self::Strategy,
        Self::VisualNovel,
    ];

    fn value(self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::ActionAdventure => "Action-Adventure",
            Self::Adventure => "Adventure",
            Self::Fighting => "Fighting",
            Self::Mmo => "MMO",
            Self::Misc => "Misc",
            Self::Music => "Music",
            Self::Party => "Party",
            Self::Platform => "Platform",
            Self::Puzzle => "Puzzle",
            Self::Racing => "Racing",
            Self::RolePlaying => "Role-Playing",
            Self::Shooter => "Shooter",
            Self::Simulation => "Simulation",
            Self::Sports => "Sports",
            Self::Strategy => "Strategy",
            Self::VisualNovel => "Visual Novel",
        }
    }

    fn feature_index(self) -> usize {
        self as usize
    }
}

macro_rules! category_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.value())
                }
            }

            impl FromStr for $ty {
                type Err = CatalogError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::parse_value(s)
                }
            }
        )+
    };
}

category_display!(CompanySize, Rating, PlatformTier, Genre);
