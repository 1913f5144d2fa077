//! Fixed UI text.

pub const TITLE: &str = "Video Game Sales Prediction";

pub const PRICE_PROMPT: &str = "Choose the sealed price: ";
pub const SCORE_PROMPT: &str = "Choose the critic score: ";
pub const COMPANY_PROMPT: &str = "Choose the company size of the publisher: ";
pub const GENRE_PROMPT: &str = "Choose the genre of your game: ";
pub const RATING_PROMPT: &str = "Choose the ESRB rating of your game: ";
pub const PLATFORM_PROMPT: &str = "Choose the platform type you want to release your game: ";

pub const COMPANY_PLACEHOLDER: &str = "Select a Company size";
pub const GENRE_PLACEHOLDER: &str = "Select a Genre";
pub const RATING_PLACEHOLDER: &str = "Select a Rating";
pub const PLATFORM_PLACEHOLDER: &str = "Select a Platform";

pub const SUBMIT_LABEL: &str = "Show Results";
pub const CHART_ELEMENT_ID: &str = "sales-chart";
