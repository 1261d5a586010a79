use serde::{Deserialize, Serialize};

/// Placeholder when a record carries neither a localized nor an original title
pub const UNKNOWN_TITLE: &str = "Bilinmeyen Başlık";

/// Placeholder year for records without a usable release date
const UNKNOWN_YEAR: &str = "????";

/// One movie record as returned by the TMDB search and discover endpoints.
///
/// Every field is defaulted: TMDB omits or nulls fields freely, and a
/// partially filled record is still renderable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogMovie {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl CatalogMovie {
    /// Title resolution precedence: title, then original_title, then a
    /// fixed placeholder. Empty strings count as absent.
    ///
    /// Deduplication keys on this value, so it must match what the card
    /// renderer prints.
    pub fn resolved_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.original_title.as_deref().filter(|t| !t.is_empty()))
            .unwrap_or(UNKNOWN_TITLE)
    }

    /// First 4 characters of the release date, or "????" when absent or
    /// too short.
    pub fn release_year(&self) -> &str {
        self.release_date
            .as_deref()
            .filter(|d| d.len() >= 4 && d.is_char_boundary(4))
            .map(|d| &d[..4])
            .unwrap_or(UNKNOWN_YEAR)
    }
}

/// Paginated response envelope shared by both TMDB endpoints
#[derive(Debug, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub results: Vec<CatalogMovie>,
}
