use crate::models::CatalogMovie;

/// Marker prefixed to every card title line.
///
/// The history deduplicator recovers seen titles from rendered replies by
/// matching this marker, so any change to the card title format must be
/// mirrored in [`crate::services::history`].
pub const CARD_MARKER: &str = "🎬 **";

/// Upper bound on cards per reply
pub const MAX_CARDS: usize = 5;

/// Reply when there is nothing to render
pub const EMPTY_FALLBACK: &str = "❌ Uygun film bulunamadı, lütfen başka bir arama yap!";

const MISSING_OVERVIEW: &str = "Özet bulunamadı.";

/// Formats catalog results into chat-displayable markdown cards
pub struct CardRenderer {
    image_base_url: String,
}

impl CardRenderer {
    pub fn new(image_base_url: String) -> Self {
        Self { image_base_url }
    }

    /// Renders at most [`MAX_CARDS`] result cards, blank-line separated.
    /// Trusts the incoming order; no re-ranking. Empty input yields the
    /// fixed fallback message, never an empty string.
    pub fn render(&self, movies: &[CatalogMovie]) -> String {
        if movies.is_empty() {
            return EMPTY_FALLBACK.to_string();
        }

        movies
            .iter()
            .take(MAX_CARDS)
            .map(|movie| self.card(movie))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn card(&self, movie: &CatalogMovie) -> String {
        let overview = movie
            .overview
            .as_deref()
            .filter(|o| !o.is_empty())
            .unwrap_or(MISSING_OVERVIEW);

        let mut card = format!(
            "{}{} ({})** — ⭐ {}/10\n📝 {}",
            CARD_MARKER,
            movie.resolved_title(),
            movie.release_year(),
            movie.vote_average,
            overview,
        );

        if let Some(poster) = movie.poster_path.as_deref().filter(|p| !p.is_empty()) {
            card.push_str(&format!("\n\n![poster]({}{})", self.image_base_url, poster));
        }

        card
    }
}
