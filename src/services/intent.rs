use regex::Regex;

/// Built-in keyword lexicon: lowercase Turkish genre words mapped to TMDB
/// genre ids. Substring containment is intentional so inflected forms
/// ("komedileri", "romantikler") still match.
const DEFAULT_GENRES: &[(&str, u32)] = &[
    ("aksiyon", 28),
    ("macera", 12),
    ("animasyon", 16),
    ("komedi", 35),
    ("suç", 80),
    ("belgesel", 99),
    ("dram", 18),
    ("aile", 10751),
    ("fantastik", 14),
    ("tarih", 36),
    ("korku", 27),
    ("müzik", 10402),
    ("gizem", 9648),
    ("romantik", 10749),
    ("bilim kurgu", 878),
    ("gerilim", 53),
    ("savaş", 10752),
    ("western", 37),
];

/// Ordered keyword → genre id mapping, immutable after construction
#[derive(Debug, Clone)]
pub struct GenreLexicon {
    entries: Vec<(String, u32)>,
}

impl GenreLexicon {
    pub fn new(entries: Vec<(String, u32)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }
}

impl Default for GenreLexicon {
    fn default() -> Self {
        Self::new(
            DEFAULT_GENRES
                .iter()
                .map(|(word, id)| (word.to_string(), *id))
                .collect(),
        )
    }
}

/// Structured retrieval hints extracted from one free-text query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intent {
    /// Matched genre ids in lexicon order
    pub genre_ids: Vec<u32>,
    /// First integer-or-one-decimal numeral found in the query, unclamped
    pub min_rating: Option<f64>,
}

impl Intent {
    /// True when the query carries any discover-mode filter
    pub fn has_hints(&self) -> bool {
        !self.genre_ids.is_empty() || self.min_rating.is_some()
    }
}

/// Turns raw chat text into an [`Intent`]. Pure, no I/O, never fails.
pub struct IntentParser {
    lexicon: GenreLexicon,
    rating_re: Regex,
}

impl IntentParser {
    pub fn new(lexicon: GenreLexicon) -> Self {
        let rating_re = Regex::new(r"(\d+(?:\.\d)?)").expect("rating pattern is valid");
        Self { lexicon, rating_re }
    }

    pub fn parse(&self, query: &str) -> Intent {
        let lowered = query.to_lowercase();

        let genre_ids = self
            .lexicon
            .entries()
            .iter()
            .filter(|(word, _)| lowered.contains(word.as_str()))
            .map(|(_, id)| *id)
            .collect();

        let min_rating = self
            .rating_re
            .find(&lowered)
            .and_then(|m| m.as_str().parse().ok());

        Intent {
            genre_ids,
            min_rating,
        }
    }
}

impl Default for IntentParser {
    fn default() -> Self {
        Self::new(GenreLexicon::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_pure() {
        let parser = IntentParser::default();
        assert_eq!(parser.parse("korku 7 üstü"), parser.parse("korku 7 üstü"));
    }

    #[test]
    fn every_lexicon_keyword_maps_to_its_genre() {
        let parser = IntentParser::default();
        for (word, id) in GenreLexicon::default().entries() {
            let intent = parser.parse(&format!("bana {} tarzı bir film bul", word));
            assert!(
                intent.genre_ids.contains(id),
                "keyword {:?} should map to genre {}",
                word,
                id
            );
        }
    }

    #[test]
    fn matching_ignores_case() {
        let parser = IntentParser::default();
        let intent = parser.parse("KOMEDİ ÖNER");
        assert!(intent.genre_ids.contains(&35));
    }

    #[test]
    fn extracts_integer_rating() {
        let parser = IntentParser::default();
        let intent = parser.parse("korku 7 üstü");
        assert_eq!(intent.min_rating, Some(7.0));
        assert_eq!(intent.genre_ids, vec![27]);
    }

    #[test]
    fn extracts_first_numeral_only() {
        let parser = IntentParser::default();
        let intent = parser.parse("dram 8 ve üzeri, 9 olmasın");
        assert_eq!(intent.min_rating, Some(8.0));
        assert_eq!(intent.genre_ids, vec![18]);
    }

    #[test]
    fn extracts_one_decimal_rating() {
        let parser = IntentParser::default();
        let intent = parser.parse("gerilim 7.5 üstü");
        assert_eq!(intent.min_rating, Some(7.5));
    }

    #[test]
    fn no_rating_yields_none() {
        let parser = IntentParser::default();
        let intent = parser.parse("komedi öner");
        assert_eq!(intent.min_rating, None);
        assert_eq!(intent.genre_ids, vec![35]);
    }

    #[test]
    fn plain_text_has_no_hints() {
        let parser = IntentParser::default();
        let intent = parser.parse("inception gibi bir şey");
        assert!(!intent.has_hints());
        assert!(intent.genre_ids.is_empty());
    }

    #[test]
    fn multiple_genres_keep_lexicon_order() {
        let parser = IntentParser::default();
        let intent = parser.parse("romantik komedi öner");
        assert_eq!(intent.genre_ids, vec![35, 10749]);
    }
}
