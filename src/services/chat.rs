use crate::{
    error::AppError,
    models::ChatTurn,
    services::{
        engine::{Recommendation, RecommendationEngine},
        history,
        render::{CardRenderer, EMPTY_FALLBACK},
    },
};

/// Prefix acknowledging a continuation request
const MORE_PREFIX: &str = "🔁 Tamam, farklıları getiriyorum:\n\n";

/// Reply when every retrieved title was already recommended
const NOTHING_NEW: &str = "🤷‍♀️ Aynı şeyleri önermemek için eledim ama yeni sonuç bulamadım. \
                           Biraz daha açık tarif edebilir misin?";

/// Reply when no API credential is configured
const MISSING_API_KEY: &str =
    "⚠️ API anahtarı yok. TMDB_API_KEY ortam değişkenini tanımlayıp servisi yeniden başlat.";

/// Composes one chat turn: continuation detection, seen-title recovery,
/// the recommendation engine, and reply formatting.
///
/// Every failure is converted into reply text here; no error crosses the
/// chat transport boundary.
pub struct ChatService {
    engine: RecommendationEngine,
    renderer: CardRenderer,
}

impl ChatService {
    pub fn new(engine: RecommendationEngine, renderer: CardRenderer) -> Self {
        Self { engine, renderer }
    }

    pub async fn respond(&self, message: &str, history: &[ChatTurn]) -> String {
        let (wants_more, effective_query) = history::detect_continuation(message, history);
        let seen_titles = history::extract_seen_titles(history);

        tracing::debug!(
            wants_more,
            seen = seen_titles.len(),
            query = %effective_query,
            "Chat turn"
        );

        let answer = match self.engine.recommend(&effective_query, &seen_titles).await {
            Ok(Recommendation::Cards(movies)) => self.renderer.render(&movies),
            Ok(Recommendation::NoMatches) => EMPTY_FALLBACK.to_string(),
            Ok(Recommendation::NothingNew) => NOTHING_NEW.to_string(),
            Err(AppError::MissingApiKey) => MISSING_API_KEY.to_string(),
            Err(err) => {
                tracing::warn!(error = %err, query = %effective_query, "Chat turn failed");
                format!("⚠️ {err}")
            }
        };

        if wants_more {
            format!("{MORE_PREFIX}{answer}")
        } else {
            answer
        }
    }
}
