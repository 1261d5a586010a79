use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::CatalogMovie,
    services::{
        catalog::{CatalogProvider, DiscoverParams, SearchParams},
        intent::{Intent, IntentParser},
    },
};

/// Locales for the primary attempt and the single fallback attempt
#[derive(Debug, Clone)]
pub struct LocalePolicy {
    pub primary: String,
    pub secondary: String,
}

impl Default for LocalePolicy {
    fn default() -> Self {
        Self {
            primary: "tr-TR".to_string(),
            secondary: "en-US".to_string(),
        }
    }
}

/// Bound on extra retrieval calls when deduplication empties a non-empty
/// result set. No backoff; the page-sampling randomness is the retry
/// mechanism.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_extra_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_extra_attempts: 1,
        }
    }
}

/// Outcome of one recommendation turn
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// Fresh results, deduplicated against the transcript
    Cards(Vec<CatalogMovie>),
    /// The catalog had no matches at all, in either locale
    NoMatches,
    /// The catalog only returned titles already recommended
    NothingNew,
}

/// Orchestrates intent parsing, catalog retrieval with locale fallback,
/// and cross-turn deduplication.
pub struct RecommendationEngine {
    provider: Option<Arc<dyn CatalogProvider>>,
    parser: IntentParser,
    locales: LocalePolicy,
    retry: RetryPolicy,
}

impl RecommendationEngine {
    /// `provider` is `None` when no API credential is configured; every
    /// turn then reports the configuration error instead of crashing.
    pub fn new(
        provider: Option<Arc<dyn CatalogProvider>>,
        parser: IntentParser,
        locales: LocalePolicy,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            provider,
            parser,
            locales,
            retry,
        }
    }

    /// Produces a deduplicated recommendation set for one chat turn.
    ///
    /// Mode selection is a hard branch: any genre or rating hint means
    /// discover mode, otherwise text search; an empty discover result
    /// never falls back to text search.
    pub async fn recommend(
        &self,
        query: &str,
        seen_titles: &HashSet<String>,
    ) -> AppResult<Recommendation> {
        let provider = self.provider.as_deref().ok_or(AppError::MissingApiKey)?;

        let intent = self.parser.parse(query);
        tracing::debug!(
            query = %query,
            genres = ?intent.genre_ids,
            min_rating = ?intent.min_rating,
            seen = seen_titles.len(),
            "Recommendation turn"
        );

        let (results, locale) = self.fetch_with_locale_fallback(provider, &intent, query).await?;
        if results.is_empty() {
            tracing::info!(query = %query, "No catalog matches in any locale");
            return Ok(Recommendation::NoMatches);
        }

        let mut fresh = drop_seen(results, seen_titles);

        // Dedup emptied the set: retry the same mode and locale, counting
        // on page sampling to surface different records.
        let mut attempts_left = self.retry.max_extra_attempts;
        while fresh.is_empty() && attempts_left > 0 {
            attempts_left -= 1;
            tracing::debug!(%locale, "All results already seen, sampling again");
            let retry = self.fetch(provider, &intent, query, &locale).await?;
            fresh = drop_seen(retry, seen_titles);
        }

        if fresh.is_empty() {
            return Ok(Recommendation::NothingNew);
        }

        Ok(Recommendation::Cards(fresh))
    }

    /// One attempt in the primary locale, then a single identical attempt
    /// in the secondary locale when the primary yields nothing. A primary
    /// failure still allows the fallback; a failure on the last attempt
    /// propagates.
    async fn fetch_with_locale_fallback(
        &self,
        provider: &dyn CatalogProvider,
        intent: &Intent,
        query: &str,
    ) -> AppResult<(Vec<CatalogMovie>, String)> {
        match self.fetch(provider, intent, query, &self.locales.primary).await {
            Ok(results) if !results.is_empty() => {
                return Ok((results, self.locales.primary.clone()))
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    locale = %self.locales.primary,
                    "Primary locale retrieval failed, trying fallback"
                );
            }
        }

        let results = self
            .fetch(provider, intent, query, &self.locales.secondary)
            .await?;
        Ok((results, self.locales.secondary.clone()))
    }

    async fn fetch(
        &self,
        provider: &dyn CatalogProvider,
        intent: &Intent,
        query: &str,
        locale: &str,
    ) -> AppResult<Vec<CatalogMovie>> {
        if intent.has_hints() {
            provider
                .discover(DiscoverParams {
                    locale: locale.to_string(),
                    genre_ids: intent.genre_ids.clone(),
                    min_rating: intent.min_rating,
                })
                .await
        } else {
            provider
                .search_text(SearchParams {
                    locale: locale.to_string(),
                    query: query.to_string(),
                })
                .await
        }
    }
}

/// Excludes records whose resolved title was already recommended
fn drop_seen(results: Vec<CatalogMovie>, seen_titles: &HashSet<String>) -> Vec<CatalogMovie> {
    results
        .into_iter()
        .filter(|movie| !seen_titles.contains(movie.resolved_title()))
        .collect()
}
