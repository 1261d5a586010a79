use std::time::Duration;

use rand::seq::SliceRandom;
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{CatalogMovie, CatalogPage},
};

/// Pages sampled per retrieval call, visited in random order without
/// replacement. The first non-empty page wins.
const PAGE_CANDIDATES: [u8; 5] = [1, 2, 3, 4, 5];

/// Records with fewer votes than this are statistically unreliable
const MIN_VOTE_COUNT: u32 = 50;

/// Upper bound on any single upstream call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Error snippets are truncated to this many characters
const ERROR_SNIPPET_LEN: usize = 160;

/// Parameters for attribute-filtered discovery
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverParams {
    pub locale: String,
    pub genre_ids: Vec<u32>,
    pub min_rating: Option<f64>,
}

/// Parameters for free-text keyword search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub locale: String,
    pub query: String,
}

/// Movie catalog retrieval seam between the engine and the upstream API.
///
/// Both operations return a shuffled, single-page result list. An empty
/// list is a valid outcome ("no matches"), distinct from an `Err`
/// ("request failed").
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Retrieval by structured filters (genre ids, minimum rating)
    async fn discover(&self, params: DiscoverParams) -> AppResult<Vec<CatalogMovie>>;

    /// Retrieval by free-text query matching
    async fn search_text(&self, params: SearchParams) -> AppResult<Vec<CatalogMovie>>;
}

/// TMDB-backed [`CatalogProvider`]
pub struct TmdbClient {
    http: HttpClient,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(api_key: String, base_url: String) -> AppResult<Self> {
        let http = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_key,
            base_url,
        })
    }

    /// Fetches one page from an endpoint, applying the base parameters
    /// every TMDB call carries.
    async fn fetch_page(
        &self,
        endpoint: &str,
        params: &[(String, String)],
        page: u8,
    ) -> AppResult<Vec<CatalogMovie>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let mut query: Vec<(String, String)> = vec![
            ("api_key".to_string(), self.api_key.clone()),
            ("include_adult".to_string(), "false".to_string()),
            ("vote_count.gte".to_string(), MIN_VOTE_COUNT.to_string()),
            ("page".to_string(), page.to_string()),
        ];
        query.extend_from_slice(params);

        let response = self.http.get(&url).query(&query).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                status,
                snippet: truncate_snippet(&body, ERROR_SNIPPET_LEN),
            });
        }

        let body: CatalogPage = response.json().await?;
        Ok(body.results)
    }

    /// Visits candidate pages in random order and returns the first
    /// non-empty result list, shuffled. All pages empty is not an error.
    /// A request failure aborts the remaining page attempts.
    async fn sample_pages(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> AppResult<Vec<CatalogMovie>> {
        let mut pages = PAGE_CANDIDATES;
        pages.shuffle(&mut rand::thread_rng());

        for page in pages {
            let mut results = self.fetch_page(endpoint, params, page).await?;
            if !results.is_empty() {
                tracing::debug!(endpoint, page, results = results.len(), "Catalog page sampled");
                results.shuffle(&mut rand::thread_rng());
                return Ok(results);
            }
        }

        tracing::debug!(endpoint, "All candidate pages empty");
        Ok(Vec::new())
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbClient {
    async fn discover(&self, params: DiscoverParams) -> AppResult<Vec<CatalogMovie>> {
        self.sample_pages("discover/movie", &discover_query(&params))
            .await
    }

    async fn search_text(&self, params: SearchParams) -> AppResult<Vec<CatalogMovie>> {
        self.sample_pages("search/movie", &search_query(&params))
            .await
    }
}

fn discover_query(params: &DiscoverParams) -> Vec<(String, String)> {
    let mut query = vec![
        ("language".to_string(), params.locale.clone()),
        ("sort_by".to_string(), "vote_average.desc".to_string()),
    ];
    if !params.genre_ids.is_empty() {
        let ids = params
            .genre_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        query.push(("with_genres".to_string(), ids));
    }
    if let Some(min_rating) = params.min_rating {
        query.push(("vote_average.gte".to_string(), min_rating.to_string()));
    }
    query
}

fn search_query(params: &SearchParams) -> Vec<(String, String)> {
    vec![
        ("language".to_string(), params.locale.clone()),
        ("query".to_string(), params.query.clone()),
    ]
}

/// Character-safe truncation for upstream error bodies
fn truncate_snippet(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_query_joins_genres_and_sets_rating_floor() {
        let query = discover_query(&DiscoverParams {
            locale: "tr-TR".to_string(),
            genre_ids: vec![35, 10749],
            min_rating: Some(7.0),
        });

        assert!(query.contains(&("language".to_string(), "tr-TR".to_string())));
        assert!(query.contains(&("sort_by".to_string(), "vote_average.desc".to_string())));
        assert!(query.contains(&("with_genres".to_string(), "35,10749".to_string())));
        assert!(query.contains(&("vote_average.gte".to_string(), "7".to_string())));
    }

    #[test]
    fn discover_query_omits_absent_filters() {
        let query = discover_query(&DiscoverParams {
            locale: "en-US".to_string(),
            genre_ids: vec![],
            min_rating: None,
        });

        assert!(!query.iter().any(|(k, _)| k == "with_genres"));
        assert!(!query.iter().any(|(k, _)| k == "vote_average.gte"));
    }

    #[test]
    fn search_query_carries_raw_text() {
        let query = search_query(&SearchParams {
            locale: "tr-TR".to_string(),
            query: "uzay filmi".to_string(),
        });

        assert!(query.contains(&("query".to_string(), "uzay filmi".to_string())));
    }

    #[test]
    fn snippet_truncation_is_char_safe() {
        let body = "ü".repeat(300);
        let snippet = truncate_snippet(&body, 160);
        assert_eq!(snippet.chars().count(), 160);

        assert_eq!(truncate_snippet("kısa", 160), "kısa");
    }
}
