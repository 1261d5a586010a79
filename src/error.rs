/// Application-level errors
///
/// Engine failures never cross the chat boundary as errors; the chat
/// adapter converts them into user-facing reply text. The variants here
/// carry the taxonomy that conversion needs: configuration vs upstream
/// status vs transport failure.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// TMDB answered with a non-success status. The snippet is the first
    /// 160 characters of the response body.
    #[error("TMDB hata: {status} - {snippet}")]
    Upstream { status: u16, snippet: String },

    /// Transport-level failure: connect, timeout, or body decode.
    #[error("İstek hatası: {0}")]
    Http(#[from] reqwest::Error),

    /// No TMDB credential configured
    #[error("TMDB_API_KEY is not configured")]
    MissingApiKey,
}

pub type AppResult<T> = Result<T, AppError>;
