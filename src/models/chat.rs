use serde::{Deserialize, Serialize};

/// One completed exchange in the chat transcript.
///
/// The transcript is owned by the chat transport; the engine only reads
/// it within a single turn to recover seen titles and the base query of
/// a continuation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatTurn {
    /// What the user sent
    pub user: String,
    /// What the bot replied, verbatim rendered markdown
    pub bot: String,
}

impl ChatTurn {
    pub fn new(user: impl Into<String>, bot: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            bot: bot.into(),
        }
    }
}
