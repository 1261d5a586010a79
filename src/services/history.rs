use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::ChatTurn;
use crate::services::render::CARD_MARKER;

/// Phrases that mark a follow-up "show me more/different" request
const CONTINUATION_KEYWORDS: [&str; 5] = ["başka", "daha", "farklı", "yenisi", "bir tane daha"];

/// Recognizes the card title line emitted by the renderer:
/// `🎬 **Title (1984)**` or `🎬 **Title (????)**`.
static CARD_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"{}(.+?) \((?:\d{{4}}|\?{{4}})\)\*\*",
        regex::escape(CARD_MARKER)
    );
    Regex::new(&pattern).expect("card title pattern is valid")
});

/// Reconstructs the set of previously recommended titles by scanning the
/// bot side of the transcript, line by line, for rendered card titles.
/// There is no other store; this set lives for one call only.
pub fn extract_seen_titles(history: &[ChatTurn]) -> HashSet<String> {
    let mut seen = HashSet::new();
    for turn in history {
        for line in turn.bot.lines() {
            if let Some(captures) = CARD_TITLE_RE.captures(line) {
                seen.insert(captures[1].trim().to_string());
            }
        }
    }
    seen
}

/// Detects a continuation request and resolves the query it continues.
///
/// When the message asks for "more", the effective query is the most
/// recent user message that is not itself a continuation request; with no
/// such message the original text is kept.
pub fn detect_continuation(message: &str, history: &[ChatTurn]) -> (bool, String) {
    let lowered = message.trim().to_lowercase();
    let wants_more = CONTINUATION_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword));

    if !wants_more {
        return (false, message.to_string());
    }

    for turn in history.iter().rev() {
        let user = turn.user.to_lowercase();
        if !turn.user.is_empty()
            && !CONTINUATION_KEYWORDS
                .iter()
                .any(|keyword| user.contains(keyword))
        {
            return (true, turn.user.clone());
        }
    }

    (true, message.to_string())
}
