//! Nickname sanitization.
//!
//! Nicknames are escaped once, before storage, and the leaderboard template
//! renders them without further escaping. Everything that reads the scores
//! table can therefore treat nicknames as display-ready.

/// HTML-escape a nickname.
///
/// Replaces the five characters that can change meaning in HTML
/// (see <https://stackoverflow.com/q/7381974>). `&` must be first so the
/// other replacements' entities are not double-escaped.
pub fn sanitize_nickname(name: &str) -> String {
    name.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
