//! Text normalization for source data.

use std::borrow::Cow;

/// Decode HTML entities (`&quot;`, `&#039;`, `&eacute;` ...) into plain text.
///
/// Questions and answers are stored encoded; everything that is shown to the
/// user or compared against user input goes through here first.
pub fn decode(encoded: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(encoded)
}
