//! Document indexer
//!
//! Splits a document into maximal runs of non-separator characters and
//! records, for each lowercased token, the ordinals at which it occurs.
//!
//! Separators are Unicode whitespace plus the ASCII information separators
//! U+001C..=U+001F.

use crate::core::model::Index;

/// Whether `c` ends a token
#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Tokens of `document` in left-to-right order
pub fn tokens(document: &str) -> impl Iterator<Item = &str> {
    document.split(is_separator).filter(|token| !token.is_empty())
}

/// Build the word index of a single document.
///
/// Tokens are numbered from zero in left-to-right order. Empty or
/// whitespace-only input yields an empty index.
pub fn index_document(document: &str) -> Index {
    let mut index = Index::new();
    for (position, token) in tokens(document).enumerate() {
        index.record(token.to_lowercase(), position);
    }
    index
}
