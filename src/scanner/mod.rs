//! Single forward pass over an HTML token stream.
//!
//! No tree is built. The only state carried between tokens is whether a
//! `<title>` start tag is waiting for its text.

mod html;
mod token;

use std::io::Read;

pub use html::tokens;
pub use token::{Attribute, Tag, Token};

use crate::models::{MetaProperty, MetaRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Idle,
    PendingTitle,
}

/// Extract metadata from an HTML document read from `reader`.
///
/// Never fails. A read error ends the scan the same way EOF does and the
/// fields gathered so far are returned. The reader is consumed forward
/// exactly once and is not closed.
pub fn extract<R: Read>(reader: R) -> MetaRecord {
    scan(tokens(reader))
}

/// Fold a token sequence into a [`MetaRecord`].
pub fn scan<I>(tokens: I) -> MetaRecord
where
    I: IntoIterator<Item = Token>,
{
    let mut record = MetaRecord::default();
    let mut state = ScanState::Idle;

    for token in tokens {
        match token {
            Token::StartTag(tag) if tag.name == "title" => state = ScanState::PendingTitle,
            Token::StartTag(tag) if tag.name == "meta" => apply_meta(&mut record, &tag),
            Token::Text(text) if state == ScanState::PendingTitle => {
                tracing::trace!(title = %text, "captured title");
                record.title = text;
                state = ScanState::Idle;
            }
            _ => {}
        }
    }

    record
}

fn apply_meta(record: &mut MetaRecord, tag: &Tag) {
    for property in MetaProperty::ALL {
        if let (content, true) = matches_property(tag, property.key()) {
            tracing::trace!(property = property.key(), %content, "captured meta property");
            *record.field_mut(property) = content;
        }
    }
}

/// Check `tag` for `property="<key>"` and pick up its `content` value.
///
/// Both attributes are looked for in the same pass regardless of their
/// order. `content` is empty when the tag has no `content` attribute; a
/// match with empty content is still a match.
pub fn matches_property(tag: &Tag, key: &str) -> (String, bool) {
    let mut content = String::new();
    let mut matched = false;

    for attr in &tag.attributes {
        if attr.key == "property" && attr.value == key {
            matched = true;
        }
        if attr.key == "content" {
            content.clone_from(&attr.value);
        }
    }

    (content, matched)
}
