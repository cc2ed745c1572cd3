use std::io::Read;

use html5gum::{DefaultEmitter, HtmlString, IoReader, Token as RawToken, Tokenizer};

use super::token::{Attribute, Tag, Token};

fn lossy(bytes: &HtmlString) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Tokenize `reader` with html5gum and yield tokens in the scanner's shape.
///
/// `<title>`, `<script>`, `<style>` and friends switch the tokenizer into
/// their raw-text states, so markup-looking text inside a title comes back
/// as a single text token. The iterator ends at EOF or at the first read
/// error. Tokenizer parse-error notices are dropped.
pub fn tokens<R: Read>(reader: R) -> impl Iterator<Item = Token> {
    let mut emitter = DefaultEmitter::default();
    emitter.switch_states(true);

    Tokenizer::new_with_emitter(IoReader::new(reader), emitter)
        .map_while(|next| match next {
            Ok(token) => Some(token),
            Err(e) => {
                tracing::debug!(error = %e, "read error while tokenizing, ending scan");
                None
            }
        })
        .filter_map(convert)
}

fn convert(raw: RawToken) -> Option<Token> {
    match raw {
        RawToken::StartTag(tag) => {
            let converted = Tag {
                name: lossy(&tag.name),
                attributes: tag
                    .attributes
                    .iter()
                    .map(|(key, value)| Attribute::new(lossy(key), lossy(value)))
                    .collect(),
            };
            Some(if tag.self_closing {
                Token::SelfClosingTag(converted)
            } else {
                Token::StartTag(converted)
            })
        }
        RawToken::EndTag(tag) => Some(Token::EndTag(lossy(&tag.name))),
        RawToken::String(text) => Some(Token::Text(lossy(&text))),
        RawToken::Comment(text) => Some(Token::Comment(lossy(&text))),
        RawToken::Doctype(_) => Some(Token::Doctype),
        RawToken::Error(_) => None,
    }
}
