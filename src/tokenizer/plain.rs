use super::{buffer::Cursor, token::Action};

/// Plain text has no markup: every character is either part of a word or a
/// boundary.
#[derive(Debug, Clone, Default)]
pub struct PlainTextClassifier;

impl PlainTextClassifier {
    pub(crate) fn step(&mut self, cursor: &mut Cursor<'_>) -> Option<Action> {
        let c = cursor.next()?;
        Some(cursor.text(c))
    }
}
