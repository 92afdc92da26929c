use super::{
    buffer::{Cursor, LineBuffer, TokenAccumulator},
    latex::{LatexClassifier, LatexState, MARKUP_CHARACTERS as LATEX_MARKUP},
    man::{ManClassifier, ManState, MARKUP_CHARACTERS as MAN_MARKUP},
    plain::PlainTextClassifier,
    token::{Action, Format, Token},
    url::UrlSpans,
};
use crate::{
    alphabet::Alphabet,
    config::{HyphenPolicy, TokenizerConfig},
    InternalResult,
};

/// The per-format state machine deciding what each part of a line is.
#[derive(Debug, Clone)]
pub enum Classifier {
    PlainText(PlainTextClassifier),
    Latex(LatexClassifier),
    Man(ManClassifier),
}

impl Classifier {
    pub fn new(format: Format, config: &TokenizerConfig) -> Self {
        match format {
            Format::PlainText => Classifier::PlainText(PlainTextClassifier),
            Format::Latex => Classifier::Latex(LatexClassifier::new(&config.latex)),
            Format::Man => Classifier::Man(ManClassifier::new(&config.man)),
        }
    }

    pub fn format(&self) -> Format {
        match self {
            Classifier::PlainText(_) => Format::PlainText,
            Classifier::Latex(_) => Format::Latex,
            Classifier::Man(_) => Format::Man,
        }
    }

    /// Consumes the next piece of the line. `None` once the line is exhausted.
    fn step(&mut self, cursor: &mut Cursor<'_>) -> Option<Action> {
        match self {
            Classifier::PlainText(classifier) => classifier.step(cursor),
            Classifier::Latex(classifier) => classifier.step(cursor),
            Classifier::Man(classifier) => classifier.step(cursor),
        }
    }

    /// Drops the states that cannot outlive a line.
    fn end_of_line(&mut self) {
        match self {
            Classifier::PlainText(_) => {}
            Classifier::Latex(classifier) => classifier.end_of_line(),
            Classifier::Man(classifier) => classifier.end_of_line(),
        }
    }

    /// Characters that end a URL run because they start markup.
    fn markup_characters(&self) -> &'static str {
        match self {
            Classifier::PlainText(_) => "",
            Classifier::Latex(_) => LATEX_MARKUP,
            Classifier::Man(_) => MAN_MARKUP,
        }
    }

    fn reset(&mut self) {
        match self {
            Classifier::PlainText(_) => {}
            Classifier::Latex(classifier) => classifier.reset(),
            Classifier::Man(classifier) => classifier.reset(),
        }
    }
}

/// Splits lines into words, one line at a time.
///
/// Markup state that legitimately spans lines (a LaTeX macro argument, display
/// math, a troff `.ig` block) is kept between [`set_line`](Self::set_line)
/// calls; [`reset`](Self::reset) drops it.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    alphabet: &'a Alphabet,
    line: LineBuffer,
    token: TokenAccumulator,
    classifier: Classifier,
    hyphen: HyphenPolicy,
    url_checking: bool,
    urls: UrlSpans,
}

impl<'a> Tokenizer<'a> {
    pub fn new(format: Format, alphabet: &'a Alphabet) -> Self {
        Self::with_config(format, alphabet, &TokenizerConfig::default())
    }

    pub fn with_config(format: Format, alphabet: &'a Alphabet, config: &TokenizerConfig) -> Self {
        Self {
            alphabet,
            line: LineBuffer::new(),
            token: TokenAccumulator::default(),
            classifier: Classifier::new(format, config),
            hyphen: config.hyphen,
            url_checking: config.url_checking,
            urls: UrlSpans::default(),
        }
    }

    /// Builds a tokenizer for `text`, `latex` or `man`.
    pub fn from_name(name: &str, alphabet: &'a Alphabet) -> InternalResult<Self> {
        Ok(Self::new(Format::from_name(name)?, alphabet))
    }

    pub fn format(&self) -> Format {
        self.classifier.format()
    }

    pub fn latex_state(&self) -> Option<&LatexState> {
        match &self.classifier {
            Classifier::Latex(classifier) => Some(classifier.state()),
            _ => None,
        }
    }

    pub fn man_state(&self) -> Option<ManState> {
        match &self.classifier {
            Classifier::Man(classifier) => Some(classifier.state()),
            _ => None,
        }
    }

    pub fn set_line(&mut self, text: &str) {
        // The previous line may not have been read to its end.
        self.classifier.end_of_line();
        self.line.set(text);
        self.token.clear();
        self.scan_urls();
    }

    pub fn set_url_checking(&mut self, enabled: bool) {
        self.url_checking = enabled;
        self.scan_urls();
    }

    pub fn url_checking(&self) -> bool {
        self.url_checking
    }

    /// Forgets markup state carried over from earlier lines.
    pub fn reset(&mut self) {
        self.classifier.reset();
        self.token.clear();
    }

    fn scan_urls(&mut self) {
        self.urls = if self.url_checking {
            UrlSpans::scan(
                self.line.text(),
                self.alphabet,
                self.classifier.markup_characters(),
            )
        } else {
            UrlSpans::default()
        };
    }

    /// The next word of the current line, or `None` once the line is used up.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            if let Some(end) = self.urls.end_of(self.line.position()) {
                tracing::debug!(url = &self.line.text()[self.line.position()..end], "skipping url");
                self.line.seek(end);
                match self.token.take() {
                    Some(token) => return Some(token),
                    None => continue,
                }
            }

            let mut cursor = Cursor::new(
                &mut self.line,
                self.alphabet,
                self.hyphen,
                !self.token.is_empty(),
            );
            match self.classifier.step(&mut cursor) {
                Some(Action::Word(c)) => {
                    let at = self.line.position() - c.len_utf8();
                    self.token.push(c, at);
                }
                Some(Action::Boundary) => {
                    if let Some(token) = self.token.take() {
                        return Some(token);
                    }
                }
                Some(Action::Skip) => {}
                None => {
                    self.classifier.end_of_line();
                    return self.token.take();
                }
            }
        }
    }

    /// The remaining words of the current line.
    pub fn tokens(&mut self) -> Tokens<'_, 'a> {
        Tokens { tokenizer: self }
    }

    /// Sets `line` and collects all of its words.
    pub fn tokenize(&mut self, line: &str) -> Vec<Token> {
        self.set_line(line);
        self.tokens().collect()
    }
}

/// Iterator over the remaining words of a [`Tokenizer`]'s current line.
pub struct Tokens<'t, 'a> {
    tokenizer: &'t mut Tokenizer<'a>,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.tokenizer.next_token()
    }
}
