//! # LaTeX Classifier
//!
//! Strips LaTeX markup from a line while keeping the prose:
//!
//! * `%` comments run to the end of the line.
//! * Command names (`\emph`, `\LaTeX`) are dropped. The brace arguments of
//!   non-textual commands (`\cite{…}`, `\label{…}`) are dropped too, while the
//!   arguments of every other command are read as ordinary text.
//! * Math (`$…$`, `$$…$$`, `\(…\)`, `\[…\]`) and discarded environments
//!   (`equation`, `verbatim`, …) are dropped whole.
//!
//! Macro arguments, display math and discarded environments may continue on
//! the following lines; the classifier keeps that state across lines.

use nom::{
    bytes::complete::{take_until, take_while, take_while1},
    character::complete::char,
    combinator::{map, opt, value},
    error::context,
    sequence::{delimited, terminated},
};

use super::{
    buffer::Cursor,
    token::{Action, ParserResult},
};
use crate::config::LatexConfig;

/// Characters that a backslash turns back into literal text.
const ESCAPED_SPECIALS: &str = "%$\\&_{}#";

/// Characters that start markup outside of a word.
pub(crate) const MARKUP_CHARACTERS: &str = "%$\\";

/// Accent control symbols, as in `na\"ive` or `caf\'e`.
const ACCENTS: &str = "'`^\"~=.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathDelimiter {
    /// `$ … $`
    Dollar,
    /// `$$ … $$`
    DoubleDollar,
    /// `\( … \)`
    Paren,
    /// `\[ … \]`
    Bracket,
}

impl MathDelimiter {
    /// An unclosed `$` is far more often a stray dollar sign than a formula
    /// spanning lines, so only the explicit display delimiters carry over.
    fn carries_over(self) -> bool {
        !matches!(self, MathDelimiter::Dollar)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatexState {
    Normal,
    LineComment,
    /// Waiting for the brace arguments of a non-textual command.
    CommandArgs { remaining: usize },
    /// Inside a discarded brace argument.
    MacroArg { depth: usize, remaining: usize },
    Math(MathDelimiter),
    /// Inside an environment dropped up to its `\end`.
    Environment(String),
}

#[derive(Debug, Clone)]
pub struct LatexClassifier {
    state: LatexState,
    config: LatexConfig,
}

impl LatexClassifier {
    pub fn new(config: &LatexConfig) -> Self {
        Self {
            state: LatexState::Normal,
            config: config.clone(),
        }
    }

    pub fn state(&self) -> &LatexState {
        &self.state
    }

    pub(crate) fn reset(&mut self) {
        self.state = LatexState::Normal;
    }

    pub(crate) fn end_of_line(&mut self) {
        let carries = match &self.state {
            LatexState::Normal | LatexState::MacroArg { .. } | LatexState::Environment(_) => true,
            LatexState::Math(delimiter) => delimiter.carries_over(),
            LatexState::LineComment | LatexState::CommandArgs { .. } => false,
        };
        if !carries {
            self.transition(LatexState::Normal);
        }
    }

    pub(crate) fn step(&mut self, cursor: &mut Cursor<'_>) -> Option<Action> {
        match self.state.clone() {
            LatexState::Normal => self.normal(cursor),
            LatexState::LineComment => {
                cursor.skip_rest();
                None
            }
            LatexState::CommandArgs { remaining } => self.command_args(remaining, cursor),
            LatexState::MacroArg { depth, remaining } => self.macro_arg(depth, remaining, cursor),
            LatexState::Math(delimiter) => self.math(delimiter, cursor),
            LatexState::Environment(name) => {
                if cursor.rest().is_empty() {
                    return None;
                }
                if cursor.skip_past(&format!("\\end{{{}}}", name)) {
                    self.transition(LatexState::Normal);
                }
                Some(Action::Boundary)
            }
        }
    }

    fn transition(&mut self, state: LatexState) {
        tracing::trace!(from = ?self.state, to = ?state, "latex state");
        self.state = state;
    }

    fn normal(&mut self, cursor: &mut Cursor<'_>) -> Option<Action> {
        let action = match cursor.next()? {
            '%' => {
                self.transition(LatexState::LineComment);
                cursor.skip_rest();
                Action::Boundary
            }
            '$' => {
                let delimiter = if cursor.eat('$') {
                    MathDelimiter::DoubleDollar
                } else {
                    MathDelimiter::Dollar
                };
                self.transition(LatexState::Math(delimiter));
                Action::Boundary
            }
            '\\' => self.control_sequence(cursor),
            c => cursor.text(c),
        };
        Some(action)
    }

    /// Everything after a backslash in normal text.
    fn control_sequence(&mut self, cursor: &mut Cursor<'_>) -> Action {
        if let Some(name) = cursor.consume(command_name) {
            return self.command(&name, cursor);
        }
        match cursor.next() {
            Some('(') => {
                self.transition(LatexState::Math(MathDelimiter::Paren));
                Action::Boundary
            }
            Some('[') => {
                self.transition(LatexState::Math(MathDelimiter::Bracket));
                Action::Boundary
            }
            // Discretionary hyphen.
            Some('-') => Action::Skip,
            Some(c) if ACCENTS.contains(c) => Action::Skip,
            // Line break, with optional star and spacing.
            Some('\\') => {
                cursor.eat('*');
                cursor.consume(optional_argument);
                Action::Boundary
            }
            Some(c) if ESCAPED_SPECIALS.contains(c) && cursor.is_word_char(c) => Action::Word(c),
            _ => Action::Boundary,
        }
    }

    fn command(&mut self, name: &str, cursor: &mut Cursor<'_>) -> Action {
        match name {
            "begin" => {
                if let Some(environment) = cursor.consume(braced_argument) {
                    if self.config.discarded_environments.contains(&environment) {
                        self.transition(LatexState::Environment(environment));
                    }
                    return Action::Boundary;
                }
            }
            "verb" => {
                if let Some(delimiter) = cursor.next() {
                    let mut buf = [0; 4];
                    cursor.skip_past(delimiter.encode_utf8(&mut buf));
                }
                return Action::Boundary;
            }
            _ => {}
        }
        if let Some(&remaining) = self.config.non_textual_commands.get(name) {
            if remaining > 0 {
                self.transition(LatexState::CommandArgs { remaining });
            }
        }
        Action::Boundary
    }

    fn command_args(&mut self, remaining: usize, cursor: &mut Cursor<'_>) -> Option<Action> {
        match cursor.peek()? {
            '[' => {
                if cursor.consume(optional_argument).is_none() {
                    cursor.skip_rest();
                }
            }
            '{' => {
                cursor.next();
                self.transition(LatexState::MacroArg {
                    depth: 1,
                    remaining: remaining - 1,
                });
            }
            c if c.is_whitespace() => {
                cursor.next();
            }
            // The argument is missing; read what follows as text.
            _ => self.transition(LatexState::Normal),
        }
        Some(Action::Boundary)
    }

    fn macro_arg(
        &mut self,
        depth: usize,
        remaining: usize,
        cursor: &mut Cursor<'_>,
    ) -> Option<Action> {
        match cursor.next()? {
            '\\' => {
                cursor.next();
            }
            '{' => {
                self.state = LatexState::MacroArg {
                    depth: depth + 1,
                    remaining,
                }
            }
            '}' if depth > 1 => {
                self.state = LatexState::MacroArg {
                    depth: depth - 1,
                    remaining,
                }
            }
            '}' if remaining > 0 => self.transition(LatexState::CommandArgs { remaining }),
            '}' => self.transition(LatexState::Normal),
            _ => {}
        }
        Some(Action::Boundary)
    }

    fn math(&mut self, delimiter: MathDelimiter, cursor: &mut Cursor<'_>) -> Option<Action> {
        let closed = match (delimiter, cursor.next()?) {
            (_, '\\') => matches!(
                (delimiter, cursor.next()),
                (MathDelimiter::Paren, Some(')')) | (MathDelimiter::Bracket, Some(']'))
            ),
            (_, '%') => {
                cursor.skip_rest();
                false
            }
            (MathDelimiter::Dollar, '$') => true,
            (MathDelimiter::DoubleDollar, '$') => cursor.eat('$'),
            _ => false,
        };
        if closed {
            self.transition(LatexState::Normal);
        }
        Some(Action::Boundary)
    }
}

fn command_name(input: &str) -> ParserResult<String> {
    context(
        "command name",
        map(
            terminated(
                take_while1(|c: char| c.is_ascii_alphabetic() || c == '@'),
                opt(char('*')),
            ),
            String::from,
        ),
    )(input)
}

fn braced_argument(input: &str) -> ParserResult<String> {
    context(
        "braced argument",
        map(
            delimited(char('{'), take_while(|c| c != '{' && c != '}'), char('}')),
            String::from,
        ),
    )(input)
}

fn optional_argument(input: &str) -> ParserResult<()> {
    context(
        "optional argument",
        value((), delimited(char('['), take_until("]"), char(']'))),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alphabet::Alphabet, tokenizer::token::Format, Tokenizer};

    fn words(tokenizer: &mut Tokenizer<'_>, line: &str) -> Vec<String> {
        tokenizer.tokenize(line).into_iter().map(String::from).collect()
    }

    #[test]
    fn test_command_name_parser() {
        assert_eq!(command_name("emph{x}").unwrap(), ("{x}", "emph".to_string()));
        assert_eq!(command_name("section*{x}").unwrap(), ("{x}", "section".to_string()));
        assert!(command_name("%").is_err());
        assert_eq!(braced_argument("{equation*} x").unwrap(), (" x", "equation*".to_string()));
        assert_eq!(optional_argument("[utf8]{inputenc}").unwrap(), ("{inputenc}", ()));
    }

    #[test]
    fn test_single_lines() {
        let alphabet = Alphabet::letters();
        let mut tokenizer = Tokenizer::new(Format::Latex, &alphabet);

        let test_cases: [(&str, &[&str]); 20] = [
            ("hello % world ignored", &["hello"]),
            (r"50\% of words", &["of", "words"]),
            (r"see \cite{foo2020} here", &["see", "here"]),
            (r"\emph{really} good", &["really", "good"]),
            (r"\label{a{b}c} after", &["after"]),
            (r"\setlength{\parindent}{0pt} text", &["text"]),
            (r"\definecolor{mine}{rgb}{0.1,0.2,0.3} colour", &["colour"]),
            (r"\usepackage[utf8]{inputenc} body", &["body"]),
            (r"where $x + y$ holds", &["where", "holds"]),
            (r"\(a\) and \[b\] or $$c$$ end", &["and", "or", "end"]),
            (r"$a \$ b$ out", &["out"]),
            (r"\begin{itemize} \item first", &["first"]),
            (r"text \begin{equation} x = y \end{equation} more", &["text", "more"]),
            (r"use \verb|foo_bar| here", &["use", "here"]),
            (r"a hy\-phen", &["a", "hyphen"]),
            (r"one\\[2pt] two", &["one", "two"]),
            (r"\section*{Intro} text", &["Intro", "text"]),
            (r#"na\"ive"#, &["naive"]),
            (r"\LaTeX\ is nice", &["is", "nice"]),
            (r"``quoted'' words", &["quoted", "words"]),
        ];

        for (line, expected) in test_cases.iter() {
            assert_eq!(words(&mut tokenizer, line), *expected, "line: {line}");
            assert_eq!(tokenizer.latex_state(), Some(&LatexState::Normal), "line: {line}");
        }
    }

    #[test]
    fn test_escaped_letter_class_character() {
        let alphabet = Alphabet::with_word_chars(['_']);
        let mut tokenizer = Tokenizer::new(Format::Latex, &alphabet);
        assert_eq!(words(&mut tokenizer, r"snake\_case word"), vec!["snake_case", "word"]);
    }

    #[test]
    fn test_macro_argument_spans_lines() {
        let alphabet = Alphabet::letters();
        let mut tokenizer = Tokenizer::new(Format::Latex, &alphabet);

        assert!(words(&mut tokenizer, r"\cite{foo,").is_empty());
        assert_eq!(
            tokenizer.latex_state(),
            Some(&LatexState::MacroArg {
                depth: 1,
                remaining: 0
            })
        );
        assert_eq!(words(&mut tokenizer, "bar} baz"), vec!["baz"]);
        assert_eq!(tokenizer.latex_state(), Some(&LatexState::Normal));
    }

    #[test]
    fn test_display_math_spans_lines() {
        let alphabet = Alphabet::letters();
        let mut tokenizer = Tokenizer::new(Format::Latex, &alphabet);

        assert_eq!(words(&mut tokenizer, "before $$ x"), vec!["before"]);
        assert!(words(&mut tokenizer, "y = z").is_empty());
        assert_eq!(words(&mut tokenizer, "w $$ after"), vec!["after"]);

        assert_eq!(words(&mut tokenizer, r"\["), Vec::<String>::new());
        assert_eq!(words(&mut tokenizer, r"a \] b"), vec!["b"]);
    }

    #[test]
    fn test_environment_spans_lines() {
        let alphabet = Alphabet::letters();
        let mut tokenizer = Tokenizer::new(Format::Latex, &alphabet);

        assert!(words(&mut tokenizer, r"\begin{verbatim}").is_empty());
        assert!(words(&mut tokenizer, "code here").is_empty());
        assert_eq!(words(&mut tokenizer, r"\end{verbatim} prose"), vec!["prose"]);
    }

    #[test]
    fn test_transient_states_end_with_the_line() {
        let alphabet = Alphabet::letters();
        let mut tokenizer = Tokenizer::new(Format::Latex, &alphabet);

        assert_eq!(words(&mut tokenizer, "costs $5"), vec!["costs"]);
        assert_eq!(words(&mut tokenizer, "next line"), vec!["next", "line"]);

        assert_eq!(words(&mut tokenizer, "a % b"), vec!["a"]);
        assert_eq!(words(&mut tokenizer, "c"), vec!["c"]);

        assert!(words(&mut tokenizer, r"\cite").is_empty());
        assert_eq!(words(&mut tokenizer, "plain"), vec!["plain"]);
    }

    #[test]
    fn test_reset_clears_carried_state() {
        let alphabet = Alphabet::letters();
        let mut tokenizer = Tokenizer::new(Format::Latex, &alphabet);

        assert!(words(&mut tokenizer, r"\label{never closed").is_empty());
        tokenizer.reset();
        assert_eq!(words(&mut tokenizer, "fresh} start"), vec!["fresh", "start"]);
    }

    #[test]
    fn test_configured_commands() {
        let alphabet = Alphabet::letters();
        let mut config = crate::TokenizerConfig::default();
        config.latex.non_textual_commands.remove("cite");
        config
            .latex
            .non_textual_commands
            .insert("todo".to_string(), 1);
        let mut tokenizer = Tokenizer::with_config(Format::Latex, &alphabet, &config);

        assert_eq!(
            words(&mut tokenizer, r"\cite{smith} \todo{fix this} done"),
            vec!["smith", "done"]
        );
    }
}
