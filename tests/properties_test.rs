use proptest::prelude::*;
use spellscan::{Alphabet, Format, Token, Tokenizer, TokenizerConfig};

fn tokenize(tokenizer: &mut Tokenizer<'_>, line: &str) -> Vec<Token> {
    tokenizer.tokenize(line)
}

fn without_urls() -> TokenizerConfig {
    TokenizerConfig {
        url_checking: false,
        ..Default::default()
    }
}

/// Prose with none of the characters LaTeX or troff treat specially.
fn prose() -> impl Strategy<Value = String> {
    "[a-zA-Zéü0-9 ,;:!?()-]{0,80}"
}

proptest! {
    #[test]
    fn tokens_are_never_empty(line in any::<String>()) {
        let alphabet = Alphabet::letters();
        for format in [Format::PlainText, Format::Latex, Format::Man] {
            let mut tokenizer = Tokenizer::new(format, &alphabet);
            for token in tokenize(&mut tokenizer, &line) {
                prop_assert!(!token.text.is_empty());
                prop_assert!(line[token.start..].starts_with(token.text.chars().next().unwrap()));
            }
        }
    }

    #[test]
    fn tokens_come_in_line_order(line in any::<String>()) {
        let alphabet = Alphabet::letters();
        for format in [Format::PlainText, Format::Latex, Format::Man] {
            let mut tokenizer = Tokenizer::new(format, &alphabet);
            let tokens = tokenize(&mut tokenizer, &line);
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].start + pair[0].text.len() <= pair[1].start);
            }
        }
    }

    #[test]
    fn plain_text_is_idempotent(line in any::<String>()) {
        let alphabet = Alphabet::letters();
        let mut tokenizer = Tokenizer::new(Format::PlainText, &alphabet);
        let first = tokenize(&mut tokenizer, &line);
        prop_assert_eq!(tokenize(&mut tokenizer, &line), first);
    }

    #[test]
    fn prose_is_idempotent_in_every_format(line in prose()) {
        let alphabet = Alphabet::letters();
        for format in [Format::PlainText, Format::Latex, Format::Man] {
            let mut tokenizer = Tokenizer::new(format, &alphabet);
            let first = tokenize(&mut tokenizer, &line);
            prop_assert_eq!(tokenize(&mut tokenizer, &line), first);
        }
    }

    #[test]
    fn formats_agree_on_prose(line in prose()) {
        let alphabet = Alphabet::letters();
        let config = without_urls();
        let plain = tokenize(&mut Tokenizer::with_config(Format::PlainText, &alphabet, &config), &line);
        let latex = tokenize(&mut Tokenizer::with_config(Format::Latex, &alphabet, &config), &line);
        let man = tokenize(&mut Tokenizer::with_config(Format::Man, &alphabet, &config), &line);
        prop_assert_eq!(&latex, &plain);
        prop_assert_eq!(&man, &plain);
    }
}
