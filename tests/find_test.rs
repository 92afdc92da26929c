use std::io::Cursor;

use pretty_assertions::assert_eq;
use spellscan::{
    Alphabet, Checker, Encoding, Format, HyphenPolicy, TokenizerConfig, WordList,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn quick_fox() -> WordList {
    let mut words = WordList::new(Alphabet::letters());
    words.add_words(["quick", "fox"]);
    words
}

#[test]
fn it_finds_misspellings_with_split_hyphens() {
    let words = quick_fox();
    let config = TokenizerConfig {
        hyphen: HyphenPolicy::Split,
        ..Default::default()
    };
    let mut checker = Checker::with_config(&words, Format::PlainText, &config);
    assert_eq!(checker.find("The quick-brown fox.", 0), vec!["The", "brown"]);
}

#[test]
fn it_finds_misspellings_with_joined_hyphens() {
    let words = quick_fox();
    let mut checker = Checker::new(&words, Format::PlainText);
    assert_eq!(
        checker.find("The quick-brown fox.", 0),
        vec!["The", "quick-brown"]
    );
    assert_eq!(checker.find("A quick-fox.", 1), vec!["A"]);

    let words = quick_fox().with_hyphen_breaking(false);
    let mut checker = Checker::new(&words, Format::PlainText);
    assert_eq!(checker.find("A quick-fox.", 0), vec!["A", "quick-fox"]);
}

#[test]
fn it_accepts_ignored_words() {
    let mut words = quick_fox();
    words.add_words(["hunspell", "LaTeX"]);
    let mut checker = Checker::new(&words, Format::Latex);
    assert_eq!(
        checker.find(r"A quick \emph{hunspell} fox wrote LaTeX", 0),
        vec!["A", "wrote"]
    );
}

#[test]
fn it_checks_against_a_dic_file() {
    let dic = "3\nquick/S\nfox/MS\nman/M\n";
    let words = WordList::from_reader(Cursor::new(dic), Alphabet::letters()).unwrap();
    let mut checker = Checker::new(&words, Format::Man);

    let lines = [".TH FOX 1", r"the \fBquick\fR fox", r#".\" mispeled"#, "man pagge"];
    assert_eq!(
        checker.find_lines(lines),
        vec![vec![], vec!["the"], vec![], vec!["pagge"]]
    );
}

#[test]
fn it_skips_lines_outside_a_latin1_dictionary() {
    let words = quick_fox().with_encoding(Encoding::Latin1);
    let mut checker = Checker::new(&words, Format::PlainText);

    assert_eq!(
        checker.find_lines(["quick brwn", "quick → fox", "fox ünd"]),
        vec![vec!["brwn"], vec![], vec!["ünd"]]
    );
}

#[test]
fn it_parses_without_a_dictionary() {
    let words = WordList::new(Alphabet::with_word_chars("0123456789".chars()));
    let mut checker = Checker::from_name(&words, "text").unwrap();
    assert_eq!(
        checker.parse_lines(["R2D2 meets C3PO", ""]),
        vec![vec!["R2D2", "meets", "C3PO"], vec![]]
    );
}
