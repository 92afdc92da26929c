use clap::{command, Parser};
use spellscan::{
    config, Alphabet, Checker, Encoding, Error, Format, TokenizerConfig, WordList,
};
use std::{
    io::{self, Read},
    path::PathBuf,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input format: text, latex or man
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Word list or hunspell .dic file; without one every word is reported
    #[arg(short, long)]
    dict: Option<PathBuf>,

    /// Extra characters that count as part of a word
    #[arg(short = 'w', long, default_value = "")]
    word_chars: String,

    /// Words to accept in addition to the dictionary
    #[arg(short, long)]
    ignore: Vec<String>,

    /// Path to a JSON tokenizer config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Check with an ISO8859-1 dictionary
    #[arg(long)]
    latin1: bool,

    /// Print only misspelled words
    #[arg(long)]
    find: bool,

    /// Tokenize URLs and email addresses like any other text
    #[arg(long)]
    no_url_check: bool,

    /// Files to read; standard input when empty
    files: Vec<PathBuf>,
}

fn read_input(path: Option<&PathBuf>) -> Result<String, Error> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut content = String::new();
            io::stdin().lock().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let format = Format::from_name(&cli.format)?;

    let mut tokenizer_config: TokenizerConfig = match &cli.config {
        Some(path) => config::from_file(path)?,
        None => TokenizerConfig::default(),
    };
    if cli.no_url_check {
        tokenizer_config.url_checking = false;
    }
    info!("config loaded.");
    debug!("config: {:?}", tokenizer_config);

    let alphabet = Alphabet::with_word_chars(cli.word_chars.chars());
    let mut words = match &cli.dict {
        Some(path) => WordList::from_file(path, alphabet)?,
        None => WordList::new(alphabet),
    };
    if cli.latin1 {
        words = words.with_encoding(Encoding::Latin1);
    }
    words.add_words(&cli.ignore);

    let inputs: Vec<Option<&PathBuf>> = if cli.files.is_empty() {
        vec![None]
    } else {
        cli.files.iter().map(Some).collect()
    };

    for input in inputs {
        let content = read_input(input)?;
        let name = input.map_or_else(|| "-".to_string(), |p| p.display().to_string());
        debug!("Checking {}", name);

        // Markup state never carries from one file into the next.
        let mut checker = Checker::with_config(&words, format, &tokenizer_config);
        for (index, line) in content.lines().enumerate() {
            let found = if cli.find {
                checker.find(line, index)
            } else {
                checker.parse(line)
            };
            for word in found {
                println!("{}:{}:{}", name, index + 1, word);
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
