use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet},
    fs::File,
    io::BufReader,
    path::Path,
};

use crate::{Error, InternalResult};

/// Heuristic data driving the tokenizers.
///
/// Which LaTeX commands carry non-textual arguments and which troff requests
/// take non-textual arguments is not something the tokenizer can infer, so it
/// lives here and can be replaced from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenizerConfig {
    #[serde(default = "default_true")]
    pub url_checking: bool,

    #[serde(default)]
    pub hyphen: HyphenPolicy,

    #[serde(default)]
    pub latex: LatexConfig,

    #[serde(default)]
    pub man: ManConfig,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            url_checking: default_true(),
            hyphen: HyphenPolicy::default(),
            latex: LatexConfig::default(),
            man: ManConfig::default(),
        }
    }
}

/// How a hyphen between two word characters is treated.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HyphenPolicy {
    /// `quick-brown` stays one token.
    #[default]
    Join,
    /// `quick-brown` becomes `quick` and `brown`.
    Split,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LatexConfig {
    /// Command name (without backslash) to the number of brace arguments
    /// that are discarded after it.
    #[serde(default = "default_non_textual_commands")]
    pub non_textual_commands: BTreeMap<String, usize>,

    /// Environments whose whole body is discarded up to the matching `\end`.
    #[serde(default = "default_discarded_environments")]
    pub discarded_environments: BTreeSet<String>,
}

impl Default for LatexConfig {
    fn default() -> Self {
        Self {
            non_textual_commands: default_non_textual_commands(),
            discarded_environments: default_discarded_environments(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManConfig {
    /// Requests whose arguments are discarded together with the request name.
    #[serde(default = "default_non_textual_requests")]
    pub non_textual_requests: BTreeSet<String>,

    /// Requests opening a block that runs until a line starting with `..`.
    #[serde(default = "default_block_requests")]
    pub block_requests: BTreeSet<String>,
}

impl Default for ManConfig {
    fn default() -> Self {
        Self {
            non_textual_requests: default_non_textual_requests(),
            block_requests: default_block_requests(),
        }
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path)
        .map_err(|e| Error::config(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_true() -> bool {
    true
}

fn default_non_textual_commands() -> BTreeMap<String, usize> {
    [
        ("addcontentsline", 2),
        ("addtocounter", 1),
        ("addtolength", 2),
        ("autoref", 1),
        ("begin", 1),
        ("bibitem", 1),
        ("bibliography", 1),
        ("bibliographystyle", 1),
        ("cite", 1),
        ("citep", 1),
        ("citet", 1),
        ("color", 1),
        ("colorbox", 1),
        ("cref", 1),
        ("declaregraphicsextensions", 1),
        ("definecolor", 3),
        ("documentclass", 1),
        ("end", 1),
        ("enlargethispage", 1),
        ("eqref", 1),
        ("fcolorbox", 2),
        ("hspace", 1),
        ("href", 1),
        ("hyphenation", 1),
        ("include", 1),
        ("includegraphics", 1),
        ("includeonly", 1),
        ("index", 1),
        ("input", 1),
        ("inputencoding", 1),
        ("label", 1),
        ("newcommand", 2),
        ("newtheorem", 2),
        ("nocite", 1),
        ("pagecolor", 1),
        ("pagenumbering", 1),
        ("pageref", 1),
        ("pagestyle", 1),
        ("parbox", 1),
        ("ref", 1),
        ("renewcommand", 2),
        ("rule", 2),
        ("selectlanguage", 1),
        ("setcounter", 2),
        ("setlength", 2),
        ("settowidth", 2),
        ("stepcounter", 1),
        ("textcolor", 1),
        ("thispagestyle", 1),
        ("url", 1),
        ("usepackage", 1),
        ("vspace", 1),
    ]
    .into_iter()
    .map(|(name, args)| (name.to_string(), args))
    .collect()
}

fn default_discarded_environments() -> BTreeSet<String> {
    [
        "align",
        "align*",
        "displaymath",
        "equation",
        "equation*",
        "eqnarray",
        "eqnarray*",
        "gather",
        "gather*",
        "lstlisting",
        "math",
        "minted",
        "multline",
        "multline*",
        "verbatim",
        "verbatim*",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_non_textual_requests() -> BTreeSet<String> {
    [
        "ad", "bp", "br", "ce", "ds", "fi", "ft", "hy", "in", "ll", "mso", "na", "ne", "nf", "nh",
        "nr", "pl", "ps", "so", "sp", "ta", "ti", "vs",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_block_requests() -> BTreeSet<String> {
    ["am", "de", "ig"].into_iter().map(String::from).collect()
}
