use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// FileLabel – metadata embedded in an output file name
// ---------------------------------------------------------------------------

/// Characters separating the tokens of an output file name.
const DELIMITERS: [char; 2] = ['_', '.'];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("'{file}' has {found} name tokens, expected at least 4 (out_<name>_<count>.<qualifier>.tsv)")]
    TooFewTokens { file: String, found: usize },
}

/// Display label parsed from `out_<name>_<count>.<qualifier>.tsv`.
///
/// The first token (the `out` prefix) and anything after the qualifier
/// (usually the `tsv` extension) are ignored. Tokens may be empty, so
/// `out__1.x.tsv` parses with an empty name.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FileLabel {
    /// Generator name, e.g. `lcg` or `xorshift64`.
    pub name: String,
    /// Seed count (or seeding mode, e.g. `host`), kept as text.
    pub count: String,
    /// Qualifier, e.g. `mt` or a hash name.
    pub qualifier: String,
}

impl FileLabel {
    /// Parse a bare file name (no directory components).
    pub fn parse(file_name: &str) -> Result<Self, LabelError> {
        let tokens: Vec<&str> = file_name.split(&DELIMITERS[..]).collect();
        match tokens.as_slice() {
            [_, name, count, qualifier, ..] => Ok(FileLabel {
                name: name.to_string(),
                count: count.to_string(),
                qualifier: qualifier.to_string(),
            }),
            _ => Err(LabelError::TooFewTokens {
                file: file_name.to_string(),
                found: tokens.len(),
            }),
        }
    }

    /// Subplot title: `"<name>, <count> seeds (<qualifier>)"`.
    pub fn title(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FileLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} seeds ({})", self.name, self.count, self.qualifier)
    }
}
