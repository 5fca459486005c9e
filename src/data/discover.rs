use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("listing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
}

// ---------------------------------------------------------------------------
// Glob pattern → regex
// ---------------------------------------------------------------------------

/// Compile a shell-style file pattern into an anchored regex.
///
/// `*` matches any run of characters, `?` exactly one; everything else is
/// literal. Patterns apply to the bare file name only.
pub fn compile_pattern(pattern: &str) -> Result<Regex, DiscoverError> {
    let mut re = String::with_capacity(pattern.len() + 8);
    re.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            other => re.push_str(&regex::escape(other.encode_utf8(&mut [0u8; 4]))),
        }
    }
    re.push('$');
    log::debug!("file pattern '{pattern}' compiled to {re}");

    Regex::new(&re).map_err(|source| DiscoverError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Directory listing
// ---------------------------------------------------------------------------

/// List regular files directly inside `dir` whose names match `pattern`,
/// sorted by file name.
pub fn discover(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, DiscoverError> {
    let matcher = compile_pattern(pattern)?;
    let io_err = |source| DiscoverError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        // Non-UTF-8 names can't carry a label anyway.
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if !matcher.is_match(&name) {
            continue;
        }
        if entry.path().is_file() {
            files.push(entry.path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
