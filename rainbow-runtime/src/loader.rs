//! Program loader for Rainbow listings
//!
//! A listing (`.rbw`) is whitespace-separated 6-hex-digit instruction
//! words; `#` starts a comment that runs to the end of the line. Any
//! source of conforming words is acceptable to the VM, the listing is
//! just the one this runtime reads.

use crate::error::{RuntimeError, RuntimeResult};
use rainbow_core::WORD_LEN;
use std::fs;
use std::path::Path;

/// Carregador de programas Rainbow
pub struct ProgramLoader;

impl ProgramLoader {
    /// Load a listing file into instruction words
    pub fn load_file(path: impl AsRef<Path>) -> RuntimeResult<Vec<String>> {
        let source = fs::read_to_string(path.as_ref())
            .map_err(|_| RuntimeError::FileNotFound(path.as_ref().display().to_string()))?;

        Self::parse_listing(&source)
    }

    /// Parse listing text into instruction words
    pub fn parse_listing(source: &str) -> RuntimeResult<Vec<String>> {
        let mut words = Vec::new();

        for line in source.lines() {
            let line = line.split('#').next().unwrap_or("");
            for word in line.split_whitespace() {
                if word.len() != WORD_LEN || !word.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return Err(RuntimeError::InvalidFormat(format!(
                        "bad instruction word: {:?}",
                        word
                    )));
                }
                words.push(word.to_uppercase());
            }
        }

        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_listing() {
        let words = ProgramLoader::parse_listing("10002A 000000").unwrap();
        assert_eq!(words, vec!["10002A", "000000"]);
    }

    #[test]
    fn test_parse_multiline_with_comments() {
        let source = r#"
            # set tape[0] and leave
            10002a   # lowercase is normalized
            000000
        "#;
        let words = ProgramLoader::parse_listing(source).unwrap();
        assert_eq!(words, vec!["10002A", "000000"]);
    }

    #[test]
    fn test_parse_rejects_short_word() {
        assert!(matches!(
            ProgramLoader::parse_listing("10002"),
            Err(RuntimeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert!(ProgramLoader::parse_listing("10002G").is_err());
    }

    #[test]
    fn test_parse_empty_source() {
        // An empty listing is a program that halts immediately.
        assert!(ProgramLoader::parse_listing("# nothing\n").unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            ProgramLoader::load_file("/nonexistent/prog.rbw"),
            Err(RuntimeError::FileNotFound(_))
        ));
    }
}
