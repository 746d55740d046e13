//! Per-language letter values and tile counts.
//!
//! A languages file holds one language per line:
//!
//! ```text
//! english;{A=1, B=3, C=3, ...};{A=9, B=2, C=2, ...}
//! ```
//!
//! The second field maps letters to point values, the third to the number of tiles of
//! that letter in a full set. Wildcards are not listed; every language gets
//! [`WILDCARD_COUNT`] of them, worth nothing.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

use crate::models::BLANK;
use crate::utils::letters::{ENGLISH_DISTRIBUTION, ENGLISH_VALUES, WILDCARD_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    name: String,
    values: HashMap<char, u32>,
    distribution: HashMap<char, u32>,
}

impl Language {
    /// Build a language from letter tables; the wildcard entries are added here
    pub fn new(
        name: impl Into<String>,
        values: HashMap<char, u32>,
        distribution: HashMap<char, u32>,
    ) -> Self {
        let mut values = values;
        let mut distribution = distribution;
        values.insert(BLANK, 0);
        distribution.insert(BLANK, WILDCARD_COUNT);

        Self {
            name: name.into(),
            values,
            distribution,
        }
    }

    /// The standard English tile set, no file needed
    pub fn english() -> Self {
        Self::new(
            "english",
            ENGLISH_VALUES.clone(),
            ENGLISH_DISTRIBUTION.iter().copied().collect(),
        )
    }

    /// Load the language called `name` from a languages file
    pub async fn load<P: AsRef<Path>>(path: P, name: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read languages file {}", path.display()))?;

        let language = Self::find(&content, name)?;

        tracing::info!(
            "Loaded language {} ({} tiles)",
            language.name,
            language.tile_count()
        );

        Ok(language)
    }

    /// Pick the line for `name` out of a languages file's contents
    pub fn find(content: &str, name: &str) -> Result<Self> {
        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.split(';').next() == Some(name) {
                return Self::parse_line(line)
                    .with_context(|| format!("Malformed language entry on line {}", number + 1));
            }
        }

        bail!("Language {} not found", name)
    }

    /// Parse a single `name;{values};{distribution}` line
    pub fn parse_line(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(';').collect();
        let [name, values, distribution] = fields.as_slice() else {
            bail!("Expected 3 ';'-separated fields, found {}", fields.len());
        };

        let values = parse_table(values).context("Invalid value table")?;
        let distribution = parse_table(distribution).context("Invalid distribution table")?;

        Ok(Self::new(name.trim(), values, distribution))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Point value of `letter`; letters outside the language are worth nothing
    pub fn value(&self, letter: char) -> u32 {
        self.values
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(0)
    }

    /// Number of `letter` tiles in a full set
    pub fn distribution(&self, letter: char) -> u32 {
        self.distribution
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(0)
    }

    /// Every letter with at least one tile, wildcard first, then alphabetical
    pub fn letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .distribution
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(letter, _)| *letter)
            .collect();
        letters.sort_unstable();
        letters
    }

    /// Size of a full tile set, wildcards included
    pub fn tile_count(&self) -> u32 {
        self.distribution.values().sum()
    }
}

/// Parse `{A=1, B=3}` into a letter table
fn parse_table(field: &str) -> Result<HashMap<char, u32>> {
    let inner = field
        .trim()
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .with_context(|| format!("Table {} is not enclosed in braces", field))?;

    let mut table = HashMap::new();
    for entry in inner.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (letter, amount) = entry
            .split_once('=')
            .with_context(|| format!("Entry {} has no '='", entry))?;

        let mut chars = letter.trim().chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            bail!("Entry {} does not name a single letter", entry);
        };
        let amount: u32 = amount
            .trim()
            .parse()
            .with_context(|| format!("Entry {} has a non-numeric amount", entry))?;

        table.insert(letter.to_ascii_uppercase(), amount);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
english;{A=1, B=3, C=3};{A=9, B=2, C=2}
tiny;{X=8, Y=4};{X=1, Y=2}
";

    #[test]
    fn test_english_builtin() {
        let english = Language::english();
        assert_eq!(english.name(), "english");
        assert_eq!(english.value('q'), 10);
        assert_eq!(english.distribution('E'), 12);
        assert_eq!(english.value(BLANK), 0);
        assert_eq!(english.distribution(BLANK), 2);
        assert_eq!(english.tile_count(), 100);
    }

    #[test]
    fn test_parse_line() {
        let tiny = Language::find(SAMPLE, "tiny").unwrap();
        assert_eq!(tiny.value('X'), 8);
        assert_eq!(tiny.distribution('Y'), 2);
        assert_eq!(tiny.distribution(BLANK), 2);
        assert_eq!(tiny.tile_count(), 5);
        assert_eq!(tiny.letters(), vec![BLANK, 'X', 'Y']);
    }

    #[test]
    fn test_unknown_letter_is_worthless() {
        let tiny = Language::find(SAMPLE, "tiny").unwrap();
        assert_eq!(tiny.value('A'), 0);
        assert_eq!(tiny.distribution('A'), 0);
    }

    #[test]
    fn test_missing_language() {
        let err = Language::find(SAMPLE, "klingon").unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_malformed_entries() {
        assert!(Language::parse_line("broken;{A=1}").is_err());
        assert!(Language::parse_line("broken;{A=one};{A=1}").is_err());
        assert!(Language::parse_line("broken;A=1;{A=1}").is_err());
        assert!(Language::parse_line("broken;{AB=1};{A=1}").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let english = tokio_test::block_on(Language::load(file.path(), "english")).unwrap();
        assert_eq!(english.value('B'), 3);
        assert_eq!(english.tile_count(), 15);
    }

    #[test]
    fn test_load_missing_file() {
        let result = tokio_test::block_on(Language::load("/nonexistent/languages.txt", "english"));
        assert!(result.is_err());
    }
}
