//! Pattern search over UTF-16 text.
//!
//! All public inputs and outputs are **logical character** indices as defined by the
//! [`CodePointIndexer`] passed in. Queries are plain substrings (escaped and compiled into a
//! regex) or regex patterns. The text is transcoded to UTF-8 once per call and matched with
//! the `regex` crate; match offsets are mapped back through UTF-16 offsets.
//!
//! A match that starts or ends inside a multi-unit logical character is widened to cover
//! that whole character.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::indexer::CodePointIndexer;

/// Options that control how search is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// If `true`, performs a case-sensitive search.
    pub case_sensitive: bool,
    /// If `true`, matches only whole words (alphanumeric and `_`).
    pub whole_word: bool,
    /// If `true`, treats the query as a regex pattern.
    pub regex: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            whole_word: false,
            regex: false,
        }
    }
}

/// A match returned by the search APIs, expressed as a half-open logical-character range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    /// Inclusive start index.
    pub start: usize,
    /// Exclusive end index.
    pub end: usize,
}

impl SearchMatch {
    /// Returns the length of the match in logical characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the match is empty.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Search errors.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The provided regex pattern failed to compile.
    #[error("invalid regex: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// The text holds an unpaired surrogate and cannot be matched as Unicode.
    #[error("unpaired surrogate at code unit {offset}")]
    InvalidUtf16 {
        /// Code-unit offset of the unpaired surrogate.
        offset: usize,
    },
}

/// UTF-8 copy of a UTF-16 text, with the offset tables needed to map matches back.
#[derive(Debug)]
struct Transcoded {
    utf8: String,
    /// Byte offset of every scalar value, plus `utf8.len()`.
    byte_starts: Vec<usize>,
    /// Code-unit offset of every scalar value, plus the code-unit length.
    unit_starts: Vec<usize>,
    /// Logical index of the character containing each code unit, plus the logical length.
    logical_of_unit: Vec<usize>,
    /// Code-unit offset of every logical character, plus the code-unit length.
    unit_of_logical: Vec<usize>,
}

impl Transcoded {
    fn new(indexer: &CodePointIndexer, text: &[u16]) -> Result<Self, SearchError> {
        let mut utf8 = String::with_capacity(text.len());
        let mut byte_starts = Vec::with_capacity(text.len() + 1);
        let mut unit_starts = Vec::with_capacity(text.len() + 1);

        let mut unit = 0;
        for decoded in char::decode_utf16(text.iter().copied()) {
            let ch = decoded.map_err(|_| SearchError::InvalidUtf16 { offset: unit })?;
            byte_starts.push(utf8.len());
            unit_starts.push(unit);
            utf8.push(ch);
            unit += ch.len_utf16();
        }
        byte_starts.push(utf8.len());
        unit_starts.push(text.len());

        let mut logical_of_unit = Vec::with_capacity(text.len() + 1);
        let mut unit_of_logical = Vec::new();
        for (logical, ch) in indexer.chars(text).enumerate() {
            unit_of_logical.push(logical_of_unit.len());
            logical_of_unit.extend(std::iter::repeat_n(logical, ch.len()));
        }
        logical_of_unit.push(unit_of_logical.len());
        unit_of_logical.push(text.len());

        Ok(Self {
            utf8,
            byte_starts,
            unit_starts,
            logical_of_unit,
            unit_of_logical,
        })
    }

    fn logical_len(&self) -> usize {
        self.unit_of_logical.len() - 1
    }

    fn logical_to_byte(&self, logical: usize) -> usize {
        let unit = self.unit_of_logical[logical.min(self.logical_len())];
        let scalar = match self.unit_starts.binary_search(&unit) {
            Ok(idx) => idx,
            Err(idx) => idx,
        };
        self.byte_starts[scalar]
    }

    fn byte_to_unit(&self, byte: usize) -> usize {
        let scalar = match self.byte_starts.binary_search(&byte) {
            Ok(idx) => idx,
            Err(idx) => idx,
        };
        self.unit_starts[scalar.min(self.unit_starts.len() - 1)]
    }

    /// Map a non-empty byte range to the smallest logical range covering it.
    fn to_match(&self, bytes: std::ops::Range<usize>) -> SearchMatch {
        let start_unit = self.byte_to_unit(bytes.start);
        let end_unit = self.byte_to_unit(bytes.end);
        SearchMatch {
            start: self.logical_of_unit[start_unit],
            end: self.logical_of_unit[end_unit.saturating_sub(1)] + 1,
        }
    }

    fn is_whole_word(&self, bytes: &std::ops::Range<usize>) -> bool {
        let before = self.utf8[..bytes.start].chars().next_back();
        let after = self.utf8[bytes.end..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    }
}

fn compile_search_regex(query: &str, options: SearchOptions) -> Result<Regex, SearchError> {
    let pattern = if options.regex {
        query.to_string()
    } else {
        regex::escape(query)
    };

    tracing::trace!(%pattern, case_sensitive = options.case_sensitive, "compiling search regex");
    Ok(RegexBuilder::new(&pattern)
        .case_insensitive(!options.case_sensitive)
        .multi_line(true)
        .build()?)
}

fn is_word_char(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

/// Find the next occurrence of `query` in `text`, searching forward from `from_char`.
///
/// - Returns `Ok(None)` if no match is found (or if `query` is empty).
/// - Empty regex matches are skipped.
pub fn find_next(
    indexer: &CodePointIndexer,
    text: &[u16],
    query: &str,
    options: SearchOptions,
    from_char: usize,
) -> Result<Option<SearchMatch>, SearchError> {
    if query.is_empty() {
        return Ok(None);
    }

    let re = compile_search_regex(query, options)?;
    let index = Transcoded::new(indexer, text)?;

    let mut at = index.logical_to_byte(from_char);
    loop {
        let Some(m) = re.find_at(&index.utf8, at) else {
            return Ok(None);
        };

        if m.is_empty() || (options.whole_word && !index.is_whole_word(&m.range())) {
            let Some(next) = index.utf8[m.start()..].chars().next() else {
                return Ok(None);
            };
            at = m.start() + next.len_utf8();
            continue;
        }

        return Ok(Some(index.to_match(m.range())));
    }
}

/// Find the previous occurrence of `query` in `text`, ending at or before `from_char`.
///
/// - Returns `Ok(None)` if no match is found (or if `query` is empty).
pub fn find_prev(
    indexer: &CodePointIndexer,
    text: &[u16],
    query: &str,
    options: SearchOptions,
    from_char: usize,
) -> Result<Option<SearchMatch>, SearchError> {
    if query.is_empty() {
        return Ok(None);
    }

    let re = compile_search_regex(query, options)?;
    let index = Transcoded::new(indexer, text)?;
    let limit_byte = index.logical_to_byte(from_char);

    let last = re
        .find_iter(&index.utf8[..limit_byte])
        .filter(|m| !m.is_empty())
        .filter(|m| !options.whole_word || index.is_whole_word(&m.range()))
        .last();

    Ok(last.map(|m| index.to_match(m.range())))
}

/// Find all non-overlapping occurrences of `query` in `text`.
///
/// Returns an empty list if `query` is empty.
pub fn find_all(
    indexer: &CodePointIndexer,
    text: &[u16],
    query: &str,
    options: SearchOptions,
) -> Result<Vec<SearchMatch>, SearchError> {
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let re = compile_search_regex(query, options)?;
    let index = Transcoded::new(indexer, text)?;

    Ok(re
        .find_iter(&index.utf8)
        .filter(|m| !m.is_empty())
        .filter(|m| !options.whole_word || index.is_whole_word(&m.range()))
        .map(|m| index.to_match(m.range()))
        .collect())
}
