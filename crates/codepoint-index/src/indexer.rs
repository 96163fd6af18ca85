//! Logical-character indexing over UTF-16 text.
//!
//! [`CodePointIndexer`] converts between code-unit offsets and logical-character indices,
//! and offers substring and search operations addressed by logical index. Out-of-range
//! inputs never panic: index results are `None`, substring results are empty.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::mode::Mode;
use crate::scalar;
use crate::scanner::{Clusters, contains_cluster_group};

/// Converts offsets and slices UTF-16 text by logical character.
///
/// The indexer holds no state besides its [`Mode`]; it is `Copy` and can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CodePointIndexer {
    mode: Mode,
}

impl CodePointIndexer {
    /// Create an indexer for `mode`.
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Indexer that counts one logical character per scalar value.
    pub fn standard() -> Self {
        Self::new(Mode::Standard)
    }

    /// Indexer that also groups flag sequences into one logical character.
    pub fn visual() -> Self {
        Self::new(Mode::Visual)
    }

    /// The active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns `true` if `text` holds any multi-unit logical character.
    ///
    /// When `false`, logical indices and code-unit offsets coincide.
    pub fn contains_cluster_group(&self, text: &[u16]) -> bool {
        contains_cluster_group(text, self.mode)
    }

    /// Number of logical characters in `text`.
    pub fn length(&self, text: &[u16]) -> usize {
        if !self.contains_cluster_group(text) {
            return text.len();
        }
        tracing::trace!(units = text.len(), mode = ?self.mode, "counting clusters");
        Clusters::new(text, self.mode).count()
    }

    /// Logical index of the character containing code unit `code_unit`.
    ///
    /// Returns `None` if `code_unit` is not inside `text`.
    pub fn char_index_for_code_unit(&self, text: &[u16], code_unit: usize) -> Option<usize> {
        if code_unit >= text.len() {
            return None;
        }
        if !self.contains_cluster_group(text) {
            return Some(code_unit);
        }
        tracing::trace!(code_unit, mode = ?self.mode, "mapping code unit to char index");
        Clusters::new(text, self.mode).position(|span| span.contains(&code_unit))
    }

    /// Code-unit offset where logical character `index` starts.
    ///
    /// Returns `None` if `index` is not less than [`length`](Self::length).
    pub fn code_unit_index_for_char(&self, text: &[u16], index: usize) -> Option<usize> {
        self.boundary(text, index).filter(|&offset| offset < text.len())
    }

    /// The logical character at `index`, or an empty slice when out of range.
    pub fn char_at<'a>(&self, text: &'a [u16], index: usize) -> &'a [u16] {
        self.span(text, index).map_or(&text[..0], |span| &text[span])
    }

    /// Scalar value at the start of logical character `index`.
    ///
    /// For a flag in [`Mode::Visual`] this is the first regional indicator.
    pub fn code_point_at(&self, text: &[u16], index: usize) -> Option<u32> {
        let offset = self.code_unit_index_for_char(text, index)?;
        scalar::decode_at(text, offset).map(|(value, _)| value)
    }

    /// Logical index of the first occurrence of `needle` at or after logical index `start`.
    ///
    /// `start` past the end is clamped to the end. An empty needle matches at `start`.
    pub fn index_of(&self, text: &[u16], needle: &[u16], start: usize) -> Option<usize> {
        let from = self.boundary(text, start).unwrap_or(text.len());
        let found = find_units(text, needle, from)?;
        Some(self.logical_position(text, found))
    }

    /// Logical index of the last occurrence of `needle` starting at or before logical index
    /// `start` (default: the end of `text`).
    pub fn last_index_of(
        &self,
        text: &[u16],
        needle: &[u16],
        start: Option<usize>,
    ) -> Option<usize> {
        let from = start
            .and_then(|index| self.boundary(text, index))
            .unwrap_or(text.len());
        let found = rfind_units(text, needle, from)?;
        Some(self.logical_position(text, found))
    }

    /// Logical characters in `[start, end)`; `end` defaults to the end of `text`.
    ///
    /// Bounds are clamped. An empty slice is returned when `start` is past the end or
    /// `end <= start`.
    pub fn slice<'a>(&self, text: &'a [u16], start: usize, end: Option<usize>) -> &'a [u16] {
        let Some(from) = self.boundary(text, start) else {
            return &text[..0];
        };
        let to = end
            .and_then(|end| self.boundary(text, end))
            .unwrap_or(text.len());
        if to <= from {
            return &text[..0];
        }
        &text[from..to]
    }

    /// Up to `len` logical characters starting at `start`; `len` defaults to the rest.
    ///
    /// A negative `start` counts back from the logical end. If it still falls before the
    /// beginning, or `start` is past the end, the result is empty.
    pub fn substr<'a>(&self, text: &'a [u16], start: isize, len: Option<usize>) -> &'a [u16] {
        let total = self.length(text);
        let start = if start < 0 {
            match total.checked_sub(start.unsigned_abs()) {
                Some(start) => start,
                None => return &text[..0],
            }
        } else {
            start.unsigned_abs()
        };
        if start >= total {
            return &text[..0];
        }
        let end = len.map(|len| start.saturating_add(len));
        self.slice(text, start, end)
    }

    /// Scalar values of `text`, in order.
    ///
    /// Decoding is per scalar value in every mode, so a flag yields two values.
    pub fn to_scalar_values(&self, text: &[u16]) -> Vec<u32> {
        scalar::to_scalar_values(text)
    }

    /// Split `text` into its logical characters.
    pub fn to_char_array<'a>(&self, text: &'a [u16]) -> Vec<&'a [u16]> {
        self.chars(text).collect()
    }

    /// Iterate the logical characters of `text`.
    pub fn chars<'a>(&self, text: &'a [u16]) -> Chars<'a> {
        Chars {
            text,
            clusters: Clusters::new(text, self.mode),
        }
    }

    /// Code-unit offset of the boundary before logical character `index`.
    ///
    /// `index == length` maps to `text.len()`; anything larger is `None`.
    fn boundary(&self, text: &[u16], index: usize) -> Option<usize> {
        if !self.contains_cluster_group(text) {
            return (index <= text.len()).then_some(index);
        }
        let mut clusters = Clusters::new(text, self.mode);
        for _ in 0..index {
            clusters.next()?;
        }
        Some(clusters.offset())
    }

    fn span(&self, text: &[u16], index: usize) -> Option<Range<usize>> {
        if !self.contains_cluster_group(text) {
            return (index < text.len()).then(|| index..index + 1);
        }
        Clusters::new(text, self.mode).nth(index)
    }

    /// Logical index for a native search hit; a hit at `text.len()` maps to the length.
    fn logical_position(&self, text: &[u16], code_unit: usize) -> usize {
        self.char_index_for_code_unit(text, code_unit)
            .unwrap_or_else(|| self.length(text))
    }
}

/// Iterator over the logical characters of a UTF-16 slice.
///
/// Created by [`CodePointIndexer::chars`].
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    text: &'a [u16],
    clusters: Clusters<'a>,
}

impl<'a> Iterator for Chars<'a> {
    type Item = &'a [u16];

    fn next(&mut self) -> Option<Self::Item> {
        self.clusters.next().map(|span| &self.text[span])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.clusters.size_hint()
    }
}

impl FusedIterator for Chars<'_> {}

fn find_units(haystack: &[u16], needle: &[u16], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(from);
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

fn rfind_units(haystack: &[u16], needle: &[u16], from: usize) -> Option<usize> {
    let last_start = haystack.len().checked_sub(needle.len())?.min(from);
    (0..=last_start)
        .rev()
        .find(|&pos| &haystack[pos..pos + needle.len()] == needle)
}
