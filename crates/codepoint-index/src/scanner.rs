//! Cluster scanner.
//!
//! Splits a UTF-16 code-unit slice into logical characters. At every position the mode's
//! patterns are tried in order (longest first) and the first one that matches wins; when
//! none matches, the single code unit at that position is one logical character. The
//! resulting spans always partition the input.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::mode::{ClusterPattern, Mode};

/// Length in code units of the logical character starting at `pos`.
///
/// Returns 0 only when `pos` is at or past the end of `units`.
pub fn cluster_len_at(units: &[u16], pos: usize, patterns: &[ClusterPattern]) -> usize {
    let Some(rest) = units.get(pos..).filter(|rest| !rest.is_empty()) else {
        return 0;
    };

    patterns
        .iter()
        .find(|pattern| pattern.matches(rest))
        .map_or(1, |pattern| pattern.width())
}

/// Returns `true` if `units` holds at least one multi-unit logical character under `mode`.
///
/// Stops at the first position where one of the mode's patterns matches. When this returns
/// `false`, logical and code-unit offsets are identical.
pub fn contains_cluster_group(units: &[u16], mode: Mode) -> bool {
    let patterns = mode.cluster_patterns();
    (0..units.len()).any(|pos| cluster_len_at(units, pos, patterns) > 1)
}

/// Iterator over the code-unit spans of each logical character.
///
/// A clone continues from the current position. Use [`Clusters::new`] to start over.
#[derive(Debug, Clone)]
pub struct Clusters<'a> {
    units: &'a [u16],
    patterns: &'static [ClusterPattern],
    pos: usize,
}

impl<'a> Clusters<'a> {
    /// Start scanning `units` from the beginning.
    pub fn new(units: &'a [u16], mode: Mode) -> Self {
        Self {
            units,
            patterns: mode.cluster_patterns(),
            pos: 0,
        }
    }

    /// Code-unit offset of the next span to be yielded.
    pub fn offset(&self) -> usize {
        self.pos
    }
}

impl Iterator for Clusters<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = cluster_len_at(self.units, self.pos, self.patterns);
        if len == 0 {
            return None;
        }
        let start = self.pos;
        self.pos += len;
        Some(start..self.pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.units.len().saturating_sub(self.pos);
        (remaining.div_ceil(4), Some(remaining))
    }
}

impl FusedIterator for Clusters<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_ascii_is_one_unit_per_char() {
        let text = utf16("abc");
        let spans: Vec<_> = Clusters::new(&text, Mode::Standard).collect();
        assert_eq!(spans, vec![0..1, 1..2, 2..3]);
        assert!(!contains_cluster_group(&text, Mode::Standard));
        assert!(!contains_cluster_group(&text, Mode::Visual));
    }

    #[test]
    fn test_flags_split_by_mode() {
        let text = utf16("🇸🇴🇫🇷");
        let standard: Vec<_> = Clusters::new(&text, Mode::Standard).collect();
        assert_eq!(standard, vec![0..2, 2..4, 4..6, 6..8]);

        let visual: Vec<_> = Clusters::new(&text, Mode::Visual).collect();
        assert_eq!(visual, vec![0..4, 4..8]);
    }

    #[test]
    fn test_lone_surrogates_are_single_units() {
        // Stray low surrogate, then a high surrogate followed by ASCII.
        let text = vec![0xDC00, 0xD800, u16::from(b'a')];
        let spans: Vec<_> = Clusters::new(&text, Mode::Visual).collect();
        assert_eq!(spans, vec![0..1, 1..2, 2..3]);
        assert!(!contains_cluster_group(&text, Mode::Standard));
    }

    #[test]
    fn test_odd_regional_indicator_leaves_trailing_pair() {
        // Three regional indicators: one flag plus a lone indicator.
        let text = utf16("🇸🇴🇫");
        let visual: Vec<_> = Clusters::new(&text, Mode::Visual).collect();
        assert_eq!(visual, vec![0..4, 4..6]);
    }

    #[test]
    fn test_contains_cluster_group_finds_late_pair() {
        let mut text = utf16(&"a".repeat(64));
        assert!(!contains_cluster_group(&text, Mode::Visual));

        text.extend(utf16("𤔣"));
        assert!(contains_cluster_group(&text, Mode::Standard));
        assert!(contains_cluster_group(&text, Mode::Visual));

        let flag = utf16("🇫🇷");
        assert!(contains_cluster_group(&flag, Mode::Standard));
        assert!(contains_cluster_group(&flag, Mode::Visual));
    }

    #[test]
    fn test_cluster_len_at_end() {
        let text = utf16("a");
        assert_eq!(cluster_len_at(&text, 1, Mode::Standard.cluster_patterns()), 0);
        assert_eq!(cluster_len_at(&text, 5, Mode::Standard.cluster_patterns()), 0);
    }

    #[test]
    fn test_clusters_is_fused() {
        let text = utf16("x");
        let mut it = Clusters::new(&text, Mode::Standard);
        assert_eq!(it.next(), Some(0..1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.offset(), 1);
    }
}
