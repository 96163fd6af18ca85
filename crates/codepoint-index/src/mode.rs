//! Indexing modes and the cluster patterns they group.

/// First code point of the regional indicator block (`🇦`).
pub const REGIONAL_INDICATOR_FIRST: u32 = 0x1F1E6;
/// Last code point of the regional indicator block (`🇿`).
pub const REGIONAL_INDICATOR_LAST: u32 = 0x1F1FF;

/// A multi-unit pattern the scanner may group into one logical character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClusterPattern {
    /// Two regional indicator symbols (a flag), 4 code units.
    RegionalIndicatorPair,
    /// A high surrogate followed by a low surrogate, 2 code units.
    SurrogatePair,
}

impl ClusterPattern {
    /// Number of code units the pattern spans.
    pub fn width(self) -> usize {
        match self {
            Self::RegionalIndicatorPair => 4,
            Self::SurrogatePair => 2,
        }
    }

    /// Returns `true` if `units` starts with this pattern.
    pub fn matches(self, units: &[u16]) -> bool {
        match self {
            Self::SurrogatePair => match units {
                [hi, lo, ..] => is_high_surrogate(*hi) && is_low_surrogate(*lo),
                _ => false,
            },
            Self::RegionalIndicatorPair => match units {
                [a, b, c, d, ..] => {
                    is_regional_indicator(*a, *b) && is_regional_indicator(*c, *d)
                }
                _ => false,
            },
        }
    }
}

/// Which clusters count as a single logical character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// One logical character per Unicode scalar value.
    #[default]
    Standard,
    /// Like [`Mode::Standard`], but a pair of regional indicators (a flag) is one character.
    Visual,
}

impl Mode {
    /// Patterns tried at each position, longest first.
    ///
    /// A single code unit is the implicit fallback when none of them match.
    pub fn cluster_patterns(self) -> &'static [ClusterPattern] {
        match self {
            Self::Standard => &[ClusterPattern::SurrogatePair],
            Self::Visual => &[
                ClusterPattern::RegionalIndicatorPair,
                ClusterPattern::SurrogatePair,
            ],
        }
    }
}

/// Returns `true` for a UTF-16 high (leading) surrogate.
pub fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

/// Returns `true` for a UTF-16 low (trailing) surrogate.
pub fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Combine a surrogate pair into its scalar value.
///
/// The caller guarantees `hi`/`lo` are a high and a low surrogate.
pub fn combine_surrogates(hi: u16, lo: u16) -> u32 {
    0x10000 + ((u32::from(hi) - 0xD800) << 10) + (u32::from(lo) - 0xDC00)
}

fn is_regional_indicator(hi: u16, lo: u16) -> bool {
    is_high_surrogate(hi)
        && is_low_surrogate(lo)
        && (REGIONAL_INDICATOR_FIRST..=REGIONAL_INDICATOR_LAST)
            .contains(&combine_surrogates(hi, lo))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_surrogate_ranges() {
        assert!(is_high_surrogate(0xD800));
        assert!(is_high_surrogate(0xDBFF));
        assert!(!is_high_surrogate(0xDC00));
        assert!(is_low_surrogate(0xDC00));
        assert!(is_low_surrogate(0xDFFF));
        assert!(!is_low_surrogate(0xE000));
    }

    #[test]
    fn test_combine_surrogates() {
        let units = utf16("𤔣");
        assert_eq!(combine_surrogates(units[0], units[1]), 0x24523);
    }

    #[test]
    fn test_regional_indicator_pair_matches_flag_only() {
        let flag = utf16("🇫🇷");
        assert!(ClusterPattern::RegionalIndicatorPair.matches(&flag));
        assert!(!ClusterPattern::RegionalIndicatorPair.matches(&flag[..2]));

        // Two astral characters that are not regional indicators.
        let other = utf16("𤔣𤔤");
        assert!(!ClusterPattern::RegionalIndicatorPair.matches(&other));
        assert!(ClusterPattern::SurrogatePair.matches(&other));
    }

    #[test]
    fn test_visual_tries_longest_first() {
        let widths: Vec<usize> = Mode::Visual
            .cluster_patterns()
            .iter()
            .map(|p| p.width())
            .collect();
        assert_eq!(widths, vec![4, 2]);
        assert_eq!(Mode::default(), Mode::Standard);
    }
}
