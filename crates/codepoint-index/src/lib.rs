#![warn(missing_docs)]
//! Codepoint Index - logical-character addressing for UTF-16 text
//!
//! # Overview
//!
//! Hosts such as JavaScript engines, Java and many IPC protocols store strings as UTF-16
//! code units and index them by code unit. A character above U+FFFF then occupies two
//! indices, and a flag emoji four. `codepoint-index` lets callers address text by
//! **logical character** instead, without reasoning about surrogate pairs themselves.
//!
//! # Modes
//!
//! - [`Mode::Standard`]: one logical character per Unicode scalar value (surrogate pairs are
//!   grouped).
//! - [`Mode::Visual`]: additionally groups a pair of regional indicators (a flag such as
//!   `🇫🇷`) into one logical character.
//!
//! The mode is chosen when constructing a [`CodePointIndexer`]; both modes share the same API.
//!
//! # Quick Start
//!
//! ```rust
//! use codepoint_index::{CodePointIndexer, decode_lossy, encode};
//!
//! let text = encode("𤔣𤔤𤔥𤔦");
//! let indexer = CodePointIndexer::standard();
//!
//! assert_eq!(text.len(), 8);
//! assert_eq!(indexer.length(&text), 4);
//! assert_eq!(indexer.char_at(&text, 0), &encode("𤔣")[..]);
//! assert_eq!(indexer.index_of(&text, &encode("𤔥"), 0), Some(2));
//!
//! let flags = encode("🇸🇴🇫🇷");
//! assert_eq!(CodePointIndexer::visual().length(&flags), 2);
//! assert_eq!(indexer.length(&flags), 4);
//!
//! let tail = indexer.substr(&text, -2, None);
//! assert_eq!(decode_lossy(tail), "𤔥𤔦");
//! ```
//!
//! # Module Description
//!
//! - [`mode`] - indexing modes and the cluster patterns they group
//! - [`scanner`] - splits code units into logical characters
//! - [`indexer`] - offset conversion, substring and search by logical index
//! - [`scalar`] - scalar-value and big-endian byte-sequence codecs
//! - [`search`] - regex and plain-text search reporting logical ranges
//!
//! # Out-of-range Behavior
//!
//! No operation panics on an out-of-range index. Index results are `None`, substring
//! results are empty slices.

pub mod indexer;
pub mod mode;
pub mod scalar;
pub mod scanner;
pub mod search;

pub use indexer::{Chars, CodePointIndexer};
pub use mode::{ClusterPattern, Mode};
pub use scalar::{
    from_byte_sequence, from_scalar_value, from_scalar_values, to_byte_sequence,
    to_scalar_values,
};
pub use scanner::Clusters;
pub use search::{SearchError, SearchMatch, SearchOptions};

/// Encode a UTF-8 string as UTF-16 code units.
pub fn encode(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Decode UTF-16 code units, replacing unpaired surrogates with U+FFFD.
pub fn decode_lossy(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}
