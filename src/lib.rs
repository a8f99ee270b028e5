//! # lcp-index
//!
//! **Longest common prefix of any two suffixes in O(log N)**
//!
//! > "Classify once, lift forever. LCP(i, j) is a walk down ⌈log2 N⌉ layers."
//!
//! ## Architecture
//!
//! - **Class Layers**: prefix doubling with counting sorts, every layer retained
//! - **Binary Lifting**: highest-bit-first matching walk over the layers
//! - **Ranked Alternative**: suffix array + range minimum over adjacent LCP
//!
//! ## Performance
//!
//! | Operation | Time | Space |
//! |-----------|------|-------|
//! | Build (`LcpIndex`) | O(N log N) | O(N log N) |
//! | Get (`LcpIndex`) | **O(log N)** | O(1) |
//! | Build (`RankedLcpIndex`) | O(N log N) | O(N) |
//! | Get (`RankedLcpIndex`) | O(log N) | O(1) |
//!
//! Both indexes are immutable after construction and can be shared across
//! threads for read-only queries without synchronization.
//!
//! ## Example
//!
//! ```
//! use lcp_index::{LcpError, LcpIndex};
//!
//! let index = LcpIndex::build(b"abacaba");
//!
//! assert_eq!(index.get(0, 4), Ok(3)); // "aba"
//! assert_eq!(index.get(1, 5), Ok(2)); // "ba"
//! assert_eq!(index.get(0, 0), Ok(7)); // whole text
//!
//! // Out-of-range is an error, never a sentinel
//! assert_eq!(index.get(0, 7), Err(LcpError::OutOfRange { index: 7, len: 7 }));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod classes;
pub mod error;
pub mod lcp;
pub mod ranked;
pub mod rmq;
pub mod suffix_array;

pub use classes::ClassLayers;
pub use error::LcpError;
pub use lcp::{LcpIndex, LongestCommonPrefix};
pub use ranked::RankedLcpIndex;
pub use rmq::RangeMin;
pub use suffix_array::SuffixArray;

/// Version
pub const VERSION: &str = "0.1.0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lcp() {
        let index = LcpIndex::build(b"abacaba");

        assert_eq!(index.get(0, 1), Ok(0));
        assert_eq!(index.get(0, 2), Ok(1));
        assert_eq!(index.get(0, 4), Ok(3));
        assert_eq!(index.get(1, 5), Ok(2));
    }

    #[test]
    fn test_empty_text() {
        let index = LcpIndex::build(b"");
        assert_eq!(
            index.get(0, 0),
            Err(LcpError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_strategies_interchangeable() {
        fn check(name: &str, index: &dyn LongestCommonPrefix, text: &[u8]) {
            assert_eq!(index.len(), text.len(), "{}", name);
            // "the " at 0 and 31
            assert_eq!(index.get(0, 31), Ok(4), "{}", name);
            assert!(index.get(text.len(), 0).is_err(), "{}", name);
        }

        let text = b"the quick brown fox jumps over the lazy dog ";
        check("lifting", &LcpIndex::build(text), text);
        check("ranked", &RankedLcpIndex::build(text), text);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_concurrent_queries() {
        use alloc::vec::Vec;

        let text: Vec<u8> = b"abcab".iter().cycle().take(500).copied().collect();
        let index = LcpIndex::build(&text);
        let len = text.len();

        std::thread::scope(|s| {
            for t in 0..4 {
                let index = &index;
                s.spawn(move || {
                    for i in (t..100).step_by(4) {
                        // Period 5: suffixes 5 apart share everything but the tail
                        assert_eq!(index.get(i, i + 5), Ok(len - i - 5));
                    }
                });
            }
        });
    }
}
