//! LCP Query Example
//!
//! Builds both index strategies over one text and answers suffix queries.
//!
//! ```bash
//! cargo run --example lcp_queries
//! ```

use lcp_index::{LcpIndex, LongestCommonPrefix, RankedLcpIndex};

fn show(name: &str, index: &dyn LongestCommonPrefix, text: &[u8], queries: &[(usize, usize)]) {
    println!("--- {} ---\n", name);
    for &(i, j) in queries {
        match index.get(i, j) {
            Ok(len) => println!(
                "  lcp({:2}, {:2}) = {}  {:?}",
                i,
                j,
                len,
                String::from_utf8_lossy(&text[i..i + len])
            ),
            Err(e) => println!("  lcp({:2}, {:2}) -> error: {}", i, j, e),
        }
    }
    println!();
}

fn main() {
    println!("=== lcp-index Demo ===\n");

    let text = b"abacaba";
    println!("Text ({} bytes): {:?}\n", text.len(), String::from_utf8_lossy(text));

    let queries = [(0, 1), (0, 2), (0, 4), (0, 0), (1, 5), (0, 7)];

    let lifting = LcpIndex::build(text);
    show("binary lifting", &lifting, text, &queries);

    let ranked = RankedLcpIndex::build(text);
    show("suffix array + range min", &ranked, text, &queries);

    println!("--- Suffix order ---\n");
    for &p in ranked.suffix_array().as_slice() {
        println!("  {:2}: {:?}", p, String::from_utf8_lossy(&text[p..]));
    }

    println!("\n  {} class layers, ~{} bytes", lifting.layers().num_layers(), lifting.size_bytes());
}
