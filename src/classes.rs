//! Suffix Classifier (Prefix Doubling)
//!
//! **Layered Build**: layer `k` assigns every position the equivalence class
//! of its length-`2^k` substring, truncated at the end of the text.
//! Layer `k + 1` is derived from layer `k` alone by ranking the pair
//! `(L_k[p], L_k[p + 2^k])`, so layers are produced strictly in order.
//!
//! **Truncation-aware keys**: a position whose second half would start at or
//! past the end gets the empty key `0`, real classes are shifted to `1..`.
//! No cyclic wraparound is ever used, which makes class ids inside every
//! layer a valid lexicographic order of the truncated substrings.
//!
//! Space: one `Vec<usize>` of length N per layer, `⌈log2 N⌉ + 1` layers.
//! All sort buffers are allocated once per build and reused by every step.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

/// Bucket count for the initial single-symbol sort (u8 alphabet)
const ALPHABET: usize = 256;

/// Retained equivalence-class layers `[L_0 .. L_K]` for one text.
#[derive(Clone, Debug)]
pub struct ClassLayers {
    /// `layers[k][p]`: class of the length-2^k substring starting at `p`
    layers: Vec<Vec<usize>>,
    /// Number of distinct classes in each layer
    counts: Vec<usize>,
    /// Length of the text
    len: usize,
}

/// Sort buffers shared by every doubling step of one build.
struct Scratch {
    /// Positions ordered by the current layer's class
    order: Vec<usize>,
    /// Positions ordered by the second half of the pair key
    by_second: Vec<usize>,
    /// Counting-sort table, sized for the worst case of N classes
    buckets: Vec<usize>,
}

impl Scratch {
    fn new(n: usize) -> Self {
        Self {
            order: vec![0; n],
            by_second: vec![0; n],
            buckets: vec![0; n],
        }
    }
}

/// Number of doubling steps for a text of length `n` (`⌈log2 n⌉`, 0 for n ≤ 1)
#[inline]
pub fn depth_for(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

impl ClassLayers {
    /// Classify all substrings of lengths 1, 2, 4, … of `text`.
    ///
    /// - Empty text: no layers.
    /// - Single symbol: one layer `[0]`.
    /// - Otherwise `⌈log2 N⌉ + 1` layers.
    ///
    /// # Complexity
    /// - Time: O(N log N) (one O(N + C) counting sort per layer)
    /// - Space: O(N log N) retained, O(N) scratch
    pub fn classify(text: &[u8]) -> Self {
        let n = text.len();

        if n == 0 {
            return Self {
                layers: Vec::new(),
                counts: Vec::new(),
                len: 0,
            };
        }
        if n == 1 {
            return Self {
                layers: vec![vec![0]],
                counts: vec![1],
                len: 1,
            };
        }

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("classify", len = n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let depth = depth_for(n);
        let mut layers = Vec::with_capacity(depth + 1);
        let mut counts = Vec::with_capacity(depth + 1);
        let mut scratch = Scratch::new(n);

        let (first, mut classes) = initial_layer(text, &mut scratch.order);
        layers.push(first);
        counts.push(classes);

        let mut half = 1usize;
        while half < n {
            #[cfg(feature = "tracing")]
            let step_span = tracing::trace_span!("doubling_step", len = half, classes);
            #[cfg(feature = "tracing")]
            let _step = step_span.enter();

            let next = {
                let prev = &layers[layers.len() - 1];
                let (next, next_classes) = double(prev, half, classes, &mut scratch);
                classes = next_classes;
                next
            };
            layers.push(next);
            counts.push(classes);

            half <<= 1;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(layers = layers.len(), classes, "classification finished");

        Self {
            layers,
            counts,
            len: n,
        }
    }

    /// All layers, index `k` covering substrings of length `2^k`
    #[inline]
    pub fn layers(&self) -> &[Vec<usize>] {
        &self.layers
    }

    /// Layer `k`, if it exists
    #[inline]
    pub fn layer(&self, k: usize) -> Option<&[usize]> {
        self.layers.get(k).map(|l| l.as_slice())
    }

    /// Highest layer. Its classes are the ranks of the full suffixes.
    #[inline]
    pub fn top(&self) -> &[usize] {
        self.layers.last().map(|l| l.as_slice()).unwrap_or(&[])
    }

    /// Number of distinct classes in layer `k`
    #[inline]
    pub fn class_count(&self, k: usize) -> Option<usize> {
        self.counts.get(k).copied()
    }

    #[inline]
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Heap bytes held by the layers
    pub fn size_bytes(&self) -> usize {
        let per_layer = self.len * core::mem::size_of::<usize>();
        per_layer * self.layers.len() + self.counts.len() * core::mem::size_of::<usize>()
    }
}

/// Layer 0: counting sort by symbol, then number the runs of equal symbols.
/// Leaves `order` sorted by class. Returns the layer and its class count.
fn initial_layer(text: &[u8], order: &mut [usize]) -> (Vec<usize>, usize) {
    let n = text.len();
    let mut table = [0usize; ALPHABET];

    for &c in text {
        table[c as usize] += 1;
    }

    // Exclusive cumulative sum: table[c] = first slot of symbol c
    let mut sum = 0;
    for slot in table.iter_mut() {
        let count = *slot;
        *slot = sum;
        sum += count;
    }

    for (p, &c) in text.iter().enumerate() {
        order[table[c as usize]] = p;
        table[c as usize] += 1;
    }

    let mut layer = vec![0usize; n];
    let mut classes = 1;
    for w in 1..n {
        if text[order[w]] != text[order[w - 1]] {
            classes += 1;
        }
        layer[order[w]] = classes - 1;
    }

    (layer, classes)
}

/// One doubling step: classes of length `2 * half` from classes of length `half`.
///
/// `scratch.order` must hold positions sorted by `prev` on entry and holds
/// positions sorted by the returned layer on exit.
fn double(prev: &[usize], half: usize, classes: usize, scratch: &mut Scratch) -> (Vec<usize>, usize) {
    let n = prev.len();
    let Scratch {
        order,
        by_second,
        buckets,
    } = scratch;

    let second = |p: usize| if p + half < n { prev[p + half] + 1 } else { 0 };

    // 1. Order by second key: empty tails first, then by the class of p + half
    let mut w = 0;
    for p in n - half..n {
        by_second[w] = p;
        w += 1;
    }
    for &q in order.iter() {
        if q >= half {
            by_second[w] = q - half;
            w += 1;
        }
    }

    // 2. Stable counting sort by first key
    let buckets = &mut buckets[..classes];
    buckets.fill(0);
    for &p in by_second.iter() {
        buckets[prev[p]] += 1;
    }
    let mut sum = 0;
    for slot in buckets.iter_mut() {
        let count = *slot;
        *slot = sum;
        sum += count;
    }
    for &p in by_second.iter() {
        let c = prev[p];
        order[buckets[c]] = p;
        buckets[c] += 1;
    }

    // 3. Renumber: new class whenever the pair changes along the sorted order
    let mut next = vec![0usize; n];
    let mut count = 1;
    let mut last = (prev[order[0]], second(order[0]));
    for &p in order.iter().skip(1) {
        let key = (prev[p], second(p));
        if key != last {
            count += 1;
            last = key;
        }
        next[p] = count - 1;
    }

    (next, count)
}
