use lcp_index::{LcpIndex, LongestCommonPrefix, RankedLcpIndex, SuffixArray};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_text(rng: &mut StdRng, len: usize, alphabet: &[u8]) -> Vec<u8> {
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

fn fib_str(a: u8, b: u8, limit: usize) -> Vec<u8> {
    let mut x = vec![a];
    let mut y = vec![b];
    while y.len() < limit {
        let mut next = y.clone();
        next.extend_from_slice(&x);
        x = y;
        y = next;
    }
    y.truncate(limit);
    y
}

fn naive_lcp(s: &[u8], i: usize, j: usize) -> usize {
    s[i..].iter().zip(&s[j..]).take_while(|(a, b)| a == b).count()
}

fn assert_every_pair(s: &[u8]) {
    let lifting = LcpIndex::build(s);
    let ranked = RankedLcpIndex::build(s);
    let strategies: [&dyn LongestCommonPrefix; 2] = [&lifting, &ranked];

    for index in strategies {
        assert_eq!(index.len(), s.len());
        for i in 0..s.len() {
            for j in 0..s.len() {
                assert_eq!(index.get(i, j), Ok(naive_lcp(s, i, j)), "({}, {})", i, j);
            }
        }
        assert!(index.get(s.len(), 0).is_err());
    }
}

#[test]
fn random_small_alphabets() {
    let mut rng = StdRng::seed_from_u64(0x1cb);
    for alphabet in [&b"a"[..], &b"ab"[..], &b"acgt"[..], &b"abcdefghijklmnopqrstuvwxyz"[..]] {
        for _ in 0..20 {
            let len = rng.random_range(0..80);
            let s = random_text(&mut rng, len, alphabet);
            assert_every_pair(&s);
        }
    }
}

#[test]
fn fibonacci_strings() {
    // Highly repetitive: long LCPs at every scale
    for limit in [1, 2, 3, 5, 8, 13, 64, 100, 233] {
        assert_every_pair(&fib_str(b'a', b'b', limit));
    }
}

#[test]
fn power_of_two_boundaries() {
    for len in [15, 16, 17, 31, 32, 33, 64, 65] {
        assert_every_pair(&vec![b'x'; len]);
        let periodic: Vec<u8> = (0..len).map(|i| b"ab"[i % 2]).collect();
        assert_every_pair(&periodic);
    }
}

#[test]
fn large_random_sampled_pairs() {
    let mut rng = StdRng::seed_from_u64(7);
    let s = random_text(&mut rng, 20_000, b"ab");
    let lifting = LcpIndex::build(&s);
    let ranked = RankedLcpIndex::build(&s);

    for _ in 0..2_000 {
        let i = rng.random_range(0..s.len());
        let j = rng.random_range(0..s.len());
        let expected = Ok(naive_lcp(&s, i, j));
        assert_eq!(lifting.get(i, j), expected);
        assert_eq!(ranked.get(i, j), expected);
    }
}

#[test]
fn suffix_array_is_sorted() {
    let mut rng = StdRng::seed_from_u64(99);
    let s = random_text(&mut rng, 3_000, b"acgt");
    let sa = SuffixArray::build(&s);

    for w in sa.as_slice().windows(2) {
        assert!(s[w[0]..] < s[w[1]..]);
    }
    for (r, w) in sa.as_slice().windows(2).enumerate() {
        assert_eq!(sa.adjacent_lcp()[r], naive_lcp(&s, w[0], w[1]));
    }
}
