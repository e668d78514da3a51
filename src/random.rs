//! Seed derivation and the seeded pseudo-random stream.
//!
//! A day key such as `"2024-06-01"` is hashed to a 32-bit seed, which drives a
//! Mulberry32 stream. Both are integer-only so the same key yields the same
//! blob on every platform.

/// Hash a seed string to a 32-bit seed.
///
/// Multiplicative hash over UTF-16 code units (`h = h * 31 + unit`, wrapping),
/// so keys hash identically to the browser build. The empty string hashes to 0.
pub fn hash_seed(s: &str) -> u32 {
    s.encode_utf16()
        .fold(0u32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as u32))
}

/// Deterministic pseudo-random stream (Mulberry32).
///
/// Period is 2^32; the same seed always replays the same sequence.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Stream seeded from a string key via [`hash_seed`].
    pub fn from_key(key: &str) -> Self {
        Self::new(hash_seed(key))
    }

    /// Next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let s = self.state;

        let mut t = (s ^ (s >> 15)).wrapping_mul(1 | s);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;

        (t ^ (t >> 14)) as f64 / 4_294_967_296.0
    }

    /// Uniform index in `0..=max` (inclusive), as used by the Fisher-Yates shuffle.
    pub fn next_index(&mut self, max: usize) -> usize {
        (self.next_f64() * (max as f64 + 1.0)).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_empty_string_is_zero() {
        assert_eq!(hash_seed(""), 0);
    }

    #[test]
    fn test_hash_known_values() {
        assert_eq!(hash_seed("a"), 97);
        assert_eq!(hash_seed("ab"), 3105);
        assert_eq!(hash_seed("hello"), 99_162_322);
        assert_eq!(hash_seed("test"), 3_556_498);
    }

    #[test]
    fn test_hash_wraps_for_date_keys() {
        // Would overflow a signed 32-bit hash
        assert_eq!(hash_seed("2024-01-01"), 3_681_625_664);
        assert_eq!(hash_seed("2024-06-01"), 3_681_774_619);
    }

    #[test]
    fn test_mulberry32_sequence_seed_zero() {
        let mut rng = SeededRandom::new(0);
        assert!((rng.next_f64() - 0.266_429_208_684_712_65).abs() < 1e-15);
        assert!((rng.next_f64() - 0.000_329_745_700_582_861_9).abs() < 1e-15);
        assert!((rng.next_f64() - 0.223_272_027_447_819_7).abs() < 1e-15);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SeededRandom::from_key("2024-06-01");
        let mut b = SeededRandom::from_key("2024-06-01");
        for _ in 0..1000 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn test_values_in_unit_interval() {
        let mut rng = SeededRandom::new(12345);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "value {} out of range", v);
        }
    }

    #[test]
    fn test_next_index_bounds() {
        let mut rng = SeededRandom::new(7);
        for max in 1..256 {
            assert!(rng.next_index(max) <= max);
        }
    }
}
