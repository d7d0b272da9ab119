//! Hash collections used across Rendery.
//!
//! Re-export of the AHash-backed map, which are noticeably faster than
//! the SipHash defaults for the small integer keys used by the glyph cache.

pub use ahash::AHashMap as HashMap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert((7u16, 16.0f32.to_bits()), "glyph");
        assert_eq!(map.get(&(7u16, 16.0f32.to_bits())), Some(&"glyph"));
        assert_eq!(map.get(&(7u16, 17.0f32.to_bits())), None);
    }
}
