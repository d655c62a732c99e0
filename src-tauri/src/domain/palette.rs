//! Stable per-name color selection
//!
//! Colors are picked by hashing the record name with 64-bit FNV-1a over its
//! UTF-8 bytes. The hash is fixed so a given name keeps its color across
//! runs, platforms and releases.

use serde::{Deserialize, Serialize};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Fixed 12-entry tint palette, in index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Red,
    Orange,
    Yellow,
    Green,
    Mint,
    Teal,
    Cyan,
    Blue,
    Indigo,
    Purple,
    Pink,
    Brown,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 12] = [
        PaletteColor::Red,
        PaletteColor::Orange,
        PaletteColor::Yellow,
        PaletteColor::Green,
        PaletteColor::Mint,
        PaletteColor::Teal,
        PaletteColor::Cyan,
        PaletteColor::Blue,
        PaletteColor::Indigo,
        PaletteColor::Purple,
        PaletteColor::Pink,
        PaletteColor::Brown,
    ];

    /// Pick the palette entry for a name
    pub fn for_name(name: &str) -> Self {
        Self::ALL[palette_index(name)]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// CSS hex value for the frontend (drawn at 20% opacity there)
    pub fn hex(self) -> &'static str {
        match self {
            PaletteColor::Red => "#ff3b30",
            PaletteColor::Orange => "#ff9500",
            PaletteColor::Yellow => "#ffcc00",
            PaletteColor::Green => "#34c759",
            PaletteColor::Mint => "#00c7be",
            PaletteColor::Teal => "#30b0c7",
            PaletteColor::Cyan => "#32ade6",
            PaletteColor::Blue => "#007aff",
            PaletteColor::Indigo => "#5856d6",
            PaletteColor::Purple => "#af52de",
            PaletteColor::Pink => "#ff2d55",
            PaletteColor::Brown => "#a2845e",
        }
    }
}

/// 64-bit FNV-1a hash of the UTF-8 bytes of `s`
pub fn fnv1a_64(s: &str) -> u64 {
    s.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Palette index in `[0, 12)` for a name
pub fn palette_index(name: &str) -> usize {
    (fnv1a_64(name) % PaletteColor::ALL.len() as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_matches_reference_vectors() {
        assert_eq!(fnv1a_64(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a_64("a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fnv1a_64("foobar"), 0x8594_4171_f739_67e8);
    }

    #[test]
    fn palette_index_is_in_range_and_repeatable() {
        for name in ["G8Tab", "IOB-SIT", "", "ünïcode", "SAML PORT - ocpclientgold8sql"] {
            let idx = palette_index(name);
            assert!(idx < 12);
            assert_eq!(idx, palette_index(name));
        }
    }

    #[test]
    fn for_name_agrees_with_index() {
        let color = PaletteColor::for_name("gold8tabsql");
        assert_eq!(color.index(), palette_index("gold8tabsql"));
        assert_eq!(PaletteColor::ALL[color.index()], color);
    }

    #[test]
    fn empty_name_maps_to_fixed_entry() {
        // 0xcbf29ce484222325 % 12 == 5
        assert_eq!(PaletteColor::for_name(""), PaletteColor::Teal);
    }
}
