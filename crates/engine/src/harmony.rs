//! Color harmony between the primary colors of an outfit.
//!
//! Each color family has a profile listing the families it complements, goes
//! with, or clashes with. The relation is directional: a pair is always looked
//! up through the first color's profile, and `white -> black` scores
//! differently from `black -> white`.

use crate::types::mean_or;
use crate::wardrobe::{ClothingItem, ColorFamily};

pub const IDENTICAL_SCORE: f64 = 1.0;
pub const COMPLEMENTARY_SCORE: f64 = 0.95;
pub const COMPATIBLE_SCORE: f64 = 0.8;
pub const AVOID_SCORE: f64 = 0.2;
/// Profiled color with no listed relationship to the other color.
pub const NEUTRAL_SCORE: f64 = 0.6;
/// First color has no profile at all.
pub const UNPROFILED_SCORE: f64 = 0.5;

/// Relationships of one color family to the others.
#[derive(Debug)]
pub struct HarmonyProfile {
    pub complementary: &'static [ColorFamily],
    pub compatible: &'static [ColorFamily],
    pub avoid: &'static [ColorFamily],
}

use ColorFamily::*;

static BLACK: HarmonyProfile = HarmonyProfile {
    complementary: &[White, Red, Yellow],
    compatible: &[Gray, Pink, Purple, Beige, Blue],
    avoid: &[Navy, Brown],
};

static WHITE: HarmonyProfile = HarmonyProfile {
    complementary: &[Navy, Red],
    compatible: &[Black, Gray, Blue, Beige, Green, Pink],
    avoid: &[],
};

static GRAY: HarmonyProfile = HarmonyProfile {
    complementary: &[Pink, Yellow],
    compatible: &[Black, White, Navy, Blue, Purple],
    avoid: &[Brown, Beige],
};

static NAVY: HarmonyProfile = HarmonyProfile {
    complementary: &[White, Beige],
    compatible: &[Gray, Red, Pink, Blue],
    avoid: &[Black, Brown],
};

static BLUE: HarmonyProfile = HarmonyProfile {
    complementary: &[Orange, Beige],
    compatible: &[White, Gray, Navy, Brown],
    avoid: &[Green, Purple],
};

static RED: HarmonyProfile = HarmonyProfile {
    complementary: &[White, Black],
    compatible: &[Navy, Gray, Beige, Blue],
    avoid: &[Pink, Orange, Purple],
};

static GREEN: HarmonyProfile = HarmonyProfile {
    complementary: &[Brown, Beige],
    compatible: &[White, Navy, Gray, Yellow],
    avoid: &[Red, Pink],
};

static YELLOW: HarmonyProfile = HarmonyProfile {
    complementary: &[Purple, Navy],
    compatible: &[White, Gray, Blue, Black],
    avoid: &[Orange],
};

static ORANGE: HarmonyProfile = HarmonyProfile {
    complementary: &[Blue, Navy],
    compatible: &[White, Brown, Beige],
    avoid: &[Red, Pink, Purple],
};

static PURPLE: HarmonyProfile = HarmonyProfile {
    complementary: &[Yellow, Green],
    compatible: &[Gray, White, Black, Pink],
    avoid: &[Orange, Red, Brown],
};

static PINK: HarmonyProfile = HarmonyProfile {
    complementary: &[Gray, Navy],
    compatible: &[White, Black, Beige, Purple],
    avoid: &[Red, Orange],
};

static BROWN: HarmonyProfile = HarmonyProfile {
    complementary: &[Blue, Beige],
    compatible: &[White, Green, Orange],
    avoid: &[Black, Gray, Navy],
};

static BEIGE: HarmonyProfile = HarmonyProfile {
    complementary: &[Navy, Brown],
    compatible: &[White, Black, Blue, Green, Red],
    avoid: &[Gray],
};

/// Harmony profile for `color`; `multi` has none.
pub fn harmony_profile(color: ColorFamily) -> Option<&'static HarmonyProfile> {
    match color {
        Black => Some(&BLACK),
        White => Some(&WHITE),
        Gray => Some(&GRAY),
        Navy => Some(&NAVY),
        Blue => Some(&BLUE),
        Red => Some(&RED),
        Green => Some(&GREEN),
        Yellow => Some(&YELLOW),
        Orange => Some(&ORANGE),
        Purple => Some(&PURPLE),
        Pink => Some(&PINK),
        Brown => Some(&BROWN),
        Beige => Some(&BEIGE),
        Multi => None,
    }
}

/// Score how well `b` goes with `a`, using `a`'s profile.
pub fn pair_harmony(a: ColorFamily, b: ColorFamily) -> f64 {
    if a == b {
        return IDENTICAL_SCORE;
    }

    let Some(profile) = harmony_profile(a) else {
        return UNPROFILED_SCORE;
    };

    if profile.complementary.contains(&b) {
        COMPLEMENTARY_SCORE
    } else if profile.compatible.contains(&b) {
        COMPATIBLE_SCORE
    } else if profile.avoid.contains(&b) {
        AVOID_SCORE
    } else {
        NEUTRAL_SCORE
    }
}

/// Mean pairwise harmony over every unordered pair of primary colors.
///
/// Pairs are taken as `(items[i], items[j])` with `i < j`, so item order
/// decides which profile is consulted. Fewer than two items never clash.
pub fn outfit_harmony(items: &[&ClothingItem]) -> f64 {
    if items.len() < 2 {
        return IDENTICAL_SCORE;
    }

    let colors: Vec<ColorFamily> = items.iter().map(|i| i.primary_color).collect();
    let pairs = colors
        .iter()
        .enumerate()
        .flat_map(|(i, a)| colors[i + 1..].iter().map(move |b| pair_harmony(*a, *b)));

    mean_or(pairs, IDENTICAL_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::item;
    use crate::wardrobe::{Category, ItemStyle};

    #[test]
    fn test_identical_colors() {
        assert_eq!(pair_harmony(Red, Red), 1.0);
        assert_eq!(pair_harmony(Multi, Multi), 1.0);
    }

    #[test]
    fn test_black_white_is_directional() {
        // white is one of black's complements
        assert_eq!(pair_harmony(Black, White), COMPLEMENTARY_SCORE);
        // black is only compatible from white's side
        assert_eq!(pair_harmony(White, Black), COMPATIBLE_SCORE);
    }

    #[test]
    fn test_avoid_and_neutral() {
        assert_eq!(pair_harmony(Navy, Black), AVOID_SCORE);
        // orange is not mentioned in black's profile
        assert_eq!(pair_harmony(Black, Orange), NEUTRAL_SCORE);
    }

    #[test]
    fn test_multi_has_no_profile() {
        assert!(harmony_profile(Multi).is_none());
        assert_eq!(pair_harmony(Multi, Black), UNPROFILED_SCORE);
        // multi is just unlisted from a profiled color
        assert_eq!(pair_harmony(Black, Multi), NEUTRAL_SCORE);
    }

    #[test]
    fn test_every_profiled_color_has_a_profile() {
        for color in ColorFamily::ALL {
            assert_eq!(harmony_profile(color).is_some(), color != Multi);
        }
    }

    #[test]
    fn test_profiles_do_not_list_themselves() {
        for color in ColorFamily::ALL {
            if let Some(p) = harmony_profile(color) {
                assert!(!p.complementary.contains(&color));
                assert!(!p.compatible.contains(&color));
                assert!(!p.avoid.contains(&color));
            }
        }
    }

    #[test]
    fn test_single_item_outfit() {
        let shirt = item("t1", Category::Tops, White, ItemStyle::Casual);
        assert_eq!(outfit_harmony(&[&shirt]), 1.0);
        assert_eq!(outfit_harmony(&[]), 1.0);
    }

    #[test]
    fn test_outfit_harmony_is_mean_of_pairs() {
        let top = item("t1", Category::Tops, White, ItemStyle::Business);
        let bottom = item("b1", Category::Bottoms, Navy, ItemStyle::Business);
        let shoes = item("s1", Category::Shoes, Black, ItemStyle::Casual);

        // white->navy 0.95, white->black 0.8, navy->black 0.2
        let expected = (0.95 + 0.8 + 0.2) / 3.0;
        let score = outfit_harmony(&[&top, &bottom, &shoes]);
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_outfit_harmony_depends_on_order() {
        let white = item("a", Category::Tops, White, ItemStyle::Casual);
        let black = item("b", Category::Bottoms, Black, ItemStyle::Casual);

        assert_eq!(outfit_harmony(&[&white, &black]), COMPATIBLE_SCORE);
        assert_eq!(outfit_harmony(&[&black, &white]), COMPLEMENTARY_SCORE);
    }
}
