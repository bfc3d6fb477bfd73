//! Circle color palette and selection policy.
//!
//! The circle behind the logo is filled with one of the named palette
//! colors or an arbitrary `#rrggbb` value. Color selection also decides
//! which logo variant goes on top: a pure white circle gets the *color*
//! logo, every other fill gets the *white* logo, so the logo keeps
//! contrast against its backdrop.

use crate::{CoreError, Result};
use rand::Rng;

/// An 8-bit RGB triple.
pub type Rgb = [u8; 3];

/// Pure white, the pivot of the logo contrast-swap rule.
pub const WHITE: Rgb = [255, 255, 255];

/// Named palette colors, in suffix iteration order.
pub const PALETTE: &[(&str, Rgb)] = &[
    ("white", WHITE),
    ("black", [0, 0, 0]),
    ("magenta", [236, 0, 140]),
    ("orange", [244, 123, 32]),
    ("green", [122, 193, 67]),
    ("cyan", [0, 174, 239]),
    ("purple", [46, 49, 146]),
];

/// Which of the two logo assets to paste over a circle fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoKind {
    /// The full-color logo (used on white circles).
    Color,
    /// The white logo (used on every non-white circle).
    White,
}

/// Returns the logo variant to use for a given circle fill color.
///
/// The rule compares the RGB triple, not the palette name, so `#ffffff`
/// passed as a hex color behaves exactly like the named white.
#[inline]
pub fn logo_for_circle(fill: Rgb) -> LogoKind {
    if fill == WHITE {
        LogoKind::Color
    } else {
        LogoKind::White
    }
}

/// Circle color policy parsed from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPolicy {
    /// One palette color picked uniformly at random per image.
    Random,
    /// Every palette color, each rendered with a numeric filename suffix.
    All,
    /// A single fixed color (palette key or hex).
    Fixed(Rgb),
}

impl ColorPolicy {
    /// Parses a color policy from its CLI string form.
    ///
    /// Accepts `random`, `all`, a palette key, or `#rrggbb`.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "random" => Ok(Self::Random),
            "all" => Ok(Self::All),
            other => {
                if let Some(&(_, rgb)) = PALETTE.iter().find(|(name, _)| *name == other) {
                    return Ok(Self::Fixed(rgb));
                }
                parse_hex(other)
                    .map(Self::Fixed)
                    .ok_or_else(|| CoreError::InvalidColor(other.to_string()))
            }
        }
    }
}

/// Parses a `#rrggbb` hex string into an RGB triple.
fn parse_hex(s: &str) -> Option<Rgb> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

/// Resolves a color policy into the concrete fill list for one image.
///
/// `Random` draws one palette color; `All` expands to the full palette in
/// suffix order; `Fixed` yields a single-element list.
pub fn resolve_colors<R: Rng + ?Sized>(policy: ColorPolicy, rng: &mut R) -> Vec<Rgb> {
    match policy {
        ColorPolicy::Random => vec![PALETTE[rng.gen_range(0..PALETTE.len())].1],
        ColorPolicy::All => PALETTE.iter().map(|&(_, rgb)| rgb).collect(),
        ColorPolicy::Fixed(rgb) => vec![rgb],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_palette_key() {
        assert_eq!(
            ColorPolicy::parse("magenta").unwrap(),
            ColorPolicy::Fixed([236, 0, 140])
        );
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            ColorPolicy::parse("#ff8000").unwrap(),
            ColorPolicy::Fixed([255, 128, 0])
        );
        assert!(ColorPolicy::parse("#ff80").is_err());
        assert!(ColorPolicy::parse("#gg0000").is_err());
        assert!(ColorPolicy::parse("not-a-color").is_err());
    }

    #[test]
    fn test_logo_swap_rule() {
        assert_eq!(logo_for_circle(WHITE), LogoKind::Color);
        assert_eq!(logo_for_circle([0, 0, 0]), LogoKind::White);
        assert_eq!(logo_for_circle([236, 0, 140]), LogoKind::White);
        // Hex white behaves like the named white
        let ColorPolicy::Fixed(rgb) = ColorPolicy::parse("#ffffff").unwrap() else {
            panic!("expected fixed color");
        };
        assert_eq!(logo_for_circle(rgb), LogoKind::Color);
    }

    #[test]
    fn test_resolve_all_in_palette_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let colors = resolve_colors(ColorPolicy::All, &mut rng);
        assert_eq!(colors.len(), PALETTE.len());
        assert_eq!(colors[0], WHITE);
        assert_eq!(colors[1], [0, 0, 0]);
    }

    #[test]
    fn test_resolve_random_is_from_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let colors = resolve_colors(ColorPolicy::Random, &mut rng);
            assert_eq!(colors.len(), 1);
            assert!(PALETTE.iter().any(|&(_, rgb)| rgb == colors[0]));
        }
    }
}
