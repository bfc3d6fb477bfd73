//! Watermark position selection.
//!
//! A watermark sits in one of the four image corners. The CLI-facing
//! policy adds `random` (one corner picked per image) and `all` (every
//! corner rendered as its own variant).

use crate::{CoreError, Result};
use rand::Rng;

/// One of the four corner positions a watermark can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Bottom-right corner (default)
    BottomRight,
    /// Bottom-left corner
    BottomLeft,
    /// Top-right corner
    TopRight,
    /// Top-left corner
    TopLeft,
}

impl Corner {
    /// All four corners, in canonical order.
    pub const ALL: [Corner; 4] = [
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::TopRight,
        Corner::TopLeft,
    ];

    /// Returns `true` if the watermark sits against the left image edge.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Corner::BottomLeft | Corner::TopLeft)
    }

    /// Returns `true` if the watermark sits against the top image edge.
    #[inline]
    pub const fn is_top(&self) -> bool {
        matches!(self, Corner::TopRight | Corner::TopLeft)
    }

    /// Returns the snake_case label used in CLI arguments and filenames.
    pub const fn label(&self) -> &'static str {
        match self {
            Corner::BottomRight => "bottom_right",
            Corner::BottomLeft => "bottom_left",
            Corner::TopRight => "top_right",
            Corner::TopLeft => "top_left",
        }
    }
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Watermark position policy parsed from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionPolicy {
    /// A single fixed corner.
    One(Corner),
    /// One corner picked uniformly at random per image.
    Random,
    /// Every corner, each rendered as its own output file.
    All,
}

impl PositionPolicy {
    /// Parses a position policy from its CLI string form.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "bottom_right" => Ok(Self::One(Corner::BottomRight)),
            "bottom_left" => Ok(Self::One(Corner::BottomLeft)),
            "top_right" => Ok(Self::One(Corner::TopRight)),
            "top_left" => Ok(Self::One(Corner::TopLeft)),
            "random" => Ok(Self::Random),
            "all" => Ok(Self::All),
            other => Err(CoreError::UnknownPosition(other.to_string())),
        }
    }
}

/// Resolves a position policy into the concrete corner list for one image.
///
/// `Random` draws one corner uniformly; `All` expands to the four corners
/// in canonical order; `One` yields a single-element list.
pub fn resolve_positions<R: Rng + ?Sized>(policy: PositionPolicy, rng: &mut R) -> Vec<Corner> {
    match policy {
        PositionPolicy::One(corner) => vec![corner],
        PositionPolicy::Random => vec![Corner::ALL[rng.gen_range(0..Corner::ALL.len())]],
        PositionPolicy::All => Corner::ALL.to_vec(),
    }
}
