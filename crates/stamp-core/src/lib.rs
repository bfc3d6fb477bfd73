//! # stamp-core
//!
//! Core types for the `stamp` batch watermarking pipeline.
//!
//! This crate holds everything that is pure data and pure math:
//!
//! - [`Rect`] / [`Box2`] - Pixel rectangle primitives
//! - [`Placement`] - Watermark placement geometry (crop box, circle box,
//!   logo offset) computed from image size, logo size and ratio settings
//! - [`Settings`] - Immutable, validated configuration bag
//! - [`Corner`] / [`PositionPolicy`] - Watermark position selection
//! - [`ColorPolicy`] / palette - Circle color selection and the
//!   white-circle logo swap rule
//!
//! No image codec or pixel buffer dependencies live here; the geometry is
//! expressed purely in coordinates so it can be tested without decoding a
//! single image.
//!
//! # Coordinate System
//!
//! Standard image convention: origin (0, 0) at the top-left corner,
//! X increasing to the right, Y increasing downward.
//!
//! # Used By
//!
//! - `stamp-io` - Image admission
//! - `stamp-ops` - Compositing and variant expansion
//! - `stamp-cli` - The `stamp` binary

#![warn(missing_docs)]

mod error;
mod palette;
mod placement;
mod position;
mod rect;
mod settings;

pub use error::{CoreError, Result};
pub use palette::{ColorPolicy, LogoKind, PALETTE, Rgb, WHITE, logo_for_circle, resolve_colors};
pub use placement::{Placement, compute_placement};
pub use position::{Corner, PositionPolicy, resolve_positions};
pub use rect::{Box2, Rect};
pub use settings::{Filter, Settings};
