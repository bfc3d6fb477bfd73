//! # stamp-ops
//!
//! Watermark compositing on admitted images.
//!
//! - **Rasterization** - [`fill_ellipse`] draws the circular backdrop on
//!   the supersampled canvas
//! - **Compositing** - [`paint`] runs the crop/upscale/draw/downscale
//!   round trip for one variant
//! - **Expansion** - [`process_image`] renders the position x color
//!   cross product of one image to disk
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use stamp_core::{Corner, Settings, WHITE};
//! use stamp_io::{Logos, admit};
//! use stamp_ops::process_image;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let logos = Logos::load(Path::new("logos"))?;
//! let settings = Settings::default();
//! let image = admit(Path::new("input/pic.jpg"), Path::new("invalid"), true)?;
//! let written = process_image(&image, &logos, &[Corner::BottomRight], &[WHITE], &settings)?;
//! println!("{} file(s) written", written.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Used By
//!
//! - `stamp-cli` - the batch driver

#![warn(missing_docs)]

mod compose;
mod ellipse;
mod error;
mod expand;

pub use compose::{filter_type, paint, save_output, scale_logo};
pub use ellipse::fill_ellipse;
pub use error::{OpsError, OpsResult};
pub use expand::{Variant, output_name, process_image, variants};
