//! # stamp-io
//!
//! Image admission for the watermarking pipeline: everything between a
//! path in the input directory and upright RGBA pixels in memory.
//!
//! - **Admission** - [`admit`] classifies, decodes, and rotates one
//!   input file, quarantining it on rejection
//! - **Formats** - JPEG/PNG/WebP/ICO via the `image` crate, HEIF/HEIC
//!   via libheif (feature `heif`), NEF camera raw via `rawloader`
//! - **Orientation** - EXIF orientation values mapped to upright
//!   rotations
//! - **Filesystem** - input scanning, output flushing, quarantine moves
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use stamp_io::{admit, scan_input};
//!
//! # fn main() -> stamp_io::IoResult<()> {
//! let invalid = Path::new("invalid");
//! for path in scan_input(Path::new("input"))? {
//!     match admit(&path, invalid, true) {
//!         Ok(image) => println!("{}: {:?}", image.stem(), image.pixels.dimensions()),
//!         Err(err) => eprintln!("rejected: {err}"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Used By
//!
//! - `stamp-ops` - watermark compositing on admitted pixels
//! - `stamp-cli` - the batch driver

#![warn(missing_docs)]

mod admit;
mod error;
mod format;
mod fs;
pub mod heif;
mod orientation;
mod raw;

pub use admit::{AdmittedImage, LOGO_COLOR_FILE, LOGO_WHITE_FILE, Logos, admit};
pub use error::{IoError, IoResult};
pub use format::{DecodeKind, HEIF_EXTS, RAW_EXTS, SUPPORTED_EXTS, is_supported};
pub use fs::{ensure_dir, flush_output, quarantine, scan_input};
pub use orientation::{Rotation, apply_orientation, read_orientation, rotation_for};
pub use raw::read_raw;
