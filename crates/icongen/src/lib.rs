//! # icongen
//!
//! Procedurally generates a fixed set of PNG icons (16, 32, 48 and 128 px)
//! showing a three-bar glyph on a rounded-square background.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! let written = icongen::generate_icons(Path::new(".")).unwrap();
//! for path in written {
//!     println!("wrote {}", path.display());
//! }
//! ```
//!
//! Individual stages are available for finer control:
//!
//! ```
//! use icongen::{render_icon, PngEncoder};
//!
//! let pixmap = render_icon(32).unwrap();
//! let bytes = PngEncoder::new().encode(&pixmap).unwrap();
//! assert_eq!(&bytes[..8], &icongen::PNG_SIGNATURE);
//! ```

mod driver;

// Re-export core types
pub use icongen_core::{consts, IconError, IconResult, Pixmap, Rgba};

// Re-export the rasterizer
pub use icongen_raster::render_icon;

// Re-export the encoder
pub use icongen_png::{PngEncoder, PNG_SIGNATURE};

pub use driver::generate_icons;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
