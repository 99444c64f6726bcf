//! Sequential generation driver

use icongen_core::consts::ICON_SIZES;
use icongen_core::IconResult;
use icongen_png::PngEncoder;
use icongen_raster::render_icon;
use std::fs;
use std::path::{Path, PathBuf};

/// Render, encode, and write every icon size into `dir`
///
/// Files are named `icon<size>.png` and overwrite existing ones. Sizes are
/// processed strictly in order; the first write failure aborts the
/// remaining iterations. Returns the paths written.
pub fn generate_icons(dir: &Path) -> IconResult<Vec<PathBuf>> {
    let encoder = PngEncoder::new();
    let mut written = Vec::with_capacity(ICON_SIZES.len());

    for size in ICON_SIZES {
        let pixmap = render_icon(size)?;
        let bytes = encoder.encode(&pixmap)?;

        let path = dir.join(format!("icon{size}.png"));
        fs::write(&path, &bytes)?;
        println!("  Created {}  ({size}x{size})", path.display());
        written.push(path);
    }

    println!("Done.");
    Ok(written)
}
