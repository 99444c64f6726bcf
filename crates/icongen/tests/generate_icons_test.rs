//! Integration test for the end-to-end generation scenario

use icongen::{generate_icons, PNG_SIGNATURE};
use std::fs;
use std::path::PathBuf;

/// Fresh per-test output directory under the system temp dir
fn temp_output_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("icongen-{label}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_end_to_end_generation() {
    let dir = temp_output_dir("e2e");

    let written = generate_icons(&dir).expect("generation failed");
    assert_eq!(written.len(), 4, "expected exactly four output files");

    for (path, size) in written.iter().zip([16u32, 32, 48, 128]) {
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            format!("icon{size}.png")
        );

        let bytes = fs::read(path).expect("written file should be readable");
        assert!(bytes.len() > 8, "file should hold more than the signature");
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);

        let decoded = image::load_from_memory(&bytes)
            .expect("output should decode as PNG")
            .to_rgba8();
        assert_eq!(decoded.width(), size);
        assert_eq!(decoded.height(), size);
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_generation_overwrites_existing_files() {
    let dir = temp_output_dir("overwrite");

    // Seed a stale file where icon16.png will land
    fs::write(dir.join("icon16.png"), b"stale").unwrap();

    let written = generate_icons(&dir).expect("second run should overwrite");
    let bytes = fs::read(&written[0]).unwrap();
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_generation_fails_on_missing_directory() {
    let missing = temp_output_dir("missing").join("does-not-exist");
    assert!(generate_icons(&missing).is_err());
}

#[test]
fn test_rendered_icon_decodes_losslessly() {
    // Encode a rendered icon and decode it back with an independent decoder
    let pixmap = icongen::render_icon(16).unwrap();
    let bytes = icongen::PngEncoder::new().encode(&pixmap).unwrap();

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    for y in 0..16u32 {
        for x in 0..16u32 {
            let expected = pixmap.pixel(x, y);
            assert_eq!(
                decoded.get_pixel(x, y).0,
                [expected.r, expected.g, expected.b, expected.a],
                "pixel ({x}, {y}) should survive the round trip"
            );
        }
    }
}
