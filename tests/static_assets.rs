//! Verifies the static assets the UI references at absolute paths are shipped
//! by the trunk build: each one must exist under `assets/` and carry a
//! `copy-file` declaration in `index.html` so it lands in the dist root.

use std::fs;
use std::path::Path;

/// Absolute URLs referenced from the components, minus the leading slash.
const REFERENCED_ASSETS: &[&str] = &["hero.png", "placeholder-image.jpg"];

fn manifest_path(relative: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn referenced_assets_exist_and_are_nonempty() {
    for asset in REFERENCED_ASSETS {
        let path = manifest_path(&format!("assets/{asset}"));
        let metadata = fs::metadata(&path)
            .unwrap_or_else(|_| panic!("missing asset file: {}", path.display()));
        assert!(metadata.len() > 0, "asset is empty: {}", path.display());
    }
}

#[test]
fn index_html_copies_every_referenced_asset() {
    let index = fs::read_to_string(manifest_path("index.html")).unwrap();
    for asset in REFERENCED_ASSETS {
        let declaration = format!(r#"rel="copy-file" href="assets/{asset}""#);
        assert!(
            index.contains(&declaration),
            "index.html does not copy assets/{asset} into the dist root"
        );
    }
}
