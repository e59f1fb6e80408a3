//! Build script for the web crate.
//!
//! Hashes the static assets so templates can version their URLs.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Assets covered by the hash, relative to the crate root.
const ASSETS: &[&str] = &["static/css/styles.css", "static/js/list.js"];

fn main() {
    hash_assets();
}

/// Hash the static assets.
///
/// Sets `ASSET_HASH` environment variable for use with `env!("ASSET_HASH")`.
fn hash_assets() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");

    let mut hasher = Sha256::new();
    for asset in ASSETS {
        let path = Path::new(&manifest_dir).join(asset);

        // Tell Cargo to rerun if the asset changes
        println!("cargo:rerun-if-changed={}", path.display());

        match fs::read(&path) {
            Ok(content) => hasher.update(&content),
            Err(e) => println!("cargo:warning=Could not read {asset}: {e}"),
        }
    }

    // First 8 chars of SHA256
    let hash = format!("{:x}", hasher.finalize());
    let short_hash = hash.get(..8).unwrap_or(&hash);

    println!("cargo:rustc-env=ASSET_HASH={short_hash}");
}
