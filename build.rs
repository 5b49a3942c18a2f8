// Copies the static page (and any `static/pkg` bundle wasm-pack left there) to `dist/`.
use std::path::Path;

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        std::fs::remove_dir_all(out_dir).ok();
    }

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }

    let options = CopyOptions::new().copy_inside(true);
    if let Err(e) = copy(static_dir, out_dir, &options) {
        println!("cargo:warning=copying static/ to dist/ failed: {e}");
    }
}
