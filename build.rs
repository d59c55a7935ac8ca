//! Evaluates the style configuration once per build.
//!
//! - Tracks every content file so style-class changes trigger a rebuild.
//! - Writes the theme palette as CSS variables to `$OUT_DIR/theme.css`.

use std::fs;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
#[path = "src/style.rs"]
mod style;

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if entry.file_type()?.is_dir() {
            if name.starts_with('.') || (dir == root && name == "target") {
                continue;
            }
            collect_files(root, &path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);

    let config = style::StyleConfig::load()?;

    let mut files = Vec::new();
    collect_files(&root, &root, &mut files)?;

    for file in files {
        let Ok(relative) = file.strip_prefix(&root) else {
            continue;
        };
        let relative = relative.to_string_lossy().replace('\\', "/");
        if config.is_content_file(&relative) {
            println!("cargo:rerun-if-changed={}", file.display());
        }
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/style.rs");
    println!("cargo:rerun-if-env-changed=INDEXXO_API_URL");

    fs::write(out_dir.join("theme.css"), config.palette().to_css_variables())?;
    Ok(())
}
