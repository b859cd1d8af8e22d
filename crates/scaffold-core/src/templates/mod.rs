//! Component templates: input parsing, rendering, and writing
//!
//! This module provides:
//! - Parsing of the action and state lists (`entries`)
//! - The component description and generated file set (`info`)
//! - One Dart renderer per generated file (`render`)
//! - Writing the rendered files to disk (`writer`)

pub mod entries;
pub mod info;
pub mod render;
pub mod writer;

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

pub use entries::{parse_entries, parse_state_entries, NamedEntry, DYNAMIC_TYPE};
pub use info::{FileKind, GeneratedFile, GeneratedFileSet, TemplateInfo};
pub use writer::write_component;

/// Render all six files for `info` and write them into `dir`
pub async fn generate_component(dir: &Path, info: &TemplateInfo) -> Result<Vec<PathBuf>> {
    let files = GeneratedFileSet::render(info);
    write_component(dir, &files).await
}

/// Directory the component is written to: `<parent>/<name>`, or `parent`
/// itself when the name is empty
pub fn component_dir(parent: &Path, name: &str) -> PathBuf {
    if name.is_empty() {
        parent.to_path_buf()
    } else {
        parent.join(name)
    }
}

/// Print rendered files to stdout without touching the filesystem
pub fn print_preview(info: &TemplateInfo, only: Option<FileKind>) {
    let files = GeneratedFileSet::render(info);

    for file in files
        .files
        .iter()
        .filter(|f| only.map_or(true, |kind| kind == f.kind))
    {
        if only.is_none() {
            println!("{} {}", "//".dimmed(), file.file_name().cyan().bold());
        }
        print!("{}", file.contents);
        if only.is_none() {
            println!();
        }
    }
}
