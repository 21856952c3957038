// src/lib.rs

pub mod annotations;
pub mod components;
pub mod converter;
pub mod error;
pub mod file_writer;
pub mod layout;
pub mod project_models;
pub mod projection;
pub mod registry;
pub mod svg_models;

use crate::error::Result;
use crate::project_models::Project;
use std::path::{Path, PathBuf};

/// Renders every page of `project` and writes them as SVG files under
/// `output_dir`. Returns the written paths in page order.
pub fn generate_manual(project: &Project, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let registry = registry::ComponentRegistry::builtin();
    let output = file_writer::ManualOutput {
        path: output_dir.to_path_buf(),
    };
    output.setup_directories()?;

    let pages =
        converter::render_manual(project, &registry, &converter::ManualOptions::default())?;
    let written = output.write_pages(&pages)?;

    log::info!(
        "Manual for '{}' complete: {} pages in {:?}",
        project.info.name,
        written.len(),
        output_dir
    );
    Ok(written)
}
