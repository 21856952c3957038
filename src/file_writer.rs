use crate::error::{Error, Result};
use crate::svg_models::Page;
use log::info;
use regex::Regex;
use std::fs;
use std::path::PathBuf;

const MANUAL_SUFFIX: &str = "_assembly";

/// Directory the rendered pages of one manual are written to.
pub struct ManualOutput {
    pub path: PathBuf,
}

impl ManualOutput {
    pub fn setup_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.path)?;
        Ok(())
    }

    /// Path of the `index`-th page, `page_00.svg` onwards.
    pub fn page_path(&self, index: usize) -> PathBuf {
        self.path.join(format!("page_{:02}.svg", index))
    }

    /// Writes every page as its own SVG file, in order.
    pub fn write_pages(&self, pages: &[Page]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(pages.len());
        for (i, page) in pages.iter().enumerate() {
            let path = self.page_path(i);
            page.save_svg(&path)?;
            info!("Wrote {:?} page to {:?}", page.kind(), path);
            written.push(path);
        }
        Ok(written)
    }
}

/// Default file stem for a project's manual: "Desk Lamp v2" gives
/// `desk_lamp_v2_assembly`.
pub fn manual_file_stem(project_name: &str) -> Result<String> {
    let re = Regex::new(r"[^a-z0-9]+").map_err(|e| Error::ParseError(e.to_string()))?;
    let lowered = project_name.to_lowercase();
    let stem = re.replace_all(&lowered, "_");
    let stem = stem.trim_matches('_');
    if stem.is_empty() {
        return Ok(format!("manual{}", MANUAL_SUFFIX));
    }
    Ok(format!("{}{}", stem, MANUAL_SUFFIX))
}
