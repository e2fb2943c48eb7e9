//! Saving rendered artifacts.
//!
//! The core renderers only return bytes; saving is an explicit capability
//! the caller invokes with a destination directory.

use crate::error::PlanError;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Write artifact bytes under `dir`, creating it if needed. Returns the
/// full path of the written file.
pub fn save_artifact(
    bytes: &[u8],
    dir: impl AsRef<Path>,
    filename: &str,
) -> Result<PathBuf, PlanError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, bytes)?;
    info!("saved {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}

/// Download filename for a floor-plan image: slugified title plus `.png`.
pub fn floor_plan_filename(title: &str) -> String {
    format!("{}.png", slug::slugify(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_are_slugged() {
        assert_eq!(
            floor_plan_filename("Smith Kitchen Remodel"),
            "smith-kitchen-remodel.png"
        );
        assert_eq!(floor_plan_filename("Unit #4 / Floor 2"), "unit-4-floor-2.png");
    }

    #[test]
    fn saves_bytes_under_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_artifact(b"png bytes", dir.path(), "plan.png").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"png bytes");
        assert_eq!(path.file_name().unwrap(), "plan.png");
    }
}
