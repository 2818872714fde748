//! Asset root resolution and project capture scanning.

use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::content::Project;
use crate::error::Result;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// The image set backing one project card's gallery.
pub struct ProjectGallery {
    pub title: String,
    pub images: Vec<PathBuf>,
}

/// Locates the `assets/` directory.
///
/// A packaged build ships it next to the executable; during development it
/// lives in the manifest directory.
pub fn asset_root() -> PathBuf {
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        let packaged = dir.join("assets");
        if packaged.is_dir() {
            return packaged;
        }
    }

    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

/// Scans a directory for supported raster images, sorted by filename.
pub fn scan_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();

    images.sort();
    Ok(images)
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Builds each project's gallery set from `assets/projects/<dir>/`.
///
/// A missing or unreadable directory yields an empty set; the card still
/// renders and the gallery simply has nothing navigable.
pub fn project_galleries(projects: &[Project]) -> Vec<ProjectGallery> {
    let root = asset_root().join("projects");

    projects
        .iter()
        .map(|project| {
            let dir = root.join(project.image_dir);
            let images = match scan_images(&dir) {
                Ok(images) => images,
                Err(e) => {
                    warn!("No captures for '{}' ({}): {}", project.title, dir.display(), e);
                    Vec::new()
                }
            };
            debug!("Project '{}': {} capture(s)", project.title, images.len());

            ProjectGallery {
                title: project.title.to_string(),
                images,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.jpg", "notes.txt", "c.WEBP"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let images = scan_images(dir.path()).unwrap();
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["a.jpg", "b.png", "c.WEBP"]);
    }

    #[test]
    fn scan_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        assert!(scan_images(&missing).is_err());
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported_image(Path::new("shot.PNG")));
        assert!(is_supported_image(Path::new("shot.jpeg")));
        assert!(!is_supported_image(Path::new("shot.svg")));
        assert!(!is_supported_image(Path::new("noext")));
    }
}
