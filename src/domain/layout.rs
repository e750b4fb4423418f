//! Directory layout guard
//!
//! `build/` and `deploy/` are deleted at the start of every run, so they must
//! be plain subdirectories of the workspace that never cover the sources or
//! the resource tree.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Project-relative directories the pipeline reads from and writes into
#[derive(Debug, Clone, Copy)]
pub struct DirLayout<'a> {
    pub source_dir: &'a Path,
    pub build_dir: &'a Path,
    pub deploy_dir: &'a Path,
    pub resources_dir: &'a Path,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("{key} must not be empty")]
    Empty { key: &'static str },

    #[error("{key} must be a relative path of plain directory names, got '{}'", .path.display())]
    NotPlainRelative { key: &'static str, path: PathBuf },

    #[error("{first} and {second} must not overlap")]
    Overlap {
        first: &'static str,
        second: &'static str,
    },

    #[error("{key} must not contain build.source_dir")]
    ContainsSources { key: &'static str },
}

impl DirLayout<'_> {
    /// Check the layout against `root` before anything is deleted.
    ///
    /// The build directory may sit inside the source directory (`-S . -B
    /// build`), but neither output directory may be the sources, hold them,
    /// or overlap the resources.
    pub fn check(&self, root: &Path) -> Result<(), LayoutError> {
        let build = output_dir(root, "build.build_dir", self.build_dir)?;
        let deploy = output_dir(root, "package.deploy_dir", self.deploy_dir)?;
        let sources = normalize(root, self.source_dir);
        let resources = normalize(root, self.resources_dir);

        if overlaps(&build, &deploy) {
            return Err(LayoutError::Overlap {
                first: "package.deploy_dir",
                second: "build.build_dir",
            });
        }

        for (key, dir) in [("build.build_dir", &build), ("package.deploy_dir", &deploy)] {
            if sources.starts_with(dir) {
                return Err(LayoutError::ContainsSources { key });
            }
            if overlaps(dir, &resources) {
                return Err(LayoutError::Overlap {
                    first: key,
                    second: "package.resources_dir",
                });
            }
        }

        Ok(())
    }
}

fn output_dir(root: &Path, key: &'static str, relative: &Path) -> Result<PathBuf, LayoutError> {
    if relative.as_os_str().is_empty() {
        return Err(LayoutError::Empty { key });
    }
    if !relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return Err(LayoutError::NotPlainRelative {
            key,
            path: relative.to_path_buf(),
        });
    }
    Ok(normalize(root, relative))
}

/// Lexical `root.join(path)` with `.` and `..` folded away
fn normalize(root: &Path, path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in root.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

fn overlaps(a: &Path, b: &Path) -> bool {
    a.starts_with(b) || b.starts_with(a)
}
