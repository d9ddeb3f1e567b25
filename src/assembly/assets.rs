//! Site assets: hashing and staging into the output directory

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, fs};
use crate::hash;

/// Characters of the digest used in parameter names
const SHORT_DIGEST_LEN: usize = 16;

/// A local directory that is synced into the site bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// `blake3:<hex>` hash over relative paths and contents
    pub hash: String,
    pub source: PathBuf,
    /// Files relative to `source`, sorted
    pub files: Vec<PathBuf>,
}

impl Asset {
    /// Hash `source`, skipping the `exclude` directory when it lies inside it
    pub fn from_dir(source: &Path, exclude: Option<&Path>) -> Result<Self> {
        let files = hash::list_files(source, exclude)?;
        let hash = hash::hash_files(source, &files)?;
        debug!(source = %source.display(), files = files.len(), %hash, "hashed asset directory");
        Ok(Self {
            hash,
            source: source.to_path_buf(),
            files,
        })
    }

    pub fn digest(&self) -> &str {
        hash::digest(&self.hash)
    }

    pub fn short_digest(&self) -> &str {
        let digest = self.digest();
        &digest[..SHORT_DIGEST_LEN.min(digest.len())]
    }

    /// Directory name inside the output assembly
    pub fn staged_dir_name(&self) -> String {
        format!("asset.{}", self.digest())
    }

    /// Copy the asset into `out_dir`, returning the staged directory
    ///
    /// Files are copied into a temporary directory next to the target and
    /// renamed into place. An existing staged directory is reused only when
    /// its contents still hash to the asset hash.
    pub fn stage(&self, out_dir: &Path) -> Result<PathBuf> {
        let target = out_dir.join(self.staged_dir_name());
        if target.is_dir() {
            if hash::hash_directory(&target)? == self.hash {
                debug!(target = %target.display(), "asset already staged");
                return Ok(target);
            }
            warn!(target = %target.display(), "staged asset does not match its hash, restaging");
            std::fs::remove_dir_all(&target).map_err(|e| fs::write_failed(&target, e))?;
        }

        std::fs::create_dir_all(out_dir).map_err(|e| fs::write_failed(out_dir, e))?;
        let staging = tempfile::TempDir::new_in(out_dir).map_err(|e| fs::write_failed(out_dir, e))?;
        for relative in &self.files {
            let from = self.source.join(relative);
            let to = staging.path().join(relative);
            if let Some(parent) = to.parent() {
                std::fs::create_dir_all(parent).map_err(|e| fs::write_failed(parent, e))?;
            }
            std::fs::copy(&from, &to).map_err(|e| fs::write_failed(&to, e))?;
        }
        std::fs::rename(staging.path(), &target).map_err(|e| fs::write_failed(&target, e))?;

        info!(target = %target.display(), files = self.files.len(), "staged asset");
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnistackError;
    use tempfile::TempDir;

    fn site() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("index.html"), "<h1>Hello</h1>").unwrap();
        std::fs::create_dir_all(temp.path().join("css")).unwrap();
        std::fs::write(temp.path().join("css/site.css"), "body{}").unwrap();
        temp
    }

    #[test]
    fn test_from_dir() {
        let temp = site();
        let asset = Asset::from_dir(temp.path(), None).unwrap();
        assert_eq!(asset.files.len(), 2);
        assert!(asset.hash.starts_with(hash::HASH_PREFIX));
        assert_eq!(asset.short_digest().len(), SHORT_DIGEST_LEN);
        assert!(asset.staged_dir_name().starts_with("asset."));
    }

    #[test]
    fn test_from_missing_dir() {
        let err = Asset::from_dir(Path::new("/nonexistent/website"), None).unwrap_err();
        assert!(matches!(err, UnistackError::AssetDirNotFound { .. }));
    }

    #[test]
    fn test_stage_copies_verbatim() {
        let temp = site();
        let out = TempDir::new().unwrap();
        let asset = Asset::from_dir(temp.path(), None).unwrap();

        let staged = asset.stage(out.path()).unwrap();
        assert_eq!(
            std::fs::read_to_string(staged.join("index.html")).unwrap(),
            "<h1>Hello</h1>"
        );
        assert_eq!(
            std::fs::read_to_string(staged.join("css/site.css")).unwrap(),
            "body{}"
        );
        assert_eq!(hash::hash_directory(&staged).unwrap(), asset.hash);
    }

    #[test]
    fn test_stage_leaves_no_temporary_dirs() {
        let temp = site();
        let out = TempDir::new().unwrap();
        let asset = Asset::from_dir(temp.path(), None).unwrap();
        asset.stage(out.path()).unwrap();

        let entries: Vec<_> = std::fs::read_dir(out.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec![asset.staged_dir_name()]);
    }

    #[test]
    fn test_stage_repairs_incomplete_copy() {
        let temp = site();
        let out = TempDir::new().unwrap();
        let asset = Asset::from_dir(temp.path(), None).unwrap();

        let staged = asset.stage(out.path()).unwrap();
        std::fs::remove_file(staged.join("index.html")).unwrap();

        let restaged = asset.stage(out.path()).unwrap();
        assert_eq!(restaged, staged);
        assert_eq!(
            std::fs::read_to_string(restaged.join("index.html")).unwrap(),
            "<h1>Hello</h1>"
        );
        assert_eq!(hash::hash_directory(&restaged).unwrap(), asset.hash);
    }

    #[test]
    fn test_stage_removes_stray_files() {
        let temp = site();
        let out = TempDir::new().unwrap();
        let asset = Asset::from_dir(temp.path(), None).unwrap();

        let staged = asset.stage(out.path()).unwrap();
        std::fs::write(staged.join("stray.txt"), "left over").unwrap();

        asset.stage(out.path()).unwrap();
        assert!(!staged.join("stray.txt").exists());
        assert_eq!(hash::hash_directory(&staged).unwrap(), asset.hash);
    }

    #[test]
    fn test_from_dir_excludes_output() {
        let temp = site();
        let before = Asset::from_dir(temp.path(), None).unwrap();

        let out = temp.path().join("cdk.out");
        before.stage(&out).unwrap();
        let after = Asset::from_dir(temp.path(), Some(&out)).unwrap();
        assert_eq!(after.hash, before.hash);
        assert_eq!(after.files, before.files);
    }

    #[test]
    fn test_stage_twice_is_noop() {
        let temp = site();
        let out = TempDir::new().unwrap();
        let asset = Asset::from_dir(temp.path(), None).unwrap();

        let first = asset.stage(out.path()).unwrap();
        let second = asset.stage(out.path()).unwrap();
        assert_eq!(first, second);
    }
}
