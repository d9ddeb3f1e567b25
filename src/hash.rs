//! BLAKE3 hashing of asset directories

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use blake3::Hasher;
use walkdir::WalkDir;

use crate::error::{Result, UnistackError, fs};

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Files of a directory, relative to it, sorted for deterministic results
///
/// A directory equal to `exclude` (after canonicalization) is skipped with
/// everything below it.
pub fn list_files(dir: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(UnistackError::AssetDirNotFound {
            path: dir.display().to_string(),
        });
    }

    let exclude = exclude.and_then(|p| p.canonicalize().ok());
    let walker = WalkDir::new(dir).follow_links(true).into_iter().filter_entry(|entry| {
        match &exclude {
            Some(excluded) if entry.file_type().is_dir() => {
                entry.path().canonicalize().ok().as_ref() != Some(excluded)
            }
            _ => true,
        }
    });

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() {
            let relative = entry
                .path()
                .strip_prefix(dir)
                .unwrap_or(entry.path())
                .to_path_buf();
            files.push(relative);
        }
    }
    files.sort();
    Ok(files)
}

fn update_from_file(hasher: &mut Hasher, path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| fs::read_failed(path, e))?;
    let mut reader = BufReader::new(file);
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| fs::read_failed(path, e))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }
    Ok(())
}

/// Calculate the BLAKE3 hash of a directory's contents
///
/// Relative paths (with `/` separators) and contents of all files are hashed in
/// path order, so the hash changes when a file is renamed, added or edited.
pub fn hash_directory(dir: &Path) -> Result<String> {
    hash_files(dir, &list_files(dir, None)?)
}

/// Hash the given files of `dir`, which must already be sorted
pub fn hash_files(dir: &Path, files: &[PathBuf]) -> Result<String> {
    let mut hasher = Hasher::new();

    for relative in files {
        let normalized = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        hasher.update(normalized.as_bytes());
        hasher.update(b"\0");
        update_from_file(&mut hasher, &dir.join(relative))?;
        hasher.update(b"\0");
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}

/// The hex digest without the prefix
pub fn digest(hash: &str) -> &str {
    hash.strip_prefix(HASH_PREFIX).unwrap_or(hash)
}
