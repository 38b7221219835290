//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FddError;

const TMP_SUFFIX: &str = "tmp";

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, FddError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| FddError::unavailable(path, e))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| FddError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FddError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let json = serde_json::to_vec_pretty(data)?;
    write_bytes_atomic(path, &json)
}

/// Read a whole file into memory
///
/// A missing or unreadable file is a persistence error naming the path.
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, FddError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| FddError::unavailable(path, e))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| FddError::unavailable(path, e))?;

    Ok(buf)
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all, so a crash
/// mid-write never leaves a half-updated record behind.
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), FddError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| FddError::unavailable(parent, e))?;
    }

    // Same directory as the target, so the rename stays on one filesystem
    let temp_path = tmp_path(path);

    let file = File::create(&temp_path).map_err(|e| FddError::unavailable(path, e))?;

    let mut writer = BufWriter::new(file);
    let staged = writer
        .write_all(data)
        .and_then(|_| writer.flush())
        .and_then(|_| writer.get_ref().sync_all());

    if let Err(e) = staged {
        let _ = fs::remove_file(&temp_path);
        return Err(FddError::unavailable(path, e));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FddError::unavailable(path, e)
    })?;

    Ok(())
}

/// Temp file used while staging a write to `path`
fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
