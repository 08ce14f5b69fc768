//! Output file handling.
//!
//! Generated files are written to a temporary file next to the target and
//! renamed into place, so the target is either the previous content or the
//! complete new content.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::errors::Result;

/// Atomically replace `path` with `content` and set permissions to 0o644.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    set_permissions(tmp.path(), 0o644)?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file");
    Ok(())
}

/// Set file permissions on Unix (mode bits such as 0o644).
///
/// On non-Unix platforms this is a no-op.
#[cfg(unix)]
pub fn set_permissions(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(mode);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
pub fn set_permissions(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("countries.rs");
        write_atomic(&path, b"pub fn find() {}\n").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"pub fn find() {}\n");
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("countries.rs");
        fs::write(&path, b"old").unwrap();
        write_atomic(&path, b"new").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_files() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("countries.rs");
        write_atomic(&path, b"x").unwrap();
        let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_atomic_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no/such/dir/countries.rs");
        assert!(write_atomic(&path, b"x").is_err());
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_sets_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("perms.rs");
        write_atomic(&path, b"data").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
