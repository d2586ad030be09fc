//! File system helpers used when resolving and rewriting documents
//!
//! - `normalize_path`: canonical paths without the Windows verbatim prefix,
//!   so references computed from them look like paths the user typed
//! - `write_atomic`: documents and extracted files are written through a
//!   sibling temp file and renamed into place

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Drop the `\\?\` (or `\\?\UNC\`) prefix that `canonicalize` adds on Windows
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use refactor_extras::fs_utils::normalize_path;
///
/// let site = Path::new("/srv/site/index.html");
/// assert_eq!(normalize_path(site), site);
/// ```
pub fn normalize_path(path: &Path) -> PathBuf {
    #[cfg(windows)]
    {
        let raw = path.to_string_lossy();
        if let Some(share) = raw.strip_prefix(r"\\?\UNC\") {
            return PathBuf::from(format!(r"\\{}", share));
        }
        if let Some(local) = raw.strip_prefix(r"\\?\") {
            return PathBuf::from(local);
        }
    }
    path.to_path_buf()
}

/// Move `tmp` over `dst`; Windows refuses to rename onto an existing file
fn replace_file(tmp: &Path, dst: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        if dst.exists() {
            std::fs::remove_file(dst)?;
        }
    }
    std::fs::rename(tmp, dst)
}

/// `.name.tmp` next to `path`
fn temp_sibling(path: &Path) -> io::Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let mut tmp = OsString::from(".");
    tmp.push(name);
    tmp.push(".tmp");
    Ok(path.with_file_name(tmp))
}

/// Write `bytes` to `path` via a temp file in the same directory
///
/// The temp file is removed again if the final rename fails.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = temp_sibling(path)?;
    std::fs::write(&tmp, bytes)?;
    replace_file(&tmp, path).inspect_err(|_| {
        let _ = std::fs::remove_file(&tmp);
    })
}
