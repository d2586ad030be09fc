//! Path and size helpers shared by all commands
//!
//! References written into documents always use forward slashes and are
//! explicitly relative (`./` or `../`), regardless of platform.

use std::path::{Path, PathBuf};

use crate::error::{RefactorError, Result};
use crate::fs_utils::normalize_path;

/// Resolve a path, treating relative paths as relative to CWD.
pub fn resolve_path_or_cwd(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().map_err(|e| RefactorError::FileNotFound {
            path: format!("current directory: {}", e),
        })?;
        Ok(cwd.join(path))
    }
}

/// Best-effort canonical form of a path that may not exist yet
///
/// Existing paths are canonicalized; for a missing file the parent directory
/// is canonicalized and the file name re-attached.
pub fn canonical_or_lexical(path: &Path) -> Result<PathBuf> {
    let absolute = resolve_path_or_cwd(path)?;
    if let Ok(canonical) = absolute.canonicalize() {
        return Ok(normalize_path(&canonical));
    }
    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => match parent.canonicalize() {
            Ok(parent) => Ok(normalize_path(&parent).join(name)),
            Err(_) => Ok(absolute.components().collect()),
        },
        _ => Ok(absolute.components().collect()),
    }
}

/// Whether two paths name the same file
pub fn same_file(a: &Path, b: &Path) -> Result<bool> {
    Ok(canonical_or_lexical(a)? == canonical_or_lexical(b)?)
}

/// Relative reference from directory `from_dir` to `to_file`
///
/// Uses forward slashes, and anything that does not already start with
/// `../` or `/` gets a `./` prefix, so `foo.js` renders as `./foo.js`.
pub fn relative_path(from_dir: &Path, to_file: &Path) -> String {
    let relative = pathdiff::diff_paths(to_file, from_dir).unwrap_or_else(|| to_file.to_path_buf());
    let mut reference = relative.to_string_lossy().replace('\\', "/");
    if !reference.starts_with("../") && !reference.starts_with('/') {
        reference.insert_str(0, "./");
    }
    reference
}

/// Number of decimal places kept by [`format_bytes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    Zero,
    #[default]
    One,
    Two,
    Three,
}

impl Precision {
    fn scale(&self) -> f64 {
        match self {
            Self::Zero => 1.0,
            Self::One => 10.0,
            Self::Two => 100.0,
            Self::Three => 1000.0,
        }
    }
}

impl TryFrom<u8> for Precision {
    type Error = RefactorError;

    fn try_from(digits: u8) -> Result<Self> {
        match digits {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(RefactorError::InvalidPrecision { digits }),
        }
    }
}

fn truncated(value: f64, precision: Precision) -> f64 {
    let scale = precision.scale();
    (value * scale).trunc() / scale
}

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;

/// Format a byte count with binary prefixes, truncating (never rounding)
pub fn format_bytes(n: u64, precision: Precision) -> String {
    if n < KIB {
        format!("{} B", n)
    } else if n < MIB {
        format!("{} KiB", truncated(n as f64 / KIB as f64, precision))
    } else if n < GIB {
        format!("{} MiB", truncated(n as f64 / MIB as f64, precision))
    } else {
        format!("{} GiB", truncated(n as f64 / GIB as f64, precision))
    }
}
