use std::fs;
use std::path::{Path, PathBuf};

use crate::classify::ContentType;
use crate::error::Error;

/// Decide where the recovered text goes. Pure function of its arguments; the
/// caller performs the single `is_dir` probe and passes the answer in.
///
/// An explicit path naming an existing directory gets the default file name
/// inside it; any other explicit path is used verbatim; with no explicit path
/// the file lands next to the input. A resolved path without an extension
/// gets the detected one appended.
pub fn resolve_path(
    explicit: Option<&Path>,
    explicit_is_dir: bool,
    input: &Path,
    kind: ContentType,
) -> PathBuf {
    let stem = input
        .file_stem()
        .unwrap_or(input.as_os_str())
        .to_string_lossy();
    let default_name = format!("{stem}_decompressed.{}", kind.extension());

    let mut resolved = match explicit {
        Some(dir) if explicit_is_dir => dir.join(default_name),
        Some(file) => file.to_path_buf(),
        None => input.with_file_name(default_name),
    };

    if resolved.extension().is_none() {
        resolved.set_extension(kind.extension());
    }

    resolved
}

/// Write the decompressed text, creating missing parent directories. An
/// existing file at the target is overwritten without confirmation.
pub fn write_text(path: &Path, content: &str) -> Result<(), Error> {
    ensure_parent(path)?;
    fs::write(path, content).map_err(|err| Error::Write {
        path: path.to_path_buf(),
        err,
    })
}

/// Side channel for --temp: persist the raw compressed bytes as-is.
pub fn write_raw(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    ensure_parent(path)?;
    fs::write(path, bytes).map_err(|err| Error::Write {
        path: path.to_path_buf(),
        err,
    })
}

fn ensure_parent(path: &Path) -> Result<(), Error> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|err| Error::Write {
                path: path.to_path_buf(),
                err,
            })
        }
        _ => Ok(()),
    }
}
