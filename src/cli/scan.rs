//! Turning CLI inputs into file records.
//!
//! Inputs containing `*`, `?` or `[` are expanded as glob patterns; their base
//! is the wildcard-free directory prefix (`i18n/**/*.json` -> `i18n`). Other
//! inputs are literal paths: directories are walked recursively and yield a
//! null record per sub-directory plus a record per `.json` file.

use std::{
    collections::HashSet,
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::glob;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::file::FileRecord;

fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Wildcard-free directory prefix of a glob pattern.
fn glob_base(pattern: &str) -> PathBuf {
    let mut base = PathBuf::new();
    for component in Path::new(pattern).components() {
        let wildcard = matches!(
            component,
            Component::Normal(part) if is_glob_pattern(&part.to_string_lossy())
        );
        if wildcard {
            break;
        }
        base.push(component);
    }
    base
}

pub fn scan_inputs(cwd: &Path, inputs: &[String]) -> Result<Vec<FileRecord>> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut records = Vec::new();

    for input in inputs {
        let before = records.len();
        if is_glob_pattern(input) {
            scan_glob(cwd, input, &mut seen, &mut records)?;
        } else {
            scan_literal(cwd, input, &mut seen, &mut records)?;
        }
        if records.len() == before {
            warn!("no files matched input: {}", input);
        }
    }

    Ok(records)
}

fn scan_glob(
    cwd: &Path,
    pattern: &str,
    seen: &mut HashSet<PathBuf>,
    records: &mut Vec<FileRecord>,
) -> Result<()> {
    let base = cwd.join(glob_base(pattern));
    let full_pattern = cwd.join(pattern);
    let entries = glob(&full_pattern.to_string_lossy())
        .with_context(|| format!("Invalid glob pattern: \"{}\"", pattern))?;

    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("cannot access path: {}", e);
                continue;
            }
        };
        if let Some(record) = read_record(cwd, &base, path, seen)? {
            records.push(record);
        }
    }
    Ok(())
}

fn scan_literal(
    cwd: &Path,
    input: &str,
    seen: &mut HashSet<PathBuf>,
    records: &mut Vec<FileRecord>,
) -> Result<()> {
    let path = cwd.join(input);
    if !path.exists() {
        bail!("Input path does not exist: {}", input);
    }

    if path.is_file() {
        let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(record) = read_record(cwd, &base, path, seen)? {
            records.push(record);
        }
        return Ok(());
    }

    for entry in WalkDir::new(&path).min_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("cannot access path: {}", e);
                continue;
            }
        };
        let entry_path = entry.into_path();
        if entry_path.is_file() && !is_json_file(&entry_path) {
            continue;
        }
        if let Some(record) = read_record(cwd, &path, entry_path, seen)? {
            records.push(record);
        }
    }
    Ok(())
}

/// Build the record for `path`, or `None` if it was already produced by an
/// earlier input.
fn read_record(
    cwd: &Path,
    base: &Path,
    path: PathBuf,
    seen: &mut HashSet<PathBuf>,
) -> Result<Option<FileRecord>> {
    if !seen.insert(path.clone()) {
        debug!("skipping duplicate input: {}", path.display());
        return Ok(None);
    }

    let record = if path.is_dir() {
        FileRecord::null(path)
    } else {
        let bytes =
            fs::read(&path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        FileRecord::buffer(path, bytes)
    };
    Ok(Some(record.with_cwd(cwd).with_base(base)))
}

fn is_json_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}
