//! Fixture recording for `test-mode` builds.
//!
//! With `LS_RECORD=1` every static data body is written to `LS_FIXDIR` (default
//! `tests/fixtures/`) as `{endpoint}_{sale}.{ext}`, the layout the offline tests load from.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub(crate) fn fixture_dir() -> PathBuf {
    env::var("LS_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Turns a sale slug or id into a single file-name component.
///
/// Anything outside `[A-Za-z0-9._-]` becomes `_`. Ids containing `..`, or that reduce to
/// nothing but dots, are refused.
pub(crate) fn fixture_token(sale_id: &str) -> io::Result<String> {
    if sale_id.contains("..") {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("sale id {sale_id:?} contains `..`"),
        ));
    }
    let token: String = sale_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if token.chars().all(|c| c == '.') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("sale id {sale_id:?} has no usable file name"),
        ));
    }
    Ok(token)
}

pub(crate) fn record_fixture(
    endpoint: &str,
    sale_id: &str,
    ext: &str,
    body: &str,
) -> io::Result<PathBuf> {
    let dir = fixture_dir();
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{endpoint}_{}.{ext}", fixture_token(sale_id)?));
    fs::write(&path, body)?;
    Ok(path)
}

/// Records `body` when `LS_RECORD=1`. Failures are reported on stderr and never fail the fetch.
pub(crate) fn record_if_enabled(endpoint: &str, sale_id: &str, body: &str) {
    if env::var("LS_RECORD").ok().as_deref() != Some("1") {
        return;
    }
    match record_fixture(endpoint, sale_id, "json", body) {
        Ok(path) => {
            if env::var("LS_DEBUG").ok().as_deref() == Some("1") {
                eprintln!("LS_RECORD: wrote fixture to {}", path.display());
            }
        }
        Err(e) => eprintln!("LS_RECORD: failed to write fixture for {sale_id:?}: {e}"),
    }
}
