// src/writer/persist.rs
use std::{
    ffi::OsString,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use super::write_nfa;
use crate::{
    error::{NfaTextError, Result},
    nfa::NfaAccess,
};

/// File extension of text dumps.
pub const DUMP_EXTENSION: &str = "nfa";

/// `<nfa id>.nfa`, relative to the working directory.
pub fn default_dump_path<N: NfaAccess + ?Sized>(nfa: &N) -> PathBuf {
    PathBuf::from(format!("{}.{DUMP_EXTENSION}", nfa.nfa_id()))
}

/// Writes the text dump of `nfa` to `path`, or to [`default_dump_path`] when
/// `path` is empty. Returns the path written.
pub fn write_nfa_file<N, P>(nfa: &N, path: P) -> Result<PathBuf>
where
    N: NfaAccess + ?Sized,
    P: AsRef<Path>,
{
    let instant = Instant::now();
    let text = write_nfa(nfa)?;

    let path = match path.as_ref() {
        p if p.as_os_str().is_empty() => default_dump_path(nfa),
        p => p.to_path_buf(),
    };

    let write_failure = |source: std::io::Error| NfaTextError::WriteFailure {
        path: path.clone(),
        source,
    };
    write_replacing(&path, text.as_bytes()).map_err(write_failure)?;

    log::debug!(
        "[persist] wrote {} bytes to {} in {} ms",
        text.len(),
        path.display(),
        instant.elapsed().as_millis()
    );
    Ok(path)
}

/// Writes `bytes` to a sibling `<path>.tmp` and renames it over `path`, so a
/// failed write never leaves a truncated dump behind.
fn write_replacing(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut tmp = OsString::from(path.as_os_str());
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let result = (|| {
        let mut w = BufWriter::new(File::create(&tmp)?);
        w.write_all(bytes)?;
        w.flush()?;
        drop(w);
        fs::rename(&tmp, path)
    })();
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

/// Like [`write_nfa_file`], but a destination that cannot be written is only
/// logged: the result is `Ok(None)` and nothing is raised. Snapshot errors
/// still propagate.
pub fn try_write_nfa_file<N, P>(nfa: &N, path: P) -> Result<Option<PathBuf>>
where
    N: NfaAccess + ?Sized,
    P: AsRef<Path>,
{
    match write_nfa_file(nfa, path) {
        Ok(p) => Ok(Some(p)),
        Err(NfaTextError::WriteFailure { path, source }) => {
            log::warn!("dropping NFA dump, cannot write {}: {source}", path.display());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
