use std::path::{Path, PathBuf};

/// Return the first candidate that exists as a directory.
///
/// Candidates are checked in order and the scan stops at the first match, so an earlier
/// entry always wins over a later one even when both exist.
pub fn first_existing_dir<I, P>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    first_matching(candidates, Path::is_dir)
}

/// Return the first candidate that exists as a regular file (following symlinks).
pub fn first_existing_file<I, P>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    first_matching(candidates, Path::is_file)
}

fn first_matching<I, P>(candidates: I, accept: fn(&Path) -> bool) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if accept(candidate) {
            log::debug!("selected candidate {}", candidate.display());
            return Some(candidate.to_path_buf());
        }
        log::trace!("skipping missing candidate {}", candidate.display());
    }
    None
}
