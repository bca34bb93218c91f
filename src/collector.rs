//! Directory scanning that maps every file under the chosen asset root into the bundle.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::asset_paths::{destination_dir, first_existing_dir, relative_to_slash};
use crate::models::{AssetCollection, AssetEntry, AssetMapping};
use crate::project::DEFAULT_OUTPUT_ROOT;

/// Errors that abort an asset walk.
#[derive(Debug)]
pub enum CollectError {
    /// A directory beneath the chosen root could not be listed.
    ReadDir {
        /// Directory that failed.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// An entry inside a listed directory could not be inspected.
    Entry {
        /// Entry (or its parent directory) that failed.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// A file or directory name beneath the root is not valid UTF-8, so no destination can
    /// be named for it.
    NonUtf8Path {
        /// Offending path.
        path: PathBuf,
    },
}

/// Collect every file under the first existing candidate root, mapped below `assets`.
///
/// When no candidate exists the mapping is empty; this is not an error.
pub fn collect_assets<I, P>(candidate_roots: I) -> Result<AssetMapping, CollectError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    collect_assets_into(DEFAULT_OUTPUT_ROOT, candidate_roots).map(|collection| collection.mapping)
}

/// Collect every file under the first existing candidate root, mapped below `output_root`.
pub fn collect_assets_into<I, P>(
    output_root: &str,
    candidate_roots: I,
) -> Result<AssetCollection, CollectError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let Some(root) = first_existing_dir(candidate_roots) else {
        log::debug!("no asset root found, collecting nothing");
        return Ok(AssetCollection::default());
    };

    let mut mapping = AssetMapping::new();
    collect_assets_recursively(&root, Path::new(""), output_root, &mut mapping)?;
    log::debug!(
        "collected {} asset(s) from {}",
        mapping.len(),
        root.display()
    );

    Ok(AssetCollection {
        root: Some(root),
        mapping,
    })
}

/// Walk `root/relative` adding each regular file to `mapping`.
///
/// Symlinks to files are collected; symlinked directories are not descended into. A
/// dangling symlink is skipped with a warning, while any other failure to resolve a symlink
/// (a symlink loop, a permission error on its target) aborts the walk.
fn collect_assets_recursively(
    root: &Path,
    relative: &Path,
    output_root: &str,
    mapping: &mut AssetMapping,
) -> Result<(), CollectError> {
    let current = if relative.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(relative)
    };
    let entries = fs::read_dir(&current).map_err(|source| CollectError::ReadDir {
        path: current.clone(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| CollectError::Entry {
            path: current.clone(),
            source,
        })?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|source| CollectError::Entry {
            path: path.clone(),
            source,
        })?;
        let child_relative = relative.join(entry.file_name());

        if file_type.is_dir() {
            collect_assets_recursively(root, &child_relative, output_root, mapping)?;
            continue;
        }

        let is_file = if file_type.is_symlink() {
            match fs::metadata(&path) {
                Ok(metadata) => metadata.is_file(),
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    log::warn!("skipping dangling symlink {}", path.display());
                    false
                }
                Err(source) => return Err(CollectError::Entry { path, source }),
            }
        } else {
            file_type.is_file()
        };

        if is_file {
            let (Some(destination), Some(relative_path)) = (
                destination_dir(output_root, relative),
                relative_to_slash(&child_relative),
            ) else {
                return Err(CollectError::NonUtf8Path { path });
            };
            mapping.insert(AssetEntry {
                destination,
                relative_path,
                source: path,
            });
        }
    }

    Ok(())
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadDir { path, source } => {
                write!(f, "failed to read directory {}: {}", path.display(), source)
            }
            Self::Entry { path, source } => {
                write!(f, "failed to inspect {}: {}", path.display(), source)
            }
            Self::NonUtf8Path { path } => {
                write!(f, "path is not valid UTF-8: {}", path.display())
            }
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadDir { source, .. } => Some(source),
            Self::Entry { source, .. } => Some(source),
            Self::NonUtf8Path { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_file(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn returns_empty_mapping_when_no_candidate_exists() {
        let dir = tempdir().unwrap();
        let candidates = [dir.path().join("src/assets"), dir.path().join("assets")];

        let collection = collect_assets_into("assets", &candidates).unwrap();
        assert!(collection.root.is_none());
        assert!(collection.mapping.is_empty());
    }

    #[test]
    fn maps_root_files_and_nested_directories() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("assets");
        write_file(&root.join("a.txt"), "a");
        write_file(&root.join("sub/b.txt"), "b");

        let mapping = collect_assets([&root]).unwrap();

        assert_eq!(mapping.len(), 2);
        assert!(mapping.contains(&root.join("a.txt"), "assets"));
        assert!(mapping.contains(&root.join("sub").join("b.txt"), "assets/sub"));
    }

    #[test]
    fn uses_only_existing_candidate_regardless_of_position() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("late");
        write_file(&root.join("logo.png"), "png");

        let candidates = [
            dir.path().join("missing-1"),
            dir.path().join("missing-2"),
            root.clone(),
        ];
        let collection = collect_assets_into("assets", &candidates).unwrap();

        assert_eq!(collection.root, Some(root.clone()));
        assert!(collection.mapping.contains(&root.join("logo.png"), "assets"));
    }

    #[test]
    fn ignores_later_candidates_once_one_exists() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("src/assets");
        let second = dir.path().join("assets");
        write_file(&first.join("first.txt"), "1");
        write_file(&second.join("second.txt"), "2");

        let mapping = collect_assets([&first, &second]).unwrap();

        assert_eq!(mapping.len(), 1);
        assert!(mapping.contains(&first.join("first.txt"), "assets"));
    }

    #[test]
    fn empty_root_directory_yields_empty_mapping() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("assets");
        fs::create_dir_all(root.join("empty/nested")).unwrap();

        let collection = collect_assets_into("assets", [&root]).unwrap();
        assert_eq!(collection.root, Some(root));
        assert!(collection.mapping.is_empty());
    }

    #[test]
    fn collects_hidden_files_and_deep_paths() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("assets");
        write_file(&root.join(".keep"), "");
        write_file(&root.join("fonts/latin/regular.ttf"), "ttf");

        let mapping = collect_assets([&root]).unwrap();

        assert!(mapping.contains(&root.join(".keep"), "assets"));
        assert!(mapping.contains(
            &root.join("fonts").join("latin").join("regular.ttf"),
            "assets/fonts/latin"
        ));
        let relatives: Vec<&str> = mapping.iter().map(|e| e.relative_path.as_str()).collect();
        assert!(relatives.contains(&"fonts/latin/regular.ttf"));
    }

    #[test]
    fn honours_custom_output_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("res");
        write_file(&root.join("img/x.png"), "x");

        let collection = collect_assets_into("data", [&root]).unwrap();
        assert!(collection.mapping.contains(&root.join("img").join("x.png"), "data/img"));
    }

    #[test]
    fn repeated_collection_is_identical() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("assets");
        write_file(&root.join("a.txt"), "a");
        write_file(&root.join("sub/b.txt"), "b");
        write_file(&root.join("sub/deeper/c.txt"), "c");

        let first = collect_assets([&root]).unwrap();
        let second = collect_assets([&root]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn candidate_that_is_a_file_is_skipped() {
        let dir = tempdir().unwrap();
        let not_a_dir = dir.path().join("assets");
        write_file(&not_a_dir, "plain file");
        let root = dir.path().join("src/assets");
        write_file(&root.join("a.txt"), "a");

        let collection = collect_assets_into("assets", [&not_a_dir, &root]).unwrap();
        assert_eq!(collection.root, Some(root));
    }

    #[cfg(unix)]
    #[test]
    fn follows_file_symlinks_but_not_directory_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let outside = dir.path().join("outside");
        write_file(&outside.join("shared.txt"), "shared");
        let root = dir.path().join("assets");
        fs::create_dir_all(&root).unwrap();
        symlink(outside.join("shared.txt"), root.join("linked.txt")).unwrap();
        symlink(&outside, root.join("linked-dir")).unwrap();
        symlink(dir.path().join("nowhere"), root.join("dangling")).unwrap();

        let mapping = collect_assets([&root]).unwrap();

        assert_eq!(mapping.len(), 1);
        assert!(mapping.contains(&root.join("linked.txt"), "assets"));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loop_aborts_with_the_looping_path() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let root = dir.path().join("assets");
        write_file(&root.join("ok.txt"), "ok");
        symlink(root.join("loop"), root.join("loop")).unwrap();

        let err = collect_assets([&root]).unwrap_err();
        match &err {
            CollectError::Entry { path, .. } => assert_eq!(path, &root.join("loop")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("loop"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_aborts_the_walk() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let root = dir.path().join("assets");
        let locked = root.join("locked");
        write_file(&root.join("a.txt"), "a");
        write_file(&locked.join("secret.txt"), "s");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can list the directory regardless of its mode.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = collect_assets([&root]);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            Err(CollectError::ReadDir { path, .. }) => assert_eq!(path, locked),
            other => panic!("expected a read error, got {other:?}"),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_directory_names_abort_the_walk() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let root = dir.path().join("assets");
        let first = root.join(OsStr::from_bytes(b"a\xff"));
        let second = root.join(OsStr::from_bytes(b"a\xfe"));
        write_file(&first.join("x"), "1");
        write_file(&second.join("x"), "2");

        let err = collect_assets([&root]).unwrap_err();
        match &err {
            CollectError::NonUtf8Path { path } => {
                assert!(path == &first.join("x") || path == &second.join("x"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("path is not valid UTF-8"));
    }
}
