use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::WalkDir;

/// File-name suffix selecting candidate scene archives.
pub const SCENE_SUFFIX: &str = ".ass.gz";

/// True iff `name` ends in the literal `.ass.gz` suffix with at least one
/// character of stem before it. Case-sensitive.
pub fn is_scene_archive(name: &str) -> bool {
    name.len() > SCENE_SUFFIX.len() && name.ends_with(SCENE_SUFFIX)
}

/// Walk `root` recursively and lazily yield every regular file named
/// `*.ass.gz`.
///
/// Failing to read `root` itself is fatal and aborts the whole run. Entries
/// that cannot be read during the walk (permission denied, races) are
/// skipped and the walk continues; skipping is the contract here, not an
/// accident. Walk order is not specified.
pub fn scene_archives(root: &Path) -> anyhow::Result<impl Iterator<Item = PathBuf>> {
    fs::read_dir(root)
        .with_context(|| format!("cannot traverse root directory {}", root.display()))?;

    Ok(WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok()) // per-entry failures: skip and continue
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| is_scene_archive(&entry.file_name().to_string_lossy()))
        .map(|entry| entry.into_path()))
}
