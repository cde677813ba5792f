//! Writes a provider's rendered fragments onto disk following a [`ProjectLayout`].
//!
//! The write happens in three phases, each of which fails fast:
//!
//! 1. render every fragment (a missing template leaves the filesystem untouched),
//! 2. create the destination and every layout directory,
//! 3. write the files and mark launchers executable.
//!
//! A failure in phase 3 leaves whatever was already written on disk. Cleanup is
//! the caller's decision.

use std::path::{Path, PathBuf};

use crate::error::{ChainkitError, Result};
use crate::layout::ProjectLayout;
use crate::templates::provider::TemplateProvider;

/// Materialize `provider` under `destination_root` and return `destination_root`.
pub fn assemble(
    provider: &TemplateProvider,
    layout: &ProjectLayout,
    destination_root: &Path,
) -> Result<PathBuf> {
    let rendered = provider.render_all()?;
    tracing::info!(
        kind = %provider.kind(),
        language = %provider.language(),
        fragments = rendered.len(),
        "templates rendered"
    );

    create_dir(destination_root)?;
    for dir in layout.directories() {
        create_dir(&destination_root.join(dir))?;
    }

    for fragment in &rendered {
        let path = destination_root.join(layout.path_for(fragment.name));
        std::fs::write(&path, &fragment.contents).map_err(|source| ChainkitError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(fragment = %fragment.name, path = %path.display(), "wrote file");

        if layout.is_executable(fragment.name) {
            set_executable(&path)?;
        }
    }

    Ok(destination_root.to_path_buf())
}

fn create_dir(path: &Path) -> Result<()> {
    // create_dir_all succeeds on an existing directory but not on a regular file.
    std::fs::create_dir_all(path).map_err(|source| ChainkitError::DirectoryCreate {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).map_err(|source| {
        ChainkitError::Permissions {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Copy every `.sol` file under `source` into the layout's contract directory.
///
/// Relative paths below `source` are preserved. `source` may also be a single
/// `.sol` file. Directories inside `destination_root` are never walked, so a
/// project generated below `source` is not copied into itself. Returns the
/// number of contracts copied.
pub fn import_contracts(
    source: &Path,
    layout: &ProjectLayout,
    destination_root: &Path,
) -> Result<usize> {
    let target = destination_root.join(layout.contract_dir());
    create_dir(&target)?;

    if source.is_file() {
        return if is_solidity(source) {
            let file_name = source.file_name().unwrap_or(source.as_os_str());
            copy_contract(source, &target.join(file_name))?;
            Ok(1)
        } else {
            Ok(0)
        };
    }

    let generated = std::fs::canonicalize(destination_root)?;
    let mut copied = 0;
    let mut pending = vec![source.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                if std::fs::canonicalize(&path)?.starts_with(&generated) {
                    tracing::debug!(dir = %path.display(), "skipping generated project");
                    continue;
                }
                pending.push(path);
            } else if is_solidity(&path) {
                let relative = path.strip_prefix(source).unwrap_or(&path);
                let dest = target.join(relative);
                if let Some(parent) = dest.parent() {
                    create_dir(parent)?;
                }
                copy_contract(&path, &dest)?;
                copied += 1;
            }
        }
    }

    tracing::info!(copied, source = %source.display(), "imported solidity contracts");
    Ok(copied)
}

fn copy_contract(from: &Path, to: &Path) -> Result<()> {
    std::fs::copy(from, to).map_err(|source| ChainkitError::Write {
        path: to.to_path_buf(),
        source,
    })?;
    tracing::debug!(from = %from.display(), to = %to.display(), "copied contract");
    Ok(())
}

fn is_solidity(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "sol")
}

/// True if `dir` contains at least one `.sol` file (recursively), or is one.
pub fn contains_contracts(dir: &Path) -> bool {
    if dir.is_file() {
        return is_solidity(dir);
    }
    let Ok(entries) = std::fs::read_dir(dir) else {
        return false;
    };
    entries
        .filter_map(|e| e.ok())
        .any(|e| contains_contracts(&e.path()))
}
