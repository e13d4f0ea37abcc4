use std::{fs, path::Path};

use log::debug;

use located_error::prelude::*;

mod error;
pub use error::ParseError;

/// Attempt to create the parent directories of a path (if needed) and return an error if it failed.
pub fn create_parent_directory(path: &Path) -> Result<()> {
    use ParseError::CreateParentDirectory;
    let Some(parent_dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) else {
        return Ok(())
    };
    let loc_msg = || format!("While attempting to create output directory '{}'", parent_dir.display());
    fs::create_dir_all(parent_dir).map_err(CreateParentDirectory).with_loc(loc_msg)
}

/// Check if a given file already exists ; raise an error if such is the case, and the user did not explicitly
/// allow file overwriting.
///
/// # Errors
/// - If the provided `path` already exists and the user did not specifically allow for file
///   overwrite using the `--overwrite` argument
pub fn can_write_file(overwrite: bool, path: &Path) -> Result<bool> {
    let loc_msg = "While ensuring that file permissions were appropriate";
    if !overwrite && path.exists() {
        return Err(ParseError::OverwriteDisallowed{path: path.to_path_buf()}).loc(loc_msg)
    }
    Ok(true)
}

/// Ensure an output file can be written: forbid silent overwrites, then create its parent directories.
pub fn prepare_output_file(overwrite: bool, path: &Path) -> Result<()> {
    can_write_file(overwrite, path)?;
    create_parent_directory(path)?;
    debug!("Output file: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_can_write_file() -> anyhow::Result<()> {
        let tmpdir = tempfile::tempdir()?;

        let path   = tmpdir.path().join("hopla.config");
        assert!(can_write_file(false, &path).is_ok_and(|x| x));
        assert!(can_write_file(true, &path).is_ok_and(|x| x));

        let _   = File::create(&path)?;
        assert!(can_write_file(true, &path).is_ok_and(|x| x));
        assert!(can_write_file(false, &path).is_err_and(|e| {
            matches!(e.downcast_ref::<ParseError>(), Some(ParseError::OverwriteDisallowed{path: _}))
        }));
        Ok(())
    }

    #[test]
    fn test_prepare_output_file() -> anyhow::Result<()> {
        let tmpdir = tempfile::tempdir()?;
        let path   = tmpdir.path().join("family").join("configs").join("hopla.config");
        prepare_output_file(false, &path)?;
        assert!(path.parent().is_some_and(Path::is_dir));
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_create_parent_directory_of_bare_filename() {
        assert!(create_parent_directory(Path::new("hopla.config")).is_ok());
    }
}
