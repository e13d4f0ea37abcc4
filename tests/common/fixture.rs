use std::{env, fs, path::{Path, PathBuf}, ops::Deref, fmt::{self, Formatter, Display}};
use tempfile::{self, TempDir};

pub const TEST_DATA_DIR: &str = "./tests/test-data";

/// A test-data file, living within its own temporary directory.
pub struct Fixture {
    path: PathBuf,
    source: PathBuf,
    _tempdir: TempDir,
}

impl Fixture {
    /// Reserve a path within a fresh temporary directory, without creating the file.
    pub fn blank(fixture_filename: &str) -> Self {
        let root_dir = &env::var("CARGO_MANIFEST_DIR").expect("$CARGO_MANIFEST_DIR");
        let source   = Path::new(root_dir).join(TEST_DATA_DIR).join(fixture_filename);

        let tempdir  = tempfile::tempdir().expect("Failed to generate temp directory");
        let path     = tempdir.path().join(fixture_filename);
        Fixture { _tempdir: tempdir, source, path }
    }

    /// Copy a file from `tests/test-data` into a fresh temporary directory.
    pub fn copy(fixture_filename: &str) -> Self {
        let fixture = Fixture::blank(fixture_filename);
        fs::create_dir_all(fixture.path.parent().expect("No parent directory")).expect("Failed to create directory");
        fs::copy(&fixture.source, &fixture.path).expect("Failed to copy Fixture files.");
        fixture
    }

    /// Contents of the source `tests/test-data` file, left untouched.
    pub fn expected(fixture_filename: &str) -> String {
        let fixture = Fixture::blank(fixture_filename);
        fs::read_to_string(&fixture.source).unwrap_or_else(|_| panic!("Failed to read {}", fixture.source.display()))
    }
}

impl Deref for Fixture {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.path.deref()
    }
}

impl Display for Fixture {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.to_str().expect("Invalid path (non UTF8 characters ?)"))
    }
}
