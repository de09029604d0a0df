//! Tests for function project detection

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rstest::rstest;
use tempfile::TempDir;

use func_ux_demo::domain::MARKER_FILES;
use func_ux_demo::infrastructure::detect::{find_marker, is_function_project};
use func_ux_demo::infrastructure::traits::{FileSystem, RealFileSystem};

/// In-memory filesystem: only the listed paths exist.
struct FakeFileSystem {
    files: HashSet<PathBuf>,
}

impl FileSystem for FakeFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(PathBuf::from("/work"))
    }
}

#[rstest]
#[case("func.yaml")]
#[case("package.json")]
#[case("go.mod")]
#[case("requirements.txt")]
#[case("pom.xml")]
fn given_marker_file_when_detected_then_function_project(#[case] marker: &str) {
    // Arrange
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(marker), "").unwrap();

    // Act / Assert
    assert!(is_function_project(&RealFileSystem, temp.path()));
    assert!(MARKER_FILES.contains(&marker));
    assert_eq!(find_marker(&RealFileSystem, temp.path()), Some(marker));
}

#[test]
fn given_empty_dir_when_detected_then_not_function_project() {
    let temp = TempDir::new().unwrap();
    assert!(!is_function_project(&RealFileSystem, temp.path()));
}

#[test]
fn given_unrelated_files_when_detected_then_not_function_project() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Cargo.toml"), "[package]").unwrap();
    fs::write(temp.path().join("README.md"), "# hi").unwrap();

    assert!(!is_function_project(&RealFileSystem, temp.path()));
}

#[test]
fn given_marker_in_subdirectory_when_detected_then_ignored() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("nested");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("func.yaml"), "").unwrap();

    assert!(!is_function_project(&RealFileSystem, temp.path()));
}

#[test]
fn given_several_markers_when_find_then_first_in_marker_order() {
    let dir = PathBuf::from("/work");
    let fs = FakeFileSystem {
        files: [dir.join("pom.xml"), dir.join("go.mod")].into_iter().collect(),
    };

    assert_eq!(find_marker(&fs, &dir), Some("go.mod"));
}

#[test]
fn given_fake_fs_without_markers_when_detected_then_false() {
    let fs = FakeFileSystem {
        files: HashSet::new(),
    };
    assert!(!is_function_project(&fs, Path::new("/work")));
}
