//! Function project detection

/// Files whose presence marks a directory as a function project.
/// Only presence matters; contents are never read.
pub const MARKER_FILES: [&str; 5] = [
    "func.yaml",
    "package.json",
    "go.mod",
    "requirements.txt",
    "pom.xml",
];
