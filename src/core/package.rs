use std::fmt;
use std::path::Path;

use serde::Serialize;

const VERSION_DELIMITER: &str = "==";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Root package name for an installed package path: the final path
    /// component without its extension.
    pub fn from_package_path(path: &Path) -> Self {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One line of a freeze-style listing, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    raw: String,
}

impl DependencyRecord {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Everything before the first `==`, or the whole record.
    ///
    /// Versions never take part in node identity, so `foo==1.0` and
    /// `foo==2.0` resolve to the same name.
    pub fn name(&self) -> PackageName {
        let name = self
            .raw
            .split_once(VERSION_DELIMITER)
            .map(|(name, _)| name)
            .unwrap_or(&self.raw);
        PackageName::new(name)
    }

    pub fn version(&self) -> Option<&str> {
        self.raw
            .split_once(VERSION_DELIMITER)
            .map(|(_, version)| version)
    }

    pub fn delimiter_count(&self) -> usize {
        self.raw.matches(VERSION_DELIMITER).count()
    }
}

impl From<&str> for DependencyRecord {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for DependencyRecord {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
