use std::path::{Path, PathBuf};

use crate::core::package::DependencyRecord;
use crate::error::{DepvizError, Result};
use crate::source::parse_freeze_output;
use crate::source::traits::DependencySource;

/// A saved freeze listing, e.g. `pip freeze > requirements.txt`.
#[derive(Debug, Clone)]
pub struct FreezeFileSource {
    path: PathBuf,
    id: String,
}

impl FreezeFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let id = path.display().to_string();
        Self { path, id }
    }
}

impl DependencySource for FreezeFileSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn list(&self) -> Result<Vec<DependencyRecord>> {
        let content = std::fs::read_to_string(&self.path).map_err(|err| {
            DepvizError::DependencySourceUnavailable {
                source_id: self.id.clone(),
                reason: err.to_string(),
            }
        })?;
        Ok(parse_freeze_output(&content))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::error::DepvizError;
    use crate::source::file::FreezeFileSource;
    use crate::source::traits::DependencySource;

    #[test]
    fn reads_saved_listing() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "depviz-freeze-{}-{nanos}.txt",
            std::process::id()
        ));
        fs::write(&path, "jinja2==3.1.2\nmarkupsafe==2.1.3\n").expect("write listing");

        let records = FreezeFileSource::new(&path).list().expect("read listing");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name().as_str(), "jinja2");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_listing_is_unavailable() {
        let err = FreezeFileSource::new("/nonexistent/requirements.txt")
            .list()
            .expect_err("missing file");
        assert!(matches!(err, DepvizError::DependencySourceUnavailable { .. }));
    }
}
