pub mod file;
pub mod pip;
pub mod traits;

pub use file::FreezeFileSource;
pub use pip::PipFreezeSource;
pub use traits::DependencySource;

use crate::core::package::DependencyRecord;

/// One record per line of a `pip freeze` style listing. Lines are kept
/// verbatim apart from a trailing carriage return.
pub fn parse_freeze_output(output: &str) -> Vec<DependencyRecord> {
    output
        .lines()
        .map(|line| DependencyRecord::new(line.trim_end_matches('\r')))
        .collect()
}

/// Records handed in directly, e.g. by tests or an embedding program.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<DependencyRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<DependencyRecord>) -> Self {
        Self { records }
    }
}

impl DependencySource for StaticSource {
    fn id(&self) -> &str {
        "static"
    }

    fn list(&self) -> crate::error::Result<Vec<DependencyRecord>> {
        Ok(self.records.clone())
    }
}
