use crate::core::package::DependencyRecord;
use crate::error::Result;

/// Where the flat dependency listing of the root package comes from.
pub trait DependencySource {
    fn id(&self) -> &str;
    fn list(&self) -> Result<Vec<DependencyRecord>>;
}
