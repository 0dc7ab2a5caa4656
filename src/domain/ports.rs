use crate::utils::error::Result;
use std::path::Path;

/// Byte-level access to wherever registry snapshots live.
pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_file(&self) -> &str;
    fn log_level(&self) -> Option<&str>;
    fn log_format(&self) -> &str;
}
