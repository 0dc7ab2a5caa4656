pub mod registry;

pub use crate::domain::model::PetRecord;
pub use crate::domain::ports::{ConfigProvider, Storage};
