pub mod builder;
pub mod filter;
pub mod mapper;
pub mod registry;
mod restore;

pub use crate::domain::model::{SelectorDeclaration, SelectorGroup};
pub use crate::domain::ports::NamedFields;
pub use crate::utils::error::Result;
