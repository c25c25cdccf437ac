pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

mod macros;

pub use config::SelectorConfig;
pub use core::{
    builder::JsonBuilder,
    filter::{apply_selector, retain_fields},
    mapper::{from_json, init_mapper, to_json, to_json_named, Mapper, MapperConfig},
    registry::SelectorRegistry,
};
pub use domain::{
    model::{SelectorDeclaration, SelectorGroup},
    ports::NamedFields,
};
pub use utils::error::{JsonError, Result};
