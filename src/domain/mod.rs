// Domain layer: selector metadata and the trait that attaches it to a type.

pub mod model;
pub mod ports;
