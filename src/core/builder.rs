use crate::core::mapper::Mapper;
use crate::domain::ports::NamedFields;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Collects independently serialized pieces under named keys and hands them
/// out as one JSON object.
///
/// `build` returns the accumulated object and leaves the builder empty, ready
/// for the next composite. One builder belongs to one caller at a time.
///
/// ```
/// use json_named_fields::JsonBuilder;
/// use serde_json::json;
///
/// let mut builder = JsonBuilder::new();
/// let response = builder
///     .add_node("total", json!(2))
///     .add_node("items", json!(["a", "b"]))
///     .build();
///
/// assert_eq!(response, json!({"total": 2, "items": ["a", "b"]}));
/// assert_eq!(builder.build(), json!({}));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonBuilder {
    node: Map<String, Value>,
}

impl JsonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `node`, replacing any earlier value under the same key.
    pub fn add_node(&mut self, key: impl Into<String>, node: Value) -> &mut Self {
        self.node.insert(key.into(), node);
        self
    }

    pub fn add_object<T>(&mut self, key: impl Into<String>, object: &T) -> Result<&mut Self>
    where
        T: Serialize + ?Sized,
    {
        let node = Mapper::global().to_json(object)?;
        Ok(self.add_node(key, node))
    }

    pub fn add_named<T>(
        &mut self,
        key: impl Into<String>,
        object: &T,
        name: Option<&str>,
    ) -> Result<&mut Self>
    where
        T: Serialize + NamedFields + ?Sized,
    {
        let node = Mapper::global().to_json_named(object, name)?;
        Ok(self.add_node(key, node))
    }

    /// Returns everything added since the last build and resets the builder.
    pub fn build(&mut self) -> Value {
        let built = std::mem::take(&mut self.node);
        tracing::trace!("Built composite object with {} node(s)", built.len());
        Value::Object(built)
    }

    pub fn len(&self) -> usize {
        self.node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_empty()
    }
}
