use crate::core::filter::apply_selector;
use crate::core::restore::RestoreNulls;
use crate::domain::ports::NamedFields;
use crate::utils::error::{JsonError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

static MAPPER: OnceLock<Mapper> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Drop object entries whose value is `null`, at every depth.
    ///
    /// [`Mapper::from_json`] puts dropped struct fields back as `null` when a
    /// plain conversion fails, so `Value::Null`, `()` and unit-struct fields
    /// still round-trip. Structs nested inside map values or enum variants
    /// are not restored.
    #[serde(default)]
    pub omit_null_fields: bool,
}

/// Converts values to and from `serde_json::Value` trees.
///
/// Field visibility is whatever the type's serde attributes say
/// (`#[serde(skip)]`, `rename`, ...); selectors are applied on top of that.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    config: MapperConfig,
}

impl Mapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    /// The process-wide mapper. Falls back to the default configuration when
    /// [`init_mapper`] was never called.
    pub fn global() -> &'static Mapper {
        MAPPER.get_or_init(Mapper::default)
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn to_json<T>(&self, object: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let mut node = serde_json::to_value(object)?;
        if self.config.omit_null_fields {
            strip_nulls(&mut node);
        }
        Ok(node)
    }

    /// Serializes `object`, then prunes it with the type's declarations named
    /// `name`. Falls back to the full tree when nothing matches.
    pub fn to_json_named<T>(&self, object: &T, name: Option<&str>) -> Result<Value>
    where
        T: Serialize + NamedFields + ?Sized,
    {
        let mut node = self.to_json(object)?;
        apply_selector(&mut node, T::selector_group(), name);
        Ok(node)
    }

    pub fn from_json<T>(&self, node: &Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let error = match T::deserialize(node) {
            Ok(object) => return Ok(object),
            Err(e) => e,
        };

        if self.config.omit_null_fields {
            tracing::trace!(
                "Retrying {} with omitted null fields restored",
                std::any::type_name::<T>()
            );
            if let Ok(object) = T::deserialize(RestoreNulls(node.clone())) {
                return Ok(object);
            }
        }

        tracing::debug!(
            "Failed to convert tree into {}: {}",
            std::any::type_name::<T>(),
            error
        );
        Err(JsonError::ConversionError(error))
    }
}

/// Installs the process-wide mapper. Only the first call wins; later calls,
/// or calls after [`Mapper::global`] already created the default mapper,
/// fail with [`JsonError::MapperAlreadyInitialized`].
pub fn init_mapper(config: MapperConfig) -> Result<()> {
    MAPPER
        .set(Mapper::new(config))
        .map_err(|_| JsonError::MapperAlreadyInitialized)?;
    tracing::debug!("Mapper initialized: {:?}", Mapper::global().config());
    Ok(())
}

pub fn to_json<T>(object: &T) -> Result<Value>
where
    T: Serialize + ?Sized,
{
    Mapper::global().to_json(object)
}

/// If `name` is `None` or not declared on `T`, the entire tree is returned.
pub fn to_json_named<T>(object: &T, name: Option<&str>) -> Result<Value>
where
    T: Serialize + NamedFields + ?Sized,
{
    Mapper::global().to_json_named(object, name)
}

pub fn from_json<T>(node: &Value) -> Result<T>
where
    T: DeserializeOwned,
{
    Mapper::global().from_json(node)
}

fn strip_nulls(node: &mut Value) {
    match node {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}
