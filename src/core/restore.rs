//! Deserialization of trees written with `omit_null_fields`.
//!
//! Dropping a null entry loses nothing for `Option` fields, but a field that
//! serializes to `null` on purpose (`serde_json::Value::Null`, `()`, a unit
//! struct) cannot be rebuilt from absence. [`RestoreNulls`] feeds every struct
//! field missing from the tree back to the visitor as `null`, at any depth
//! reachable through structs, sequences, options and newtypes.
//!
//! Maps and enums are handed to `serde_json` unchanged, so structs nested
//! inside map values or enum variants are not restored.

use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::forward_to_deserialize_any;
use serde_json::{map, Value};

pub(crate) struct RestoreNulls(pub(crate) Value);

impl<'de> Deserializer<'de> for RestoreNulls {
    type Error = serde_json::Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Array(items) => visitor.visit_seq(RestoreSeq(items.into_iter())),
            Value::Object(entries) => visitor.visit_map(RestoreMap::new(entries)),
            other => other.deserialize_any(visitor),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(RestoreNulls(other)),
        }
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Object(mut entries) => {
                for field in fields {
                    if !entries.contains_key(*field) {
                        entries.insert((*field).to_string(), Value::Null);
                    }
                }
                visitor.visit_map(RestoreMap::new(entries))
            }
            other => other.deserialize_struct(name, fields, visitor),
        }
    }

    // serde_json parses non-string map keys; keep its behavior.
    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.0.deserialize_map(visitor)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.0.deserialize_enum(name, variants, visitor)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct identifier ignored_any
    }
}

struct RestoreSeq(std::vec::IntoIter<Value>);

impl<'de> SeqAccess<'de> for RestoreSeq {
    type Error = serde_json::Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>, Self::Error>
    where
        T: DeserializeSeed<'de>,
    {
        self.0
            .next()
            .map(|item| seed.deserialize(RestoreNulls(item)))
            .transpose()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.0.len())
    }
}

struct RestoreMap {
    entries: map::IntoIter,
    pending: Option<Value>,
}

impl RestoreMap {
    fn new(entries: serde_json::Map<String, Value>) -> Self {
        Self {
            entries: entries.into_iter(),
            pending: None,
        }
    }
}

impl<'de> MapAccess<'de> for RestoreMap {
    type Error = serde_json::Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>, Self::Error>
    where
        K: DeserializeSeed<'de>,
    {
        match self.entries.next() {
            Some((key, value)) => {
                self.pending = Some(value);
                seed.deserialize(Value::String(key)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value, Self::Error>
    where
        V: DeserializeSeed<'de>,
    {
        match self.pending.take() {
            Some(value) => seed.deserialize(RestoreNulls(value)),
            None => Err(de::Error::custom("map value requested before its key")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.entries.len())
    }
}
