// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structural decoding of configuration sub-trees into Rust types.
//!
//! `ConfigValue` implements `serde::Deserializer`, so any type deriving
//! `serde::Deserialize` can be filled from a part of the document. Struct fields
//! are matched to mapping keys by name, tolerating differences in case and in
//! `_` / `-` separators: the key `DefaultExpirationSeconds` fills the field
//! `default_expiration_seconds`.

use crate::domain::errors::DecodeError;
use crate::domain::{ConfigValue, Mapping};
use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{self, DeserializeOwned, Deserializer, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;

impl ConfigValue {
    /// Decodes this value into `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgstore::domain::{ConfigValue, Mapping};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Limits {
    ///     max_connections: u32,
    /// }
    ///
    /// let mut map = Mapping::new();
    /// map.insert("MaxConnections".to_string(), ConfigValue::Int(16));
    ///
    /// let limits: Limits = ConfigValue::Map(map).decode().unwrap();
    /// assert_eq!(limits.max_connections, 16);
    /// ```
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, DecodeError> {
        T::deserialize(self)
    }
}

/// Lower-cases a name and drops `_` and `-`, so `CleanupIntervalSeconds`,
/// `cleanup_interval_seconds` and `cleanup-interval-seconds` compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Renames mapping keys to the struct field they correspond to.
///
/// Keys that already equal a field are kept. Other keys take the name of the first
/// field they match after normalization, unless that field is already present.
/// Keys matching nothing are left alone for the target type to ignore or reject.
fn align_keys(map: Mapping, fields: &'static [&'static str]) -> Vec<(String, ConfigValue)> {
    let mut taken: Vec<&str> = fields
        .iter()
        .copied()
        .filter(|field| map.contains_key(*field))
        .collect();

    let mut aligned = Vec::with_capacity(map.len());
    for (key, value) in map {
        if fields.contains(&key.as_str()) {
            aligned.push((key, value));
            continue;
        }
        let wanted = normalize(&key);
        match fields
            .iter()
            .copied()
            .find(|field| normalize(field) == wanted)
        {
            Some(field) if !taken.contains(&field) => {
                taken.push(field);
                aligned.push((field.to_string(), value));
            }
            Some(field) => {
                tracing::trace!("Ignoring key '{}': field '{}' is already set", key, field);
            }
            None => aligned.push((key, value)),
        }
    }
    aligned
}

fn visit_list<'de, V: Visitor<'de>>(
    items: Vec<ConfigValue>,
    visitor: V,
) -> Result<V::Value, DecodeError> {
    let mut seq: SeqDeserializer<_, DecodeError> = SeqDeserializer::new(items.into_iter());
    let value = visitor.visit_seq(&mut seq)?;
    seq.end()?;
    Ok(value)
}

fn visit_entries<'de, V, I>(entries: I, visitor: V) -> Result<V::Value, DecodeError>
where
    V: Visitor<'de>,
    I: Iterator<Item = (String, ConfigValue)>,
{
    let mut map: MapDeserializer<'de, I, DecodeError> = MapDeserializer::new(entries);
    let value = visitor.visit_map(&mut map)?;
    map.end()?;
    Ok(value)
}

impl<'de> Deserializer<'de> for ConfigValue {
    type Error = DecodeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self {
            ConfigValue::Null => visitor.visit_unit(),
            ConfigValue::Bool(b) => visitor.visit_bool(b),
            ConfigValue::Int(i) => visitor.visit_i64(i),
            ConfigValue::Uint(u) => visitor.visit_u64(u),
            ConfigValue::Float(f) => visitor.visit_f64(f),
            ConfigValue::String(s) => visitor.visit_string(s),
            ConfigValue::List(items) => visit_list(items, visitor),
            ConfigValue::Map(map) => visit_entries(map.into_iter(), visitor),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self {
            ConfigValue::Null => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        match self {
            ConfigValue::Map(map) => visit_entries(align_keys(map, fields).into_iter(), visitor),
            other => other.deserialize_any(visitor),
        }
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        match self {
            ConfigValue::String(variant) => visitor.visit_enum(EnumAccess {
                variant,
                value: None,
            }),
            ConfigValue::Map(map) if map.len() == 1 => {
                let Some((variant, value)) = map.into_iter().next() else {
                    return Err(DecodeError::new("expected a single-key mapping for enum"));
                };
                visitor.visit_enum(EnumAccess {
                    variant,
                    value: Some(value),
                })
            }
            other => Err(de::Error::invalid_type(other.unexpected(), &"enum variant")),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map
        identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, DecodeError> for ConfigValue {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

impl ConfigValue {
    fn unexpected(&self) -> de::Unexpected<'_> {
        match self {
            ConfigValue::Null => de::Unexpected::Unit,
            ConfigValue::Bool(b) => de::Unexpected::Bool(*b),
            ConfigValue::Int(i) => de::Unexpected::Signed(*i),
            ConfigValue::Uint(u) => de::Unexpected::Unsigned(*u),
            ConfigValue::Float(f) => de::Unexpected::Float(*f),
            ConfigValue::String(s) => de::Unexpected::Str(s),
            ConfigValue::List(_) => de::Unexpected::Seq,
            ConfigValue::Map(_) => de::Unexpected::Map,
        }
    }
}

/// Enum access over either a bare variant name or a `{ variant: value }` mapping.
struct EnumAccess {
    variant: String,
    value: Option<ConfigValue>,
}

impl<'de> de::EnumAccess<'de> for EnumAccess {
    type Error = DecodeError;
    type Variant = VariantAccess;

    fn variant_seed<S>(self, seed: S) -> Result<(S::Value, Self::Variant), Self::Error>
    where
        S: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ConfigValue::String(self.variant))?;
        Ok((variant, VariantAccess { value: self.value }))
    }
}

struct VariantAccess {
    value: Option<ConfigValue>,
}

impl<'de> de::VariantAccess<'de> for VariantAccess {
    type Error = DecodeError;

    fn unit_variant(self) -> Result<(), Self::Error> {
        match self.value {
            None | Some(ConfigValue::Null) => Ok(()),
            Some(other) => Err(de::Error::invalid_type(other.unexpected(), &"unit variant")),
        }
    }

    fn newtype_variant_seed<S>(self, seed: S) -> Result<S::Value, Self::Error>
    where
        S: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(value),
            None => Err(de::Error::invalid_type(
                de::Unexpected::UnitVariant,
                &"newtype variant",
            )),
        }
    }

    fn tuple_variant<V: Visitor<'de>>(
        self,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        match self.value {
            Some(ConfigValue::List(items)) => visit_list(items, visitor),
            Some(other) => Err(de::Error::invalid_type(other.unexpected(), &"tuple variant")),
            None => Err(de::Error::invalid_type(
                de::Unexpected::UnitVariant,
                &"tuple variant",
            )),
        }
    }

    fn struct_variant<V: Visitor<'de>>(
        self,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        match self.value {
            Some(ConfigValue::Map(map)) => {
                visit_entries(align_keys(map, fields).into_iter(), visitor)
            }
            Some(other) => Err(de::Error::invalid_type(other.unexpected(), &"struct variant")),
            None => Err(de::Error::invalid_type(
                de::Unexpected::UnitVariant,
                &"struct variant",
            )),
        }
    }
}
