//! Lenient decoding helpers shared by the entity types.

use std::fmt::{self, Display};
use std::marker::PhantomData;

use serde::de::{self, Deserialize, DeserializeOwned, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::Value;

use crate::{ConfigError, ConfigResult};

/// Leads the decoder message for a rejected boolean; the value follows in
/// backticks.
const REJECTED_BOOLEAN: &str = "cannot coerce boolean `";

/// Map a boolean-like string to `true` or `false`.
///
/// Accepts `true`, `false`, `1`, `0`, `on` and `off`, ignoring ASCII case.
///
/// # Errors
///
/// Returns [`ConfigError::BooleanCoercion`] for any other value.
///
/// # Examples
///
/// ```
/// use import_config::model::map_boolean;
///
/// assert_eq!(map_boolean("On").ok(), Some(true));
/// assert_eq!(map_boolean("0").ok(), Some(false));
/// assert!(map_boolean("maybe").is_err());
/// ```
pub fn map_boolean(value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" => Ok(true),
        "false" | "0" | "off" => Ok(false),
        _ => Err(ConfigError::boolean_coercion(value)),
    }
}

struct BooleanVisitor;

impl Visitor<'_> for BooleanVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean or one of true/false/1/0/on/off")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
        match v {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(rejected_boolean(v)),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
        u64::try_from(v).map_or_else(|_| Err(rejected_boolean(v)), |unsigned| self.visit_u64(unsigned))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
        map_boolean(v).map_err(|_| rejected_boolean(v))
    }
}

fn rejected_boolean<E: de::Error>(value: impl Display) -> E {
    E::custom(format_args!("{REJECTED_BOOLEAN}{value}`"))
}

/// Decode a typed value from `tree`, naming `origin` in any error.
///
/// A rejected boolean surfaces as [`ConfigError::BooleanCoercion`]; every
/// other failure is a [`ConfigError::Decode`].
pub(crate) fn from_tree<T>(origin: &str, tree: Value) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(tree).map_err(|err| {
        let message = err.to_string();
        message
            .split_once(REJECTED_BOOLEAN)
            .and_then(|(_, rest)| rest.split_once('`'))
            .map_or_else(
                || ConfigError::decode(origin, &message),
                |(value, _)| ConfigError::boolean_coercion(value),
            )
    })
}

/// Deserialize a boolean field that may also be written as a string.
pub(crate) fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(BooleanVisitor)
}

struct SeqOrMapVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for SeqOrMapVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = Vec<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence or a mapping of entries")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Vec<T>, E> {
        Ok(Vec::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Vec<T>, E> {
        Ok(Vec::new())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Vec<T>, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(items)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Vec<T>, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut items = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((_, item)) = map.next_entry::<de::IgnoredAny, T>()? {
            items.push(item);
        }
        Ok(items)
    }
}

/// Deserialize a value that may be written as `null`, which stands for the
/// type's default.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserialize a collection written either as a sequence or as a mapping
/// whose values are the entries.
pub(crate) fn seq_or_map<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    deserializer.deserialize_any(SeqOrMapVisitor(PhantomData))
}
