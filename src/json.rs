//! Protobuf JSON mapping for the descriptor fields serde cannot render on its
//! own: enumerations are written by name, bytes as standard base64 and
//! non-finite doubles as the strings `"NaN"`, `"Infinity"` and `"-Infinity"`.
//!
//! The `optional_*` modules are meant for `#[serde(with = "...")]`.

use core::fmt;
use core::marker::PhantomData;

use base64::Engine;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

/// An enumeration with proto value names, as declared in a `.proto` file.
pub trait ProtoEnum: Sized + TryFrom<i32> {
    fn as_str_name(&self) -> &'static str;
    fn from_str_name(value: &str) -> Option<Self>;
}

/// The raw number of an enumeration field, rendered by name when `E` knows it.
struct EnumNumber<E>(i32, PhantomData<E>);

impl<E> EnumNumber<E> {
    fn new(number: i32) -> Self {
        EnumNumber(number, PhantomData)
    }
}

impl<E: ProtoEnum> Serialize for EnumNumber<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match E::try_from(self.0) {
            Ok(known) => serializer.serialize_str(known.as_str_name()),
            Err(_) => serializer.serialize_i32(self.0),
        }
    }
}

impl<'de, E: ProtoEnum + Into<i32>> Deserialize<'de> for EnumNumber<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EnumVisitor<E>(PhantomData<E>);

        impl<E: ProtoEnum + Into<i32>> Visitor<'_> for EnumVisitor<E> {
            type Value = i32;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "an enum value name or number")
            }

            fn visit_str<Error>(self, v: &str) -> Result<Self::Value, Error>
            where
                Error: de::Error,
            {
                E::from_str_name(v)
                    .map(Into::into)
                    .ok_or_else(|| Error::invalid_value(de::Unexpected::Str(v), &self))
            }

            fn visit_i64<Error>(self, v: i64) -> Result<Self::Value, Error>
            where
                Error: de::Error,
            {
                i32::try_from(v).map_err(|_| Error::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_u64<Error>(self, v: u64) -> Result<Self::Value, Error>
            where
                Error: de::Error,
            {
                i32::try_from(v)
                    .map_err(|_| Error::invalid_value(de::Unexpected::Unsigned(v), &self))
            }
        }

        deserializer
            .deserialize_any(EnumVisitor::<E>(PhantomData))
            .map(EnumNumber::new)
    }
}

pub fn serialize_enum<E, S>(value: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error>
where
    E: ProtoEnum,
    S: Serializer,
{
    value
        .map(EnumNumber::<E>::new)
        .serialize(serializer)
}

pub fn deserialize_enum<'de, E, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    E: ProtoEnum + Into<i32>,
    D: Deserializer<'de>,
{
    Option::<EnumNumber<E>>::deserialize(deserializer).map(|value| value.map(|number| number.0))
}

pub fn serialize_enums<E, S>(values: &[i32], serializer: S) -> Result<S::Ok, S::Error>
where
    E: ProtoEnum,
    S: Serializer,
{
    serializer.collect_seq(values.iter().copied().map(EnumNumber::<E>::new))
}

pub fn deserialize_enums<'de, E, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
where
    E: ProtoEnum + Into<i32>,
    D: Deserializer<'de>,
{
    Vec::<EnumNumber<E>>::deserialize(deserializer)
        .map(|values| values.into_iter().map(|number| number.0).collect())
}

struct Base64(Vec<u8>);

impl Serialize for Base64 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&base64::display::Base64Display::new(
            &self.0,
            &base64::prelude::BASE64_STANDARD,
        ))
    }
}

impl<'de> Deserialize<'de> for Base64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Base64Visitor;

        impl Visitor<'_> for Base64Visitor {
            type Value = Vec<u8>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a base64 encoded string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                base64::prelude::BASE64_STANDARD
                    .decode(v)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_str(Base64Visitor).map(Base64)
    }
}

/// `Option<Vec<u8>>` as a base64 string.
pub mod optional_bytes {
    use super::*;

    pub fn serialize<S>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.clone().map(Base64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Base64>::deserialize(deserializer).map(|value| value.map(|bytes| bytes.0))
    }
}

struct Double(f64);

impl Serialize for Double {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.is_nan() {
            serializer.serialize_str("NaN")
        } else if self.0.is_infinite() {
            if self.0.is_sign_positive() {
                serializer.serialize_str("Infinity")
            } else {
                serializer.serialize_str("-Infinity")
            }
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Double {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DoubleVisitor;

        impl Visitor<'_> for DoubleVisitor {
            type Value = f64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a floating point number (f64)")
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let conv = v as f64;
                if conv as i64 == v {
                    Ok(conv)
                } else {
                    Err(E::invalid_value(de::Unexpected::Signed(v), &self))
                }
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let conv = v as f64;
                if conv as u64 == v {
                    Ok(conv)
                } else {
                    Err(E::invalid_value(de::Unexpected::Unsigned(v), &self))
                }
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match v {
                    "NaN" => Ok(f64::NAN),
                    "Infinity" => Ok(f64::INFINITY),
                    "-Infinity" => Ok(f64::NEG_INFINITY),
                    v => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
                }
            }
        }

        deserializer.deserialize_any(DoubleVisitor).map(Double)
    }
}

/// `Option<f64>`, with non-finite values as strings.
pub mod optional_double {
    use super::*;

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.map(Double).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Double>::deserialize(deserializer).map(|value| value.map(|double| double.0))
    }
}
