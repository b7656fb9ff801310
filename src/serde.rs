//! Serde helpers for byte fields carried as basE91 strings, for use with
//! `#[serde(with = "base91::serde")]`.

use serde::de::{Error, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

pub fn serialize<S: Serializer>(input: impl AsRef<[u8]>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&crate::encode(input))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    struct Base91Visitor;

    impl<'de> Visitor<'de> for Base91Visitor {
        type Value = Vec<u8>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a basE91 encoded string")
        }

        fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
            crate::decode(value).map_err(Error::custom)
        }
    }

    deserializer.deserialize_str(Base91Visitor)
}
