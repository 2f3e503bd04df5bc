//! String-based serde support for [`SafeInteger`] and [`SafeFloat`].
//!
//! Both types travel as JSON strings so that a lossy numeral never passes
//! through a general-purpose number parser before it is checked.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::strict::{SafeFloat, SafeInteger, SafeNumberError};

struct StrictVisitor<T> {
    expecting: &'static str,
    marker: PhantomData<T>,
}

impl<T> StrictVisitor<T> {
    const fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            marker: PhantomData,
        }
    }
}

impl<T> Visitor<'_> for StrictVisitor<T>
where
    T: FromStr<Err = SafeNumberError>,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }

    fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let text = std::str::from_utf8(value)
            .map_err(|_| E::invalid_value(de::Unexpected::Bytes(value), &self))?;
        self.visit_str(text)
    }
}

impl<'de> Deserialize<'de> for SafeInteger {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(StrictVisitor::new("a string holding a safe integer"))
    }
}

impl<'de> Deserialize<'de> for SafeFloat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(StrictVisitor::new(
            "a string holding an exactly representable number",
        ))
    }
}

impl Serialize for SafeInteger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Serialize for SafeFloat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
