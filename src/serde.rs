use crate::id::K;
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serializes as the tagged 18-character string form, so JSON documents
/// sort the same way the identifiers do.
impl Serialize for K {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for K {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KVisitor;

        impl serde::de::Visitor<'_> for KVisitor {
            type Value = K;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a tagged k-order identifier string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(KVisitor)
    }
}
