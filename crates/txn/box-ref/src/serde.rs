//! Serde support for [`BoxReference`].
//!
//! A reference serializes as the same sparse map [`crate::to_wire_map`]
//! produces: `"i"` only for a nonzero index, `"n"` only for a nonempty name,
//! always in that order.
//!
//! Like other byte fields, names are written as a string in human-readable
//! formats when they are valid UTF-8, and with `serialize_bytes` otherwise.
//! Deserializing accepts either form and fills missing tags with a zero index
//! or empty name.

use std::{fmt, str};

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::reference::BoxReference;
use crate::types::{ForeignIndex, INDEX_TAG, NAME_TAG};

const FIELDS: &[&str] = &[INDEX_TAG, NAME_TAG];

/// Upper bound on preallocation from an untrusted length hint.
const MAX_NAME_PREALLOC: usize = 4096;

struct NameRef<'a>(&'a [u8]);

impl Serialize for NameRef<'_> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            if let Ok(text) = str::from_utf8(self.0) {
                return s.serialize_str(text);
            }
        }

        s.serialize_bytes(self.0)
    }
}

impl Serialize for BoxReference {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let has_index = self.app_index() != 0;
        let has_name = !self.name().is_empty();

        let mut map = s.serialize_map(Some(has_index as usize + has_name as usize))?;
        if has_index {
            map.serialize_entry(INDEX_TAG, &self.app_index())?;
        }
        if has_name {
            map.serialize_entry(NAME_TAG, &NameRef(self.name()))?;
        }
        map.end()
    }
}

enum Field {
    Index,
    Name,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct FieldVisitor;

        impl Visitor<'_> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "`{INDEX_TAG}` or `{NAME_TAG}`")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Field, E> {
                match v {
                    INDEX_TAG => Ok(Field::Index),
                    NAME_TAG => Ok(Field::Name),
                    _ => Err(E::unknown_field(v, FIELDS)),
                }
            }
        }

        d.deserialize_str(FieldVisitor)
    }
}

struct NameBuf(Vec<u8>);

impl<'de> Deserialize<'de> for NameBuf {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct NameVisitor;

        impl<'de> Visitor<'de> for NameVisitor {
            type Value = NameBuf;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "box name bytes")
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<NameBuf, E> {
                Ok(NameBuf(v.to_vec()))
            }

            fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<NameBuf, E> {
                Ok(NameBuf(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<NameBuf, E> {
                Ok(NameBuf(v.as_bytes().to_vec()))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<NameBuf, A::Error> {
                let cap = seq.size_hint().unwrap_or(0).min(MAX_NAME_PREALLOC);
                let mut buf = Vec::with_capacity(cap);
                while let Some(b) = seq.next_element::<u8>()? {
                    buf.push(b);
                }
                Ok(NameBuf(buf))
            }
        }

        d.deserialize_byte_buf(NameVisitor)
    }
}

impl<'de> Deserialize<'de> for BoxReference {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct RefVisitor;

        impl<'de> Visitor<'de> for RefVisitor {
            type Value = BoxReference;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a box reference map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<BoxReference, A::Error> {
                let mut index: Option<ForeignIndex> = None;
                let mut name: Option<Vec<u8>> = None;

                while let Some(key) = map.next_key::<Field>()? {
                    match key {
                        Field::Index => {
                            if index.is_some() {
                                return Err(de::Error::duplicate_field(INDEX_TAG));
                            }
                            index = Some(map.next_value()?);
                        }
                        Field::Name => {
                            if name.is_some() {
                                return Err(de::Error::duplicate_field(NAME_TAG));
                            }
                            name = Some(map.next_value::<NameBuf>()?.0);
                        }
                    }
                }

                Ok(BoxReference::new(index.unwrap_or(0), name.unwrap_or_default()))
            }
        }

        d.deserialize_map(RefVisitor)
    }
}
