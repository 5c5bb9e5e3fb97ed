// DO NOT EDIT
// This file was @generated by Stone

#![allow(
    clippy::too_many_arguments,
    clippy::large_enum_variant,
    clippy::result_large_err,
    clippy::doc_markdown,
    clippy::doc_lazy_continuation,
)]

use serde::de::{self, MapAccess};

/// A union value read off the wire: its discriminant, plus every other field of the object.
///
/// Both the flattened form `{".tag": "<tag>", "<field>": ...}` and the nested form
/// `{"<tag>": <payload>}` are accepted. In the nested form the payload is kept under the tag's
/// own name, which is where the flattened form puts the value of a single-field variant.
pub(crate) struct UnionMap {
    pub tag: String,
    pub fields: ::serde_json::Map<String, ::serde_json::Value>,
}

impl UnionMap {
    /// A union given as a bare string, which can only name a void variant.
    pub fn from_tag(tag: &str) -> Self {
        UnionMap {
            tag: tag.to_owned(),
            fields: ::serde_json::Map::new(),
        }
    }

    /// Take the named field, converting it to the requested type.
    pub fn take_field<T, E>(&mut self, name: &'static str) -> Result<T, E>
    where
        T: ::serde::de::DeserializeOwned,
        E: de::Error,
    {
        match self.fields.remove(name) {
            Some(value) => ::serde_json::from_value(value).map_err(E::custom),
            None => Err(E::missing_field(name)),
        }
    }
}

pub(crate) fn read_union_map<'de, V>(mut map: V) -> Result<UnionMap, V::Error>
where
    V: MapAccess<'de>,
{
    let mut tag = None;
    let mut fields = ::serde_json::Map::new();
    while let Some(key) = map.next_key::<String>()? {
        if key == ".tag" {
            if tag.is_some() {
                return Err(de::Error::duplicate_field(".tag"));
            }
            tag = Some(map.next_value::<String>()?);
        } else {
            let value = map.next_value::<::serde_json::Value>()?;
            fields.insert(key, value);
        }
    }
    let tag = match tag {
        Some(tag) => tag,
        None => match fields.keys().next() {
            Some(key) if fields.len() == 1 => key.clone(),
            _ => return Err(de::Error::missing_field(".tag")),
        },
    };
    Ok(UnionMap { tag, fields })
}

if_feature! { "dbx_common", pub mod common; }

if_feature! { "dbx_files", pub mod files; }
