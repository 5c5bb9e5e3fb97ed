// DO NOT EDIT
// This file was @generated by Stone

#![allow(
    clippy::too_many_arguments,
    clippy::large_enum_variant,
    clippy::result_large_err,
    clippy::doc_markdown,
)]

pub type NamespaceId = String;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive] // variants may be added in the future
pub enum PathRoot {
    /// Paths are relative to the authenticating user's home namespace, whether or not that user
    /// belongs to a team.
    Home,
    /// Paths are relative to the authenticating user's root namespace (This results in
    /// `PathRootError::InvalidRoot` if the user's root namespace has changed.).
    Root(NamespaceId),
    /// Paths are relative to given namespace id (This results in `PathRootError::NoPermission` if
    /// you don't have access to this namespace.).
    NamespaceId(NamespaceId),
    /// Catch-all used for unrecognized values returned from the server. Encountering this value
    /// typically indicates that this SDK version is out of date.
    Other,
}

impl PathRoot {
    /// The union's discriminant, as it appears on the wire.
    pub fn tag_name(&self) -> &'static str {
        match self {
            PathRoot::Home => "home",
            PathRoot::Root(_) => "root",
            PathRoot::NamespaceId(_) => "namespace_id",
            PathRoot::Other => "other",
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, PathRoot::Home)
    }

    pub fn is_root(&self) -> bool {
        matches!(self, PathRoot::Root(_))
    }

    pub fn is_namespace_id(&self) -> bool {
        matches!(self, PathRoot::NamespaceId(_))
    }

    pub fn is_other(&self) -> bool {
        matches!(self, PathRoot::Other)
    }

    fn from_union_map<E: ::serde::de::Error>(
        mut parsed: crate::generated::UnionMap,
    ) -> Result<Self, E> {
        let tag = ::std::mem::take(&mut parsed.tag);
        let value = match tag.as_str() {
            "home" => PathRoot::Home,
            "root" => PathRoot::Root(parsed.take_field("root")?),
            "namespace_id" => PathRoot::NamespaceId(parsed.take_field("namespace_id")?),
            _ => PathRoot::Other,
        };
        Ok(value)
    }
}

impl<'de> ::serde::de::Deserialize<'de> for PathRoot {
    fn deserialize<D: ::serde::de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // union deserializer
        use serde::de::{self, MapAccess, Visitor};
        struct EnumVisitor;
        impl<'de> Visitor<'de> for EnumVisitor {
            type Value = PathRoot;
            fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str("a PathRoot structure")
            }
            fn visit_str<E: de::Error>(self, tag: &str) -> Result<Self::Value, E> {
                PathRoot::from_union_map(crate::generated::UnionMap::from_tag(tag))
            }
            fn visit_map<V: MapAccess<'de>>(self, map: V) -> Result<Self::Value, V::Error> {
                PathRoot::from_union_map(crate::generated::read_union_map(map)?)
            }
        }
        deserializer.deserialize_any(EnumVisitor)
    }
}

impl ::serde::ser::Serialize for PathRoot {
    fn serialize<S: ::serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // union serializer
        use serde::ser::SerializeStruct;
        match self {
            PathRoot::Home => {
                // unit
                let mut s = serializer.serialize_struct("PathRoot", 1)?;
                s.serialize_field(".tag", "home")?;
                s.end()
            }
            PathRoot::Root(x) => {
                // primitive
                let mut s = serializer.serialize_struct("PathRoot", 2)?;
                s.serialize_field(".tag", "root")?;
                s.serialize_field("root", x)?;
                s.end()
            }
            PathRoot::NamespaceId(x) => {
                // primitive
                let mut s = serializer.serialize_struct("PathRoot", 2)?;
                s.serialize_field(".tag", "namespace_id")?;
                s.serialize_field("namespace_id", x)?;
                s.end()
            }
            PathRoot::Other => Err(::serde::ser::Error::custom("cannot serialize 'Other' variant"))
        }
    }
}
