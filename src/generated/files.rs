// DO NOT EDIT
// This file was @generated by Stone

#![allow(
    clippy::too_many_arguments,
    clippy::large_enum_variant,
    clippy::result_large_err,
    clippy::doc_markdown,
)]

//! This namespace contains endpoints and data types for basic file operations.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive] // variants may be added in the future
pub enum PaperContentError {
    /// Your account does not have permissions to edit Paper docs.
    InsufficientPermissions,
    /// The provided content was malformed and cannot be imported to Paper.
    ContentMalformed,
    /// The Paper doc would be too large, split the content into multiple docs.
    DocLengthExceeded,
    /// The imported document contains an image that is too large. The current limit is 1MB. This
    /// only applies to HTML with data URI.
    ImageSizeExceeded,
    /// Catch-all used for unrecognized values returned from the server. Encountering this value
    /// typically indicates that this SDK version is out of date.
    Other,
}

impl PaperContentError {
    /// Every discriminant this union can be serialized with.
    pub const TAGS: &'static [&'static str] = &["insufficient_permissions",
                                                 "content_malformed",
                                                 "doc_length_exceeded",
                                                 "image_size_exceeded",
                                                 "other"];

    /// The union's discriminant, as it appears on the wire.
    pub fn tag_name(&self) -> &'static str {
        match self {
            PaperContentError::InsufficientPermissions => "insufficient_permissions",
            PaperContentError::ContentMalformed => "content_malformed",
            PaperContentError::DocLengthExceeded => "doc_length_exceeded",
            PaperContentError::ImageSizeExceeded => "image_size_exceeded",
            PaperContentError::Other => "other",
        }
    }

    /// Look up the variant for a discriminant. Unrecognized values map to
    /// [`PaperContentError::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "insufficient_permissions" => PaperContentError::InsufficientPermissions,
            "content_malformed" => PaperContentError::ContentMalformed,
            "doc_length_exceeded" => PaperContentError::DocLengthExceeded,
            "image_size_exceeded" => PaperContentError::ImageSizeExceeded,
            _ => PaperContentError::Other,
        }
    }

    pub fn is_insufficient_permissions(&self) -> bool {
        matches!(self, PaperContentError::InsufficientPermissions)
    }

    pub fn is_content_malformed(&self) -> bool {
        matches!(self, PaperContentError::ContentMalformed)
    }

    pub fn is_doc_length_exceeded(&self) -> bool {
        matches!(self, PaperContentError::DocLengthExceeded)
    }

    pub fn is_image_size_exceeded(&self) -> bool {
        matches!(self, PaperContentError::ImageSizeExceeded)
    }

    pub fn is_other(&self) -> bool {
        matches!(self, PaperContentError::Other)
    }
}

impl<'de> ::serde::de::Deserialize<'de> for PaperContentError {
    fn deserialize<D: ::serde::de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // union deserializer
        use serde::de::{self, MapAccess, Visitor};
        struct EnumVisitor;
        impl<'de> Visitor<'de> for EnumVisitor {
            type Value = PaperContentError;
            fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str("a PaperContentError structure")
            }
            fn visit_str<E: de::Error>(self, tag: &str) -> Result<Self::Value, E> {
                Ok(PaperContentError::from_tag(tag))
            }
            fn visit_map<V: MapAccess<'de>>(self, map: V) -> Result<Self::Value, V::Error> {
                let parsed = crate::generated::read_union_map(map)?;
                Ok(PaperContentError::from_tag(&parsed.tag))
            }
        }
        deserializer.deserialize_any(EnumVisitor)
    }
}

impl ::serde::ser::Serialize for PaperContentError {
    fn serialize<S: ::serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // union serializer
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("PaperContentError", 1)?;
        s.serialize_field(".tag", self.tag_name())?;
        s.end()
    }
}

impl ::std::error::Error for PaperContentError {
}

impl ::std::fmt::Display for PaperContentError {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
            PaperContentError::InsufficientPermissions => f.write_str("Your account does not have permissions to edit Paper docs."),
            PaperContentError::ContentMalformed => f.write_str("The provided content was malformed and cannot be imported to Paper."),
            PaperContentError::DocLengthExceeded => f.write_str("The Paper doc would be too large, split the content into multiple docs."),
            PaperContentError::ImageSizeExceeded => f.write_str("The imported document contains an image that is too large. The current limit is 1MB. This only applies to HTML with data URI."),
            PaperContentError::Other => write!(f, "{:?}", *self),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tag_lookup_covers_every_variant() {
        for tag in PaperContentError::TAGS {
            assert_eq!(*tag, PaperContentError::from_tag(tag).tag_name());
        }
        assert_eq!(PaperContentError::Other, PaperContentError::from_tag("Doc_Length_Exceeded"));
    }
}
