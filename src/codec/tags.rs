//! Transaction tag encoding.

use serde::{Deserialize, Serialize};

use crate::codec::base64url::{decode_base64_url, encode_base64_url};
use crate::codec::CodecResult;

/// A name/value metadata pair attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Encode every tag's name and value for transmission to the gateway.
pub fn encode_tags(tags: &[Tag]) -> Vec<Tag> {
    tags.iter()
        .map(|tag| Tag {
            name: encode_base64_url(&tag.name),
            value: encode_base64_url(&tag.value),
        })
        .collect()
}

/// Decode tags received from the gateway into plain text.
///
/// Fails on the first tag whose name or value is not valid Base64URL text.
pub fn decode_tags(tags: &[Tag]) -> CodecResult<Vec<Tag>> {
    tags.iter()
        .map(|tag| {
            Ok(Tag {
                name: decode_base64_url(&tag.name)?,
                value: decode_base64_url(&tag.value)?,
            })
        })
        .collect()
}
