//! CBOR and JSON body codecs.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ContentType;
use crate::error::CodecError;

/// Serialize `value` as `content_type`.
///
/// # Errors
///
/// Returns an error when the serializer rejects the value.
pub fn encode<T: Serialize + ?Sized>(
    content_type: ContentType,
    value: &T,
) -> Result<Vec<u8>, CodecError> {
    match content_type {
        ContentType::Cbor => {
            let mut buffer = Vec::new();
            ciborium::into_writer(value, &mut buffer)
                .map_err(|source| CodecError::CborEncode { source })?;
            Ok(buffer)
        }
        ContentType::Json => {
            serde_json::to_vec(value).map_err(|source| CodecError::Json { source })
        }
    }
}

/// Deserialize `body` according to a declared `Content-Type` header value.
///
/// # Errors
///
/// Returns an error when the content type is absent or unsupported, or when
/// the body does not match `T`.
pub fn decode<T: DeserializeOwned>(
    declared: Option<&str>,
    body: &[u8],
) -> Result<T, CodecError> {
    let content_type = declared
        .and_then(ContentType::from_header)
        .ok_or_else(|| CodecError::UnsupportedContentType {
            content_type: declared.unwrap_or_default().to_string(),
        })?;
    match content_type {
        ContentType::Cbor => {
            ciborium::from_reader(body).map_err(|source| CodecError::CborDecode { source })
        }
        ContentType::Json => {
            serde_json::from_slice(body).map_err(|source| CodecError::Json { source })
        }
    }
}
