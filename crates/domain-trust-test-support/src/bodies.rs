//! Response bodies as the service would put them on the wire.

use std::io::Write;

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Serialize;

/// `Content-Type` value for CBOR bodies.
pub const CBOR: &str = "application/cbor";
/// `Content-Type` value for JSON bodies.
pub const JSON: &str = "application/json";

/// Encode `value` as CBOR.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn cbor<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    ciborium::into_writer(value, &mut buffer).context("encode cbor body")?;
    Ok(buffer)
}

/// Encode `value` as JSON.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).context("encode json body")
}

/// Compress `raw` with zstd.
///
/// # Errors
///
/// Returns an error when the encoder fails.
pub fn zstd(raw: &[u8]) -> Result<Vec<u8>> {
    zstd::stream::encode_all(raw, 0).context("zstd compress body")
}

/// Decompress a zstd stream.
///
/// # Errors
///
/// Returns an error when `packed` is not a valid stream.
pub fn unzstd(packed: &[u8]) -> Result<Vec<u8>> {
    zstd::stream::decode_all(packed).context("zstd decompress body")
}

/// Compress `raw` with gzip.
///
/// # Errors
///
/// Returns an error when the encoder fails.
pub fn gzip(raw: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(raw).context("gzip compress body")?;
    encoder.finish().context("finish gzip body")
}

/// A JSON error envelope with the given detail and messages.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn error_envelope_json(status: u16, detail: &str, messages: &[&str]) -> Result<Vec<u8>> {
    let errors: Vec<serde_json::Value> = messages
        .iter()
        .map(|message| serde_json::json!({ "message": message }))
        .collect();
    json(&serde_json::json!({
        "status": status,
        "detail": detail,
        "errors": errors,
    }))
}
