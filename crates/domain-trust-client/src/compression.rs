//! Body compression.
//!
//! Outgoing bodies support zstd only; incoming bodies are inflated according
//! to their `Content-Encoding` (zstd or gzip), anything else passes through.

use std::io::Read;

use bytes::Bytes;
use flate2::read::GzDecoder;

use crate::config::Encoding;
use crate::error::CompressionError;

/// Compress an outgoing body.
///
/// # Errors
///
/// Returns an error for encodings that are decode-only, or when the encoder fails.
pub fn compress(encoding: Encoding, raw: &[u8]) -> Result<Vec<u8>, CompressionError> {
    match encoding {
        Encoding::Zstd => zstd::stream::encode_all(raw, zstd::DEFAULT_COMPRESSION_LEVEL)
            .map_err(|source| CompressionError::Zstd { source }),
        Encoding::Gzip => Err(CompressionError::UnsupportedRequestEncoding {
            encoding: encoding.as_str(),
        }),
    }
}

/// Decompress an incoming body according to its `Content-Encoding` header.
///
/// # Errors
///
/// Returns an error when the body is not a valid stream for its declared encoding.
pub fn decompress(content_encoding: Option<&str>, body: Bytes) -> Result<Bytes, CompressionError> {
    if body.is_empty() {
        return Ok(body);
    }
    match content_encoding.and_then(Encoding::from_header) {
        Some(Encoding::Zstd) => zstd::stream::decode_all(&body[..])
            .map(Bytes::from)
            .map_err(|source| CompressionError::Zstd { source }),
        Some(Encoding::Gzip) => {
            let mut inflated = Vec::new();
            GzDecoder::new(&body[..])
                .read_to_end(&mut inflated)
                .map_err(|source| CompressionError::Gzip { source })?;
            Ok(Bytes::from(inflated))
        }
        None => Ok(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    #[test]
    fn zstd_bodies_survive_compression() {
        let raw = b"domain trust payload".repeat(16);
        let packed = compress(Encoding::Zstd, &raw).expect("compress");
        assert_ne!(packed, raw);
        let unpacked = decompress(Some("zstd"), Bytes::from(packed)).expect("decompress");
        assert_eq!(&unpacked[..], &raw[..]);
    }

    #[test]
    fn gzip_is_decode_only() {
        let err = compress(Encoding::Gzip, b"body").expect_err("gzip request");
        assert!(matches!(
            err,
            CompressionError::UnsupportedRequestEncoding { encoding: "gzip" }
        ));

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"inflated").expect("write");
        let packed = encoder.finish().expect("finish");
        let unpacked = decompress(Some("gzip"), Bytes::from(packed)).expect("decompress");
        assert_eq!(&unpacked[..], b"inflated");
    }

    #[test]
    fn unknown_or_absent_encoding_passes_through() {
        let body = Bytes::from_static(b"plain");
        assert_eq!(decompress(None, body.clone()).expect("none"), body);
        assert_eq!(decompress(Some("br"), body.clone()).expect("br"), body);
    }

    #[test]
    fn corrupt_stream_fails() {
        let err = decompress(Some("zstd"), Bytes::from_static(b"not zstd")).expect_err("corrupt");
        assert!(matches!(err, CompressionError::Zstd { .. }));
    }
}
