//! Byte-Framing des Wire-Tokens: gzip (optional) + base64url ohne Padding.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Obergrenze für dekomprimierte Payloads (Schutz vor Gzip-Bomben in Links).
pub const MAX_DECODED_BYTES: usize = 4 * 1024 * 1024;

/// RFC 4648 §5: `-`/`_` statt `+`/`/`, kein `=` beim Kodieren.
/// Beim Dekodieren wird Padding toleriert, aber nicht verlangt.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Kompression beim Kodieren. `None` entspricht einer Laufzeit ohne Kompressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    Gzip,
    None,
}

/// Kodiert Bytes als base64url ohne Padding.
pub fn base64url_encode(bytes: &[u8]) -> String {
    URL_SAFE_LENIENT.encode(bytes)
}

/// Dekodiert base64url (Padding optional).
pub fn base64url_decode(token: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_LENIENT.decode(token.trim())
}

/// Komprimiert mit gzip. Fehler werden dem Aufrufer gemeldet.
pub fn gzip_compress(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}

/// Versucht gzip-Dekompression.
///
/// `None`, wenn die Bytes kein gültiger gzip-Strom sind (z.B. Legacy-Klartext-JSON).
/// `Some(Err(..))`, wenn der Strom die Größenbegrenzung überschreitet.
pub fn gzip_decompress(bytes: &[u8]) -> Option<Result<Vec<u8>, usize>> {
    let mut decoder = GzDecoder::new(bytes).take(MAX_DECODED_BYTES as u64 + 1);
    let mut out = Vec::new();
    match decoder.read_to_end(&mut out) {
        Ok(_) if out.len() > MAX_DECODED_BYTES => Some(Err(out.len())),
        Ok(_) => Some(Ok(out)),
        Err(e) => {
            log::debug!("Keine gzip-Daten, verwende Rohbytes: {}", e);
            None
        }
    }
}

/// Bytes → Token: komprimieren (falls gewünscht und möglich), dann base64url.
pub fn frame(payload: &[u8], compression: Compression) -> String {
    let bytes = match compression {
        Compression::Gzip => match gzip_compress(payload) {
            Ok(compressed) => compressed,
            Err(e) => {
                log::warn!("gzip fehlgeschlagen, Token bleibt unkomprimiert: {}", e);
                payload.to_vec()
            }
        },
        Compression::None => payload.to_vec(),
    };
    base64url_encode(&bytes)
}
