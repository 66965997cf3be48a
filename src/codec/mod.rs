//! Wire-Codec: State-Einträge ↔ URL-sicheres Token.
//!
//! Encoder schreibt immer das aktuelle Flat-Schema; der Decoder liest alle
//! im Umlauf befindlichen Schemata.

pub mod decoder;
pub mod encoder;
pub mod framing;
pub mod url_params;

pub use decoder::{
    decode_json, decode_payload, decode_state, try_decode_state, DecodeError, DecodedState,
    WireSchema,
};
pub use encoder::{encode_state, entries_to_json};
pub use framing::{Compression, MAX_DECODED_BYTES};
pub use url_params::{build_share_url, parse_url_params, resolve_map, UrlParams};
