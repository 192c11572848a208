//! Payload decoding: gzip + JSON, spread construction and header extraction

pub mod gzip;
pub mod spreads;
pub mod headers;

pub use gzip::*;
pub use spreads::*;
pub use headers::*;

use crate::errors::HookResult;
use crate::types::Spread;

/// Decompresses and parses a raw hook body into validated spreads.
pub fn decode_spreads(raw_body: &[u8]) -> HookResult<Vec<Spread>> {
    let payload = unpack_gzip(raw_body)?;
    build_spreads(&payload)
}
