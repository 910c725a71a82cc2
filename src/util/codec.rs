/*
Copyright 2026 Dispatch SDK Authors

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/
//! # Byte level conversions used by the wire and signable encodings

use crate::error::Error;
use byteorder::{ByteOrder, LittleEndian};
use num_bigint::{BigInt, Sign};
use std::convert::TryFrom;

/// Plain lowercase hex, without `0x` prefix, as used by the node API
pub struct Hex {}

impl Hex {
    /// Decode hex in any letter case
    pub fn decode<S: AsRef<str>>(s: S) -> Result<Vec<u8>, Error> {
        hex::decode(s.as_ref()).map_err(Error::from)
    }

    /// Encode as lowercase hex
    pub fn encode<T: AsRef<[u8]>>(n: T) -> String {
        hex::encode(n)
    }
}

/// Convert a non-negative integer into exactly `width` big-endian bytes, left padded with zeroes.
///
/// The sign byte which two's complement representation puts in front of a value with the
/// highest bit set is not counted, i.e. `255` fits into 1 byte.
pub fn to_fixed_bytes(value: &BigInt, width: usize) -> Result<Vec<u8>, Error> {
    if value.sign() == Sign::Minus {
        return Err(Error::EncodingError(format!("Negative value: {}", value)));
    }
    if width == 0 {
        return Err(Error::EncodingError("Width must be positive".to_string()));
    }
    let src = value.to_signed_bytes_be();
    let magnitude = match src.first() {
        Some(0) => &src[1..],
        _ => &src[..],
    };
    if magnitude.len() > width {
        return Err(Error::EncodingError(format!(
            "Value doesn't fit into {} bytes",
            width
        )));
    }
    let mut dest = vec![0u8; width];
    dest[(width - magnitude.len())..].copy_from_slice(magnitude);
    Ok(dest)
}

/// Fixed width little-endian representation of an unsigned 64-bit value
pub fn u64_to_le_bytes(value: u64) -> [u8; 8] {
    let mut buf = [0u8; 8];
    LittleEndian::write_u64(&mut buf, value);
    buf
}

/// Append `data` prefixed with its length as a 4-byte little-endian integer
pub fn write_var_bytes(buf: &mut Vec<u8>, data: &[u8]) -> Result<(), Error> {
    let len = u32::try_from(data.len())
        .map_err(|_| Error::EncodingError(format!("Field is too long: {}", data.len())))?;
    let mut prefix = [0u8; 4];
    LittleEndian::write_u32(&mut prefix, len);
    buf.extend_from_slice(&prefix);
    buf.extend_from_slice(data);
    Ok(())
}
