//! Fixed-width assignment records.
//!
//! ```text
//! [8 bytes: token id, u64 LE]
//! [8 bytes: x, i64 LE]
//! [8 bytes: y, i64 LE]
//! [8 bytes: layer, u64 LE]
//! ```

use crate::error::{Error, Result};
use crate::{Assignment, LandCoord, TokenId};

/// Size of one encoded assignment.
pub const RECORD_LEN: usize = 32;

impl Assignment {
    /// Encode as a fixed-width little-endian record.
    pub fn to_record(&self) -> [u8; RECORD_LEN] {
        let mut buf = [0u8; RECORD_LEN];
        buf[0..8].copy_from_slice(&self.token_id.value().to_le_bytes());
        buf[8..16].copy_from_slice(&self.coord.x.to_le_bytes());
        buf[16..24].copy_from_slice(&self.coord.y.to_le_bytes());
        buf[24..32].copy_from_slice(&self.layer.to_le_bytes());
        buf
    }

    /// Decode a record produced by [`to_record`](Self::to_record).
    pub fn from_record(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; RECORD_LEN] = bytes.try_into().map_err(|_| {
            Error::InvalidRecord(format!(
                "expected {RECORD_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;

        let word = |i: usize| {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(&bytes[i * 8..(i + 1) * 8]);
            raw
        };

        let token_id = u64::from_le_bytes(word(0));
        let x = i64::from_le_bytes(word(1));
        let y = i64::from_le_bytes(word(2));
        let layer = u64::from_le_bytes(word(3));

        if token_id == 0 {
            return Err(Error::InvalidRecord("token id 0 is never minted".into()));
        }
        if layer == 0 {
            return Err(Error::InvalidRecord(format!(
                "token {token_id} has layer 0"
            )));
        }

        Ok(Self {
            token_id: TokenId(token_id),
            coord: LandCoord::new(x, y),
            layer,
        })
    }
}

/// Encode a sequence of assignments back to back.
pub fn encode_records(assignments: &[Assignment]) -> Vec<u8> {
    let mut out = Vec::with_capacity(assignments.len() * RECORD_LEN);
    for a in assignments {
        out.extend_from_slice(&a.to_record());
    }
    out
}

/// Decode a buffer of back-to-back records.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<Assignment>> {
    if bytes.len() % RECORD_LEN != 0 {
        return Err(Error::InvalidRecord(format!(
            "buffer of {} bytes is not a whole number of records",
            bytes.len()
        )));
    }
    bytes.chunks_exact(RECORD_LEN).map(Assignment::from_record).collect()
}
