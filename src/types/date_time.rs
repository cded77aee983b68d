// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! DateTime codec.
//!
//! OPC UA encodes an instant as an i64 count of 100 nanosecond ticks since
//! 1601-01-01T00:00:00Z. Instants at or before that epoch encode as `0`;
//! instants at or after 9999-12-31T23:59:59Z encode as `i64::MAX`. Decoding
//! clamps the same way: ticks at or below `0` decode to the epoch and ticks at
//! or above [`MAX_TICKS`] decode to [`max_value`].
//!
//! Instants round-trip exactly inside `(epoch, max_value)`. Raw bytes do not
//! always survive decode then encode: negative ticks re-encode as `0` and
//! ticks in `MAX_TICKS..i64::MAX` re-encode as `i64::MAX`.

use chrono::{DateTime, Duration, Utc};

use crate::core::{CodecError, Result};
use crate::encoding::{ReadCursor, WriteCursor};

/// Encoded size of a DateTime.
pub const DATE_TIME_LEN: usize = 8;

/// Seconds between 1601-01-01 and 1970-01-01.
pub const EPOCH_OFFSET_SECONDS: i64 = 11_644_473_600;

/// Ticks per second (one tick is 100ns).
pub const TICKS_PER_SECOND: i64 = 10_000_000;

const NANOS_PER_TICK: i64 = 100;

/// Unix seconds of 9999-12-31T23:59:59Z.
const MAX_UNIX_SECONDS: i64 = 253_402_300_799;

/// Tick count of 9999-12-31T23:59:59Z.
pub const MAX_TICKS: i64 = (EPOCH_OFFSET_SECONDS + MAX_UNIX_SECONDS) * TICKS_PER_SECOND;

fn unix_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::default()
}

/// 1601-01-01T00:00:00Z, the zero value of every DateTime field.
pub fn epoch() -> DateTime<Utc> {
    unix_epoch() - Duration::seconds(EPOCH_OFFSET_SECONDS)
}

/// 9999-12-31T23:59:59Z, the instant `i64::MAX` ticks decodes to.
pub fn max_value() -> DateTime<Utc> {
    unix_epoch() + Duration::seconds(MAX_UNIX_SECONDS)
}

/// Convert an instant to its tick count, clamping to the encodable range.
pub fn to_ticks(dt: &DateTime<Utc>) -> i64 {
    if *dt <= epoch() {
        return 0;
    }
    if *dt >= max_value() {
        return i64::MAX;
    }
    let since = dt.signed_duration_since(epoch());
    let secs = since.num_seconds();
    let sub_nanos = (since - Duration::seconds(secs))
        .num_nanoseconds()
        .unwrap_or(0);
    secs * TICKS_PER_SECOND + sub_nanos / NANOS_PER_TICK
}

/// Convert a tick count to an instant.
pub fn from_ticks(ticks: i64) -> Result<DateTime<Utc>> {
    if ticks <= 0 {
        return Ok(epoch());
    }
    if ticks >= MAX_TICKS {
        return Ok(max_value());
    }
    let secs = ticks / TICKS_PER_SECOND;
    let nanos = (ticks % TICKS_PER_SECOND) * NANOS_PER_TICK;
    epoch()
        .checked_add_signed(Duration::seconds(secs) + Duration::nanoseconds(nanos))
        .ok_or_else(|| CodecError::invalid_timestamp(ticks))
}

/// Decode an 8-byte tick buffer.
pub fn decode(bytes: &[u8]) -> Result<DateTime<Utc>> {
    read(&mut ReadCursor::new(bytes))
}

/// Encode an instant into the first 8 bytes of `buf`.
pub fn encode(buf: &mut [u8], dt: &DateTime<Utc>) -> Result<()> {
    write(&mut WriteCursor::new(buf), dt)
}

/// Read a DateTime at the cursor.
pub fn read(r: &mut ReadCursor<'_>) -> Result<DateTime<Utc>> {
    from_ticks(r.read_i64()?)
}

/// Write a DateTime at the cursor.
pub fn write(w: &mut WriteCursor<'_>, dt: &DateTime<Utc>) -> Result<()> {
    w.write_i64(to_ticks(dt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_known_instant() {
        let dt = Utc
            .with_ymd_and_hms(2018, 9, 17, 14, 28, 29)
            .unwrap()
            + Duration::milliseconds(112);
        let mut buf = [0u8; 8];
        encode(&mut buf, &dt).unwrap();
        assert_eq!(buf, [0x80, 0x3b, 0xe8, 0xb3, 0x92, 0x4e, 0xd4, 0x01]);
        assert_eq!(decode(&buf).unwrap(), dt);
    }

    #[test]
    fn test_epoch_is_zero() {
        assert_eq!(to_ticks(&epoch()), 0);
        assert_eq!(from_ticks(0).unwrap(), epoch());
        assert_eq!(
            epoch(),
            Utc.with_ymd_and_hms(1601, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_before_epoch_clamps() {
        let dt = Utc.with_ymd_and_hms(1500, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(to_ticks(&dt), 0);
        assert_eq!(from_ticks(-5).unwrap(), epoch());
    }

    #[test]
    fn test_max_clamps() {
        let dt = Utc.with_ymd_and_hms(10_500, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(to_ticks(&dt), i64::MAX);
        assert_eq!(from_ticks(i64::MAX).unwrap(), max_value());
    }

    #[test]
    fn test_max_ticks_matches_max_value() {
        assert_eq!(from_ticks(MAX_TICKS).unwrap(), max_value());
        assert_eq!(from_ticks(MAX_TICKS - 1).unwrap(), max_value() - Duration::nanoseconds(100));
        assert_eq!(to_ticks(&(max_value() - Duration::nanoseconds(100))), MAX_TICKS - 1);
    }

    #[test]
    fn test_ticks_past_max_decode_to_max_value() {
        let buf = [0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f];
        let dt = decode(&buf).unwrap();
        assert_eq!(dt, max_value());

        let mut out = [0u8; 8];
        encode(&mut out, &dt).unwrap();
        assert_eq!(out, [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f]);
        assert_eq!(decode(&out).unwrap(), dt);
    }

    #[test]
    fn test_negative_ticks_reencode_as_zero() {
        let dt = decode(&(-1i64).to_le_bytes()).unwrap();
        assert_eq!(dt, epoch());
        let mut out = [0xaau8; 8];
        encode(&mut out, &dt).unwrap();
        assert_eq!(out, [0u8; 8]);
    }

    #[test]
    fn test_tick_precision() {
        let dt = epoch() + Duration::nanoseconds(1_234_567_800);
        assert_eq!(to_ticks(&dt), 12_345_678);
        assert_eq!(from_ticks(12_345_678).unwrap(), dt);
    }

    #[test]
    fn test_decode_short_buffer() {
        assert!(decode(&[0u8; 7]).unwrap_err().is_truncated());
    }
}
