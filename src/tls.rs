//! TLS wire records (RFC 8422, section 5.4).
//!
//! An ECPoint record is a length byte followed by the point encoding:
//!
//! ```text
//!     struct {
//!         opaque point <1..2^8-1>;
//!     } ECPoint;
//! ```
//!
//! An ECParameters record is supported only in the named-curve form: a
//! curve type byte (`NAMED_CURVE`) followed by the 16-bit big-endian
//! curve identifier.
//!
//! Readers take a cursor (`&mut &[u8]`) which is advanced past the
//! record on success; on error, the cursor is left unchanged.

use crate::curves::{CurveId, CurveInfo};
use crate::error::{Error, Result};
use crate::group::{Group, Point, PointFormat};

/// Curve type tag for a named curve in an ECParameters record.
pub const NAMED_CURVE: u8 = 3;

/// Read an ECPoint record. The point is decoded but not validated.
pub fn tls_read_point(grp: &Group, buf: &mut &[u8]) -> Result<Point> {
    // At least the length byte and one byte of data.
    if buf.len() < 2 {
        return Err(Error::BadInputData);
    }
    let data_len = buf[0] as usize;
    if data_len < 1 || data_len > buf.len() - 1 {
        return Err(Error::BadInputData);
    }
    let pt = Point::read_binary(grp, &buf[1..1 + data_len])?;
    *buf = &buf[1 + data_len..];
    Ok(pt)
}

/// Write an ECPoint record into `buf`; the record length is returned.
pub fn tls_write_point(grp: &Group, pt: &Point, format: PointFormat, buf: &mut [u8])
    -> Result<usize>
{
    if buf.is_empty() {
        return Err(Error::BadInputData);
    }
    let olen = pt.write_binary(grp, format, &mut buf[1..])?;
    if olen > 255 {
        return Err(Error::BadInputData);
    }
    buf[0] = olen as u8;
    Ok(olen + 1)
}

/// Read an ECParameters record and get the curve identifier.
pub fn tls_read_group_id(buf: &mut &[u8]) -> Result<CurveId> {
    if buf.len() < 3 {
        return Err(Error::BadInputData);
    }
    if buf[0] != NAMED_CURVE {
        return Err(Error::BadInputData);
    }
    let tls_id = ((buf[1] as u16) << 8) | (buf[2] as u16);
    let info = CurveInfo::from_tls_id(tls_id).ok_or(Error::FeatureUnavailable)?;
    *buf = &buf[3..];
    Ok(info.id)
}

/// Read an ECParameters record and load the corresponding group.
pub fn tls_read_group(buf: &mut &[u8]) -> Result<Group> {
    let mut tmp = *buf;
    let id = tls_read_group_id(&mut tmp)?;
    let grp = Group::load(id)?;
    *buf = tmp;
    Ok(grp)
}

/// Write the ECParameters record of a group into `buf`; the record
/// length (3) is returned.
pub fn tls_write_group(grp: &Group, buf: &mut [u8]) -> Result<usize> {
    let info = grp.curve_info().ok_or(Error::BadInputData)?;
    if buf.len() < 3 {
        return Err(Error::BufferTooSmall);
    }
    buf[0] = NAMED_CURVE;
    buf[1] = (info.tls_id >> 8) as u8;
    buf[2] = info.tls_id as u8;
    Ok(3)
}

// ========================================================================
