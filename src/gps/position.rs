// src/gps/position.rs
//! Latitude/longitude group decoding

use super::data::{Dmm, LatDir, LonDir, Pos};
use super::fields::is_float_or_empty;
use super::fixed::{leading_int, to_micro_dec};
use crate::error::DecodeError;

const MAX_DEGREES: i32 = 180;
const MAX_MINUTES: i32 = 60;

/// Decode the four lat, lat-hemi, lon, lon-hemi tokens.
///
/// All four blank means no position; a partly filled group is an error.
pub fn decode_position(
    lat: &str,
    lat_d: &str,
    lon: &str,
    lon_d: &str,
) -> Result<Option<Pos>, DecodeError> {
    let group = [lat, lat_d, lon, lon_d];

    if group.iter().all(|t| t.is_empty()) {
        return Ok(None);
    }

    if group.iter().any(|t| t.is_empty()) {
        return Err(DecodeError::PartialPosition);
    }

    let lat_d = LatDir::from_token(lat_d).ok_or(DecodeError::UnknownHemisphere)?;
    let lon_d = LonDir::from_token(lon_d).ok_or(DecodeError::UnknownHemisphere)?;

    if !(is_float_or_empty(lat) && is_float_or_empty(lon)) {
        return Err(DecodeError::MalformedCoordinate);
    }

    Ok(Some(Pos {
        lat: decode_dmm(lat)?,
        lon: decode_dmm(lon)?,
        lat_d,
        lon_d,
    }))
}

/// Split `D..DMM.mmmm` around the decimal point.
///
/// Everything before the two minute digits is degrees. Degrees and minutes
/// saturate into range instead of failing.
pub fn decode_dmm(token: &str) -> Result<Dmm, DecodeError> {
    // byte offsets below assume single-byte characters
    if !token.is_ascii() {
        return Err(DecodeError::MalformedCoordinate);
    }

    let sep = match token.find('.') {
        Some(sep) if sep >= 2 => sep,
        _ => return Err(DecodeError::MalformedCoordinate),
    };

    let deg = leading_int(&token[..sep - 2]).clamp(0, MAX_DEGREES);
    let min = leading_int(&token[sep - 2..sep]).clamp(0, MAX_MINUTES);

    Ok(Dmm {
        deg: deg as u8,
        min: min as u8,
        decimal: to_micro_dec(&token[sep..]),
    })
}
