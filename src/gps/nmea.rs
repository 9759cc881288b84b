// src/gps/nmea.rs
//! NMEA sentence decoding for GSA, VTG and GGA

use super::data::{FixSystem, FixType, GpsFix, GpsQuality, GpsTrack, MilliDec, Sentence};
use super::fields::{check_float, is_numeric, next_field, Fields};
use super::fixed::{leading_int, to_opt_milli_dec, to_scaled_int};
use super::position::decode_position;
use crate::error::DecodeError;

/// Decode any supported sentence, dispatching on its prefix.
///
/// Unrecognised and malformed sentences are logged at debug level and
/// yield `None`.
pub fn decode_sentence(line: &str) -> Option<Sentence> {
    match try_decode_sentence(line) {
        Ok(sentence) => {
            log::trace!("decoded {}: {}", sentence.kind(), line);
            Some(sentence)
        }
        Err(DecodeError::WrongSentence) => {
            log::debug!("unrecognised sentence: {}", line);
            None
        }
        Err(e) => {
            log::debug!("rejected sentence ({}): {}", e, line);
            None
        }
    }
}

pub fn try_decode_sentence(line: &str) -> Result<Sentence, DecodeError> {
    if line.starts_with(GpsQuality::START) {
        try_decode_quality(line).map(Sentence::Quality)
    } else if line.starts_with(GpsTrack::START) {
        try_decode_track(line).map(Sentence::Track)
    } else if line.starts_with(GpsFix::START) {
        try_decode_fix(line).map(Sentence::Fix)
    } else {
        Err(DecodeError::WrongSentence)
    }
}

pub fn decode_quality(candidate: &str) -> Option<GpsQuality> {
    try_decode_quality(candidate).ok()
}

pub fn decode_track(candidate: &str) -> Option<GpsTrack> {
    try_decode_track(candidate).ok()
}

pub fn decode_fix(candidate: &str) -> Option<GpsFix> {
    try_decode_fix(candidate).ok()
}

/// Decode a `$GPGSA` (DOP and active satellites) sentence.
///
/// Without a 2D/3D fix the DOP fields carry nothing meaningful, so they are
/// left absent and the rest of the sentence is not inspected.
pub fn try_decode_quality(candidate: &str) -> Result<GpsQuality, DecodeError> {
    if !candidate.starts_with(GpsQuality::START) {
        return Err(DecodeError::WrongSentence);
    }

    // sentence type, selection mode
    let mut tokens = Fields::new(candidate).skip(2);

    let fix = match next_field(&mut tokens, "fix mode")? {
        "2" => FixType::TwoD,
        "3" => FixType::ThreeD,
        _ => FixType::None,
    };

    if fix == FixType::None {
        return Ok(GpsQuality {
            fix,
            pdop: None,
            hdop: None,
            vdop: None,
        });
    }

    // The fix-mode token already consumed counts toward the run.
    let mut dops = tokens.skip(GpsQuality::SATS_LEN - 1);
    let pdop = next_field(&mut dops, "pdop")?;
    let hdop = next_field(&mut dops, "hdop")?;
    let vdop = next_field(&mut dops, "vdop")?;

    Ok(GpsQuality {
        fix,
        pdop: to_opt_milli_dec(check_float(pdop, "pdop")?),
        hdop: to_opt_milli_dec(check_float(hdop, "hdop")?),
        vdop: to_opt_milli_dec(check_float(vdop, "vdop")?),
    })
}

/// Decode a `$GNVTG` (track made good and ground speed) sentence.
///
/// Fields come as value/unit pairs; only the values are read.
pub fn try_decode_track(candidate: &str) -> Result<GpsTrack, DecodeError> {
    if !candidate.starts_with(GpsTrack::START) {
        return Err(DecodeError::WrongSentence);
    }

    let mut values = Fields::new(candidate).skip(1).step_by(2);
    let heading_true = check_float(next_field(&mut values, "true heading")?, "true heading")?;
    let heading_magnetic = check_float(
        next_field(&mut values, "magnetic heading")?,
        "magnetic heading",
    )?;
    let ground_speed = check_float(next_field(&mut values, "ground speed")?, "ground speed")?;

    Ok(GpsTrack {
        heading_true: to_opt_milli_dec(heading_true),
        heading_magnetic: to_opt_milli_dec(heading_magnetic),
        ground_speed_kmh: to_opt_milli_dec(ground_speed),
    })
}

/// Decode a `$GNGGA` (fix data) sentence.
///
/// The sentence must have exactly fourteen commas and must not end on one.
pub fn try_decode_fix(candidate: &str) -> Result<GpsFix, DecodeError> {
    if !candidate.starts_with(GpsFix::START) {
        return Err(DecodeError::WrongSentence);
    }

    if candidate.matches(',').count() != GpsFix::COMMAS || candidate.ends_with(',') {
        return Err(DecodeError::Structure);
    }

    let mut tokens = Fields::new(candidate).skip(1).take(12);

    let time = check_float(next_field(&mut tokens, "time")?, "time")?;
    let millisecs_of_day = millisecs_of_day(time)?;

    let lat = next_field(&mut tokens, "latitude")?;
    let lat_d = next_field(&mut tokens, "latitude hemisphere")?;
    let lon = next_field(&mut tokens, "longitude")?;
    let lon_d = next_field(&mut tokens, "longitude hemisphere")?;
    let coord = decode_position(lat, lat_d, lon, lon_d)?;

    let fix = decode_fix_system(next_field(&mut tokens, "fix system")?)?;

    let num_satellites = next_field(&mut tokens, "satellites")?;
    if !is_numeric(num_satellites) {
        return Err(DecodeError::MalformedField("satellites"));
    }
    let num_satellites_used = leading_int(num_satellites).clamp(0, u8::MAX as i32) as u8;

    let hdop = check_float(next_field(&mut tokens, "hdop")?, "hdop")?;
    let altitude = check_float(next_field(&mut tokens, "altitude")?, "altitude")?;
    if next_field(&mut tokens, "altitude units")? != "M" {
        return Err(DecodeError::UnexpectedLiteral("altitude units"));
    }
    let geoid_sep = check_float(next_field(&mut tokens, "geoid separation")?, "geoid separation")?;

    Ok(GpsFix {
        millisecs_of_day,
        coord,
        fix,
        num_satellites_used,
        hdop: to_opt_milli_dec(hdop),
        altitude_mm: to_opt_milli_dec(altitude),
        geoid_sep_mm: to_opt_milli_dec(geoid_sep),
    })
}

/// `HHMMSS[.fff]` to milliseconds since midnight.
///
/// Anything after the seconds must be a `.` fraction; extra fractional
/// digits are truncated.
fn millisecs_of_day(time: &str) -> Result<MilliDec, DecodeError> {
    if time.len() < 6 || !is_numeric(&time[..6]) {
        return Err(DecodeError::MalformedField("time"));
    }

    let fraction = &time[6..];
    if !(fraction.is_empty() || fraction.starts_with('.')) {
        return Err(DecodeError::MalformedField("time"));
    }

    let hours = leading_int(&time[0..2]);
    let minutes = leading_int(&time[2..4]);
    let seconds = leading_int(&time[4..6]);
    // integral part of ".fff" is zero, so this stays below 1000
    let millis = to_scaled_int::<3>(fraction);

    let whole = (hours * 3600 + minutes * 60 + seconds) * 1000;
    Ok(MilliDec(whole.saturating_add(millis)))
}

fn decode_fix_system(token: &str) -> Result<FixSystem, DecodeError> {
    match token.as_bytes() {
        [digit] if digit.is_ascii_digit() => {
            FixSystem::from_digit(digit - b'0').ok_or(DecodeError::UnknownFixSystem)
        }
        _ => Err(DecodeError::MalformedField("fix system")),
    }
}
