// src/gps/data.rs
//! Decoded record types and their scaled-integer units

use chrono::NaiveTime;
use serde::Serialize;

/// Real value scaled by 1000 (three implied decimal digits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct MilliDec(pub i32);

/// Real value scaled by 1 000 000 (six implied decimal digits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct MicroDec(pub i32);

impl MilliDec {
    pub const SCALE: i32 = 1000;

    /// Whole part, truncated toward zero
    pub fn integral(self) -> i32 {
        self.0 / Self::SCALE
    }

    /// Magnitude of the fractional part, in thousandths
    pub fn fraction(self) -> u32 {
        (self.0 % Self::SCALE).unsigned_abs()
    }
}

impl MicroDec {
    pub const SCALE: i32 = 1_000_000;
}

/// Fix mode reported by GSA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FixType {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "2d")]
    TwoD,
    #[serde(rename = "3d")]
    ThreeD,
}

impl FixType {
    pub fn as_str(self) -> &'static str {
        match self {
            FixType::None => "none",
            FixType::TwoD => "2D",
            FixType::ThreeD => "3D",
        }
    }
}

/// Fix quality indicator reported by GGA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FixSystem {
    None = 0,
    Gps = 1,
    Dgps = 2,
}

impl FixSystem {
    /// Map the single-digit GGA quality field onto the enumeration ordinal.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(FixSystem::None),
            1 => Some(FixSystem::Gps),
            2 => Some(FixSystem::Dgps),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FixSystem::None => "none",
            FixSystem::Gps => "gps",
            FixSystem::Dgps => "dgps",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LatDir {
    N,
    S,
}

impl LatDir {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "N" => Some(LatDir::N),
            "S" => Some(LatDir::S),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LatDir::N => "N",
            LatDir::S => "S",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LonDir {
    W,
    E,
}

impl LonDir {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "W" => Some(LonDir::W),
            "E" => Some(LonDir::E),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LonDir::W => "W",
            LonDir::E => "E",
        }
    }
}

/// One coordinate axis in degrees, minutes and decimal minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dmm {
    pub deg: u8,
    pub min: u8,
    /// Fractional minutes, scaled by 10^6
    pub decimal: MicroDec,
}

impl Dmm {
    /// Unsigned decimal degrees, for display only
    pub fn to_decimal_degrees(&self) -> f64 {
        let minutes = self.min as f64 + self.decimal.0 as f64 / MicroDec::SCALE as f64;
        self.deg as f64 + minutes / 60.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pos {
    pub lat: Dmm,
    pub lon: Dmm,
    pub lat_d: LatDir,
    pub lon_d: LonDir,
}

impl Pos {
    /// Signed (latitude, longitude) in decimal degrees; south and west are negative
    pub fn to_decimal_degrees(&self) -> (f64, f64) {
        let lat = self.lat.to_decimal_degrees();
        let lon = self.lon.to_decimal_degrees();
        (
            if self.lat_d == LatDir::S { -lat } else { lat },
            if self.lon_d == LonDir::W { -lon } else { lon },
        )
    }
}

/// DOP and fix mode, decoded from `$GPGSA`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GpsQuality {
    pub fix: FixType,
    pub pdop: Option<MilliDec>,
    pub hdop: Option<MilliDec>,
    pub vdop: Option<MilliDec>,
}

impl GpsQuality {
    pub const START: &'static str = "$GPGSA";
    /// Tokens from the fix-mode field (inclusive) up to the DOP triple
    pub const SATS_LEN: usize = 12;
}

/// Track and speed over ground, decoded from `$GNVTG`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GpsTrack {
    pub heading_true: Option<MilliDec>,
    pub heading_magnetic: Option<MilliDec>,
    pub ground_speed_kmh: Option<MilliDec>,
}

impl GpsTrack {
    pub const START: &'static str = "$GNVTG";
}

/// Fix data, decoded from `$GNGGA`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GpsFix {
    pub millisecs_of_day: MilliDec,
    pub coord: Option<Pos>,
    pub fix: FixSystem,
    pub num_satellites_used: u8,
    pub hdop: Option<MilliDec>,
    pub altitude_mm: Option<MilliDec>,
    pub geoid_sep_mm: Option<MilliDec>,
}

impl GpsFix {
    pub const START: &'static str = "$GNGGA";
    /// Exact number of `,` separators in a well-formed GGA sentence
    pub const COMMAS: usize = 14;

    /// UTC time of day, or `None` if the encoded time is past midnight
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        let millis = u32::try_from(self.millisecs_of_day.0).ok()?;
        NaiveTime::from_num_seconds_from_midnight_opt(millis / 1000, (millis % 1000) * 1_000_000)
    }

    pub fn has_position(&self) -> bool {
        self.coord.is_some()
    }
}

/// Any record this crate can decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Sentence {
    Quality(GpsQuality),
    Track(GpsTrack),
    Fix(GpsFix),
}

impl Sentence {
    pub fn kind(&self) -> &'static str {
        match self {
            Sentence::Quality(_) => "gps_quality",
            Sentence::Track(_) => "gps_track",
            Sentence::Fix(_) => "gps_fix",
        }
    }
}
