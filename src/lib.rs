// src/lib.rs
//! NMEA 0183 Decoder Library
//!
//! Decodes `$GPGSA`, `$GNVTG` and `$GNGGA` sentences into records whose
//! real-valued fields are exact scaled integers.

pub mod config;
pub mod display;
pub mod error;
pub mod gps;
pub mod logging;

// Re-export main types for convenience
pub use error::{DecodeError, NmeaError, Result};
pub use gps::data::{
    Dmm, FixSystem, FixType, GpsFix, GpsQuality, GpsTrack, LatDir, LonDir, MicroDec, MilliDec,
    Pos, Sentence,
};
pub use gps::nmea::{
    decode_fix, decode_quality, decode_sentence, decode_track, try_decode_fix,
    try_decode_quality, try_decode_sentence, try_decode_track,
};
