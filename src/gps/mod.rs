// src/gps/mod.rs
//! GPS sentence decoding

pub mod data;
pub mod fields;
pub mod fixed;
pub mod nmea;
pub mod position;

pub use data::{GpsFix, GpsQuality, GpsTrack, Sentence};
pub use nmea::{decode_fix, decode_quality, decode_sentence, decode_track};
