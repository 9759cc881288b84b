// src/error.rs
//! Error types for the NMEA decoder

use std::fmt;

pub type Result<T> = std::result::Result<T, NmeaError>;

/// Why a sentence could not be decoded.
///
/// The `decode_*` functions collapse all of these into `None`; the
/// `try_decode_*` variants keep the reason around for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Sentence does not start with the prefix this decoder handles
    WrongSentence,
    /// Wrong comma count or trailing comma
    Structure,
    /// Sentence ended before the named field
    MissingField(&'static str),
    /// Named field is present but not well formed
    MalformedField(&'static str),
    /// Named field must hold a fixed literal and does not
    UnexpectedLiteral(&'static str),
    UnknownHemisphere,
    UnknownFixSystem,
    /// Some, but not all, of lat/lat-hemi/lon/lon-hemi are present
    PartialPosition,
    /// Coordinate is not in `DDDMM.mmmm` form
    MalformedCoordinate,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::WrongSentence => write!(f, "not a sentence of this type"),
            DecodeError::Structure => write!(f, "unexpected sentence structure"),
            DecodeError::MissingField(name) => write!(f, "missing field: {}", name),
            DecodeError::MalformedField(name) => write!(f, "malformed field: {}", name),
            DecodeError::UnexpectedLiteral(name) => write!(f, "unexpected literal in field: {}", name),
            DecodeError::UnknownHemisphere => write!(f, "unknown hemisphere letter"),
            DecodeError::UnknownFixSystem => write!(f, "unknown fix system"),
            DecodeError::PartialPosition => write!(f, "partial position"),
            DecodeError::MalformedCoordinate => write!(f, "malformed coordinate"),
        }
    }
}

impl std::error::Error for DecodeError {}

#[derive(Debug)]
pub enum NmeaError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Decode(DecodeError),
    Config(String),
}

impl fmt::Display for NmeaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NmeaError::Io(e) => write!(f, "IO error: {}", e),
            NmeaError::Json(e) => write!(f, "JSON error: {}", e),
            NmeaError::Decode(e) => write!(f, "Decode error: {}", e),
            NmeaError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for NmeaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NmeaError::Io(e) => Some(e),
            NmeaError::Json(e) => Some(e),
            NmeaError::Decode(e) => Some(e),
            NmeaError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for NmeaError {
    fn from(error: std::io::Error) -> Self {
        NmeaError::Io(error)
    }
}

impl From<serde_json::Error> for NmeaError {
    fn from(error: serde_json::Error) -> Self {
        NmeaError::Json(error)
    }
}

impl From<DecodeError> for NmeaError {
    fn from(error: DecodeError) -> Self {
        NmeaError::Decode(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        assert_eq!(DecodeError::MissingField("hdop").to_string(), "missing field: hdop");
        assert_eq!(DecodeError::PartialPosition.to_string(), "partial position");
    }

    #[test]
    fn test_nmea_error_wraps_decode() {
        let err: NmeaError = DecodeError::Structure.into();
        assert_eq!(err.to_string(), "Decode error: unexpected sentence structure");
        assert!(std::error::Error::source(&err).is_some());
    }
}
