// src/display/text.rs
//! Human-readable rendering of decoded records

use crate::gps::data::{
    Dmm, FixSystem, FixType, GpsFix, GpsQuality, GpsTrack, LatDir, LonDir, MicroDec, MilliDec,
    Pos, Sentence,
};
use std::fmt;

/// Renders an optional field as `(opt: value)` or `(opt empty)`
pub struct Opt<'a, T>(pub &'a Option<T>);

impl<T: fmt::Display> fmt::Display for Opt<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "(opt: {})", value),
            None => write!(f, "(opt empty)"),
        }
    }
}

impl fmt::Display for MilliDec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.5 has a zero integral part, so the sign must come from the raw value
        let sign = if self.0 < 0 && self.integral() == 0 { "-" } else { "" };
        write!(f, "{}{}.{:0>3}", sign, self.integral(), self.fraction())
    }
}

impl fmt::Display for MicroDec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>6}", self.0)
    }
}

impl fmt::Display for FixType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FixSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LatDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LonDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Dmm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{}'.{}", self.deg, self.min, self.decimal)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lat: {}{}, lon: {}{}", self.lat, self.lat_d, self.lon, self.lon_d)
    }
}

impl fmt::Display for GpsQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gps_quality, fix: {}, pdop: {}, hdop: {}, vdop: {}",
            self.fix,
            Opt(&self.pdop),
            Opt(&self.hdop),
            Opt(&self.vdop)
        )
    }
}

impl fmt::Display for GpsTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gps_track, heading_true: {}, heading_magnetic: {}, speed_kmh: {}",
            Opt(&self.heading_true),
            Opt(&self.heading_magnetic),
            Opt(&self.ground_speed_kmh)
        )
    }
}

impl fmt::Display for GpsFix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = match self.time_of_day() {
            Some(t) => t.format("%H:%M:%S%.3f").to_string(),
            None => "invalid".to_string(),
        };
        write!(
            f,
            "gps_fix, ms_of_day: {} ({}), coord: {}, fix: {}, sats: {}, hdop: {}, altitude: {}mm, geoid_sep: {}mm",
            self.millisecs_of_day,
            time,
            Opt(&self.coord),
            self.fix,
            self.num_satellites_used,
            Opt(&self.hdop),
            Opt(&self.altitude_mm),
            Opt(&self.geoid_sep_mm)
        )
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentence::Quality(q) => fmt::Display::fmt(q, f),
            Sentence::Track(t) => fmt::Display::fmt(t, f),
            Sentence::Fix(x) => fmt::Display::fmt(x, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::gps::nmea::{decode_fix, decode_quality, decode_track};
    use crate::gps::data::MilliDec;

    #[test]
    fn test_milli_dec_text() {
        assert_eq!(MilliDec(2932004).to_string(), "2932.004");
        assert_eq!(MilliDec(-2932004).to_string(), "-2932.004");
        assert_eq!(MilliDec(-500).to_string(), "-0.500");
        assert_eq!(MilliDec(0).to_string(), "0.000");
    }

    #[test]
    fn test_quality_text() {
        let quality = decode_quality("$GPGSA,M,2,,,,,,,,,,,,1,2932.004,,*1E").unwrap();
        assert_eq!(
            quality.to_string(),
            "gps_quality, fix: 2D, pdop: (opt: 1.000), hdop: (opt: 2932.004), vdop: (opt empty)"
        );
    }

    #[test]
    fn test_track_text() {
        let track = decode_track("$GNVTG,0.00,T,,M,0.00,N,0.00,K,N*2C").unwrap();
        assert_eq!(
            track.to_string(),
            "gps_track, heading_true: (opt: 0.000), heading_magnetic: (opt empty), speed_kmh: (opt: 0.000)"
        );
    }

    #[test]
    fn test_fix_text() {
        let fix = decode_fix("$GNGGA,124547.726,4124.8963,N,08151.6838,W,1,0,,,M,,M,,*54").unwrap();
        assert_eq!(
            fix.to_string(),
            "gps_fix, ms_of_day: 45947.726 (12:45:47.726), \
             coord: (opt: lat: 41°24'.896300N, lon: 81°51'.683800W), \
             fix: gps, sats: 0, hdop: (opt empty), altitude: (opt empty)mm, geoid_sep: (opt empty)mm"
        );
    }
}
