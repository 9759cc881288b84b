// src/display/mod.rs
//! Rendering of decoded sentences for output

pub mod text;

use crate::{error::Result, gps::Sentence};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How decoded records are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render one input line and its decode result as a single output line.
pub fn render_line(phrase: &str, decoded: Option<&Sentence>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(match decoded {
            Some(sentence) => format!("phrase:{} decoded:{}", phrase, sentence),
            None => format!("phrase:{} decoded:(none)", phrase),
        }),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "phrase": phrase,
                "decoded": decoded,
            });
            Ok(serde_json::to_string(&value)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gps::decode_sentence;

    const VTG: &str = "$GNVTG,0.00,T,,M,0.00,N,0.00,K,N*2C";

    #[test]
    fn test_render_text() {
        let decoded = decode_sentence(VTG);
        let line = render_line(VTG, decoded.as_ref(), OutputFormat::Text).unwrap();
        assert!(line.starts_with("phrase:$GNVTG"));
        assert!(line.contains("decoded:gps_track, heading_true: (opt: 0.000)"));

        let line = render_line("$GPRMC", None, OutputFormat::Text).unwrap();
        assert_eq!(line, "phrase:$GPRMC decoded:(none)");
    }

    #[test]
    fn test_render_json() {
        let decoded = decode_sentence(VTG);
        let line = render_line(VTG, decoded.as_ref(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["phrase"], VTG);
        assert_eq!(value["decoded"]["type"], "track");
        assert_eq!(value["decoded"]["heading_true"], 0);
        assert!(value["decoded"]["heading_magnetic"].is_null());
    }

    #[test]
    fn test_render_json_fix() {
        let gga = "$GNGGA,124547.726,4124.8963,N,08151.6838,W,1,0,,,M,,M,,*54";
        let decoded = decode_sentence(gga);
        let line = render_line(gga, decoded.as_ref(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["decoded"]["type"], "fix");
        assert_eq!(value["decoded"]["fix"], "gps");
        assert_eq!(value["decoded"]["coord"]["lat"]["decimal"], 896300);
        assert_eq!(value["decoded"]["coord"]["lat_d"], "N");
    }

    #[test]
    fn test_render_json_none() {
        let line = render_line("junk", None, OutputFormat::Json).unwrap();
        assert_eq!(line, r#"{"decoded":null,"phrase":"junk"}"#);
    }
}
