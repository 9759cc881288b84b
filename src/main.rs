// src/main.rs
//! nmea-decode - decode NMEA GSA/VTG/GGA sentences into exact records

use anyhow::Context;
use clap::Parser;
use nmea_decode::{
    config::DecoderConfig,
    decode_sentence,
    display::{render_line, OutputFormat},
    logging, try_decode_sentence, DecodeError, NmeaError, Sentence,
};
use std::time::{Duration, Instant};

/// Decoded when no sentences are given on the command line
const SAMPLE_SENTENCES: &[&str] = &[
    "$GPGSA,A,1,,,,,,,,,,,,,,,*1E",
    "$GPGSA,A,2,,,,,,,,,,,,1.1,2.4,0.4,*1E",
    "$GPGSA,M,2,,,,,,,,,,,,1.1,2.4,0,*1E",
    "$GPGSA,M,2,,,,,,,,,,,,1,2932.004,0.0001,*1E",
    "$GPGSA,M,2,,,,,,,,,,,,1,-2932.004,1.0,*1E",
    "$GNVTG,0.00,T,,M,0.00,N,0.00,K,N*2C",
    "$GNGGA,124547.726,,,,,0,0,,,M,,M,,*54",
    "$GNGGA,124547.726,4124.8963,N,08151.6838,W,1,0,,,M,,M,,*54",
];

#[derive(Debug, Parser)]
#[command(name = "nmea-decode", version, about = "Decode NMEA 0183 GSA, VTG and GGA sentences")]
struct Cli {
    /// Sentences to decode (built-in samples when omitted)
    sentences: Vec<String>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Exit with an error if any sentence fails to decode
    #[arg(long)]
    strict: bool,

    /// Time N decode passes over the sentence set
    #[arg(long, value_name = "N")]
    bench: Option<u32>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Persist the effective options to the config file
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    /// Command-line flags take precedence over the config file
    fn apply(&self, config: &mut DecoderConfig) {
        if let Some(format) = self.format {
            config.output = format;
        }
        if self.strict {
            config.strict = true;
        }
        if self.bench.is_some() {
            config.bench_iterations = self.bench;
        }
    }

    fn sentences(&self) -> Vec<&str> {
        if self.sentences.is_empty() {
            SAMPLE_SENTENCES.to_vec()
        } else {
            self.sentences.iter().map(|s| s.trim()).collect()
        }
    }
}

/// Decode one input line, logging why it was rejected.
fn decode_line(sentence: &str) -> std::result::Result<Sentence, DecodeError> {
    try_decode_sentence(sentence).map_err(|e| {
        log::info!("{}: {}", e, sentence);
        e
    })
}

/// Mean wall time of one decode pass over `sentences`
fn bench(sentences: &[&str], iterations: u32) -> Duration {
    let start = Instant::now();
    for _ in 0..iterations {
        for sentence in sentences {
            std::hint::black_box(decode_sentence(std::hint::black_box(sentence)));
        }
    }
    start.elapsed() / iterations.max(1)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = DecoderConfig::load().unwrap_or_else(|e| {
        log::warn!("{}; using defaults", e);
        DecoderConfig::default()
    });
    cli.apply(&mut config);

    if cli.save_config {
        config.save().context("Failed to save configuration")?;
        log::info!("Saved configuration");
    }

    let sentences = cli.sentences();
    let mut failures = 0usize;
    let mut first_failure: Option<(&str, DecodeError)> = None;
    for sentence in &sentences {
        let decoded = match decode_line(sentence) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                failures += 1;
                first_failure.get_or_insert((*sentence, e));
                None
            }
        };
        println!("{}", render_line(sentence, decoded.as_ref(), config.output)?);
    }

    if let Some(iterations) = config.bench_iterations {
        let per_pass = bench(&sentences, iterations);
        println!(
            "bench: {} sentences x {} passes, {:?} per pass",
            sentences.len(),
            iterations,
            per_pass
        );
    }

    if config.strict {
        if let Some((sentence, e)) = first_failure {
            return Err(NmeaError::from(e)).with_context(|| {
                format!(
                    "{} of {} sentences failed to decode, first: {}",
                    failures,
                    sentences.len(),
                    sentence
                )
            });
        }
    }

    Ok(())
}
