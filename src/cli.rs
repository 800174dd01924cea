use std::ops::RangeInclusive;

use clap::Parser;

use crate::{
    constants::{MAX_RATE, MIN_FRAME_RATE, MIN_TICK_RATE},
    utils::version,
};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0,
        value_parser = parse_tick_rate
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of rendered and simulated frames per second",
        default_value_t = 60.0,
        value_parser = parse_frame_rate
    )]
    pub frame_rate: f64,

    #[arg(short, long, value_name = "SEED", help = "Seed for obstacle and scenery generation")]
    pub seed: Option<u64>,
}

fn parse_rate(raw: &str, range: RangeInclusive<f64>) -> Result<f64, String> {
    let rate: f64 = raw.parse().map_err(|e| format!("`{raw}` is not a number: {e}"))?;
    if range.contains(&rate) {
        Ok(rate)
    } else {
        Err(format!("rate must be between {} and {}", range.start(), range.end()))
    }
}

fn parse_tick_rate(raw: &str) -> Result<f64, String> {
    parse_rate(raw, MIN_TICK_RATE..=MAX_RATE)
}

fn parse_frame_rate(raw: &str) -> Result<f64, String> {
    parse_rate(raw, MIN_FRAME_RATE..=MAX_RATE)
}
