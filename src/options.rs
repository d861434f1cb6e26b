use std::{str::FromStr, sync::OnceLock, time::Duration};

use cgolpaint::{FillMode, Pattern, Rgb, clock::DEFAULT_ITERATIONS_PER_SECOND};
use regex::Regex;

use crate::error::OptionsError;

const DEFAULT_SIZE: i32 = 100;
const DEFAULT_FPS: u32 = 60;
/// One cell is two terminal columns wide and one row tall at zoom 1
const DEFAULT_CELL_SIZE: f32 = 2.0;
const DEFAULT_GRADIENT_LEFT: Rgb = Rgb::new(1.0, 0.0, 1.0);
const DEFAULT_GRADIENT_RIGHT: Rgb = Rgb::new(1.0, 1.0, 0.0);

pub struct Args {
    headless: bool,
    board_size: (i32, i32),
    fill: FillMode,
    pattern: Option<Pattern>,
    rate: u32,
    frame_time: Duration,
    cell_size: f32,
    gradient: (Rgb, Rgb),
    generations: u64,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("", "headless", "run without the console and print stats");
        opts.optopt("w", "width", "set board width", "WIDTH");
        opts.optopt("h", "height", "set board height", "HEIGHT");
        opts.optopt(
            "f",
            "fill",
            "initial fill: random, alternating, all, empty, border",
            "TYPE",
        );
        opts.optopt(
            "p",
            "pattern",
            "stamp a pattern at the center: block, blinker, toad, glider, lwss, gosper",
            "NAME",
        );
        opts.optopt("r", "rate", "iterations per second", "COUNT");
        opts.optopt("s", "cell-size", "cell size in world units", "SIZE");
        opts.optopt("", "fps", "frame rate cap", "FPS");
        opts.optopt("", "gradient-left", "left gradient color", "#RRGGBB");
        opts.optopt("", "gradient-right", "right gradient color", "#RRGGBB");
        opts.optopt("g", "gens", "generations to run in headless mode", "COUNT");
        opts
    }

    /// Parses and validates the arguments, returning `None` when help was requested
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, OptionsError> {
        let opts = Self::options();
        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: cgolpaint [options]"));
            return Ok(None);
        }

        let cell_size = match opt_parse::<f32>(&matches, "cell-size")? {
            Some(size) if !(size.is_finite() && size > 0.0) => {
                return Err(invalid(&matches, "cell-size"));
            }
            size => size.unwrap_or(DEFAULT_CELL_SIZE),
        };
        let fill = match matches.opt_str("fill") {
            Some(s) => s.parse().map_err(OptionsError::UnknownFill)?,
            None => FillMode::Empty,
        };
        let pattern = matches
            .opt_str("pattern")
            .map(|s| s.parse().map_err(OptionsError::UnknownPattern))
            .transpose()?;
        let fps = positive(&matches, "fps")?.unwrap_or(DEFAULT_FPS);

        Ok(Some(Self {
            headless: matches.opt_present("headless"),
            board_size: (
                positive(&matches, "width")?.unwrap_or(DEFAULT_SIZE),
                positive(&matches, "height")?.unwrap_or(DEFAULT_SIZE),
            ),
            fill,
            pattern,
            rate: positive(&matches, "rate")?.unwrap_or(DEFAULT_ITERATIONS_PER_SECOND),
            frame_time: Duration::from_secs_f64(1.0 / f64::from(fps)),
            cell_size,
            gradient: (
                color(&matches, "gradient-left")?.unwrap_or(DEFAULT_GRADIENT_LEFT),
                color(&matches, "gradient-right")?.unwrap_or(DEFAULT_GRADIENT_RIGHT),
            ),
            generations: opt_parse(&matches, "gens")?.unwrap_or(u64::MAX), // kinda hacky way of saying "infinity"
        }))
    }
    pub fn from_env() -> Result<Option<Self>, OptionsError> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    pub fn headless(&self) -> bool {
        self.headless
    }

    pub fn board_size(&self) -> (i32, i32) {
        self.board_size
    }
    pub fn fill_mode(&self) -> FillMode {
        self.fill
    }
    pub fn pattern(&self) -> Option<Pattern> {
        self.pattern
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }
    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }
    pub fn gradient(&self) -> (Rgb, Rgb) {
        self.gradient
    }

    pub fn generations(&self) -> u64 {
        self.generations
    }
}

fn invalid(matches: &getopts::Matches, name: &'static str) -> OptionsError {
    OptionsError::InvalidValue {
        name,
        value: matches.opt_str(name).unwrap_or_default(),
    }
}

fn opt_parse<T: FromStr>(
    matches: &getopts::Matches,
    name: &'static str,
) -> Result<Option<T>, OptionsError> {
    matches.opt_get(name).map_err(|_| invalid(matches, name))
}

fn positive<T: FromStr + PartialOrd + Default>(
    matches: &getopts::Matches,
    name: &'static str,
) -> Result<Option<T>, OptionsError> {
    match opt_parse::<T>(matches, name)? {
        Some(value) if value <= T::default() => Err(invalid(matches, name)),
        value => Ok(value),
    }
}

fn color(matches: &getopts::Matches, name: &'static str) -> Result<Option<Rgb>, OptionsError> {
    matches.opt_str(name).map(|s| parse_color(&s)).transpose()
}

/// Parses `#rrggbb` (the `#` is optional) into a color
fn parse_color(s: &str) -> Result<Rgb, OptionsError> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").expect("valid regex")
    });

    let caps = re
        .captures(s.trim())
        .ok_or_else(|| OptionsError::InvalidColor(s.to_owned()))?;
    let channel = |i: usize| {
        // the regex only matches two hex digits per group
        let byte = u8::from_str_radix(&caps[i], 16).unwrap_or_default();
        f32::from(byte) / 255.0
    };
    Ok(Rgb::new(channel(1), channel(2), channel(3)))
}
