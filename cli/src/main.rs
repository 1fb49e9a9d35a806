//! Command line front end for pixel-control
//!
//! Validates the options, then renders the strip to the terminal until the
//! transition is done, or until Ctrl-C when an animation is running.

mod delay;
mod terminal;

use std::io::{self, Write};
use std::thread;

use anyhow::Context as _;
use clap::builder::PossibleValuesParser;
use clap::{ArgAction, ArgGroup, Parser};
use pixel_control::config::{DEFAULT_BRIGHTNESS, DEFAULT_PIXEL_COUNT};
use pixel_control::{
    Animation, LightConfig, LightEngine, Preset, ProviderSlot, RawOptions, StopSignal,
    StripSurface, Transition, limit_brightness,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::delay::ParkingDelay;
use crate::terminal::TerminalStrip;

/// Maximum number of pixels the surface buffer holds
const MAX_LEDS: usize = 1024;

/// Raised by Ctrl-C, observed by the engine between steps
static STOP: StopSignal = StopSignal::new();

#[derive(Parser, Debug)]
#[command(
    name = "pixel-control",
    version,
    about = "Manipulate NeoPixel lighting hardware by writing out color and brightness data."
)]
#[command(group(ArgGroup::new("source").required(true).args(["color", "preset"])))]
struct Cli {
    /// Explicit color for every pixel.
    #[arg(short, long, num_args = 4, value_names = ["RED", "GREEN", "BLUE", "WHITE"])]
    color: Option<Vec<u8>>,

    /// Named color preset to apply.
    #[arg(short, long, value_parser = PossibleValuesParser::new(Preset::ALL.map(Preset::as_str)))]
    preset: Option<String>,

    /// Brightness level to set the pixel set to. Between 0.0 and 1.0.
    #[arg(short, long, default_value_t = DEFAULT_BRIGHTNESS)]
    brightness: f32,

    /// Number of pixels in the set.
    #[arg(short = 'n', long = "number", default_value_t = DEFAULT_PIXEL_COUNT)]
    number: usize,

    /// Transition to use when applying this color to the pixel set.
    #[arg(short, long, value_parser = PossibleValuesParser::new(Transition::ALL.map(Transition::as_str)))]
    transition: Option<String>,

    /// Repeating animation to run on the pixel set.
    #[arg(short, long, value_parser = PossibleValuesParser::new(Animation::ALL.map(Animation::as_str)))]
    animation: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn raw_options(&self) -> anyhow::Result<RawOptions<'_>> {
        let color = self
            .color
            .clone()
            .map(<[u8; 4]>::try_from)
            .transpose()
            .map_err(|channels| {
                anyhow::anyhow!("--color takes 4 channels, got {}", channels.len())
            })?;
        Ok(RawOptions {
            preset: self.preset.as_deref(),
            color,
            brightness: self.brightness,
            pixel_count: self.number,
            transition: self.transition.as_deref(),
            animation: self.animation.as_deref(),
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = LightConfig::new(&cli.raw_options()?).context("invalid configuration")?;
    debug!(?config, "configuration accepted");

    install_stop_handler()?;
    run(&config)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn install_stop_handler() -> anyhow::Result<()> {
    let main_thread = thread::current();
    ctrlc::set_handler(move || {
        STOP.raise();
        main_thread.unpark();
    })
    .context("install Ctrl-C handler")
}

type TerminalEngine<W> =
    LightEngine<'static, StripSurface<TerminalStrip<W>, MAX_LEDS>, ProviderSlot, ParkingDelay>;

/// Build the engine over a terminal strip, checking the strip fits the
/// surface before anything walks the pixels
fn build_engine<W: Write>(config: &LightConfig, out: W) -> anyhow::Result<TerminalEngine<W>> {
    let pixel_count = config.pixel_count.get();
    let surface = StripSurface::<_, MAX_LEDS>::new(TerminalStrip::new(out), pixel_count)?;

    let provider = config.provider();
    let brightness = limit_brightness(&provider, pixel_count, config.brightness);
    Ok(LightEngine::new(
        surface,
        provider,
        ParkingDelay::new(&STOP),
        &STOP,
        brightness,
    ))
}

fn run(config: &LightConfig) -> anyhow::Result<()> {
    let mut engine = build_engine(config, io::stdout())?;

    match engine.play(config.transition, config.animation) {
        Err(err) if err.is_interrupted() => info!("stopped before the transition finished"),
        result => result.context("render strip")?,
    }

    let strip = engine.into_surface().into_writer();
    debug!(frames = strip.frames(), "done");
    strip.finish().context("finish terminal output")?;
    Ok(())
}
