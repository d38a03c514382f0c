use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use rand::Rng;

use pixelshade::config::ShaderOptions;
use pixelshade::effects::{Aurora, CriticalPulse, StaticColor};
use pixelshade::intervaltimer::IntervalTimer;
use pixelshade::termoutput::TerminalOutput;
use pixelshade::{CycleCounter, LitCount, PixelBuffer, PriorityShaderEngine, ValueSlider};

#[derive(Parser)]
struct Cli {
    /// TOML file with shader options
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of LEDs on the strip, overrides the config file
    #[arg(short, long, value_name = "N")]
    pixel_count: Option<usize>,

    /// Stop after this many ticks
    #[arg(short, long, value_name = "N")]
    ticks: Option<u64>,

    /// Randomly move the lit count once the startup scroll is done
    #[arg(short, long)]
    wander: bool,
}

fn load_options(args: &Cli) -> Result<ShaderOptions, String> {
    let mut options = match args.config.as_deref() {
        Some(path) => ShaderOptions::load(path)?,
        None => ShaderOptions::new(),
    };

    if let Some(pixel_count) = args.pixel_count {
        options.pixel_count = pixel_count;
    }

    Ok(options)
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    let options = match load_options(&args) {
        Ok(options) => options,
        Err(err) => {
            log::error!("Cannot set up options: {}", err);
            process::exit(1);
        }
    };

    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = Arc::clone(&running);
    if let Err(err) = ctrlc::set_handler(move || handler_flag.store(false, Ordering::SeqCst)) {
        log::error!("Failed to install Ctrl-C handler: {}", err);
        process::exit(1);
    }

    let cycle_counter = CycleCounter::new(options.cycle_period());
    let startup = options.startup_scroll();
    let critical = CriticalPulse::new(options.critical.max_lit_pixels, &cycle_counter);
    let aurora = Aurora::new(options.aurora.min_lit_pixels, &cycle_counter)
        .with_rainbow_length(options.aurora.rainbow_length);
    let fill = StaticColor::new();

    let mut engine = PriorityShaderEngine::new();
    engine
        .add_pixel_effect(&startup)
        .add_pixel_effect(&critical)
        .add_pixel_effect(&aurora)
        .add_pixel_effect(&fill);

    let mut strip = PixelBuffer::new(options.pixel_count);
    let mut lit_leds = ValueSlider::new(0, options.pixel_count, 0);
    let mut output = TerminalOutput::new(io::stdout());
    let mut timer = IntervalTimer::new(options.refresh_hz, true);
    let mut rng = rand::thread_rng();
    let base_color = options.base_color();

    log::info!(
        "Shading {} pixels at {} Hz",
        options.pixel_count,
        options.refresh_hz
    );
    startup.trigger();

    let mut tick = 0u64;
    while running.load(Ordering::SeqCst) && args.ticks.map_or(true, |ticks| tick < ticks) {
        if args.wander && !startup.is_running() {
            lit_leds.nudge(rng.gen_range(-1..=1));
        }

        strip.clear();
        engine.shade_pixels(&mut strip, &mut lit_leds, base_color);
        log::trace!("Tick {}: {} lit", tick, lit_leds.value());

        if let Err(err) = output.show(strip.pixels()) {
            log::error!("Cannot draw strip: {}", err);
            break;
        }

        tick += 1;
        timer.sleep_until_next_tick();
    }

    if let Err(err) = output.finish() {
        log::warn!("Cannot finish output: {}", err);
    }
}
