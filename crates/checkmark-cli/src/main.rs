//! Checkmark CLI - headless demo of the animated check button.

use checkmark_core::{AnimationGroup, Event, Point, Rect, TouchId, Widget};
use checkmark_widgets::{deselect_group, select_group, ButtonStyle, CheckButton, StrokeRange};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "checkmark")]
#[command(about = "Headless demo of the animated check button")]
#[command(version)]
struct Cli {
    /// Style file (TOML) applied to the button
    #[arg(long, global = true)]
    style: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tap a button and print the stroke range on every frame
    Demo {
        /// Control width
        #[arg(long, default_value = "200")]
        width: f32,

        /// Control height
        #[arg(long, default_value = "50")]
        height: f32,

        /// Stroke width (overrides the style file)
        #[arg(long)]
        line_width: Option<f32>,

        /// Frames per second
        #[arg(long, default_value = "60")]
        fps: f64,

        /// Tap a second time once the check has settled
        #[arg(long)]
        round_trip: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Print the select and deselect timelines as JSON
    Timeline {
        /// Timeline duration in seconds (overrides the style file)
        #[arg(short, long)]
        duration: Option<f64>,
    },

    /// Print the effective style as TOML
    Style,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Presented state after one frame.
#[derive(Debug, Serialize)]
struct FrameSample {
    frame: usize,
    time: f64,
    selected: bool,
    stroke_start: f64,
    stroke_end: f64,
    interactive: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let style = load_style(cli.style.as_deref());

    match cli.command {
        Commands::Demo {
            width,
            height,
            line_width,
            fps,
            round_trip,
            format,
        } => {
            let mut style = style;
            if let Some(line_width) = line_width {
                style.line_width = line_width;
            }
            demo(style, Rect::new(0.0, 0.0, width, height), fps, round_trip, format);
        }
        Commands::Timeline { duration } => {
            timeline(duration.unwrap_or(style.duration));
        }
        Commands::Style => match style.to_toml_string() {
            Ok(text) => print!("{text}"),
            Err(e) => fail(&e),
        },
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn fail(error: &dyn std::fmt::Display) -> ! {
    eprintln!("Error: {error}");
    std::process::exit(1);
}

fn load_style(path: Option<&Path>) -> ButtonStyle {
    let Some(path) = path else {
        return ButtonStyle::default();
    };
    match ButtonStyle::load(path) {
        Ok(style) => {
            info!(path = %path.display(), "style loaded");
            style
        }
        Err(e) => fail(&e),
    }
}

fn demo(style: ButtonStyle, bounds: Rect, fps: f64, round_trip: bool, format: Format) {
    let mut button = CheckButton::new().style(style);
    button.layout(bounds);
    debug!(?bounds, ?style, "demo button ready");

    let taps = if round_trip { 2 } else { 1 };
    let samples = match record_taps(&mut button, bounds, 1.0 / fps.max(1.0), taps) {
        Ok(samples) => samples,
        Err(e) => fail(&e),
    };

    match format {
        Format::Json => match serde_json::to_string_pretty(&samples) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(&e),
        },
        Format::Text => {
            println!(
                "{:>5}  {:>7}  {:>8}  {:>8}  {:>8}  interactive",
                "frame", "time", "selected", "start", "end"
            );
            for s in &samples {
                println!(
                    "{:>5}  {:>7.4}  {:>8}  {:>8.4}  {:>8.4}  {}",
                    s.frame, s.time, s.selected, s.stroke_start, s.stroke_end, s.interactive
                );
            }
            let rest = button.committed_stroke();
            println!(
                "resting stroke: start {} end {} ({})",
                rest.start,
                rest.end,
                if rest.bits_eq(&StrokeRange::CHECKED) {
                    "checked"
                } else if rest.bits_eq(&StrokeRange::UNCHECKED) {
                    "unchecked"
                } else {
                    "in between"
                }
            );
        }
    }
}

fn tap(button: &mut CheckButton, bounds: Rect, local: Point) {
    let position = local + bounds.origin();
    let id = TouchId::new(1);
    button.event(&Event::TouchStart { id, position });
    button.event(&Event::TouchEnd { id, position });
}

/// Tap the glyph `taps` times, letting each timeline settle, and sample the
/// presented stroke after every frame.
fn record_taps(
    button: &mut CheckButton,
    bounds: Rect,
    dt: f64,
    taps: usize,
) -> Result<Vec<FrameSample>, &'static str> {
    let mut samples = Vec::new();
    for _ in 0..taps {
        let circle = button.layers().circle_size();
        let center = Point::new(circle.width / 2.0, circle.height / 2.0);
        if !button.point_inside(&center) {
            return Err("control is too small to tap");
        }
        tap(button, bounds, center);

        while button.is_animating() {
            button.tick(dt);
            let stroke = button.presentation_stroke();
            samples.push(FrameSample {
                frame: samples.len(),
                time: (samples.len() + 1) as f64 * dt,
                selected: button.is_selected(),
                stroke_start: stroke.start,
                stroke_end: stroke.end,
                interactive: button.is_interactive(),
            });
        }
    }
    Ok(samples)
}

fn timeline(duration: f64) {
    #[derive(Serialize)]
    struct Timelines {
        select: AnimationGroup,
        deselect: AnimationGroup,
    }

    let timelines = Timelines {
        select: select_group(duration),
        deselect: deselect_group(duration),
    };
    match serde_json::to_string_pretty(&timelines) {
        Ok(json) => println!("{json}"),
        Err(e) => fail(&e),
    }
}
