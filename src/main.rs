#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod host;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::tao::window::Fullscreen;
use dioxus::desktop::{Config, WindowBuilder};
use static_gate_core::{ConfigOverrides, GateConfig};
use tracing_subscriber::EnvFilter;

/// Global gate configuration, resolved once at startup
static GATE_CONFIG: OnceLock<GateConfig> = OnceLock::new();

/// Get the gate configuration (resolved from file and command line, or default)
pub fn get_gate_config() -> GateConfig {
    GATE_CONFIG.get().cloned().unwrap_or_default()
}

/// Static Gate - a video behind a wall of TV static
#[derive(Parser, Debug)]
#[command(name = "static-gate-desktop")]
#[command(about = "Static Gate - warning screen, TV static, video, static, gone")]
struct Args {
    /// JSON config file (defaults to <config dir>/static-gate/config.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// URL or path of the gated video
    #[arg(short, long)]
    video: Option<String>,

    /// MIME type of the video
    #[arg(long)]
    mime: Option<String>,

    /// Milliseconds of static between ENTER and playback
    #[arg(long)]
    enter_delay_ms: Option<u64>,

    /// Milliseconds of static between the end of the video and close
    #[arg(long)]
    exit_delay_ms: Option<u64>,

    /// Open the window borderless fullscreen
    #[arg(short, long)]
    fullscreen: bool,

    /// Window width when not fullscreen
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height when not fullscreen
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            video_src: self.video.clone(),
            video_mime: self.mime.clone(),
            enter_delay_ms: self.enter_delay_ms,
            exit_delay_ms: self.exit_delay_ms,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = GateConfig::load(args.config.as_deref())
        .and_then(|config| config.with_overrides(args.overrides()))
        .context("failed to resolve gate configuration")?;

    tracing::info!(
        "Starting gate for {} ({}), static {}ms in / {}ms out",
        config.video_src,
        config.video_mime,
        config.enter_delay_ms,
        config.exit_delay_ms
    );
    tracing::debug!(
        "Resolved config: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    let _ = GATE_CONFIG.set(config);

    let mut window = WindowBuilder::new()
        .with_title("WARNING")
        .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
        .with_resizable(true);
    if args.fullscreen {
        window = window.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
