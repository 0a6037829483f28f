//! Build script for monoclock-firmware
//!
//! - Adds the cortex-m-rt and defmt linker scripts (memory.x comes from
//!   embassy-stm32's `memory-x` feature)
//! - Validates display.toml at compile time and generates
//!   `display_config.rs` for the binary to include

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use monoclock_core::config::DisplayConfig;
use monoclock_core::font::FONT_8X14;
use monoclock_core::time::ClockTime;
use serde::Deserialize;

/// Layout of display.toml
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FirmwareConfig {
    #[serde(default)]
    display: DisplayConfig,
    #[serde(default)]
    clock: ClockSection,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ClockSection {
    start: String,
}

impl Default for ClockSection {
    fn default() -> Self {
        Self {
            start: "00:00:00".to_string(),
        }
    }
}

fn main() {
    setup_linker();
    let (display, start) = validate_config();
    generate_config(&display, start);
}

fn setup_linker() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    #[cfg(feature = "defmt")]
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml configuration at compile time
fn validate_config() -> (DisplayConfig, ClockTime) {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a display.toml configuration file.        ║\n\
            ║  Please create one in the monoclock-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: FirmwareConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid display.toml                                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let mut errors = Vec::new();

    if let Err(e) = config.display.validate(FONT_8X14.cell_width) {
        errors.push(format!("[display] {}", describe(e)));
    }

    let start = match parse_time(&config.clock.start) {
        Some(time) => time,
        None => {
            errors.push(format!(
                "[clock] start '{}' is not a valid HH:MM:SS time",
                config.clock.start
            ));
            ClockTime::MIDNIGHT
        }
    };

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid display configuration                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=display.toml validated successfully");
    (config.display, start)
}

fn describe(e: monoclock_core::config::ConfigError) -> &'static str {
    use monoclock_core::config::ConfigError;
    match e {
        ConfigError::ZeroRefreshInterval => "refresh_interval_ms must be non-zero",
        ConfigError::GreetingTooLong => "greeting does not fit on one line",
        ConfigError::OriginOffScreen => "text_x/text_y lie outside the panel",
        ConfigError::HeightMismatch => "height must be 8-64 in steps of 8",
        ConfigError::GeometryMismatch => "width/height differ from the framebuffer",
    }
}

/// Parse `HH:MM:SS`
fn parse_time(s: &str) -> Option<ClockTime> {
    let mut fields = s.trim().split(':').map(|f| f.parse::<u8>().ok());
    let hours = fields.next()??;
    let minutes = fields.next()??;
    let seconds = fields.next()??;
    if fields.next().is_some() {
        return None;
    }
    ClockTime::new(hours, minutes, seconds)
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `display_config.rs` into OUT_DIR
fn generate_config(display: &DisplayConfig, start: ClockTime) {
    let timing = &display.timing;
    let code = format!(
        "// Generated by build.rs from display.toml\n\
         \n\
         pub const START_TIME: ClockTime = ClockTime::from_seconds_of_day({start});\n\
         \n\
         pub fn display_config() -> DisplayConfig {{\n\
         \x20   let mut config = DisplayConfig::default();\n\
         \x20   config.width = {width};\n\
         \x20   config.height = {height};\n\
         \x20   config.orientation = Orientation::{orientation:?};\n\
         \x20   config.contrast = {contrast};\n\
         \x20   config.refresh_interval_ms = {interval};\n\
         \x20   config.text_x = {text_x};\n\
         \x20   config.text_y = {text_y};\n\
         \x20   config.greeting.clear();\n\
         \x20   let _ = config.greeting.push_str({greeting:?});\n\
         \x20   config.timing = Timing {{\n\
         \x20       reset_hold_ms: {reset},\n\
         \x20       settle_ms: {settle},\n\
         \x20       post_clear_ms: {post_clear},\n\
         \x20       command_timeout_ms: {command_timeout},\n\
         \x20       frame_timeout_ms: {frame_timeout},\n\
         \x20   }};\n\
         \x20   config\n\
         }}\n",
        start = start.seconds_of_day(),
        width = display.width,
        height = display.height,
        orientation = display.orientation,
        contrast = display.contrast,
        interval = display.refresh_interval_ms,
        text_x = display.text_x,
        text_y = display.text_y,
        greeting = display.greeting.as_str(),
        reset = timing.reset_hold_ms,
        settle = timing.settle_ms,
        post_clear = timing.post_clear_ms,
        command_timeout = timing.command_timeout_ms,
        frame_timeout = timing.frame_timeout_ms,
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("display_config.rs"), code).unwrap();
}
