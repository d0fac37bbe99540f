//! Build script for tumble-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates appliance.toml and bakes it into a const `ApplianceConfig`
//! - Renders the button icons to raw RGB565 files

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Cycles in the ring, in `CycleId` order
const CYCLE_COUNT: usize = 5;
const MAX_RINSE_COUNT: u8 = 6;
const MAX_SPIN_MINUTES: u8 = 12;
/// Longest name that fits the banner next to the icon column
const MAX_NAME_LEN: usize = 16;

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
    generate_icons();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ApplianceFile {
    screen: ScreenSection,
    touch: TouchSection,
    alarm: AlarmSection,
    countdown: CountdownSection,
    cycle: Vec<CycleSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScreenSection {
    width: u16,
    height: u16,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TouchSection {
    noise_status: u8,
    #[serde(default = "default_true")]
    touch_while_door_open: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AlarmSection {
    prescale: u16,
    first_ticks: u32,
    period_ticks: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CountdownSection {
    policy: Policy,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Policy {
    StopAtZero,
    FreeRunning,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CycleSection {
    name: String,
    rinse_count: u8,
    spin_minutes: u8,
    rinse_minutes: u8,
    bubbles: bool,
    heavy_duty: bool,
}

fn default_true() -> bool {
    true
}

/// Validate appliance.toml at compile time
fn validate_config() -> ApplianceFile {
    // Re-run if appliance.toml changes
    println!("cargo:rerun-if-changed=appliance.toml");

    let config_path = Path::new("appliance.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: appliance.toml not found!                                ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires an appliance.toml configuration file.     ║\n\
            ║  Please create one in the tumble-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read appliance.toml                            ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse syntax and shape in one go
    let config: ApplianceFile = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid appliance.toml                                   ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_screen(&config.screen, &mut errors);
    validate_alarm(&config.alarm, &mut errors);
    validate_cycles(&config.cycle, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in appliance.toml                         ║\n\
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

    println!("cargo:warning=appliance.toml validated successfully");
    config
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

fn validate_screen(screen: &ScreenSection, errors: &mut Vec<String>) {
    if screen.width == 0 || screen.height == 0 {
        errors.push(format!(
            "[screen] size {}x{} must be non-zero",
            screen.width, screen.height
        ));
    }
}

fn validate_alarm(alarm: &AlarmSection, errors: &mut Vec<String>) {
    if alarm.prescale == 0 {
        errors.push("[alarm] prescale must be non-zero".to_string());
    }
    if alarm.period_ticks == 0 {
        errors.push("[alarm] period_ticks must be at least 1".to_string());
    }
}

fn validate_cycles(cycles: &[CycleSection], errors: &mut Vec<String>) {
    if cycles.len() != CYCLE_COUNT {
        errors.push(format!(
            "exactly {} [[cycle]] entries required, found {}",
            CYCLE_COUNT,
            cycles.len()
        ));
    }

    for (i, cycle) in cycles.iter().enumerate() {
        if cycle.name.is_empty() {
            errors.push(format!("[[cycle]] #{} has an empty name", i + 1));
        }
        if cycle.name.len() > MAX_NAME_LEN {
            errors.push(format!(
                "[[cycle]] '{}' name longer than {} chars",
                cycle.name, MAX_NAME_LEN
            ));
        }
        if !cycle.name.is_ascii() {
            errors.push(format!("[[cycle]] #{} name must be ASCII", i + 1));
        }
        if cycle.rinse_count > MAX_RINSE_COUNT {
            errors.push(format!(
                "[[cycle]] '{}' rinse_count must be 0..={}",
                cycle.name, MAX_RINSE_COUNT
            ));
        }
        if cycle.spin_minutes > MAX_SPIN_MINUTES {
            errors.push(format!(
                "[[cycle]] '{}' spin_minutes must be 0..={}",
                cycle.name, MAX_SPIN_MINUTES
            ));
        }
    }
}

/// Write `appliance_config.rs`, included by `src/config.rs`
fn generate_config(config: &ApplianceFile) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let policy = match config.countdown.policy {
        Policy::StopAtZero => "StopAtZero",
        Policy::FreeRunning => "FreeRunning",
    };

    let presets = config
        .cycle
        .iter()
        .map(|c| {
            format!(
                "        Cycle::new({:?}, {}, {}, {}, {}, {}),",
                c.name, c.rinse_count, c.spin_minutes, c.rinse_minutes, c.bubbles, c.heavy_duty
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let source = format!(
        "// Generated from appliance.toml by build.rs\n\
         \n\
         /// Configuration baked in from appliance.toml\n\
         pub const APPLIANCE: ApplianceConfig = ApplianceConfig {{\n\
         \x20   screen: ScreenGeometry {{ width: {width}, height: {height} }},\n\
         \x20   touch: TouchConfig {{ noise_status: {noise}, touch_while_door_open: {gating} }},\n\
         \x20   alarm: AlarmConfig {{ prescale: {prescale}, first_ticks: {first}, period_ticks: {period} }},\n\
         \x20   countdown: CountdownPolicy::{policy},\n\
         \x20   presets: [\n\
         {presets}\n\
         \x20   ],\n\
         }};\n",
        width = config.screen.width,
        height = config.screen.height,
        noise = config.touch.noise_status,
        gating = config.touch.touch_while_door_open,
        prescale = config.alarm.prescale,
        first = config.alarm.first_ticks,
        period = config.alarm.period_ticks,
        policy = policy,
        presets = presets,
    );

    fs::write(out_dir.join("appliance_config.rs"), source).unwrap();
}

/// Icon name, size and tile color (24-bit RGB)
const ICONS: [(&str, u16, u16, u32); 9] = [
    ("water", 60, 60, 0x1E90FF),
    ("recycle_water", 60, 60, 0x1E90FF),
    ("wash", 60, 60, 0x20B2AA),
    ("tumble_dry", 60, 60, 0xFF8C00),
    ("play", 100, 80, 0x228B22),
    ("backward", 100, 80, 0x000080),
    ("forward", 100, 80, 0x000080),
    ("locked", 60, 60, 0xB22222),
    ("unlocked", 60, 60, 0x808080),
];

/// Render each icon as a flat tile with a white glyph
///
/// Output is big-endian RGB565, `width * height * 2` bytes per file.
fn generate_icons() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap()).join("icons");
    fs::create_dir_all(&out_dir).unwrap();

    for (name, width, height, tile) in ICONS {
        let mut data = Vec::with_capacity(usize::from(width) * usize::from(height) * 2);
        for y in 0..height {
            for x in 0..width {
                let color = if glyph(name, i32::from(x), i32::from(y), width, height) {
                    0xFFFFFF
                } else {
                    tile
                };
                data.extend_from_slice(&rgb565(color).to_be_bytes());
            }
        }
        fs::write(out_dir.join(format!("{}.rgb565", name)), data).unwrap();
    }
}

fn rgb565(rgb: u32) -> u16 {
    let r = ((rgb >> 16) & 0xFF) as u16;
    let g = ((rgb >> 8) & 0xFF) as u16;
    let b = (rgb & 0xFF) as u16;
    ((r >> 3) << 11) | ((g >> 2) << 5) | (b >> 3)
}

fn in_circle(x: i32, y: i32, cx: i32, cy: i32, r: i32) -> bool {
    (x - cx).pow(2) + (y - cy).pow(2) <= r * r
}

fn in_ring(x: i32, y: i32, cx: i32, cy: i32, r: i32, thickness: i32) -> bool {
    in_circle(x, y, cx, cy, r) && !in_circle(x, y, cx, cy, r - thickness)
}

/// Triangle pointing right (`dir = 1`) or left (`dir = -1`) with its base at `x0`
fn in_arrow(x: i32, y: i32, x0: i32, cy: i32, len: i32, dir: i32) -> bool {
    let dx = (x - x0) * dir;
    let half = len * 3 / 4;
    (0..=len).contains(&dx) && (y - cy).abs() * len <= half * (len - dx)
}

fn glyph(name: &str, x: i32, y: i32, width: u16, height: u16) -> bool {
    let w = i32::from(width);
    let h = i32::from(height);
    let (cx, cy) = (w / 2, h / 2);

    match name {
        // Drop: a disc with a tip pointing up (axes swapped)
        "water" => in_circle(x, y, cx, cy + 6, 14) || in_arrow(y, x, cy + 6, cx, 26, -1),
        "recycle_water" => in_ring(x, y, cx, cy, 20, 5) || in_circle(x, y, cx, cy, 6),
        "wash" => {
            in_ring(x, y, cx - 10, cy + 8, 10, 3)
                || in_ring(x, y, cx + 12, cy + 4, 8, 3)
                || in_ring(x, y, cx, cy - 14, 7, 3)
        }
        "tumble_dry" => {
            let square = (x - cx).abs() <= 20 && (y - cy).abs() <= 20;
            let inner = (x - cx).abs() <= 16 && (y - cy).abs() <= 16;
            (square && !inner) || in_ring(x, y, cx, cy, 13, 3) || in_circle(x, y, cx, cy, 3)
        }
        "play" => in_arrow(x, y, cx - 15, cy, 34, 1),
        "forward" => in_arrow(x, y, cx - 26, cy, 26, 1) || in_arrow(x, y, cx, cy, 26, 1),
        "backward" => in_arrow(x, y, cx + 26, cy, 26, -1) || in_arrow(x, y, cx, cy, 26, -1),
        "locked" | "unlocked" => {
            let body = (x - cx).abs() <= 16 && y >= cy - 2 && y <= cy + 20;
            let shackle_x = if name == "locked" { cx } else { cx + 14 };
            let shackle = in_ring(x, y, shackle_x, cy - 6, 12, 4) && y < cy - 2;
            body || shackle
        }
        _ => false,
    }
}
