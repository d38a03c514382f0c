use std::path::Path;
use std::time::Duration;

use config_file::FromConfigFile;
use serde::Deserialize;

use crate::color::Rgb;
use crate::effects::StartupScroll;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShaderOptions {
    pub pixel_count: usize,
    pub refresh_hz: f32,
    pub cycle_period_ms: u64,
    pub base_color: [u8; 3],
    pub aurora: AuroraOptions,
    pub critical: CriticalOptions,
    pub startup: StartupOptions,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AuroraOptions {
    pub min_lit_pixels: usize,
    pub rainbow_length: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CriticalOptions {
    pub max_lit_pixels: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StartupOptions {
    pub start_color: [u8; 3],
    /// The first entry is where the scroll starts.
    pub waypoints: Vec<usize>,
}

impl Default for ShaderOptions {
    fn default() -> Self {
        ShaderOptions {
            pixel_count: 60,
            refresh_hz: 30.0,
            cycle_period_ms: 2000,
            base_color: [0, 128, 255],
            aurora: AuroraOptions::default(),
            critical: CriticalOptions::default(),
            startup: StartupOptions::default(),
        }
    }
}

impl Default for AuroraOptions {
    fn default() -> Self {
        AuroraOptions {
            min_lit_pixels: 45,
            rainbow_length: 12,
        }
    }
}

impl Default for CriticalOptions {
    fn default() -> Self {
        CriticalOptions { max_lit_pixels: 10 }
    }
}

impl Default for StartupOptions {
    fn default() -> Self {
        StartupOptions {
            start_color: [255, 255, 255],
            waypoints: vec![0, 60, 45, 55, 50],
        }
    }
}

impl ShaderOptions {
    pub fn new() -> ShaderOptions {
        ShaderOptions::default()
    }

    pub fn load(path: &Path) -> Result<ShaderOptions, String> {
        let options = match ShaderOptions::from_config_file(path) {
            Ok(options) => options,
            Err(error) => return Err(format!("Cannot read {}: {}", path.display(), error)),
        };

        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    pub fn base_color(&self) -> Rgb {
        to_rgb(self.base_color)
    }

    pub fn cycle_period(&self) -> Duration {
        Duration::from_millis(self.cycle_period_ms)
    }

    /// Builds the startup scroll, keeping every point on the strip.
    pub fn startup_scroll(&self) -> StartupScroll {
        let clamp = |point: usize| point.min(self.pixel_count);
        let mut points = self.startup.waypoints.iter().copied().map(clamp);

        let mut scroll = StartupScroll::new(
            points.next().unwrap_or(0),
            to_rgb(self.startup.start_color),
        );
        for point in points {
            scroll.add_oscillation_point(point);
        }

        scroll
    }
}

fn to_rgb(channels: [u8; 3]) -> Rgb {
    Rgb::new(channels[0], channels[1], channels[2])
}
