use crate::error::{Error, Result};
use crate::types::{Orientation, TargetSize};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Horizontal output sizes
pub const HORIZONTAL_SIZES: [(u32, u32); 16] = [
    (5120, 2880),
    (3840, 2160),
    (3200, 2000),
    (3200, 1800),
    (2560, 1600),
    (2560, 1440),
    (1920, 1200),
    (1920, 1080),
    (1680, 1050),
    (1600, 1200),
    (1440, 900),
    (1366, 768),
    (1280, 1024),
    (1280, 800),
    (1024, 768),
    (440, 247),
];

/// Vertical output sizes
pub const VERTICAL_SIZES: [(u32, u32); 3] = [(720, 1440), (360, 720), (1080, 1920)];

/// Horizontal template file names
pub const HORIZONTAL_TEMPLATES: [&str; 2] = ["base_size.png", "base_size.jpg"];

/// Vertical template file names
pub const VERTICAL_TEMPLATES: [&str; 2] = ["vertical_base_size.png", "vertical_base_size.jpg"];

/// A value held once per orientation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerOrientation<T> {
    pub horizontal: T,
    pub vertical: T,
}

impl<T> PerOrientation<T> {
    pub fn get(&self, orientation: Orientation) -> &T {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }
}

/// How generation tasks are executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Schedule {
    /// One task after another on the calling thread
    Sequential,

    /// Fan out over a worker pool
    Parallel,
}

/// Whether a decoded template is reused across its sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateCache {
    /// Decode once, share the pixels between all sizes
    Shared,

    /// Decode again from disk for every size
    Reload,
}

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Configuration for a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory searched recursively for templates
    pub root: PathBuf,

    /// Output sizes per orientation
    pub sizes: PerOrientation<Vec<TargetSize>>,

    /// Template file names per orientation (exact basename match)
    pub templates: PerOrientation<Vec<String>>,

    /// JPEG quality (1-100)
    pub quality: u8,

    /// Strongest PNG compression, optimized JPEG Huffman tables
    pub optimize: bool,

    /// Sequential or parallel execution
    pub schedule: Schedule,

    /// Reuse decoded templates across sizes
    pub cache: TemplateCache,

    /// Number of worker threads (0 = logical CPU count)
    pub threads: usize,

    /// Maximum directory depth for template discovery
    pub max_depth: Option<usize>,

    /// Plan and report outputs without writing them
    pub dry_run: bool,

    /// Draw a progress bar while generating
    pub show_progress: bool,

    /// Log level
    pub log_level: LogLevel,
}

fn sizes(table: &[(u32, u32)]) -> Vec<TargetSize> {
    table.iter().copied().map(TargetSize::from).collect()
}

fn names(table: &[&str]) -> Vec<String> {
    table.iter().map(|name| name.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            sizes: PerOrientation {
                horizontal: sizes(&HORIZONTAL_SIZES),
                vertical: sizes(&VERTICAL_SIZES),
            },
            templates: PerOrientation {
                horizontal: names(&HORIZONTAL_TEMPLATES),
                vertical: names(&VERTICAL_TEMPLATES),
            },
            quality: 90,
            optimize: true,
            schedule: Schedule::Parallel,
            cache: TemplateCache::Shared,
            threads: 0, // Auto
            max_depth: None,
            dry_run: false,
            show_progress: false,
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    /// Default configuration rooted at `root`
    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())
            .map_err(|e| Error::Configuration(format!("Failed to open config file: {}", e)))?;

        let config: Config = serde_json::from_reader(file)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())
            .map_err(|e| Error::Configuration(format!("Failed to create config file: {}", e)))?;

        serde_json::to_writer_pretty(file, self)
            .map_err(|e| Error::Configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Check the configuration for values that cannot produce valid output
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.quality) {
            return Err(Error::Configuration(format!(
                "quality must be between 1 and 100, got {}",
                self.quality
            )));
        }

        for orientation in Orientation::ALL {
            let names = self.templates.get(orientation);
            if names.iter().any(|name| name.is_empty()) {
                return Err(Error::Configuration(format!(
                    "empty {} template name",
                    orientation
                )));
            }

            for size in self.sizes.get(orientation) {
                if size.width == 0 || size.height == 0 {
                    return Err(Error::Configuration(format!(
                        "{} size {} has a zero dimension",
                        orientation, size
                    )));
                }
            }
        }

        // A generated name must never shadow a template
        let all_names: Vec<&String> = Orientation::ALL
            .iter()
            .flat_map(|o| self.templates.get(*o))
            .collect();
        for orientation in Orientation::ALL {
            for size in self.sizes.get(orientation) {
                let stem = size.to_string();
                if let Some(name) = all_names
                    .iter()
                    .find(|name| Path::new(name.as_str()).file_stem() == Some(OsStr::new(&stem)))
                {
                    return Err(Error::Configuration(format!(
                        "size {} would overwrite template {}",
                        size, name
                    )));
                }
            }
        }

        Ok(())
    }
}
