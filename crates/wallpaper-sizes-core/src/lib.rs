//! Core functionality for generating wallpaper sizes from template images.
//!
//! Templates are found by exact file name anywhere under a root directory.
//! Each one is cropped to the aspect ratio of every configured target size,
//! centered, then resized with a Lanczos filter and written next to the
//! template as `{width}x{height}{ext}`.

// -- External Dependencies --
use log::info;

// -- Standard Library --
use std::time::Instant;

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use config::*;
pub use error::{Error, Result};
pub use types::*;

// -- Public Modules --
pub mod config;
pub mod discovery;
pub mod logging;
pub mod processing;
pub mod types;

/// Main entry point for the generation process
pub struct WallpaperGenerator {
    config: Config,
}

impl WallpaperGenerator {
    /// Create a new WallpaperGenerator with the provided configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this generator runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Discover all templates under the configured root
    pub fn discover_templates(&self) -> Result<Vec<TemplateFile>> {
        discovery::discover_templates(&self.config)
    }

    /// Expand discovered templates into generation tasks
    pub fn plan(&self, templates: &[TemplateFile]) -> Result<Vec<processing::GenerationTask>> {
        processing::plan(templates, &self.config)
    }

    /// Run the full pipeline: discover, plan, generate
    pub fn run(&self) -> Result<GenerationReport> {
        let start_time = Instant::now();

        info!("Discovering templates in {}...", self.config.root.display());
        let templates = self.discover_templates()?;
        info!("Found {} templates", templates.len());

        let tasks = self.plan(&templates)?;
        info!("Planned {} images", tasks.len());

        let generated = processing::execute(&tasks, &self.config)?;
        info!(
            "{} {} images in {:.1}s",
            if self.config.dry_run { "Planned" } else { "Generated" },
            generated.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(GenerationReport {
            templates: templates.len(),
            generated,
            dry_run: self.config.dry_run,
        })
    }
}
