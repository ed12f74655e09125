use image::DynamicImage;
use log::{debug, info};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{Config, Schedule, TemplateCache};
use crate::error::{Error, Result};
use crate::logging::{log_generated, log_image_error};
use crate::processing::crop::crop_box;
use crate::processing::formats::{save_image, OutputOptions};
use crate::processing::progress::ProgressTracker;
use crate::processing::resize::resize_to_target;
use crate::types::{GeneratedImage, TargetSize, TemplateFile, TemplateImage};

/// Where a task gets its template pixels from
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Decoded once, shared by every size of the template
    Shared(TemplateImage),

    /// Decoded from disk each time a task runs
    OnDisk(TemplateFile),
}

impl TemplateSource {
    /// The template file behind this source
    pub fn file(&self) -> &TemplateFile {
        match self {
            TemplateSource::Shared(template) => &template.file,
            TemplateSource::OnDisk(file) => file,
        }
    }

    /// Decoded template pixels
    pub fn load(&self) -> Result<Arc<DynamicImage>> {
        match self {
            TemplateSource::Shared(template) => Ok(Arc::clone(&template.image)),
            TemplateSource::OnDisk(file) => Ok(load_template(file)?.image),
        }
    }

    /// Template width and height, without decoding when reading from disk
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        match self {
            TemplateSource::Shared(template) => Ok((template.width(), template.height())),
            TemplateSource::OnDisk(file) => {
                image::image_dimensions(&file.path).map_err(|source| Error::Load {
                    path: file.path.clone(),
                    source,
                })
            }
        }
    }
}

/// One output image to produce from one template
#[derive(Debug, Clone)]
pub struct GenerationTask {
    pub source: TemplateSource,
    pub size: TargetSize,
    pub output: PathBuf,
}

impl GenerationTask {
    /// Crop, resize and write the output image
    pub fn run(&self, options: &OutputOptions) -> Result<GeneratedImage> {
        info!("Generating {}", self.size);

        let image = self.source.load()?;
        let (resized, crop) = resize_to_target(&image, self.size);
        save_image(&resized, &self.output, options)?;

        let generated = GeneratedImage {
            template: self.source.file().path.clone(),
            output: self.output.clone(),
            size: self.size,
            crop,
        };
        log_generated(&generated);

        Ok(generated)
    }

    /// Describe the output image without writing it
    pub fn preview(&self) -> Result<GeneratedImage> {
        let (width, height) = self.source.dimensions()?;

        Ok(GeneratedImage {
            template: self.source.file().path.clone(),
            output: self.output.clone(),
            size: self.size,
            crop: crop_box(width, height, self.size),
        })
    }
}

/// Decode a template from disk
pub fn load_template(file: &TemplateFile) -> Result<TemplateImage> {
    debug!("Loading template {}", file.path.display());

    let image = image::open(&file.path).map_err(|source| Error::Load {
        path: file.path.clone(),
        source,
    })?;

    Ok(TemplateImage {
        file: file.clone(),
        image: Arc::new(image),
    })
}

/// Expand templates into one task per configured size of their orientation
///
/// With `TemplateCache::Shared` every template is decoded here, once.
/// Templates whose extension has no encoder are refused before decoding.
pub fn plan(templates: &[TemplateFile], config: &Config) -> Result<Vec<GenerationTask>> {
    let mut tasks = Vec::new();

    for file in templates {
        if !file.format().is_supported() {
            return Err(Error::UnsupportedFormat(format!(
                "{} ({})",
                file.extension(),
                file.path.display()
            )));
        }

        let source = match config.cache {
            TemplateCache::Shared => TemplateSource::Shared(load_template(file)?),
            TemplateCache::Reload => TemplateSource::OnDisk(file.clone()),
        };

        for &size in config.sizes.get(file.orientation) {
            let output = file.output_path(size);
            if output == file.path {
                return Err(Error::WouldOverwriteTemplate(output));
            }

            tasks.push(GenerationTask {
                source: source.clone(),
                size,
                output,
            });
        }
    }

    Ok(tasks)
}

/// Run every task, stopping at the first failure
///
/// Images already written when a task fails are left in place.
pub fn execute(tasks: &[GenerationTask], config: &Config) -> Result<Vec<GeneratedImage>> {
    let options = OutputOptions::from(config);
    let tracker = ProgressTracker::new(tasks.len(), config.show_progress);

    let run_task = |task: &GenerationTask| -> Result<GeneratedImage> {
        let result = if config.dry_run {
            task.preview()
        } else {
            task.run(&options)
        };

        match &result {
            Ok(_) => tracker.increment(&task.size.to_string()),
            Err(e) => log_image_error(&task.output, "generate", e),
        }
        result
    };

    let results = match config.schedule {
        Schedule::Sequential => tasks.iter().map(run_task).collect::<Result<Vec<_>>>(),
        Schedule::Parallel => {
            let pool = build_pool(config.threads)?;
            pool.install(|| tasks.par_iter().map(run_task).collect::<Result<Vec<_>>>())
        }
    };

    match results {
        Ok(generated) => {
            tracker.finish();
            Ok(generated)
        }
        Err(e) => {
            tracker.abandon();
            Err(e)
        }
    }
}

/// Worker pool sized to `threads`, or the logical CPU count when 0
fn build_pool(threads: usize) -> Result<rayon::ThreadPool> {
    let num_threads = if threads == 0 { num_cpus::get() } else { threads };
    debug!("Using {} worker threads", num_threads);

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("wallpaper-worker-{}", i))
        .build()
        .map_err(|e| Error::ThreadPool(e.to_string()))
}
