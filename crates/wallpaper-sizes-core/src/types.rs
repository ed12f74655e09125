use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Template orientation, selecting template names and target sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// All orientations, in processing order
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Other(String),
}

impl ImageFormat {
    /// Determine format from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Self::Jpeg,
            "png" => Self::Png,
            other => Self::Other(other.to_string()),
        }
    }

    /// Determine format from a path's extension
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or_else(|| Self::Other(String::new()))
    }

    /// Check if format can be written
    pub fn is_supported(&self) -> bool {
        match self {
            Self::Jpeg | Self::Png => true,
            Self::Other(_) => false,
        }
    }
}

/// A requested output resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Output file name for this size, e.g. `1920x1080.png`
    ///
    /// `extension` is appended verbatim and should include the leading dot.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}x{}{}", self.width, self.height, extension)
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for TargetSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Rectangle in source pixel coordinates, right and bottom exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// A template file located on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateFile {
    /// Full path to the template
    pub path: PathBuf,

    /// Which size table applies
    pub orientation: Orientation,
}

impl TemplateFile {
    /// Directory the generated images are written to
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Extension with its leading dot, as spelled on disk (`.png`, `.JPG`)
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }

    /// Output format selected by the extension
    pub fn format(&self) -> ImageFormat {
        ImageFormat::from_path(&self.path)
    }

    /// Path of the sibling image generated for `size`
    pub fn output_path(&self, size: TargetSize) -> PathBuf {
        self.parent().join(size.file_name(&self.extension()))
    }
}

/// A decoded template, shared between all sizes generated from it
#[derive(Debug, Clone)]
pub struct TemplateImage {
    pub file: TemplateFile,
    pub image: Arc<DynamicImage>,
}

impl TemplateImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Record of one image produced (or planned, in a dry run)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Template the image was derived from
    pub template: PathBuf,

    /// Path of the written image
    pub output: PathBuf,

    /// Requested size, always the exact output dimensions
    pub size: TargetSize,

    /// Region of the template that was kept, if any cropping was needed
    pub crop: Option<CropBox>,
}

/// Summary of a generation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Number of templates found
    pub templates: usize,

    /// Images written, in completion order
    pub generated: Vec<GeneratedImage>,

    /// Whether files were actually written
    pub dry_run: bool,
}
