// Core modules
pub mod batch_processor;
pub mod crop;
pub mod formats;
pub mod progress;
pub mod resize;

// Reexport core functionality
pub use batch_processor::{execute, plan, GenerationTask, TemplateSource};
pub use crop::crop_box;
pub use formats::{save_image, OutputOptions};
pub use resize::resize_to_target;
