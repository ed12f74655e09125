#![allow(dead_code)]

use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Route library logs through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Write a gradient template image; the format follows `name`'s extension
pub fn create_template(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) % 256) as u8,
        ])
    });
    image.save(&path).unwrap();
    path
}

/// A small theme tree with one template of each kind
///
/// ```text
/// Next/contents/images/base_size.png          (horizontal, 320x180)
/// Next/contents/images_dark/base_size.jpg     (horizontal, 300x200)
/// Next/contents/images/vertical_base_size.png (vertical, 180x320)
/// ```
pub fn create_theme_tree(root: &Path) -> Vec<PathBuf> {
    let images = root.join("Next").join("contents").join("images");
    let dark = root.join("Next").join("contents").join("images_dark");

    let templates = vec![
        create_template(&images, "base_size.png", 320, 180),
        create_template(&dark, "base_size.jpg", 300, 200),
        create_template(&images, "vertical_base_size.png", 180, 320),
    ];

    // Unrelated image that must be left alone
    create_template(&images, "screenshot.png", 64, 64);

    templates
}

/// Sorted names of the files in `dir`
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
