//! Texture cache for toolbar icons, slide images and thumbnail backgrounds.
//!
//! Decoding goes through the `image` crate; a path that fails to decode is
//! remembered as missing so it is not retried every frame.

use anyhow::{Context, Result};
use eframe::egui;
use log::{debug, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Decode an image file into an egui color image.
pub fn decode_image(path: &Path) -> Result<egui::ColorImage> {
    let img = image::open(path)
        .with_context(|| format!("Decode image error: {}", path.display()))?
        .to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw()))
}

/// Convert an RGB bitmap (thumbnail background) into an egui color image.
pub fn rgb_to_color_image(img: &image::RgbImage) -> egui::ColorImage {
    let rgba = image::DynamicImage::ImageRgb8(img.clone()).to_rgba8();
    egui::ColorImage::from_rgba_unmultiplied(
        [rgba.width() as usize, rgba.height() as usize],
        rgba.as_raw(),
    )
}

#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<PathBuf, Option<egui::TextureHandle>>,
    named: HashMap<&'static str, egui::TextureHandle>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture for a file on disk, `None` if it cannot be decoded.
    pub fn file(&mut self, ctx: &egui::Context, path: &Path) -> Option<egui::TextureHandle> {
        if let Some(entry) = self.textures.get(path) {
            return entry.clone();
        }
        let entry = match decode_image(path) {
            Ok(image) => {
                debug!("Loaded texture {}", path.display());
                Some(ctx.load_texture(
                    path.to_string_lossy(),
                    image,
                    egui::TextureOptions::LINEAR,
                ))
            }
            Err(e) => {
                warn!("{:#}", e);
                None
            }
        };
        self.textures.insert(path.to_path_buf(), entry.clone());
        entry
    }

    /// Toolbar icon. A missing file means text-only buttons, so it is only
    /// noted at debug level; files that exist but fail to decode still warn.
    pub fn icon(&mut self, ctx: &egui::Context, path: &Path) -> Option<egui::TextureHandle> {
        if !self.textures.contains_key(path) && !path.is_file() {
            debug!("No icon at {}, showing text", path.display());
            self.textures.insert(path.to_path_buf(), None);
            return None;
        }
        self.file(ctx, path)
    }

    /// Texture generated in memory, built once per name.
    pub fn generated(
        &mut self,
        ctx: &egui::Context,
        name: &'static str,
        build: impl FnOnce() -> egui::ColorImage,
    ) -> egui::TextureHandle {
        self.named
            .entry(name)
            .or_insert_with(|| ctx.load_texture(name, build(), egui::TextureOptions::LINEAR))
            .clone()
    }

    /// Forget failed and loaded files (after the user replaced them on disk).
    pub fn clear_files(&mut self) {
        self.textures.clear();
    }
}
