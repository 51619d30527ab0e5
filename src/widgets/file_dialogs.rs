//! Shared file dialog helpers.

use crate::entities::experiment::EXPERIMENT_EXT;

/// Image formats the texture cache can decode
pub const IMAGE_EXTS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Dialog for picking slide images.
pub fn create_image_dialog(title: &str) -> rfd::FileDialog {
    rfd::FileDialog::new()
        .add_filter("Images", IMAGE_EXTS)
        .set_title(title)
}

/// Dialog for opening or saving experiment files.
pub fn create_experiment_dialog(title: &str) -> rfd::FileDialog {
    rfd::FileDialog::new()
        .add_filter("Experiment", &[EXPERIMENT_EXT])
        .set_title(title)
}
