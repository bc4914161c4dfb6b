use log::error;
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

/// Extensions offered by the image picker
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];

/// Show a modal error dialog and wait for it to be dismissed
pub async fn show_error(title: String, description: String) {
    error!("{}: {}", title, description);
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
