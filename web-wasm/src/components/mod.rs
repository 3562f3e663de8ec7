pub mod footer;
pub mod highlighted_text;
pub mod navbar;
pub mod status_dialog;
pub mod word_cloud;
