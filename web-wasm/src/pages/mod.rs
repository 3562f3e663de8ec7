pub mod document;
pub mod history;
pub mod home;
