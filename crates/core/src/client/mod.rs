pub mod api;
pub mod format;
pub mod view_model;
