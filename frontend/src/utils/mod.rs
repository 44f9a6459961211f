pub mod api;
pub mod dom;
pub mod format;
pub mod scroll;
