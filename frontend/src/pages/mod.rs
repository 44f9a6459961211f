pub mod crops;
pub mod landing;
pub mod timeline;
pub mod weather;
