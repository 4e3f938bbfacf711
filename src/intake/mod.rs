pub mod upload;

pub use upload::ImageUploader;
