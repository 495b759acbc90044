pub mod content;
pub mod file;
pub mod resource;

pub use content::Content;
pub use file::FileSource;
pub use resource::Resource;
