mod error;
mod load;
mod write;

pub use error::DocumentError;
pub use load::load_document;
pub use write::write_document;
