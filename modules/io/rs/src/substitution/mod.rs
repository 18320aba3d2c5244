mod reader;
pub mod validate;

pub use reader::Reader;
