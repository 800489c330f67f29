mod loader;
mod patterns;
mod scan;
mod types;

pub use loader::load_lines;
pub use scan::UniformScanner;
pub use types::{ScanEvent, UniformDecl, UniformStructDecl};
