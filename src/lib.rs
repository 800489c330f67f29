pub mod error;
pub mod report;
pub mod scanner;

pub use error::{Result, ScanError};
pub use report::{CollectReporter, JsonReporter, Reporter, TextReporter};
pub use scanner::{ScanEvent, UniformDecl, UniformScanner, UniformStructDecl};
