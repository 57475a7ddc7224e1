pub mod catalog;
pub mod document;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod platform;
pub mod report;
pub mod resolution;
pub mod sampler;
pub mod shape;


pub use catalog::Catalog;
pub use document::OutputDocument;
pub use error::{ScanError, ScanResult};
pub use pipeline::run;
pub use report::RunReport;
