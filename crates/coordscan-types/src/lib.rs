pub mod types;

pub use types::{Combination, Rectangle, Resolution, Rgb, ShapedValue};
