pub mod align;
pub mod error;
pub mod structs;
pub mod util;

pub use error::WavefrontError;
