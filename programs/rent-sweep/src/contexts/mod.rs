pub mod clean;
pub mod code;
pub mod config;
pub mod enroll;

pub use clean::*;
pub use code::*;
pub use config::*;
pub use enroll::*;
