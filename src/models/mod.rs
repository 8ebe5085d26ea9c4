pub mod config;
pub mod family;
pub mod report;

pub use config::*;
pub use family::*;
pub use report::*;
