mod demo;

pub use demo::{BANNER_RULE, BANNER_TITLE, CONFIGURATION_HEADER, Demo};
