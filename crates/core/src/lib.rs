#![forbid(unsafe_code)]

pub mod lab;
pub mod model;
pub mod navigator;
pub mod time;

pub use time::Clock;
