pub mod bench;
pub mod clock;
pub mod command;
pub mod config;
pub mod display;
pub mod errors;
pub mod installer;
pub mod types;
