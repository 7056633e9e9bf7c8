pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
// cmd and reports are binary modules (in main.rs), not part of the library.
