//! CovidStat - COVID-19 case counts for a single country.
//!
//! This library exposes the application components for testing.

pub mod app;
pub mod args;
pub mod message;
pub mod view;

// Re-export commonly used types
pub use app::CovidStat;
pub use message::Message;
