pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod prettyprint;
pub mod telemetry;

pub use error::{PushError, PushResult};
