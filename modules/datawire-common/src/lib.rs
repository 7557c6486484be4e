pub mod config;
pub mod error;
pub mod message;
pub mod telemetry;

pub use config::Config;
pub use error::{DatawireError, DatawireResult};
pub use message::Message;
