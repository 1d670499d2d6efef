pub mod config;
pub mod error;
pub mod event;
pub mod generator;
pub mod pipeline;
pub mod publisher;

pub mod kafka;

pub use config::Config;
pub use error::{Error, Result};
pub use event::NameEvent;
pub use pipeline::Pipeline;
pub use publisher::{PublishStats, Publisher};
