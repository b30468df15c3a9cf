mod config;
mod output;
mod transcript;

pub use self::config::PortfolioConfig;
pub use self::output::{Fragment, Output};
pub use self::transcript::{INIT_COMMAND, Transcript, TranscriptEntry};
