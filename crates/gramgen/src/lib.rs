pub mod cli;
pub mod config;
pub mod error;
pub mod invoke;
pub mod progress;
pub mod report;
pub mod runner;

pub use error::Error;
pub use runner::{regenerate, Attempt, Outcome};

use config::RegenConfig;
use invoke::SystemInvoker;

pub fn handle_config(config: RegenConfig) -> Result<Outcome, Error> {
    let mut invoker = SystemInvoker::new(config.progress);
    runner::regenerate(&config, &mut invoker)
}
