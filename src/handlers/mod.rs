pub mod command_handler;
pub mod key_validator;
pub mod stats_handler;

#[cfg(test)]
pub(crate) mod testing;

pub use command_handler::{CommandHandler, Connector};
pub use key_validator::{check_api_key, spawn_key_check};
pub use stats_handler::StatsHandler;
