//! External tool invocation: probing, environment setup, server supervision.

pub mod detect;
pub mod server;
pub mod setup;
