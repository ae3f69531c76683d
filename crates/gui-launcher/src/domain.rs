//! Domain entities and pure launch logic.

pub mod layout;
pub mod toolchain;
