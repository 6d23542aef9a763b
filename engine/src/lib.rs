// Engine library root
// Pure calculation logic: no UI types, no I/O. The GUI crate calls into these
// modules synchronously from its event handlers.

pub mod accumulator;
pub mod convert;
pub mod dates;
pub mod error;
pub mod finance;
pub mod health;
pub mod history;
pub mod input;
pub mod percentage;
pub mod vedic;

pub use error::EngineError;
