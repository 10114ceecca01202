mod create;
mod index;
mod sale;
pub mod types;
mod views;

pub use types::*;
