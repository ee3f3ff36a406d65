#[macro_use]
extern crate num_derive;

pub mod api;
pub mod com;
mod enc;

pub use enc::{get_prediction_structure, PredictionStructureGroup};

