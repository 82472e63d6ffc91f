//! Library side of the `solar-geojson` binary: logging setup and the
//! interactive prompter.

pub mod logging;
pub mod prompt;
