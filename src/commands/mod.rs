pub mod extract;
pub mod ids;
pub mod index;
mod paths;
pub mod run;
pub mod subsample;
mod utils;

pub use utils::{match_input, match_output, open_output};
