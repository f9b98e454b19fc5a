mod cli;
mod extract;
mod ids;
mod index;
mod input;
mod run;
mod subsample;
mod tools;

pub use cli::{Cli, Commands};
pub use extract::{ExtractCommand, MatchArgs, MatchMode};
pub use ids::IdsCommand;
pub use index::IndexCommand;
pub use input::DatasetArgs;
pub use run::RunCommand;
pub use subsample::{SubsampleArgs, SubsampleCommand};
pub use tools::ToolArgs;
