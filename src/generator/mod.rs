//! The artifacts produced for every request.
//!
//! Each generator is an independent, read-only pass over the request which
//! renders exactly one output file. They run in a fixed order and the
//! response lists their files in that same order.

mod dump;
mod graph;
mod stats;

pub use self::dump::DumpGenerator;
pub use self::graph::GraphGenerator;
pub use self::stats::{Stats, StatsGenerator};

use crate::compiler::CodeGeneratorRequest;
use crate::config::Config;
use crate::error::GenerationError;

pub trait Generator {
    /// Name of the generated file, relative to the output directory.
    fn file_name(&self) -> &'static str;

    /// Renders the file contents for `request`.
    fn generate(
        &self,
        request: &CodeGeneratorRequest,
        config: &Config,
    ) -> Result<String, GenerationError>;
}

/// All generators, in the order their files appear in the response.
pub fn generators() -> [&'static dyn Generator; 3] {
    [&DumpGenerator, &StatsGenerator, &GraphGenerator]
}
