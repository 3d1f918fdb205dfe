//! `protoc-gen-pluginexample` is a `protoc` plugin which, rather than
//! generating code, reports on the request it receives.
//!
//! For every invocation it writes three files:
//!
//! - `request_dump.json`: the complete request as JSON,
//! - `request_stats.txt`: counts of files, services, methods, messages and fields,
//! - `entity_graph.dot`: a Graphviz graph of services, methods and messages.
//!
//! ```text
//! protoc --plugin=protoc-gen-pluginexample --pluginexample_out=out \
//!     --pluginexample_opt=graph_name=deps person.proto
//! ```
//!
//! Options are passed as a comma separated `key=value` list, see [`Config`].

pub mod compiler;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod fully_qualified_name;
pub mod generator;
mod json;
pub mod transport;
pub mod walk;

use log::{debug, warn};

use crate::compiler::code_generator_response::{Feature, File};
use crate::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use crate::generator::{generators, Generator};

pub use crate::config::Config;
pub use crate::error::{GenerationError, PluginError};
pub use crate::transport::execute;

/// Builds the response for `request`.
///
/// A failing generator does not abort the plugin: the response then carries
/// the error message and no files, for the compiler to report. Options the
/// plugin does not understand are logged and ignored.
pub fn run_plugin(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    build_response(request, &generators())
}

fn build_response(
    request: &CodeGeneratorRequest,
    generators: &[&dyn Generator],
) -> CodeGeneratorResponse {
    let mut response = CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    };

    match generate_files(request, generators) {
        Ok(files) => response.file = files,
        Err(error) => {
            warn!("generation failed: {}", error);
            response.error = Some(error.to_string());
        }
    }
    response
}

/// Runs `generators` over `request`, in order, stopping at the first failure.
pub fn generate_files(
    request: &CodeGeneratorRequest,
    generators: &[&dyn Generator],
) -> Result<Vec<File>, GenerationError> {
    let config = Config::from_parameter(request.parameter());
    debug!("{:?}", config);

    generators
        .iter()
        .map(|generator| -> Result<File, GenerationError> {
            let content = generator.generate(request, &config)?;
            debug!("generated {} ({} bytes)", generator.file_name(), content.len());
            Ok(File::new(generator.file_name(), content))
        })
        .collect()
}
