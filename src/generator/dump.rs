use log::debug;
use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::Generator;
use crate::compiler::CodeGeneratorRequest;
use crate::config::{Config, MAX_DUMP_INDENT};
use crate::error::GenerationError;

const FILE_NAME: &str = "request_dump.json";

/// Renders the whole request as JSON.
///
/// Reading the file back with `serde_json` yields a request equal to the one
/// the plugin received.
pub struct DumpGenerator;

impl Generator for DumpGenerator {
    fn file_name(&self) -> &'static str {
        FILE_NAME
    }

    fn generate(
        &self,
        request: &CodeGeneratorRequest,
        config: &Config,
    ) -> Result<String, GenerationError> {
        let dump_error = |source| GenerationError::Dump {
            file: FILE_NAME,
            source,
        };

        let mut buf = Vec::new();
        if config.dump_indent == 0 {
            serde_json::to_writer(&mut buf, request).map_err(dump_error)?;
        } else {
            let indent = vec![b' '; config.dump_indent.min(MAX_DUMP_INDENT)];
            let mut serializer =
                Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
            request.serialize(&mut serializer).map_err(dump_error)?;
        }
        buf.push(b'\n');
        debug!("request dump: {} bytes", buf.len());

        String::from_utf8(buf).map_err(|err| dump_error(serde_json::Error::custom(err)))
    }
}
