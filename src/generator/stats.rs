use std::fmt::{self, Write};

use log::debug;

use super::Generator;
use crate::compiler::CodeGeneratorRequest;
use crate::config::Config;
use crate::descriptor::FileDescriptorProto;
use crate::error::GenerationError;

const FILE_NAME: &str = "request_stats.txt";

/// Counts of the descriptors present in a request.
///
/// Only top-level messages are counted: `messages` and `fields` do not
/// descend into nested message types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub files: usize,
    pub services: usize,
    pub methods: usize,
    pub messages: usize,
    pub fields: usize,
}

impl Stats {
    pub fn collect<'a>(files: impl IntoIterator<Item = &'a FileDescriptorProto>) -> Stats {
        let mut stats = Stats::default();
        for file in files {
            stats.files += 1;
            for service in &file.service {
                stats.services += 1;
                stats.methods += service.method.len();
            }
            // Top-level messages only, nested types are not counted.
            for message in &file.message_type {
                stats.messages += 1;
                stats.fields += message.field.len();
            }
        }
        stats
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "stats for code generation request")?;
        writeln!(f, "num files: {}", self.files)?;
        writeln!(f, "num services: {}", self.services)?;
        writeln!(f, "num methods: {}", self.methods)?;
        writeln!(f, "num messages: {}", self.messages)?;
        writeln!(f, "num fields: {}", self.fields)
    }
}

/// Writes a short report of the [`Stats`] of the request.
pub struct StatsGenerator;

impl Generator for StatsGenerator {
    fn file_name(&self) -> &'static str {
        FILE_NAME
    }

    fn generate(
        &self,
        request: &CodeGeneratorRequest,
        config: &Config,
    ) -> Result<String, GenerationError> {
        let stats = Stats::collect(config.files(request));
        debug!("{:?}", stats);

        let mut buf = String::new();
        write!(buf, "{}", stats).map_err(|source| GenerationError::Write {
            file: FILE_NAME,
            source,
        })?;
        Ok(buf)
    }
}
