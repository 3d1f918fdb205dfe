//! Plugin options, passed by the compiler as the request's `parameter`
//! string (`--pluginexample_opt=graph_name=deps,scope=generate`).

use log::{debug, warn};

use crate::compiler::CodeGeneratorRequest;
use crate::descriptor::FileDescriptorProto;

/// Which files the stats and graph passes walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scope {
    /// Every file in the request, imports included.
    #[default]
    All,
    /// Only the files listed in `file_to_generate`.
    Generate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub graph_name: String,
    pub scope: Scope,
    /// Indentation width of the JSON dump, at most `MAX_DUMP_INDENT`. Zero
    /// renders it on a single line.
    pub dump_indent: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            graph_name: "entities".to_owned(),
            scope: Scope::All,
            dump_indent: 2,
        }
    }
}

/// Widest indentation the JSON dump accepts.
pub const MAX_DUMP_INDENT: usize = 16;

impl Config {
    /// Parses a comma separated list of `key[=value]` options.
    ///
    /// The compiler hands every plugin the same parameter string, so options
    /// meant for other tools (`paths=source_relative`) are common. Unknown keys
    /// are skipped and a known key with an invalid value keeps its default;
    /// both are logged.
    pub fn from_parameter(parameter: &str) -> Config {
        let mut config = Config::default();

        for opt in parameter.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (key, value) = match opt.split_once('=') {
                Some((key, value)) => (key.trim(), value.trim()),
                None => (opt, ""),
            };
            debug!("plugin option: {:?} = {:?}", key, value);

            if let Err(reason) = config.apply(key, value) {
                warn!("ignoring plugin option `{}`: {}", opt, reason);
            }
        }

        config
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "graph_name" => {
                if !is_identifier(value) {
                    return Err(
                        "expected an identifier made of letters, digits and '_'".to_owned(),
                    );
                }
                self.graph_name = value.to_owned();
            }
            "scope" => {
                self.scope = match value {
                    "all" => Scope::All,
                    "generate" => Scope::Generate,
                    _ => return Err(format!("expected `all` or `generate`, got `{}`", value)),
                }
            }
            "dump_indent" => match value.parse::<usize>() {
                Ok(indent) if indent <= MAX_DUMP_INDENT => self.dump_indent = indent,
                _ => {
                    return Err(format!(
                        "expected an integer between 0 and {}, got `{}`",
                        MAX_DUMP_INDENT, value
                    ))
                }
            },
            _ => return Err("unknown option".to_owned()),
        }
        Ok(())
    }

    /// The files the stats and graph passes walk, in request order.
    pub fn files<'a>(&self, request: &'a CodeGeneratorRequest) -> Vec<&'a FileDescriptorProto> {
        match self.scope {
            Scope::All => request.proto_file.iter().collect(),
            Scope::Generate => request
                .proto_file
                .iter()
                .filter(|file| {
                    request
                        .file_to_generate
                        .iter()
                        .any(|name| name == file.name())
                })
                .collect(),
        }
    }
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
