//! Messages exchanged between the protocol compiler and a plugin, following
//! [plugin.proto](https://github.com/protocolbuffers/protobuf/blob/main/src/google/protobuf/compiler/plugin.proto).

use serde::{Deserialize, Serialize};

use crate::descriptor::FileDescriptorProto;

/// The version number of protocol compiler.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Version {
    #[prost(int32, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<i32>,
    #[prost(int32, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor: Option<i32>,
    #[prost(int32, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<i32>,
    /// A suffix for alpha, beta or rc release, e.g., "alpha-1", "rc2".
    #[prost(string, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

/// An encoded CodeGeneratorRequest is written to the plugin's stdin.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeGeneratorRequest {
    /// The .proto files that were explicitly listed on the command-line. The
    /// code generator should generate code only for these files.
    #[prost(string, repeated, tag = "1")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_to_generate: Vec<String>,
    /// The generator parameter passed on the command-line.
    #[prost(string, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    /// FileDescriptorProtos for all files in files_to_generate and everything
    /// they import, in topological order.
    #[prost(message, repeated, tag = "15")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub proto_file: Vec<FileDescriptorProto>,
    /// File descriptors with all options, including source-retention options,
    /// for the files listed in files_to_generate.
    #[prost(message, repeated, tag = "17")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_file_descriptors: Vec<FileDescriptorProto>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler_version: Option<Version>,
}

/// The plugin writes an encoded CodeGeneratorResponse to stdout.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CodeGeneratorResponse {
    /// Error message. If non-empty, code generation failed and the compiler
    /// prints the message and fails. This is reserved for problems in the
    /// input, not for plugin bugs.
    #[prost(string, optional, tag = "1")]
    pub error: Option<String>,
    /// A bitwise "or" of `code_generator_response::Feature` values.
    #[prost(uint64, optional, tag = "2")]
    pub supported_features: Option<u64>,
    #[prost(message, repeated, tag = "15")]
    pub file: Vec<code_generator_response::File>,
}

/// Nested message and enum types in `CodeGeneratorResponse`.
pub mod code_generator_response {
    /// Represents a single generated file.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct File {
        /// The file name, relative to the output directory.
        #[prost(string, optional, tag = "1")]
        pub name: Option<String>,
        #[prost(string, optional, tag = "2")]
        pub insertion_point: Option<String>,
        #[prost(string, optional, tag = "15")]
        pub content: Option<String>,
    }

    impl File {
        pub fn new(name: impl Into<String>, content: impl Into<String>) -> File {
            File {
                name: Some(name.into()),
                content: Some(content.into()),
                ..Default::default()
            }
        }
    }

    /// Sync with code_generator.h.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Feature {
        None = 0,
        Proto3Optional = 1,
        SupportsEditions = 2,
    }
}
