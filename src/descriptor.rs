//! Schema descriptors handed to the plugin by the protocol compiler.
//!
//! Translation of
//! [descriptor.proto](https://github.com/protocolbuffers/protobuf/blob/main/src/google/protobuf/descriptor.proto),
//! declared by hand. `FileDescriptorSet` and `GeneratedCodeInfo` never reach a
//! plugin and are left out; extensions of the options messages are skipped
//! while decoding.
//!
//! Every message also derives `serde` so that a request can be rendered to
//! JSON and read back. Key names follow the protobuf JSON mapping
//! (lowerCamelCase), unset fields are omitted, enum values are written by
//! name, bytes as base64 and non-finite doubles as strings.

use serde::{Deserialize, Serialize};

/// Declares a protobuf enumeration together with its value names and a
/// `serde(with = ...)` module which renders fields of that type by name.
macro_rules! proto_enum {
    (
        $(#[$attr:meta])*
        pub enum $name:ident with $json:ident {
            $(
                $(#[$variant_attr:meta])*
                $variant:ident = $number:tt => $str_name:literal,
            )+
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum $name {
            $(
                $(#[$variant_attr])*
                $variant = $number,
            )+
        }

        impl $name {
            /// String value of the enum field names used in the ProtoBuf definition.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $str_name,)+
                }
            }

            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> Option<Self> {
                match value {
                    $($str_name => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl $crate::json::ProtoEnum for $name {
            fn as_str_name(&self) -> &'static str {
                $name::as_str_name(self)
            }

            fn from_str_name(value: &str) -> Option<Self> {
                $name::from_str_name(value)
            }
        }

        #[allow(dead_code)]
        pub(crate) mod $json {
            pub mod optional {
                pub fn serialize<S>(value: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    $crate::json::serialize_enum::<super::super::$name, S>(value, serializer)
                }

                pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    $crate::json::deserialize_enum::<super::super::$name, D>(deserializer)
                }
            }

            pub mod repeated {
                pub fn serialize<S>(values: &[i32], serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    $crate::json::serialize_enums::<super::super::$name, S>(values, serializer)
                }

                pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    $crate::json::deserialize_enums::<super::super::$name, D>(deserializer)
                }
            }
        }
    };
}

/// Describes a complete .proto file.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileDescriptorProto {
    /// file name, relative to root of source tree
    #[prost(string, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// e.g. "foo", "foo.bar", etc.
    #[prost(string, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Names of files imported by this file.
    #[prost(string, repeated, tag = "3")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependency: Vec<String>,
    /// Indexes of the public imported files in the dependency list above.
    #[prost(int32, repeated, packed = "false", tag = "10")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub public_dependency: Vec<i32>,
    /// Indexes of the weak imported files in the dependency list.
    #[prost(int32, repeated, packed = "false", tag = "11")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub weak_dependency: Vec<i32>,
    /// All top-level definitions in this file.
    #[prost(message, repeated, tag = "4")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub message_type: Vec<DescriptorProto>,
    #[prost(message, repeated, tag = "5")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enum_type: Vec<EnumDescriptorProto>,
    #[prost(message, repeated, tag = "6")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub service: Vec<ServiceDescriptorProto>,
    #[prost(message, repeated, tag = "7")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<FieldDescriptorProto>,
    #[prost(message, optional, tag = "8")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<FileOptions>,
    /// Only needed by development tools; stripped from runtime descriptors.
    #[prost(message, optional, tag = "9")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_code_info: Option<SourceCodeInfo>,
    /// The syntax of the proto file: "proto2", "proto3" or "editions".
    #[prost(string, optional, tag = "12")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,
    /// The edition of the proto file, set when `syntax` is "editions".
    #[prost(enumeration = "Edition", optional, tag = "14")]
    #[serde(skip_serializing_if = "Option::is_none", with = "edition_json::optional")]
    pub edition: Option<i32>,
}

/// Describes a message type.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DescriptorProto {
    #[prost(string, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub field: Vec<FieldDescriptorProto>,
    #[prost(message, repeated, tag = "6")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<FieldDescriptorProto>,
    #[prost(message, repeated, tag = "3")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested_type: Vec<DescriptorProto>,
    #[prost(message, repeated, tag = "4")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enum_type: Vec<EnumDescriptorProto>,
    #[prost(message, repeated, tag = "5")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extension_range: Vec<descriptor_proto::ExtensionRange>,
    #[prost(message, repeated, tag = "8")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub oneof_decl: Vec<OneofDescriptorProto>,
    #[prost(message, optional, tag = "7")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<MessageOptions>,
    #[prost(message, repeated, tag = "9")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reserved_range: Vec<descriptor_proto::ReservedRange>,
    /// Reserved field names, which may not be used by fields in the same message.
    #[prost(string, repeated, tag = "10")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reserved_name: Vec<String>,
}

/// Nested message types of `DescriptorProto`.
pub mod descriptor_proto {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct ExtensionRange {
        /// Inclusive.
        #[prost(int32, optional, tag = "1")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub start: Option<i32>,
        /// Exclusive.
        #[prost(int32, optional, tag = "2")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub end: Option<i32>,
        #[prost(message, optional, tag = "3")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub options: Option<super::ExtensionRangeOptions>,
    }

    /// Range of reserved tag numbers. Reserved tag numbers may not be used by
    /// fields or extension ranges in the same message.
    #[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct ReservedRange {
        /// Inclusive.
        #[prost(int32, optional, tag = "1")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub start: Option<i32>,
        /// Exclusive.
        #[prost(int32, optional, tag = "2")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub end: Option<i32>,
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtensionRangeOptions {
    /// The parser stores options it doesn't recognize here.
    #[prost(message, repeated, tag = "999")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uninterpreted_option: Vec<UninterpretedOption>,
    /// For external users: DO NOT USE. We are in the process of open sourcing
    /// extension declaration and executing internal cleanups before it can be
    /// used externally.
    #[prost(message, repeated, tag = "2")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub declaration: Vec<extension_range_options::Declaration>,
    #[prost(message, optional, tag = "50")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureSet>,
    /// The verification state of the range.
    #[prost(
        enumeration = "extension_range_options::VerificationState",
        optional,
        tag = "3",
        default = "Unverified"
    )]
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "extension_range_options::verification_state_json::optional"
    )]
    pub verification: Option<i32>,
}

/// Nested types of `ExtensionRangeOptions`.
pub mod extension_range_options {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct Declaration {
        /// The extension number declared within the extension range.
        #[prost(int32, optional, tag = "1")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub number: Option<i32>,
        /// The fully-qualified name of the extension field, with a leading dot.
        #[prost(string, optional, tag = "2")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub full_name: Option<String>,
        #[prost(string, optional, tag = "3")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub r#type: Option<String>,
        #[prost(bool, optional, tag = "5")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reserved: Option<bool>,
        #[prost(bool, optional, tag = "6")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub repeated: Option<bool>,
    }

    proto_enum! {
        /// The verification state of the extension range.
        pub enum VerificationState with verification_state_json {
            /// All the extensions of the range must be declared.
            Declaration = 0 => "DECLARATION",
            Unverified = 1 => "UNVERIFIED",
        }
    }
}

/// Describes a field within a message.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldDescriptorProto {
    #[prost(string, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[prost(int32, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,
    #[prost(enumeration = "field_descriptor_proto::Label", optional, tag = "4")]
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "field_descriptor_proto::label_json::optional"
    )]
    pub label: Option<i32>,
    /// If type_name is set, this need not be set. If both this and type_name
    /// are set, this must be one of TYPE_ENUM, TYPE_MESSAGE or TYPE_GROUP.
    #[prost(enumeration = "field_descriptor_proto::Type", optional, tag = "5")]
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "field_descriptor_proto::type_json::optional"
    )]
    pub r#type: Option<i32>,
    /// For message and enum types, this is the name of the type. The compiler
    /// hands these over fully qualified, i.e. starting with a '.'.
    #[prost(string, optional, tag = "6")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// For extensions, this is the name of the type being extended. It is
    /// resolved in the same manner as type_name.
    #[prost(string, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extendee: Option<String>,
    /// For numeric types, contains the original text representation of the value.
    /// For booleans, "true" or "false".
    /// For strings, contains the default text contents (not escaped in any way).
    /// For bytes, contains the C escaped value.  All bytes >= 128 are escaped.
    #[prost(string, optional, tag = "7")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// If set, gives the index of a oneof in the containing type's oneof_decl
    /// list.
    #[prost(int32, optional, tag = "9")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oneof_index: Option<i32>,
    #[prost(string, optional, tag = "10")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_name: Option<String>,
    #[prost(message, optional, tag = "8")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<FieldOptions>,
    /// Set on proto3 fields declared with the `optional` keyword.
    #[prost(bool, optional, tag = "17")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proto3_optional: Option<bool>,
}

/// Nested types of `FieldDescriptorProto`.
pub mod field_descriptor_proto {
    proto_enum! {
        pub enum Type with type_json {
            Double = 1 => "TYPE_DOUBLE",
            Float = 2 => "TYPE_FLOAT",
            Int64 = 3 => "TYPE_INT64",
            Uint64 = 4 => "TYPE_UINT64",
            Int32 = 5 => "TYPE_INT32",
            Fixed64 = 6 => "TYPE_FIXED64",
            Fixed32 = 7 => "TYPE_FIXED32",
            Bool = 8 => "TYPE_BOOL",
            String = 9 => "TYPE_STRING",
            /// Tag-delimited aggregate.
            Group = 10 => "TYPE_GROUP",
            /// Length-delimited aggregate.
            Message = 11 => "TYPE_MESSAGE",
            Bytes = 12 => "TYPE_BYTES",
            Uint32 = 13 => "TYPE_UINT32",
            Enum = 14 => "TYPE_ENUM",
            Sfixed32 = 15 => "TYPE_SFIXED32",
            Sfixed64 = 16 => "TYPE_SFIXED64",
            Sint32 = 17 => "TYPE_SINT32",
            Sint64 = 18 => "TYPE_SINT64",
        }
    }

    proto_enum! {
        pub enum Label with label_json {
            Optional = 1 => "LABEL_OPTIONAL",
            Required = 2 => "LABEL_REQUIRED",
            Repeated = 3 => "LABEL_REPEATED",
        }
    }
}

/// Describes a oneof.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OneofDescriptorProto {
    #[prost(string, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OneofOptions>,
}

/// Describes an enum type.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnumDescriptorProto {
    #[prost(string, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<EnumValueDescriptorProto>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<EnumOptions>,
    /// Range of reserved numeric values. Reserved values may not be used by
    /// entries in the same enum.
    #[prost(message, repeated, tag = "4")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reserved_range: Vec<enum_descriptor_proto::EnumReservedRange>,
    #[prost(string, repeated, tag = "5")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reserved_name: Vec<String>,
}

/// Nested message types of `EnumDescriptorProto`.
pub mod enum_descriptor_proto {
    use serde::{Deserialize, Serialize};

    /// Unlike a message's reserved range, both ends are inclusive.
    #[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct EnumReservedRange {
        #[prost(int32, optional, tag = "1")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub start: Option<i32>,
        #[prost(int32, optional, tag = "2")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub end: Option<i32>,
    }
}

/// Describes a value within an enum.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnumValueDescriptorProto {
    #[prost(string, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[prost(int32, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<EnumValueOptions>,
}

/// Describes a service.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceDescriptorProto {
    #[prost(string, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub method: Vec<MethodDescriptorProto>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ServiceOptions>,
}

/// Describes a method of a service.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MethodDescriptorProto {
    #[prost(string, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Input and output type names. These are resolved in the same way as
    /// FieldDescriptorProto.type_name, but must refer to a message type.
    #[prost(string, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[prost(string, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_type: Option<String>,
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<MethodOptions>,
    #[prost(bool, optional, tag = "5", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_streaming: Option<bool>,
    #[prost(bool, optional, tag = "6", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_streaming: Option<bool>,
}

proto_enum! {
    /// The full set of known editions.
    pub enum Edition with edition_json {
        /// A placeholder for an unknown edition value.
        Unknown = 0 => "EDITION_UNKNOWN",
        /// A placeholder edition for specifying default behaviors *before* a
        /// feature was first introduced.
        Legacy = 900 => "EDITION_LEGACY",
        Proto2 = 998 => "EDITION_PROTO2",
        Proto3 = 999 => "EDITION_PROTO3",
        Edition2023 = 1000 => "EDITION_2023",
        Edition2024 = 1001 => "EDITION_2024",
        /// Placeholder editions for testing feature resolution.
        Edition1TestOnly = 1 => "EDITION_1_TEST_ONLY",
        Edition2TestOnly = 2 => "EDITION_2_TEST_ONLY",
        Edition99997TestOnly = 99997 => "EDITION_99997_TEST_ONLY",
        Edition99998TestOnly = 99998 => "EDITION_99998_TEST_ONLY",
        Edition99999TestOnly = 99999 => "EDITION_99999_TEST_ONLY",
        /// Placeholder for specifying unbounded edition support.
        Max = 2147483647 => "EDITION_MAX",
    }
}

// Options.
//
// Each of the options messages below ends with the uninterpreted options the
// parser could not resolve. Custom options are extensions of these messages and
// are not decoded.

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileOptions {
    /// Sets the Java package where classes generated from this .proto will be
    /// placed.
    #[prost(string, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_package: Option<String>,
    #[prost(string, optional, tag = "8")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_outer_classname: Option<String>,
    #[prost(bool, optional, tag = "10", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_multiple_files: Option<bool>,
    /// This option does nothing.
    #[prost(bool, optional, tag = "20")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_generate_equals_and_hash: Option<bool>,
    #[prost(bool, optional, tag = "27", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_string_check_utf8: Option<bool>,
    #[prost(
        enumeration = "file_options::OptimizeMode",
        optional,
        tag = "9",
        default = "Speed"
    )]
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "file_options::optimize_mode_json::optional"
    )]
    pub optimize_for: Option<i32>,
    /// Sets the Go package where structs generated from this .proto will be
    /// placed.
    #[prost(string, optional, tag = "11")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_package: Option<String>,
    #[prost(bool, optional, tag = "16", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_generic_services: Option<bool>,
    #[prost(bool, optional, tag = "17", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_generic_services: Option<bool>,
    #[prost(bool, optional, tag = "18", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub py_generic_services: Option<bool>,
    #[prost(bool, optional, tag = "42", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub php_generic_services: Option<bool>,
    #[prost(bool, optional, tag = "23", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[prost(bool, optional, tag = "31", default = "true")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_enable_arenas: Option<bool>,
    #[prost(string, optional, tag = "36")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objc_class_prefix: Option<String>,
    #[prost(string, optional, tag = "37")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csharp_namespace: Option<String>,
    #[prost(string, optional, tag = "39")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift_prefix: Option<String>,
    #[prost(string, optional, tag = "40")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub php_class_prefix: Option<String>,
    #[prost(string, optional, tag = "41")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub php_namespace: Option<String>,
    #[prost(string, optional, tag = "44")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub php_metadata_namespace: Option<String>,
    #[prost(string, optional, tag = "45")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruby_package: Option<String>,
    #[prost(message, optional, tag = "50")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureSet>,
    #[prost(message, repeated, tag = "999")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uninterpreted_option: Vec<UninterpretedOption>,
}

/// Nested types of `FileOptions`.
pub mod file_options {
    proto_enum! {
        /// Generated classes can be optimized for speed or code size.
        pub enum OptimizeMode with optimize_mode_json {
            Speed = 1 => "SPEED",
            CodeSize = 2 => "CODE_SIZE",
            LiteRuntime = 3 => "LITE_RUNTIME",
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MessageOptions {
    #[prost(bool, optional, tag = "1", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_set_wire_format: Option<bool>,
    #[prost(bool, optional, tag = "2", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_standard_descriptor_accessor: Option<bool>,
    #[prost(bool, optional, tag = "3", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Whether the message is an automatically generated map entry type for the
    /// maps field.
    #[prost(bool, optional, tag = "7")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_entry: Option<bool>,
    #[prost(bool, optional, tag = "11")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated_legacy_json_field_conflicts: Option<bool>,
    #[prost(message, optional, tag = "12")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureSet>,
    #[prost(message, repeated, tag = "999")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uninterpreted_option: Vec<UninterpretedOption>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldOptions {
    #[prost(
        enumeration = "field_options::CType",
        optional,
        tag = "1",
        default = "String"
    )]
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "field_options::c_type_json::optional"
    )]
    pub ctype: Option<i32>,
    /// Enables packed encoding for repeated primitive fields.
    #[prost(bool, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packed: Option<bool>,
    #[prost(
        enumeration = "field_options::JsType",
        optional,
        tag = "6",
        default = "JsNormal"
    )]
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "field_options::js_type_json::optional"
    )]
    pub jstype: Option<i32>,
    /// Should this field be parsed lazily?
    #[prost(bool, optional, tag = "5", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lazy: Option<bool>,
    #[prost(bool, optional, tag = "15", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unverified_lazy: Option<bool>,
    #[prost(bool, optional, tag = "3", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// For Google-internal migration only. Do not use.
    #[prost(bool, optional, tag = "10", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weak: Option<bool>,
    /// Indicate that the field value should not be printed out when using debug
    /// formats.
    #[prost(bool, optional, tag = "16", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_redact: Option<bool>,
    #[prost(enumeration = "field_options::OptionRetention", optional, tag = "17")]
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "field_options::option_retention_json::optional"
    )]
    pub retention: Option<i32>,
    #[prost(
        enumeration = "field_options::OptionTargetType",
        repeated,
        packed = "false",
        tag = "19"
    )]
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        with = "field_options::option_target_type_json::repeated"
    )]
    pub targets: Vec<i32>,
    #[prost(message, repeated, tag = "20")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edition_defaults: Vec<field_options::EditionDefault>,
    #[prost(message, optional, tag = "21")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureSet>,
    #[prost(message, optional, tag = "22")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_support: Option<field_options::FeatureSupport>,
    #[prost(message, repeated, tag = "999")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uninterpreted_option: Vec<UninterpretedOption>,
}

/// Nested types of `FieldOptions`.
pub mod field_options {
    use serde::{Deserialize, Serialize};

    use super::edition_json;

    #[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct EditionDefault {
        #[prost(enumeration = "super::Edition", optional, tag = "3")]
        #[serde(skip_serializing_if = "Option::is_none", with = "edition_json::optional")]
        pub edition: Option<i32>,
        /// Textproto value.
        #[prost(string, optional, tag = "2")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub value: Option<String>,
    }

    /// Information about the support window of a feature.
    #[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct FeatureSupport {
        #[prost(enumeration = "super::Edition", optional, tag = "1")]
        #[serde(skip_serializing_if = "Option::is_none", with = "edition_json::optional")]
        pub edition_introduced: Option<i32>,
        #[prost(enumeration = "super::Edition", optional, tag = "2")]
        #[serde(skip_serializing_if = "Option::is_none", with = "edition_json::optional")]
        pub edition_deprecated: Option<i32>,
        #[prost(string, optional, tag = "3")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub deprecation_warning: Option<String>,
        #[prost(enumeration = "super::Edition", optional, tag = "4")]
        #[serde(skip_serializing_if = "Option::is_none", with = "edition_json::optional")]
        pub edition_removed: Option<i32>,
    }

    proto_enum! {
        pub enum CType with c_type_json {
            /// Default mode.
            String = 0 => "STRING",
            Cord = 1 => "CORD",
            StringPiece = 2 => "STRING_PIECE",
        }
    }

    proto_enum! {
        pub enum JsType with js_type_json {
            /// Use the default type.
            JsNormal = 0 => "JS_NORMAL",
            /// Use JavaScript strings.
            JsString = 1 => "JS_STRING",
            /// Use JavaScript numbers.
            JsNumber = 2 => "JS_NUMBER",
        }
    }

    proto_enum! {
        /// If set to RETENTION_SOURCE, the option will be omitted from the binary.
        pub enum OptionRetention with option_retention_json {
            RetentionUnknown = 0 => "RETENTION_UNKNOWN",
            RetentionRuntime = 1 => "RETENTION_RUNTIME",
            RetentionSource = 2 => "RETENTION_SOURCE",
        }
    }

    proto_enum! {
        /// The kinds of entities an option may be applied to.
        pub enum OptionTargetType with option_target_type_json {
            TargetTypeUnknown = 0 => "TARGET_TYPE_UNKNOWN",
            TargetTypeFile = 1 => "TARGET_TYPE_FILE",
            TargetTypeExtensionRange = 2 => "TARGET_TYPE_EXTENSION_RANGE",
            TargetTypeMessage = 3 => "TARGET_TYPE_MESSAGE",
            TargetTypeField = 4 => "TARGET_TYPE_FIELD",
            TargetTypeOneof = 5 => "TARGET_TYPE_ONEOF",
            TargetTypeEnum = 6 => "TARGET_TYPE_ENUM",
            TargetTypeEnumEntry = 7 => "TARGET_TYPE_ENUM_ENTRY",
            TargetTypeService = 8 => "TARGET_TYPE_SERVICE",
            TargetTypeMethod = 9 => "TARGET_TYPE_METHOD",
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OneofOptions {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureSet>,
    #[prost(message, repeated, tag = "999")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uninterpreted_option: Vec<UninterpretedOption>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnumOptions {
    /// Set this option to true to allow mapping different tag names to the same
    /// value.
    #[prost(bool, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_alias: Option<bool>,
    #[prost(bool, optional, tag = "3", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[prost(bool, optional, tag = "6")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated_legacy_json_field_conflicts: Option<bool>,
    #[prost(message, optional, tag = "7")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureSet>,
    #[prost(message, repeated, tag = "999")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uninterpreted_option: Vec<UninterpretedOption>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnumValueOptions {
    #[prost(bool, optional, tag = "1", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureSet>,
    #[prost(bool, optional, tag = "3", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_redact: Option<bool>,
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_support: Option<field_options::FeatureSupport>,
    #[prost(message, repeated, tag = "999")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uninterpreted_option: Vec<UninterpretedOption>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceOptions {
    #[prost(message, optional, tag = "34")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureSet>,
    #[prost(bool, optional, tag = "33", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[prost(message, repeated, tag = "999")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uninterpreted_option: Vec<UninterpretedOption>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MethodOptions {
    #[prost(bool, optional, tag = "33", default = "false")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[prost(
        enumeration = "method_options::IdempotencyLevel",
        optional,
        tag = "34",
        default = "IdempotencyUnknown"
    )]
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "method_options::idempotency_level_json::optional"
    )]
    pub idempotency_level: Option<i32>,
    #[prost(message, optional, tag = "35")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureSet>,
    #[prost(message, repeated, tag = "999")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uninterpreted_option: Vec<UninterpretedOption>,
}

/// Nested types of `MethodOptions`.
pub mod method_options {
    proto_enum! {
        /// Is this method side-effect-free (or safe in HTTP parlance), or
        /// idempotent, or neither?
        pub enum IdempotencyLevel with idempotency_level_json {
            IdempotencyUnknown = 0 => "IDEMPOTENCY_UNKNOWN",
            /// implies idempotent
            NoSideEffects = 1 => "NO_SIDE_EFFECTS",
            /// idempotent, but may have side effects
            Idempotent = 2 => "IDEMPOTENT",
        }
    }
}

/// A message representing an option the parser does not recognize.
///
/// Only one of the value fields is set.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UninterpretedOption {
    #[prost(message, repeated, tag = "2")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<uninterpreted_option::NamePart>,
    #[prost(string, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_value: Option<String>,
    #[prost(uint64, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_int_value: Option<u64>,
    #[prost(int64, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_int_value: Option<i64>,
    #[prost(double, optional, tag = "6")]
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::json::optional_double"
    )]
    pub double_value: Option<f64>,
    #[prost(bytes = "vec", optional, tag = "7")]
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::json::optional_bytes"
    )]
    pub string_value: Option<Vec<u8>>,
    #[prost(string, optional, tag = "8")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate_value: Option<String>,
}

/// Nested message types of `UninterpretedOption`.
pub mod uninterpreted_option {
    use serde::{Deserialize, Serialize};

    /// One dot-separated component of an option name. `is_extension` is set
    /// when the component was written in parentheses, e.g. `(foo.bar)`.
    #[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct NamePart {
        #[prost(string, required, tag = "1")]
        pub name_part: String,
        #[prost(bool, required, tag = "2")]
        pub is_extension: bool,
    }
}

/// Feature values resolved for an element of an editions file.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureSet {
    #[prost(enumeration = "feature_set::FieldPresence", optional, tag = "1")]
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "feature_set::field_presence_json::optional"
    )]
    pub field_presence: Option<i32>,
    #[prost(enumeration = "feature_set::EnumType", optional, tag = "2")]
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "feature_set::enum_type_json::optional"
    )]
    pub enum_type: Option<i32>,
    #[prost(enumeration = "feature_set::RepeatedFieldEncoding", optional, tag = "3")]
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "feature_set::repeated_field_encoding_json::optional"
    )]
    pub repeated_field_encoding: Option<i32>,
    #[prost(enumeration = "feature_set::Utf8Validation", optional, tag = "4")]
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "feature_set::utf8_validation_json::optional"
    )]
    pub utf8_validation: Option<i32>,
    #[prost(enumeration = "feature_set::MessageEncoding", optional, tag = "5")]
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "feature_set::message_encoding_json::optional"
    )]
    pub message_encoding: Option<i32>,
    #[prost(enumeration = "feature_set::JsonFormat", optional, tag = "6")]
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "feature_set::json_format_json::optional"
    )]
    pub json_format: Option<i32>,
}

/// Nested types of `FeatureSet`.
pub mod feature_set {
    proto_enum! {
        pub enum FieldPresence with field_presence_json {
            FieldPresenceUnknown = 0 => "FIELD_PRESENCE_UNKNOWN",
            Explicit = 1 => "EXPLICIT",
            Implicit = 2 => "IMPLICIT",
            LegacyRequired = 3 => "LEGACY_REQUIRED",
        }
    }

    proto_enum! {
        pub enum EnumType with enum_type_json {
            EnumTypeUnknown = 0 => "ENUM_TYPE_UNKNOWN",
            Open = 1 => "OPEN",
            Closed = 2 => "CLOSED",
        }
    }

    proto_enum! {
        pub enum RepeatedFieldEncoding with repeated_field_encoding_json {
            RepeatedFieldEncodingUnknown = 0 => "REPEATED_FIELD_ENCODING_UNKNOWN",
            Packed = 1 => "PACKED",
            Expanded = 2 => "EXPANDED",
        }
    }

    proto_enum! {
        pub enum Utf8Validation with utf8_validation_json {
            Utf8ValidationUnknown = 0 => "UTF8_VALIDATION_UNKNOWN",
            Verify = 2 => "VERIFY",
            None = 3 => "NONE",
        }
    }

    proto_enum! {
        pub enum MessageEncoding with message_encoding_json {
            MessageEncodingUnknown = 0 => "MESSAGE_ENCODING_UNKNOWN",
            LengthPrefixed = 1 => "LENGTH_PREFIXED",
            Delimited = 2 => "DELIMITED",
        }
    }

    proto_enum! {
        pub enum JsonFormat with json_format_json {
            JsonFormatUnknown = 0 => "JSON_FORMAT_UNKNOWN",
            Allow = 1 => "ALLOW",
            LegacyBestEffort = 2 => "LEGACY_BEST_EFFORT",
        }
    }
}

/// Where in the original .proto file each element of a descriptor was
/// defined.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceCodeInfo {
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<source_code_info::Location>,
}

/// Nested message types of `SourceCodeInfo`.
pub mod source_code_info {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct Location {
        /// Identifies which part of the FileDescriptorProto was defined at this
        /// location, as a sequence of field numbers and indexes.
        #[prost(int32, repeated, tag = "1")]
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub path: Vec<i32>,
        /// Always has exactly three or four elements: start line, start column,
        /// end line (optional, otherwise assumed same as start line), end column.
        /// Line and column numbers are zero-based.
        #[prost(int32, repeated, tag = "2")]
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub span: Vec<i32>,
        #[prost(string, optional, tag = "3")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub leading_comments: Option<String>,
        #[prost(string, optional, tag = "4")]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub trailing_comments: Option<String>,
        #[prost(string, repeated, tag = "6")]
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub leading_detached_comments: Vec<String>,
    }
}
