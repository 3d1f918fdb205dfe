use pretty_assertions::assert_eq;
use prost::Message;

use protoc_gen_pluginexample::compiler::{CodeGeneratorRequest, CodeGeneratorResponse, Version};
use protoc_gen_pluginexample::descriptor::field_descriptor_proto::{Label, Type};
use protoc_gen_pluginexample::descriptor::source_code_info::Location;
use protoc_gen_pluginexample::descriptor::uninterpreted_option::NamePart;
use protoc_gen_pluginexample::descriptor::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileOptions, MessageOptions,
    MethodDescriptorProto, OneofDescriptorProto, ServiceDescriptorProto, SourceCodeInfo,
    UninterpretedOption,
};
use protoc_gen_pluginexample::execute;

fn field(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_owned()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        json_name: Some(name.to_owned()),
        ..Default::default()
    }
}

fn message_field(name: &str, number: i32, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_owned()),
        ..field(name, number, Type::Message)
    }
}

fn message(name: &str, field: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_owned()),
        field,
        ..Default::default()
    }
}

fn method(name: &str, input_type: &str, output_type: &str) -> MethodDescriptorProto {
    MethodDescriptorProto {
        name: Some(name.to_owned()),
        input_type: Some(input_type.to_owned()),
        output_type: Some(output_type.to_owned()),
        ..Default::default()
    }
}

/// The descriptors protoc produces for `testdata/person.proto`.
fn person_request() -> CodeGeneratorRequest {
    let nickname = FieldDescriptorProto {
        oneof_index: Some(0),
        proto3_optional: Some(true),
        ..field("nickname", 3, Type::String)
    };
    let person = DescriptorProto {
        oneof_decl: vec![OneofDescriptorProto {
            name: Some("_nickname".to_owned()),
            ..Default::default()
        }],
        ..message(
            "Person",
            vec![
                field("name", 1, Type::String),
                message_field("address", 2, ".testdata.AddressInfo"),
                nickname,
            ],
        )
    };
    let address_info = DescriptorProto {
        nested_type: vec![message("ZipCode", vec![field("code", 1, Type::String)])],
        ..message(
            "AddressInfo",
            vec![
                field("city", 1, Type::String),
                field("state", 2, Type::String),
                field("country", 3, Type::String),
                field("planet", 4, Type::String),
                message_field("zip_code", 5, ".testdata.AddressInfo.ZipCode"),
            ],
        )
    };
    let persons = FieldDescriptorProto {
        label: Some(Label::Repeated as i32),
        ..message_field("persons", 1, ".testdata.Person")
    };

    CodeGeneratorRequest {
        file_to_generate: vec!["testdata/person.proto".to_owned()],
        parameter: None,
        proto_file: vec![FileDescriptorProto {
            name: Some("testdata/person.proto".to_owned()),
            package: Some("testdata".to_owned()),
            message_type: vec![
                person,
                address_info,
                message("GetPersonRequest", vec![field("name", 1, Type::String)]),
                message("ListPersonsRequest", vec![field("page_size", 1, Type::Int32)]),
                message("PersonList", vec![persons]),
            ],
            service: vec![ServiceDescriptorProto {
                name: Some("PersonService".to_owned()),
                method: vec![
                    method(
                        "GetPerson",
                        ".testdata.GetPersonRequest",
                        ".testdata.Person",
                    ),
                    method(
                        "ListPersons",
                        ".testdata.ListPersonsRequest",
                        ".testdata.PersonList",
                    ),
                ],
                ..Default::default()
            }],
            syntax: Some("proto3".to_owned()),
            ..Default::default()
        }],
        compiler_version: Some(Version {
            major: Some(4),
            minor: Some(25),
            patch: Some(3),
            suffix: Some(String::new()),
        }),
        ..Default::default()
    }
}

fn invoke(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    let input = request.encode_to_vec();
    let mut output = Vec::new();
    execute(&input[..], &mut output).unwrap();
    CodeGeneratorResponse::decode(&output[..]).unwrap()
}

fn content<'a>(response: &'a CodeGeneratorResponse, name: &str) -> &'a str {
    response
        .file
        .iter()
        .find(|file| file.name() == name)
        .map(|file| file.content())
        .unwrap_or_else(|| panic!("{} not generated", name))
}

#[test]
fn person_response_layout() {
    let response = invoke(&person_request());

    assert_eq!(response.error, None);
    assert_eq!(response.supported_features, Some(1));
    let names = response.file.iter().map(|file| file.name()).collect::<Vec<_>>();
    assert_eq!(
        names,
        ["request_dump.json", "request_stats.txt", "entity_graph.dot"]
    );
}

#[test]
fn person_dump_reads_back() {
    let response = invoke(&person_request());
    let dump: CodeGeneratorRequest =
        serde_json::from_str(content(&response, "request_dump.json")).unwrap();
    assert_eq!(dump, person_request());
}

#[test]
fn person_stats() {
    let response = invoke(&person_request());
    assert_eq!(
        content(&response, "request_stats.txt"),
        "stats for code generation request\n\
         num files: 1\n\
         num services: 1\n\
         num methods: 2\n\
         num messages: 5\n\
         num fields: 11\n"
    );
}

#[test]
fn person_graph() {
    let response = invoke(&person_request());
    let expected = r#"digraph entities {

".testdata.PersonService" [shape=diamond]
".testdata.PersonService.GetPerson" [shape=circle]
".testdata.PersonService.ListPersons" [shape=circle]
".testdata.Person" [shape=square]
".testdata.AddressInfo" [shape=square]
".testdata.AddressInfo.ZipCode" [shape=square]
".testdata.GetPersonRequest" [shape=square]
".testdata.ListPersonsRequest" [shape=square]
".testdata.PersonList" [shape=square]

".testdata.PersonService" -> ".testdata.PersonService.GetPerson" [style=dashed]
".testdata.PersonService.GetPerson" -> ".testdata.GetPersonRequest" [style=dashed, color=red]
".testdata.PersonService.GetPerson" -> ".testdata.Person" [style=dashed, color=blue]
".testdata.PersonService" -> ".testdata.PersonService.ListPersons" [style=dashed]
".testdata.PersonService.ListPersons" -> ".testdata.ListPersonsRequest" [style=dashed, color=red]
".testdata.PersonService.ListPersons" -> ".testdata.PersonList" [style=dashed, color=blue]
".testdata.Person" -> ".testdata.AddressInfo"
".testdata.AddressInfo" -> ".testdata.AddressInfo.ZipCode"
".testdata.PersonList" -> ".testdata.Person"

}"#;
    assert_eq!(content(&response, "entity_graph.dot"), expected);
}

#[test]
fn options_are_applied() {
    let mut request = person_request();
    request.parameter = Some("graph_name=people,dump_indent=0".to_owned());
    // An import which is not listed in `file_to_generate`.
    request.proto_file.insert(
        0,
        FileDescriptorProto {
            name: Some("google/protobuf/empty.proto".to_owned()),
            package: Some("google.protobuf".to_owned()),
            message_type: vec![message("Empty", vec![])],
            ..Default::default()
        },
    );

    let response = invoke(&request);
    assert_eq!(content(&response, "request_dump.json").lines().count(), 1);
    let graph = content(&response, "entity_graph.dot");
    assert!(graph.starts_with("digraph people {\n"));
    assert!(graph.contains("\".google.protobuf.Empty\" [shape=square]\n"));
    assert!(content(&response, "request_stats.txt").contains("num files: 2\n"));

    request.parameter = Some("scope=generate".to_owned());
    let response = invoke(&request);
    assert!(!content(&response, "entity_graph.dot").contains(".google.protobuf.Empty"));
    assert!(content(&response, "request_stats.txt").contains("num files: 1\n"));
    // The dump always covers the whole request.
    assert!(content(&response, "request_dump.json").contains("google/protobuf/empty.proto"));
}

#[test]
fn unknown_options_are_ignored() {
    let mut request = person_request();
    request.parameter =
        Some("verbose,paths=source_relative,dump_indent=4096,graph_name=people".to_owned());

    let response = invoke(&request);
    assert_eq!(response.error, None);
    assert_eq!(response.file.len(), 3);
    assert!(content(&response, "entity_graph.dot").starts_with("digraph people {\n"));
    // The oversized indent falls back to the default of two spaces.
    assert!(content(&response, "request_dump.json").starts_with("{\n  \"fileToGenerate\""));
}

#[test]
fn options_reach_the_dump() {
    let mut request = person_request();
    let file = &mut request.proto_file[0];
    file.options = Some(FileOptions {
        go_package: Some("example.com/testdata".to_owned()),
        uninterpreted_option: vec![UninterpretedOption {
            name: vec![NamePart {
                name_part: "custom".to_owned(),
                is_extension: true,
            }],
            double_value: Some(f64::NEG_INFINITY),
            ..Default::default()
        }],
        ..Default::default()
    });
    file.source_code_info = Some(SourceCodeInfo {
        location: vec![Location {
            path: vec![4, 0],
            span: vec![5, 0, 9, 1],
            leading_comments: Some(" A person.\n".to_owned()),
            ..Default::default()
        }],
    });
    file.message_type[0].field[0].default_value = Some("anonymous".to_owned());
    file.message_type[0].options = Some(MessageOptions {
        deprecated: Some(true),
        ..Default::default()
    });
    request.source_file_descriptors = vec![request.proto_file[0].clone()];

    let response = invoke(&request);
    let dump = content(&response, "request_dump.json");
    for key in [
        "\"goPackage\": \"example.com/testdata\"",
        "\"doubleValue\": \"-Infinity\"",
        "\"leadingComments\": \" A person.\\n\"",
        "\"defaultValue\": \"anonymous\"",
        "\"deprecated\": true",
        "\"sourceFileDescriptors\": [",
    ] {
        assert!(dump.contains(key), "{} missing from\n{}", key, dump);
    }

    let read_back: CodeGeneratorRequest = serde_json::from_str(dump).unwrap();
    assert_eq!(read_back, request);
}

#[test]
fn empty_input_is_an_empty_request() {
    let mut output = Vec::new();
    execute(&[][..], &mut output).unwrap();
    let response = CodeGeneratorResponse::decode(&output[..]).unwrap();
    assert_eq!(response.file.len(), 3);
    assert_eq!(response.error, None);
}

#[test]
fn garbage_input_is_fatal() {
    let mut output = Vec::new();
    let err = execute(&b"\xff\xff\xff\xff"[..], &mut output).unwrap_err();
    assert!(err.to_string().starts_with("invalid CodeGeneratorRequest"), "{}", err);
    assert!(output.is_empty());
}
