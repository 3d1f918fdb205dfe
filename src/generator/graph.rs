use std::collections::HashSet;
use std::fmt::{self, Write};

use log::{debug, trace, warn};

use super::Generator;
use crate::compiler::CodeGeneratorRequest;
use crate::config::Config;
use crate::descriptor::field_descriptor_proto::Type;
use crate::descriptor::{DescriptorProto, FileDescriptorProto};
use crate::error::GenerationError;
use crate::fully_qualified_name::FullyQualifiedName;
use crate::walk::walk_messages;

const FILE_NAME: &str = "entity_graph.dot";

/// Renders services, methods and messages as a Graphviz digraph.
///
/// Services are diamonds, methods circles and messages squares. Dashed edges
/// link a service to its methods and a method to its input (red) and output
/// (blue) types; plain edges link a message to the message types of its
/// fields. Nodes and edges are written in request order, so identical
/// requests render byte-identical graphs. The closing brace ends the file,
/// without a trailing newline.
pub struct GraphGenerator;

impl Generator for GraphGenerator {
    fn file_name(&self) -> &'static str {
        FILE_NAME
    }

    fn generate(
        &self,
        request: &CodeGeneratorRequest,
        config: &Config,
    ) -> Result<String, GenerationError> {
        let write_error = |source| GenerationError::Write {
            file: FILE_NAME,
            source,
        };

        let mut nodes = NodeSink::default();
        let mut edges = EdgeSink::default();
        for file in config.files(request) {
            debug!("graph: file {:?}, package {:?}", file.name(), file.package());
            append_services(file, &mut nodes, &mut edges).map_err(write_error)?;
            walk_messages(file, |fq_message_name, message| {
                append_message(fq_message_name, message, &mut nodes, &mut edges)
            })
            .map_err(write_error)?;
        }
        debug!(
            "graph: {} nodes, {} edges",
            nodes.declared.len(),
            edges.count
        );

        let mut buf = String::new();
        write!(
            buf,
            "digraph {} {{\n\n{}\n{}\n}}",
            config.graph_name, nodes.buf, edges.buf
        )
        .map_err(write_error)?;
        Ok(buf)
    }
}

fn append_services(
    file: &FileDescriptorProto,
    nodes: &mut NodeSink,
    edges: &mut EdgeSink,
) -> fmt::Result {
    let package = FullyQualifiedName::package(file.package());
    for service in &file.service {
        let fq_service_name = package.join(service.name());
        nodes.declare(&fq_service_name, Shape::Diamond)?;

        for method in &service.method {
            let fq_method_name = fq_service_name.join(method.name());
            nodes.declare(&fq_method_name, Shape::Circle)?;

            edges.connect(
                fq_service_name.as_ref(),
                fq_method_name.as_ref(),
                Some("style=dashed"),
            )?;
            edges.connect(
                fq_method_name.as_ref(),
                method.input_type(),
                Some("style=dashed, color=red"),
            )?;
            edges.connect(
                fq_method_name.as_ref(),
                method.output_type(),
                Some("style=dashed, color=blue"),
            )?;
        }
    }
    Ok(())
}

fn append_message(
    fq_message_name: &FullyQualifiedName,
    message: &DescriptorProto,
    nodes: &mut NodeSink,
    edges: &mut EdgeSink,
) -> fmt::Result {
    nodes.declare(fq_message_name, Shape::Square)?;

    // Type references are only recorded as edges, never followed, so cyclic
    // message references are harmless here.
    for field in &message.field {
        if field.r#type() == Type::Message && !field.type_name().is_empty() {
            edges.connect(fq_message_name.as_ref(), field.type_name(), None)?;
        }
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    Diamond,
    Circle,
    Square,
}

impl Shape {
    fn as_str(self) -> &'static str {
        match self {
            Shape::Diamond => "diamond",
            Shape::Circle => "circle",
            Shape::Square => "square",
        }
    }
}

/// Node declarations, at most one per qualified name.
#[derive(Default)]
struct NodeSink {
    buf: String,
    declared: HashSet<FullyQualifiedName>,
}

impl NodeSink {
    fn declare(&mut self, name: &FullyQualifiedName, shape: Shape) -> fmt::Result {
        if !self.declared.insert(name.clone()) {
            warn!("{} is declared more than once, keeping the first", name);
            return Ok(());
        }
        trace!("node {} ({})", name, shape.as_str());
        writeln!(self.buf, "{} [shape={}]", Quoted(name.as_ref()), shape.as_str())
    }
}

#[derive(Default)]
struct EdgeSink {
    buf: String,
    count: usize,
}

impl EdgeSink {
    fn connect(&mut self, from: &str, to: &str, attributes: Option<&str>) -> fmt::Result {
        self.count += 1;
        write!(self.buf, "{} -> {}", Quoted(from), Quoted(to))?;
        match attributes {
            Some(attributes) => writeln!(self.buf, " [{}]", attributes),
            None => writeln!(self.buf),
        }
    }
}

/// A DOT double-quoted string.
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::config::Scope;
    use crate::descriptor::{FieldDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto};

    fn field(name: &str, ty: Type, type_name: Option<&str>) -> FieldDescriptorProto {
        FieldDescriptorProto {
            name: Some(name.to_owned()),
            r#type: Some(ty as i32),
            type_name: type_name.map(str::to_owned),
            ..Default::default()
        }
    }

    fn message(
        name: &str,
        field: Vec<FieldDescriptorProto>,
        nested_type: Vec<DescriptorProto>,
    ) -> DescriptorProto {
        DescriptorProto {
            name: Some(name.to_owned()),
            field,
            nested_type,
            ..Default::default()
        }
    }

    fn render(request: &CodeGeneratorRequest) -> String {
        GraphGenerator.generate(request, &Config::default()).unwrap()
    }

    #[test]
    fn empty_request() {
        assert_eq!(
            render(&CodeGeneratorRequest::default()),
            "digraph entities {\n\n\n\n}"
        );
    }

    #[test]
    fn services_and_methods() {
        let request = CodeGeneratorRequest {
            proto_file: vec![FileDescriptorProto {
                package: Some("kv".to_owned()),
                service: vec![ServiceDescriptorProto {
                    name: Some("Store".to_owned()),
                    method: vec![MethodDescriptorProto {
                        name: Some("Get".to_owned()),
                        input_type: Some(".kv.Key".to_owned()),
                        output_type: Some(".kv.Value".to_owned()),
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        };

        let expected = r#"digraph entities {

".kv.Store" [shape=diamond]
".kv.Store.Get" [shape=circle]

".kv.Store" -> ".kv.Store.Get" [style=dashed]
".kv.Store.Get" -> ".kv.Key" [style=dashed, color=red]
".kv.Store.Get" -> ".kv.Value" [style=dashed, color=blue]

}"#;
        assert_eq!(render(&request), expected);
    }

    #[test]
    fn only_message_fields_produce_edges() {
        let request = CodeGeneratorRequest {
            proto_file: vec![FileDescriptorProto {
                package: Some("p".to_owned()),
                message_type: vec![message(
                    "Node",
                    vec![
                        field("id", Type::Int64, None),
                        field("kind", Type::Enum, Some(".p.Kind")),
                        field("next", Type::Message, Some(".p.Node")),
                        field("unresolved", Type::Message, None),
                        field("parent", Type::Message, Some(".p.Node")),
                    ],
                    vec![],
                )],
                ..Default::default()
            }],
            ..Default::default()
        };

        let expected = r#"digraph entities {

".p.Node" [shape=square]

".p.Node" -> ".p.Node"
".p.Node" -> ".p.Node"

}"#;
        assert_eq!(render(&request), expected);
    }

    #[test]
    fn nested_messages_are_declared_before_their_siblings() {
        let request = CodeGeneratorRequest {
            proto_file: vec![FileDescriptorProto {
                package: Some("p".to_owned()),
                message_type: vec![
                    message(
                        "Outer",
                        vec![field("inner", Type::Message, Some(".p.Outer.Inner"))],
                        vec![message(
                            "Inner",
                            vec![field("back", Type::Message, Some(".p.Outer"))],
                            vec![],
                        )],
                    ),
                    message("Sibling", vec![], vec![]),
                ],
                ..Default::default()
            }],
            ..Default::default()
        };

        let expected = r#"digraph entities {

".p.Outer" [shape=square]
".p.Outer.Inner" [shape=square]
".p.Sibling" [shape=square]

".p.Outer" -> ".p.Outer.Inner"
".p.Outer.Inner" -> ".p.Outer"

}"#;
        assert_eq!(render(&request), expected);
    }

    #[test]
    fn duplicate_names_are_declared_once() {
        let file = FileDescriptorProto {
            name: Some("a.proto".to_owned()),
            package: Some("p".to_owned()),
            message_type: vec![message("M", vec![], vec![])],
            ..Default::default()
        };
        let request = CodeGeneratorRequest {
            proto_file: vec![file.clone(), file],
            ..Default::default()
        };

        let graph = render(&request);
        assert_eq!(graph.matches("[shape=square]").count(), 1);
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(Quoted(r#"a"b\c"#).to_string(), r#""a\"b\\c""#);
    }

    #[test]
    fn honours_graph_name_and_scope() {
        let file = |name: &str, package: &str| FileDescriptorProto {
            name: Some(name.to_owned()),
            package: Some(package.to_owned()),
            message_type: vec![message("M", vec![], vec![])],
            ..Default::default()
        };
        let request = CodeGeneratorRequest {
            file_to_generate: vec!["b.proto".to_owned()],
            proto_file: vec![file("a.proto", "a"), file("b.proto", "b")],
            ..Default::default()
        };
        let config = Config {
            graph_name: "deps".to_owned(),
            scope: Scope::Generate,
            ..Config::default()
        };

        let graph = GraphGenerator.generate(&request, &config).unwrap();
        assert_eq!(graph, "digraph deps {\n\n\".b.M\" [shape=square]\n\n\n}");
    }
}
