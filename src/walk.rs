use crate::descriptor::{DescriptorProto, FileDescriptorProto};
use crate::fully_qualified_name::FullyQualifiedName;

/// Visits every message declared in `file`, at every nesting depth.
///
/// Messages are handed to `visit` depth-first in declaration order: a message
/// comes before its nested types, which come before the next sibling. Only the
/// nesting tree is descended; type references on fields are never followed,
/// so self-referential or mutually recursive messages are visited once.
///
/// The walk stops at the first error returned by `visit`.
pub fn walk_messages<'a, E, F>(file: &'a FileDescriptorProto, mut visit: F) -> Result<(), E>
where
    F: FnMut(&FullyQualifiedName, &'a DescriptorProto) -> Result<(), E>,
{
    let package = FullyQualifiedName::package(file.package());
    walk_nested(&package, &file.message_type, &mut visit)
}

fn walk_nested<'a, E, F>(
    scope: &FullyQualifiedName,
    messages: &'a [DescriptorProto],
    visit: &mut F,
) -> Result<(), E>
where
    F: FnMut(&FullyQualifiedName, &'a DescriptorProto) -> Result<(), E>,
{
    for message in messages {
        let fq_message_name = scope.join(message.name());
        visit(&fq_message_name, message)?;
        walk_nested(&fq_message_name, &message.nested_type, visit)?;
    }
    Ok(())
}
