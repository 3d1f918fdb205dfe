use std::fmt;

use itertools::Itertools;

/// Canonical dotted name of a schema element, e.g. `.testdata.AddressInfo.ZipCode`.
///
/// Every generator names services, methods and messages through this type so
/// that the names it emits match the type references the compiler hands over
/// on fields and methods.
// Invariant: should always begin with a '.' (dot)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct FullyQualifiedName(String);

impl FullyQualifiedName {
    /// Builds `.<package>.<outer>.<inner>...` from a package and a chain of
    /// enclosing names. Empty segments are skipped.
    pub fn new(package_string: &str, type_path: &[impl AsRef<str>]) -> Self {
        let segments = package_string
            .split('.')
            .chain(type_path.iter().map(AsRef::as_ref))
            .map(|segment| segment.trim_matches('.'))
            .filter(|segment| !segment.is_empty());
        Self(format!(".{}", segments.format(".")))
    }

    /// Name of the package scope itself. The empty package yields `.`.
    pub fn package(package_string: &str) -> Self {
        Self::new(package_string, &[] as &[&str])
    }

    /// Appends one segment; used to step from a scope to an element declared
    /// in it (package to message, message to nested message, service to method).
    pub fn join(&self, name: &str) -> Self {
        if self.0.len() == 1 {
            Self(format!(".{}", name))
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }
}

impl AsRef<str> for FullyQualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullyQualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
