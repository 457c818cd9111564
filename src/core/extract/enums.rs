//! Enum field keys from a parsed protobuf file.
//!
//! Enums are collected from the top level and from messages at any nesting
//! depth, then ordered by where they start in the source so that keys come
//! out in declaration order regardless of how the descriptor groups them.

use std::collections::HashMap;

use prost_types::{DescriptorProto, EnumDescriptorProto, FileDescriptorProto};

/// `FileDescriptorProto.message_type`
const FILE_MESSAGE_TYPE: i32 = 4;
/// `FileDescriptorProto.enum_type`
const FILE_ENUM_TYPE: i32 = 5;
/// `DescriptorProto.nested_type`
const MESSAGE_NESTED_TYPE: i32 = 3;
/// `DescriptorProto.enum_type`
const MESSAGE_ENUM_TYPE: i32 = 4;

/// Name filter applied to enum declarations.
///
/// An empty prefix or suffix always matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumFilter {
    pub prefix: String,
    pub suffix: String,
}

impl EnumFilter {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn matches(&self, enum_name: &str) -> bool {
        enum_name.starts_with(&self.prefix) && enum_name.ends_with(&self.suffix)
    }
}

/// An enum declaration together with its descriptor path.
struct EnumDecl<'a> {
    path: Vec<i32>,
    descriptor: &'a EnumDescriptorProto,
}

/// Returns the field names of every enum accepted by `filter`, in source
/// order.
pub fn enum_field_keys(file: &FileDescriptorProto, filter: &EnumFilter) -> Vec<String> {
    let mut decls = Vec::new();
    for (i, descriptor) in file.enum_type.iter().enumerate() {
        decls.push(EnumDecl {
            path: vec![FILE_ENUM_TYPE, i as i32],
            descriptor,
        });
    }
    for (i, message) in file.message_type.iter().enumerate() {
        collect_nested(message, vec![FILE_MESSAGE_TYPE, i as i32], &mut decls);
    }

    let starts = span_starts(file);
    // Stable sort: enums without a span keep descriptor order.
    decls.sort_by_key(|decl| {
        starts
            .get(decl.path.as_slice())
            .copied()
            .unwrap_or((i32::MAX, i32::MAX))
    });

    decls
        .into_iter()
        .map(|decl| decl.descriptor)
        .filter(|descriptor| filter.matches(descriptor.name()))
        .flat_map(|descriptor| descriptor.value.iter())
        .map(|value| value.name().to_string())
        .collect()
}

fn collect_nested<'a>(message: &'a DescriptorProto, path: Vec<i32>, decls: &mut Vec<EnumDecl<'a>>) {
    for (i, descriptor) in message.enum_type.iter().enumerate() {
        let mut enum_path = path.clone();
        enum_path.extend([MESSAGE_ENUM_TYPE, i as i32]);
        decls.push(EnumDecl {
            path: enum_path,
            descriptor,
        });
    }
    for (i, nested) in message.nested_type.iter().enumerate() {
        let mut nested_path = path.clone();
        nested_path.extend([MESSAGE_NESTED_TYPE, i as i32]);
        collect_nested(nested, nested_path, decls);
    }
}

/// Maps descriptor paths to the (line, column) where the element starts.
fn span_starts(file: &FileDescriptorProto) -> HashMap<&[i32], (i32, i32)> {
    let Some(info) = &file.source_code_info else {
        return HashMap::new();
    };

    info.location
        .iter()
        .filter(|loc| loc.span.len() >= 3)
        .map(|loc| (loc.path.as_slice(), (loc.span[0], loc.span[1])))
        .collect()
}
