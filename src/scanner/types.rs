use serde::Serialize;

/// A plain scalar/vector/matrix uniform declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniformDecl {
    pub name: String,
}

/// A `uniform struct <Type> { ... } <instance>;` block.
///
/// Member lines are the raw text between the header and the terminating
/// `}...;` line; no field-level parsing is done on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniformStructDecl {
    pub type_name: String,
    pub instance_name: String,
    pub members: Vec<String>,
}

/// One discovery made by the scanner, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScanEvent {
    StructStart { type_name: String },
    Uniform(UniformDecl),
    StructEnd(UniformStructDecl),
}
