mod codegen;
mod parser;

pub use codegen::*;
pub use parser::*;

use serde::{Deserialize, Serialize};

/// Flat class model extracted from PlantUML class syntax.
///
/// Deliberately shallow: no inheritance, no associations, no nesting. The
/// parser only recognizes classes with attribute and method members.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassModel {
    pub classes: Vec<UmlClass>,
}

/// A single class with its members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UmlClass {
    pub name: String,
    pub attributes: Vec<UmlAttribute>,
    pub methods: Vec<UmlMethod>,
}

impl UmlClass {
    pub fn new(name: &str) -> Self {
        UmlClass {
            name: name.to_string(),
            attributes: Vec::new(),
            methods: Vec::new(),
        }
    }
}

/// An attribute, optionally typed ("name : Type").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UmlAttribute {
    pub name: String,
    pub type_name: Option<String>,
}

/// A method with its raw parameter list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UmlMethod {
    pub name: String,
    pub params: Vec<String>,
}
