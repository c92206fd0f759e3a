use super::{ClassModel, UmlClass};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Target language for skeletal code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    Python,
    Java,
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetLanguage::Python => write!(f, "python"),
            TargetLanguage::Java => write!(f, "java"),
        }
    }
}

/// Renders skeletal source code for every class in the model.
///
/// The output is intentionally minimal: constructors/fields from the
/// attributes and empty method stubs. Identifiers pass through untouched.
pub fn generate(model: &ClassModel, language: TargetLanguage) -> String {
    let rendered: Vec<String> = model
        .classes
        .iter()
        .map(|class| match language {
            TargetLanguage::Python => python_class(class),
            TargetLanguage::Java => java_class(class),
        })
        .collect();
    rendered.join("\n\n")
}

fn python_class(class: &UmlClass) -> String {
    let mut out = format!("class {}:\n", class.name);

    if class.attributes.is_empty() && class.methods.is_empty() {
        out.push_str("    pass\n");
        return out;
    }

    if !class.attributes.is_empty() {
        out.push_str("    def __init__(self):\n");
        for attr in &class.attributes {
            match &attr.type_name {
                Some(ty) => out.push_str(&format!("        self.{} = None  # {}\n", attr.name, ty)),
                None => out.push_str(&format!("        self.{} = None\n", attr.name)),
            }
        }
    }

    for (i, method) in class.methods.iter().enumerate() {
        if !class.attributes.is_empty() || i > 0 {
            out.push('\n');
        }
        let mut args = vec!["self".to_string()];
        args.extend(method.params.iter().map(|p| python_param(p)));
        out.push_str(&format!("    def {}({}):\n", method.name, args.join(", ")));
        out.push_str("        pass\n");
    }

    out
}

/// Parameter names may carry a ": Type" suffix in the model; Python stubs
/// keep only the name.
fn python_param(param: &str) -> String {
    match param.split_once(':') {
        Some((name, _)) => name.trim().to_string(),
        None => param.trim().to_string(),
    }
}

fn java_class(class: &UmlClass) -> String {
    let mut out = format!("public class {} {{\n", class.name);

    for attr in &class.attributes {
        let ty = attr.type_name.as_deref().unwrap_or("Object");
        out.push_str(&format!("    private {} {};\n", ty, attr.name));
    }

    if !class.attributes.is_empty() && !class.methods.is_empty() {
        out.push('\n');
    }

    for method in &class.methods {
        let params: Vec<String> = method
            .params
            .iter()
            .map(|p| match p.split_once(':') {
                Some((name, ty)) => format!("{} {}", ty.trim(), name.trim()),
                None => format!("Object {}", p.trim()),
            })
            .collect();
        out.push_str(&format!(
            "    public void {}({}) {{ }}\n",
            method.name,
            params.join(", ")
        ));
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uml::parse_class_model;

    const SAMPLE: &str = "class Customer {
  name : String
  age : int
  checkout(cart)
}";

    #[test]
    fn python_skeleton() {
        let model = parse_class_model(SAMPLE);
        let code = generate(&model, TargetLanguage::Python);
        assert!(code.starts_with("class Customer:\n"));
        assert!(code.contains("    def __init__(self):\n"));
        assert!(code.contains("        self.name = None  # String\n"));
        assert!(code.contains("        self.age = None  # int\n"));
        assert!(code.contains("    def checkout(self, cart):\n"));
        assert!(code.contains("        pass\n"));
    }

    #[test]
    fn python_empty_class_gets_pass() {
        let model = parse_class_model("class Empty {\n}");
        let code = generate(&model, TargetLanguage::Python);
        assert_eq!(code, "class Empty:\n    pass\n");
    }

    #[test]
    fn java_skeleton() {
        let model = parse_class_model(SAMPLE);
        let code = generate(&model, TargetLanguage::Java);
        assert!(code.starts_with("public class Customer {\n"));
        assert!(code.contains("    private String name;\n"));
        assert!(code.contains("    private int age;\n"));
        assert!(code.contains("    public void checkout(Object cart) { }\n"));
        assert!(code.trim_end().ends_with('}'));
    }

    #[test]
    fn java_untyped_attribute_becomes_object() {
        let model = parse_class_model("class X {\n  flag\n}");
        let code = generate(&model, TargetLanguage::Java);
        assert!(code.contains("    private Object flag;\n"));
    }

    #[test]
    fn typed_method_param() {
        let model = parse_class_model("class X {\n  pay(amount : double)\n}");
        let java = generate(&model, TargetLanguage::Java);
        assert!(java.contains("public void pay(double amount) { }"));
        let python = generate(&model, TargetLanguage::Python);
        assert!(python.contains("def pay(self, amount):"));
    }

    #[test]
    fn classes_joined_with_blank_line() {
        let model = parse_class_model("class A {\n}\nclass B {\n}");
        let code = generate(&model, TargetLanguage::Python);
        assert!(code.contains("pass\n\n\nclass B:"));
    }
}
