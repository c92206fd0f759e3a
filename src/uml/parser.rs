use super::{ClassModel, UmlAttribute, UmlClass, UmlMethod};
use tracing::debug;

/// Parses PlantUML class syntax into a [`ClassModel`], line by line.
///
/// The rules are intentionally shallow: a line starting with `class ` opens a
/// class, a member line with parentheses is a method, a member line with a
/// colon is a typed attribute, `}` closes the class. Inheritance arrows,
/// multiplicities and nested declarations are not recognized and fall through
/// silently.
pub fn parse_class_model(source: &str) -> ClassModel {
    let mut classes: Vec<UmlClass> = Vec::new();
    let mut current: Option<UmlClass> = None;

    for raw_line in source.lines() {
        let line = raw_line.trim();

        if line.is_empty()
            || line.starts_with('\'')
            || line.starts_with("@start")
            || line.starts_with("@end")
            || line.starts_with("skinparam")
        {
            continue;
        }

        if let Some(rest) = line.strip_prefix("class ") {
            if let Some(done) = current.take() {
                classes.push(done);
            }
            let name = rest.trim().trim_end_matches('{').trim();
            if name.is_empty() {
                debug!("skipping class declaration without a name");
                continue;
            }
            current = Some(UmlClass::new(name));
            continue;
        }

        if line == "{" {
            continue;
        }

        if line.starts_with('}') {
            if let Some(done) = current.take() {
                classes.push(done);
            }
            continue;
        }

        let Some(class) = current.as_mut() else {
            continue;
        };

        if let Some(member) = parse_member(line) {
            match member {
                Member::Method(m) => class.methods.push(m),
                Member::Attribute(a) => class.attributes.push(a),
            }
        }
    }

    // A class body left open runs to the end of the input.
    if let Some(done) = current.take() {
        classes.push(done);
    }

    ClassModel { classes }
}

enum Member {
    Attribute(UmlAttribute),
    Method(UmlMethod),
}

/// Classifies one body line as a method, an attribute or noise.
fn parse_member(line: &str) -> Option<Member> {
    let member = line.trim_start_matches(['+', '-', '#', '~']).trim();
    if member.is_empty() {
        return None;
    }

    if let Some((head, tail)) = member.split_once('(') {
        if let Some((args, _)) = tail.split_once(')') {
            let name = head.trim();
            if name.is_empty() {
                return None;
            }
            let params = args
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
            return Some(Member::Method(UmlMethod {
                name: name.to_string(),
                params,
            }));
        }
        return None;
    }

    if let Some((name, type_name)) = member.split_once(':') {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        return Some(Member::Attribute(UmlAttribute {
            name: name.to_string(),
            type_name: Some(type_name.trim().to_string()),
        }));
    }

    if is_identifier(member) {
        return Some(Member::Attribute(UmlAttribute {
            name: member.to_string(),
            type_name: None,
        }));
    }

    None
}

fn is_identifier(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !text.starts_with(|c: char| c.is_ascii_digit())
}
