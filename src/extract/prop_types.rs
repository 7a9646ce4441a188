//! Mapping of `PropTypes` validator expressions to [`PropType`].

use indexmap::IndexMap;
use tree_sitter::Node;

use super::{LiteralValue, PropType, PropTypeValue};
use super::react::{MAX_DEPTH, node_text, object_entries, unwrap_parens};

/// Validators without arguments.
const SIMPLE_TYPES: &[&str] = &[
    "any",
    "array",
    "bool",
    "element",
    "elementType",
    "func",
    "node",
    "number",
    "object",
    "string",
    "symbol",
];

/// Parse a validator expression. The flag is true when `.isRequired` is chained.
pub(super) fn parse_prop_type(node: Node, code: &str) -> (PropType, bool) {
    parse_at(node, code, 0)
}

fn parse_at(node: Node, code: &str, depth: usize) -> (PropType, bool) {
    let node = unwrap_parens(node);
    if depth > MAX_DEPTH {
        return (custom(node, code), false);
    }
    match node.kind() {
        "member_expression" => {
            let property = node
                .child_by_field_name("property")
                .map(|p| node_text(p, code))
                .unwrap_or_default();
            if property == "isRequired" {
                if let Some(object) = node.child_by_field_name("object") {
                    return (parse_at(object, code, depth + 1).0, true);
                }
            }
            (simple_type(property).unwrap_or_else(|| custom(node, code)), false)
        }
        "identifier" => (
            simple_type(node_text(node, code)).unwrap_or_else(|| custom(node, code)),
            false,
        ),
        "call_expression" => (parse_call(node, code, depth), false),
        _ => (custom(node, code), false),
    }
}

fn simple_type(name: &str) -> Option<PropType> {
    SIMPLE_TYPES
        .contains(&name)
        .then(|| PropType::named(name))
}

fn custom(node: Node, code: &str) -> PropType {
    PropType::custom(node_text(node, code))
}

/// `PropTypes.oneOf([...])` and friends. Also accepts destructured imports like `shape({...})`.
fn parse_call(node: Node, code: &str, depth: usize) -> PropType {
    let Some(function) = node.child_by_field_name("function") else {
        return custom(node, code);
    };
    let validator = match function.kind() {
        "member_expression" => function
            .child_by_field_name("property")
            .map(|p| node_text(p, code))
            .unwrap_or_default(),
        "identifier" => node_text(function, code),
        _ => return custom(node, code),
    };
    let Some(argument) = first_argument(node) else {
        return custom(node, code);
    };

    match validator {
        "oneOf" => {
            let value = if argument.kind() == "array" {
                PropTypeValue::Enum(
                    named_children(argument)
                        .into_iter()
                        .map(|item| literal_value(item, code))
                        .collect(),
                )
            } else {
                PropTypeValue::Raw(node_text(argument, code).to_string())
            };
            with_value("enum", value)
        }
        "oneOfType" if argument.kind() == "array" => with_value(
            "union",
            PropTypeValue::Union(
                named_children(argument)
                    .into_iter()
                    .map(|item| parse_at(item, code, depth + 1).0)
                    .collect(),
            ),
        ),
        "arrayOf" | "objectOf" => with_value(
            validator,
            PropTypeValue::Single(Box::new(parse_at(argument, code, depth + 1).0)),
        ),
        "instanceOf" => with_value(
            "instanceOf",
            PropTypeValue::Raw(node_text(argument, code).to_string()),
        ),
        "shape" | "exact" if argument.kind() == "object" => {
            let mut fields = IndexMap::new();
            for (key, value) in object_entries(argument, code) {
                let (mut field_type, required) = parse_at(value, code, depth + 1);
                field_type.required = Some(required);
                fields.insert(key, field_type);
            }
            with_value(validator, PropTypeValue::Shape(fields))
        }
        _ => custom(node, code),
    }
}

fn with_value(name: &str, value: PropTypeValue) -> PropType {
    PropType {
        value: Some(value),
        ..PropType::named(name)
    }
}

fn first_argument(call: Node) -> Option<Node> {
    let arguments = call.child_by_field_name("arguments")?;
    let mut cursor = arguments.walk();
    let first = arguments.named_children(&mut cursor).find(|n| n.kind() != "comment");
    first.map(unwrap_parens)
}

fn named_children(node: Node) -> Vec<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect()
}

/// Source text of an expression, flagged computed when it is not a plain literal.
pub(super) fn literal_value(node: Node, code: &str) -> LiteralValue {
    let node = unwrap_parens(node);
    LiteralValue {
        value: node_text(node, code).to_string(),
        computed: is_computed(node),
    }
}

fn is_computed(node: Node) -> bool {
    matches!(
        node.kind(),
        "identifier"
            | "member_expression"
            | "subscript_expression"
            | "call_expression"
            | "new_expression"
            | "binary_expression"
            | "ternary_expression"
    )
}
