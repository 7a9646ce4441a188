//! React component extractor built on tree-sitter-javascript.
//!
//! Finds the exported component of a module and reads its description,
//! display name, props (from `propTypes` and default values) and public
//! class methods, following react-docgen's conventions.

use std::collections::HashMap;

use indexmap::IndexMap;
use tree_sitter::{Language, Node, Parser};

use super::prop_types::{literal_value, parse_prop_type};
use super::{
    ComponentDetails, ComponentMetadata, DefaultValue, ExtractError, MetadataExtractor, MethodDoc,
    MethodParam, PropDescriptor,
};
use crate::discovery::{MOLECULE_ENTRY, file_name};

/// Maximum AST depth visited by the recursive helpers.
pub(super) const MAX_DEPTH: usize = 256;

/// Base classes that make a class a component.
const COMPONENT_BASES: &[&str] = &[
    "Component",
    "PureComponent",
    "React.Component",
    "React.PureComponent",
];

/// Methods react-docgen never reports.
const LIFECYCLE_METHODS: &[&str] = &[
    "constructor",
    "render",
    "getInitialState",
    "getDefaultProps",
    "getChildContext",
    "getDerivedStateFromProps",
    "getDerivedStateFromError",
    "getSnapshotBeforeUpdate",
    "componentWillMount",
    "UNSAFE_componentWillMount",
    "componentDidMount",
    "componentWillReceiveProps",
    "UNSAFE_componentWillReceiveProps",
    "shouldComponentUpdate",
    "componentWillUpdate",
    "UNSAFE_componentWillUpdate",
    "componentDidUpdate",
    "componentDidCatch",
    "componentWillUnmount",
];

const FUNCTION_KINDS: &[&str] = &[
    "function_declaration",
    "function_expression",
    "function",
    "arrow_function",
    "generator_function_declaration",
    "generator_function",
];

/// Static extractor for React components.
pub struct ReactExtractor {
    parser: Parser,
}

impl ReactExtractor {
    /// Create a new extractor with the JavaScript (JSX) grammar.
    pub fn new() -> Result<Self, ExtractError> {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_javascript::LANGUAGE.into();
        parser
            .set_language(&language)
            .map_err(|e| ExtractError::ParserInit {
                reason: format!("Failed to set JavaScript language: {e}"),
            })?;
        Ok(Self { parser })
    }
}

impl MetadataExtractor for ReactExtractor {
    fn name(&self) -> &str {
        "react"
    }

    fn extract(&mut self, path: &str, code: &str) -> Result<ComponentMetadata, ExtractError> {
        let tree = self
            .parser
            .parse(code, None)
            .ok_or(ExtractError::Syntax { line: 1, column: 1 })?;
        let root = tree.root_node();

        if root.has_error() {
            let at = first_error(root, 0).unwrap_or(root);
            return Err(ExtractError::Syntax {
                line: at.start_position().row + 1,
                column: at.start_position().column + 1,
            });
        }

        let module = ModuleScope::collect(root, code);
        let definition = module.find_component()?;
        crate::debug_event!(
            "extract",
            "component",
            "{} in {path}",
            definition.name.unwrap_or("<anonymous>")
        );
        Ok(module.describe(&definition, path))
    }
}

/// A resolved component definition.
#[derive(Debug, Clone, Copy)]
struct Definition<'a> {
    kind: DefinitionKind,
    node: Node<'a>,
    name: Option<&'a str>,
    /// Statement carrying the component's docblock.
    statement: Node<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DefinitionKind {
    Class,
    Function,
}

/// A top-level binding: the bound value and the statement declaring it.
#[derive(Debug, Clone, Copy)]
struct Binding<'a> {
    value: Node<'a>,
    statement: Node<'a>,
}

/// An exported value, either inline or by local name.
#[derive(Debug, Clone, Copy)]
enum Export<'a> {
    Node { node: Node<'a>, statement: Node<'a> },
    Name(&'a str),
}

/// `Target.property = value` at module level.
#[derive(Debug, Clone, Copy)]
struct StaticAssignment<'a> {
    target: &'a str,
    property: &'a str,
    value: Node<'a>,
}

/// Module-level facts collected in one pass over the program.
struct ModuleScope<'a> {
    code: &'a str,
    bindings: HashMap<&'a str, Binding<'a>>,
    imports: HashMap<&'a str, String>,
    assignments: Vec<StaticAssignment<'a>>,
    default_export: Option<Export<'a>>,
    named_exports: Vec<Export<'a>>,
}

impl<'a> ModuleScope<'a> {
    fn collect(root: Node<'a>, code: &'a str) -> Self {
        let mut scope = Self {
            code,
            bindings: HashMap::new(),
            imports: HashMap::new(),
            assignments: Vec::new(),
            default_export: None,
            named_exports: Vec::new(),
        };

        let mut cursor = root.walk();
        for statement in root.named_children(&mut cursor) {
            match statement.kind() {
                "import_statement" => scope.collect_import(statement),
                "expression_statement" => scope.collect_assignment(statement),
                "export_statement" => scope.collect_export(statement),
                _ => {
                    scope.collect_declaration(statement, statement);
                }
            }
        }

        scope
    }

    fn text(&self, node: Node) -> &'a str {
        node_text(node, self.code)
    }

    /// Record bindings of a declaration. Returns the declared names.
    fn collect_declaration(&mut self, declaration: Node<'a>, statement: Node<'a>) -> Vec<&'a str> {
        let mut names = Vec::new();
        match declaration.kind() {
            "class_declaration" | "function_declaration" | "generator_function_declaration" => {
                if let Some(name) = declaration.child_by_field_name("name") {
                    let name = self.text(name);
                    self.bindings.insert(
                        name,
                        Binding {
                            value: declaration,
                            statement,
                        },
                    );
                    names.push(name);
                }
            }
            "lexical_declaration" | "variable_declaration" => {
                let mut cursor = declaration.walk();
                for declarator in declaration.named_children(&mut cursor) {
                    if declarator.kind() != "variable_declarator" {
                        continue;
                    }
                    let (Some(name), Some(value)) = (
                        declarator.child_by_field_name("name"),
                        declarator.child_by_field_name("value"),
                    ) else {
                        continue;
                    };
                    if name.kind() != "identifier" {
                        continue;
                    }
                    let name = self.text(name);
                    self.bindings.insert(name, Binding { value, statement });
                    names.push(name);
                }
            }
            _ => {}
        }
        names
    }

    fn collect_import(&mut self, statement: Node<'a>) {
        let Some(source) = statement
            .child_by_field_name("source")
            .and_then(|s| string_value(s, self.code))
        else {
            return;
        };

        let mut locals = Vec::new();
        let mut cursor = statement.walk();
        for clause in statement.named_children(&mut cursor) {
            if clause.kind() != "import_clause" {
                continue;
            }
            let mut clause_cursor = clause.walk();
            for item in clause.named_children(&mut clause_cursor) {
                match item.kind() {
                    "identifier" => locals.push(self.text(item)),
                    "namespace_import" => {
                        if let Some(local) = item.named_child(0) {
                            locals.push(self.text(local));
                        }
                    }
                    "named_imports" => {
                        let mut named_cursor = item.walk();
                        for specifier in item.named_children(&mut named_cursor) {
                            let local = specifier
                                .child_by_field_name("alias")
                                .or_else(|| specifier.child_by_field_name("name"));
                            if let Some(local) = local {
                                locals.push(self.text(local));
                            }
                        }
                    }
                    _ => {}
                }
            }
        }

        for local in locals {
            self.imports.insert(local, source.clone());
        }
    }

    fn collect_assignment(&mut self, statement: Node<'a>) {
        let Some(expression) = statement.named_child(0) else {
            return;
        };
        if expression.kind() != "assignment_expression" {
            return;
        }
        let (Some(left), Some(value)) = (
            expression.child_by_field_name("left"),
            expression.child_by_field_name("right"),
        ) else {
            return;
        };
        if left.kind() != "member_expression" {
            return;
        }
        let (Some(object), Some(property)) = (
            left.child_by_field_name("object"),
            left.child_by_field_name("property"),
        ) else {
            return;
        };
        if object.kind() == "identifier" {
            self.assignments.push(StaticAssignment {
                target: self.text(object),
                property: self.text(property),
                value,
            });
        }
    }

    fn collect_export(&mut self, statement: Node<'a>) {
        let is_default = has_token(statement, "default");

        if let Some(declaration) = statement.child_by_field_name("declaration") {
            let names = self.collect_declaration(declaration, statement);
            if is_default {
                self.default_export = Some(Export::Node {
                    node: declaration,
                    statement,
                });
            } else {
                self.named_exports
                    .extend(names.into_iter().map(Export::Name));
            }
            return;
        }

        if let Some(value) = statement.child_by_field_name("value") {
            self.default_export = Some(Export::Node {
                node: value,
                statement,
            });
            return;
        }

        // `export { A, B as default }`; re-exports from other modules are skipped.
        if statement.child_by_field_name("source").is_some() {
            return;
        }
        let mut cursor = statement.walk();
        for clause in statement.named_children(&mut cursor) {
            if clause.kind() != "export_clause" {
                continue;
            }
            let mut clause_cursor = clause.walk();
            for specifier in clause.named_children(&mut clause_cursor) {
                let Some(name) = specifier.child_by_field_name("name") else {
                    continue;
                };
                let exported = specifier
                    .child_by_field_name("alias")
                    .map(|alias| self.text(alias));
                if exported == Some("default") {
                    self.default_export = Some(Export::Name(self.text(name)));
                } else {
                    self.named_exports.push(Export::Name(self.text(name)));
                }
            }
        }
    }

    /// Pick the component this module documents.
    ///
    /// The default export wins. Otherwise exactly one named export must be a component.
    fn find_component(&self) -> Result<Definition<'a>, ExtractError> {
        if let Some(definition) = self.default_export.and_then(|e| self.resolve_export(e)) {
            return Ok(definition);
        }

        let mut found: Vec<Definition<'a>> = Vec::new();
        for export in &self.named_exports {
            if let Some(definition) = self.resolve_export(*export) {
                if !found.iter().any(|d| d.node.id() == definition.node.id()) {
                    found.push(definition);
                }
            }
        }

        match found.len() {
            0 => Err(ExtractError::NoComponentDefinition),
            1 => Ok(found[0]),
            _ => Err(ExtractError::MultipleDefinitions {
                names: found
                    .iter()
                    .map(|d| d.name.unwrap_or("<anonymous>"))
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    fn resolve_export(&self, export: Export<'a>) -> Option<Definition<'a>> {
        match export {
            Export::Node { node, statement } => self.resolve(node, None, statement, 0),
            Export::Name(name) => {
                let binding = self.bindings.get(name)?;
                self.resolve(binding.value, Some(name), binding.statement, 0)
            }
        }
    }

    /// Follow identifiers and wrapper calls down to a component definition.
    fn resolve(
        &self,
        node: Node<'a>,
        name: Option<&'a str>,
        statement: Node<'a>,
        depth: usize,
    ) -> Option<Definition<'a>> {
        if depth > MAX_DEPTH {
            return None;
        }
        let node = unwrap_parens(node);
        let own_name = node.child_by_field_name("name").map(|n| self.text(n));

        match node.kind() {
            "identifier" => {
                let local = self.text(node);
                let binding = self.bindings.get(local)?;
                self.resolve(
                    binding.value,
                    name.or(Some(local)),
                    binding.statement,
                    depth + 1,
                )
            }
            "class_declaration" | "class" if extends_component(node, self.code) => {
                Some(Definition {
                    kind: DefinitionKind::Class,
                    node,
                    name: name.or(own_name),
                    statement,
                })
            }
            kind if FUNCTION_KINDS.contains(&kind) && returns_jsx(node, self.code) => {
                Some(Definition {
                    kind: DefinitionKind::Function,
                    node,
                    name: name.or(own_name),
                    statement,
                })
            }
            // Higher-order wrappers: memo(X), forwardRef(fn), withTheme(X)
            "call_expression" => {
                let arguments = node.child_by_field_name("arguments")?;
                let first = arguments.named_child(0)?;
                self.resolve(first, name, statement, depth + 1)
            }
            _ => None,
        }
    }

    /// Static properties: class `static` fields, then `Name.prop = ...` assignments.
    fn static_property(&self, definition: &Definition<'a>, property: &str) -> Option<Node<'a>> {
        if definition.kind == DefinitionKind::Class {
            if let Some(body) = definition.node.child_by_field_name("body") {
                let mut cursor = body.walk();
                for member in body.named_children(&mut cursor) {
                    if !matches!(member.kind(), "field_definition" | "public_field_definition")
                        || !has_token(member, "static")
                    {
                        continue;
                    }
                    let matches_name = member
                        .child_by_field_name("property")
                        .and_then(|key| property_name(key, self.code))
                        .is_some_and(|key| key == property);
                    if matches_name {
                        if let Some(value) = member.child_by_field_name("value") {
                            return Some(value);
                        }
                    }
                }
            }
        }

        let target = definition.name?;
        self.assignments
            .iter()
            .rev()
            .find(|a| a.target == target && a.property == property)
            .map(|a| a.value)
    }

    /// Resolve an object literal, following one level of identifier indirection.
    fn object_literal(&self, node: Node<'a>) -> Option<Node<'a>> {
        let node = unwrap_parens(node);
        match node.kind() {
            "object" => Some(node),
            "identifier" => {
                let binding = self.bindings.get(self.text(node))?;
                let value = unwrap_parens(binding.value);
                (value.kind() == "object").then_some(value)
            }
            _ => None,
        }
    }

    fn describe(&self, definition: &Definition<'a>, path: &str) -> ComponentMetadata {
        let description = docblock(definition.statement, self.code).unwrap_or_default();

        let display_name = self
            .static_property(definition, "displayName")
            .and_then(|value| string_value(value, self.code))
            .or_else(|| definition.name.map(str::to_string))
            .unwrap_or_else(|| display_name_from_path(path));

        let mut details = ComponentDetails {
            description,
            ..ComponentDetails::default()
        };
        self.collect_props(definition, &mut details);
        self.collect_defaults(definition, &mut details.props);
        if definition.kind == DefinitionKind::Class {
            details.methods = self.collect_methods(definition);
        }

        ComponentMetadata {
            display_name,
            details,
        }
    }

    fn collect_props(&self, definition: &Definition<'a>, details: &mut ComponentDetails) {
        let Some(object) = self
            .static_property(definition, "propTypes")
            .and_then(|value| self.object_literal(value))
        else {
            return;
        };

        let mut cursor = object.walk();
        for entry in object.named_children(&mut cursor) {
            match entry.kind() {
                "pair" => {
                    let (Some(key), Some(value)) = (
                        entry.child_by_field_name("key"),
                        entry.child_by_field_name("value"),
                    ) else {
                        continue;
                    };
                    let Some(name) = property_name(key, self.code) else {
                        continue;
                    };
                    let (prop_type, required) = parse_prop_type(value, self.code);
                    details.props.insert(
                        name,
                        PropDescriptor {
                            prop_type: Some(prop_type),
                            required: Some(required),
                            description: Some(docblock(entry, self.code).unwrap_or_default()),
                            default_value: None,
                        },
                    );
                }
                "spread_element" => {
                    if let Some(source) = self.spread_source(entry) {
                        if !details.composes.contains(&source) {
                            details.composes.push(source);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// Module specifier of `...Other.propTypes` or `...sharedProps` when imported.
    fn spread_source(&self, spread: Node<'a>) -> Option<String> {
        let mut argument = unwrap_parens(spread.named_child(0)?);
        while argument.kind() == "member_expression" {
            argument = argument.child_by_field_name("object")?;
        }
        if argument.kind() != "identifier" {
            return None;
        }
        self.imports.get(self.text(argument)).cloned()
    }

    fn collect_defaults(
        &self,
        definition: &Definition<'a>,
        props: &mut IndexMap<String, PropDescriptor>,
    ) {
        let mut defaults: Vec<(String, DefaultValue)> = Vec::new();

        if let Some(object) = self
            .static_property(definition, "defaultProps")
            .and_then(|value| self.object_literal(value))
        {
            for (name, value) in object_entries(object, self.code) {
                defaults.push((name, literal_value(value, self.code)));
            }
        }

        if definition.kind == DefinitionKind::Function {
            defaults.extend(destructured_defaults(definition.node, self.code));
        }

        for (name, value) in defaults {
            props.entry(name).or_default().default_value = Some(value);
        }
    }

    fn collect_methods(&self, definition: &Definition<'a>) -> Vec<MethodDoc> {
        let Some(body) = definition.node.child_by_field_name("body") else {
            return Vec::new();
        };

        let mut methods = Vec::new();
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            let (key, function) = match member.kind() {
                "method_definition" => (member.child_by_field_name("name"), Some(member)),
                "field_definition" | "public_field_definition" => {
                    let value = member.child_by_field_name("value").map(unwrap_parens);
                    match value {
                        Some(v) if FUNCTION_KINDS.contains(&v.kind()) => {
                            (member.child_by_field_name("property"), Some(v))
                        }
                        _ => continue,
                    }
                }
                _ => continue,
            };
            let (Some(key), Some(function)) = (key, function) else {
                continue;
            };
            let Some(name) = property_name(key, self.code) else {
                continue;
            };
            if LIFECYCLE_METHODS.contains(&name.as_str()) {
                continue;
            }

            let mut modifiers = Vec::new();
            if has_token(member, "static") {
                modifiers.push("static".to_string());
            }
            if has_token(member, "async") || has_token(function, "async") {
                modifiers.push("async".to_string());
            }
            if has_token(member, "*") || has_token(function, "*") {
                modifiers.push("generator".to_string());
            }
            for accessor in ["get", "set"] {
                if has_token(member, accessor) {
                    modifiers.push(accessor.to_string());
                }
            }

            methods.push(MethodDoc {
                name,
                docblock: docblock(member, self.code),
                modifiers,
                params: parameter_names(function, self.code)
                    .into_iter()
                    .map(|name| MethodParam { name })
                    .collect(),
            });
        }
        methods
    }
}

/// Source text of a node.
pub(super) fn node_text<'a>(node: Node, code: &'a str) -> &'a str {
    &code[node.byte_range()]
}

/// Strip any number of surrounding parentheses.
pub(super) fn unwrap_parens(mut node: Node) -> Node {
    while node.kind() == "parenthesized_expression" {
        match node.named_child(0) {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// Name of an object or class property key.
pub(super) fn property_name(key: Node, code: &str) -> Option<String> {
    match key.kind() {
        "property_identifier" | "identifier" | "shorthand_property_identifier" | "number" => {
            Some(node_text(key, code).to_string())
        }
        "string" => string_value(key, code),
        _ => None,
    }
}

/// `key: value` entries of an object literal, in source order. Spreads are skipped.
pub(super) fn object_entries<'a>(object: Node<'a>, code: &str) -> Vec<(String, Node<'a>)> {
    let mut entries = Vec::new();
    let mut cursor = object.walk();
    for entry in object.named_children(&mut cursor) {
        if entry.kind() != "pair" {
            continue;
        }
        let (Some(key), Some(value)) = (
            entry.child_by_field_name("key"),
            entry.child_by_field_name("value"),
        ) else {
            continue;
        };
        if let Some(name) = property_name(key, code) {
            entries.push((name, value));
        }
    }
    entries
}

/// Contents of a string literal or a template string without substitutions.
fn string_value(node: Node, code: &str) -> Option<String> {
    let node = unwrap_parens(node);
    let text = node_text(node, code);
    match node.kind() {
        "string" => Some(text.get(1..text.len().saturating_sub(1))?.to_string()),
        "template_string" if !text.contains("${") => {
            Some(text.get(1..text.len().saturating_sub(1))?.to_string())
        }
        _ => None,
    }
}

/// Whether `node` has a direct anonymous child token with this text.
fn has_token(node: Node, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == token);
    found
}

/// JSDoc block (`/** ... */`) directly preceding a node.
fn docblock(node: Node, code: &str) -> Option<String> {
    let previous = node.prev_sibling()?;
    if previous.kind() != "comment" {
        return None;
    }
    let comment = node_text(previous, code);
    if !comment.starts_with("/**") {
        return None;
    }

    let body = comment.trim_start_matches("/**").trim_end_matches("*/");
    let cleaned = body
        .lines()
        .map(|line| {
            let line = line.trim_start();
            let line = line.strip_prefix('*').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line).trim_end()
        })
        .collect::<Vec<_>>()
        .join("\n");
    Some(cleaned.trim().to_string())
}

fn extends_component(class: Node, code: &str) -> bool {
    let mut cursor = class.walk();
    let heritage = class
        .children(&mut cursor)
        .find(|child| child.kind() == "class_heritage");
    heritage
        .and_then(|h| h.named_child(0))
        .is_some_and(|base| COMPONENT_BASES.contains(&node_text(base, code)))
}

/// Whether a function returns JSX or a `createElement(...)` call.
fn returns_jsx(function: Node, code: &str) -> bool {
    let Some(body) = function.child_by_field_name("body") else {
        return false;
    };
    if body.kind() != "statement_block" {
        return contains_jsx(body, code, 0);
    }
    any_return_has_jsx(body, code, 0)
}

fn any_return_has_jsx(node: Node, code: &str, depth: usize) -> bool {
    if depth > MAX_DEPTH {
        return false;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.named_children(&mut cursor).collect();
    children.into_iter().any(|child| match child.kind() {
        "return_statement" => child
            .named_child(0)
            .is_some_and(|value| contains_jsx(value, code, depth + 1)),
        kind if FUNCTION_KINDS.contains(&kind) || kind == "class" => false,
        _ => any_return_has_jsx(child, code, depth + 1),
    })
}

fn contains_jsx(node: Node, code: &str, depth: usize) -> bool {
    if depth > MAX_DEPTH {
        return false;
    }
    match node.kind() {
        "jsx_element" | "jsx_self_closing_element" | "jsx_fragment" => true,
        "call_expression"
            if node
                .child_by_field_name("function")
                .is_some_and(|f| node_text(f, code).ends_with("createElement")) =>
        {
            true
        }
        kind if FUNCTION_KINDS.contains(&kind) => false,
        _ => {
            let mut cursor = node.walk();
            let children: Vec<Node> = node.named_children(&mut cursor).collect();
            children
                .into_iter()
                .any(|child| contains_jsx(child, code, depth + 1))
        }
    }
}

/// Parameter names of a function, as written.
fn parameter_names(function: Node, code: &str) -> Vec<String> {
    if let Some(single) = function.child_by_field_name("parameter") {
        return vec![node_text(single, code).to_string()];
    }
    let Some(parameters) = function.child_by_field_name("parameters") else {
        return Vec::new();
    };
    let mut cursor = parameters.walk();
    let names = parameters
        .named_children(&mut cursor)
        .filter(|p| p.kind() != "comment")
        .map(|p| match p.kind() {
            "assignment_pattern" => p
                .child_by_field_name("left")
                .map(|left| node_text(left, code))
                .unwrap_or_else(|| node_text(p, code))
                .to_string(),
            _ => node_text(p, code).to_string(),
        })
        .collect();
    names
}

/// Defaults written as `({ size = 'md', label: text = '' }) => ...`.
fn destructured_defaults(function: Node, code: &str) -> Vec<(String, DefaultValue)> {
    let Some(parameters) = function.child_by_field_name("parameters") else {
        return Vec::new();
    };
    let Some(props) = parameters.named_child(0) else {
        return Vec::new();
    };
    let pattern = match props.kind() {
        "object_pattern" => props,
        "assignment_pattern" => match props.child_by_field_name("left") {
            Some(left) if left.kind() == "object_pattern" => left,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    let mut defaults = Vec::new();
    let mut cursor = pattern.walk();
    for entry in pattern.named_children(&mut cursor) {
        match entry.kind() {
            "object_assignment_pattern" => {
                let (Some(left), Some(right)) = (
                    entry.child_by_field_name("left"),
                    entry.child_by_field_name("right"),
                ) else {
                    continue;
                };
                defaults.push((node_text(left, code).to_string(), literal_value(right, code)));
            }
            "pair_pattern" => {
                let (Some(key), Some(value)) = (
                    entry.child_by_field_name("key"),
                    entry.child_by_field_name("value"),
                ) else {
                    continue;
                };
                if value.kind() != "assignment_pattern" {
                    continue;
                }
                let (Some(name), Some(right)) =
                    (property_name(key, code), value.child_by_field_name("right"))
                else {
                    continue;
                };
                defaults.push((name, literal_value(right, code)));
            }
            _ => {}
        }
    }
    defaults
}

/// First error or missing node in document order.
fn first_error(node: Node, depth: usize) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if depth > MAX_DEPTH || !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .find_map(|child| first_error(child, depth + 1))
}

/// Display name when the component has none: the directory for `index.js`, else the file stem.
pub fn display_name_from_path(path: &str) -> String {
    let name = file_name(path);
    if name == MOLECULE_ENTRY {
        let mut parts = path.rsplit('/');
        parts.next();
        if let Some(dir) = parts.next().filter(|d| !d.is_empty()) {
            return dir.to_string();
        }
    }
    match name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => name.to_string(),
    }
}
