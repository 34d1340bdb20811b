//! Description templating.
//!
//! Descriptions may reference the record's own attributes through
//! placeholders such as `:subject.name`, `:causer.email`, or
//! `:properties.order.total`. Placeholders that cannot be resolved are left
//! exactly as written.

use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::LazyLock;

use super::{Loggable, Properties};

#[expect(
    clippy::expect_used,
    reason = "the placeholder pattern is a literal that always compiles"
)]
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i):[a-z0-9._-]+").expect("valid placeholder pattern"));

/// Attribute roots a placeholder may start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaceholderRoot {
    Subject,
    Causer,
    Properties,
}

impl PlaceholderRoot {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "subject" => Some(Self::Subject),
            "causer" => Some(Self::Causer),
            "properties" => Some(Self::Properties),
            _ => None,
        }
    }
}

/// Attributes a description is rendered against.
#[derive(Debug, Clone, Copy)]
pub struct DescriptionContext<'a> {
    subject: Option<&'a dyn Loggable>,
    causer: Option<&'a dyn Loggable>,
    properties: &'a Properties,
}

impl<'a> DescriptionContext<'a> {
    /// Creates a rendering context.
    #[must_use]
    pub const fn new(
        subject: Option<&'a dyn Loggable>,
        causer: Option<&'a dyn Loggable>,
        properties: &'a Properties,
    ) -> Self {
        Self {
            subject,
            causer,
            properties,
        }
    }

    fn structure_for(&self, root: PlaceholderRoot) -> Option<Value> {
        match root {
            PlaceholderRoot::Subject => self.subject.map(Loggable::to_structure),
            PlaceholderRoot::Causer => self.causer.map(Loggable::to_structure),
            PlaceholderRoot::Properties => Some(self.properties.to_structure()),
        }
    }
}

/// Replaces every resolvable placeholder in `description`.
///
/// # Examples
///
/// ```
/// use activitylog::activity::domain::{DescriptionContext, Properties, render_description};
/// use serde_json::json;
///
/// let properties = Properties::from(json!({"foo": {"bar": "baz"}}));
/// let context = DescriptionContext::new(None, None, &properties);
///
/// assert_eq!(render_description("did :properties.foo.bar", &context), "did baz");
/// assert_eq!(render_description("on :subject.name", &context), "on :subject.name");
/// ```
#[must_use]
pub fn render_description(description: &str, context: &DescriptionContext<'_>) -> String {
    PLACEHOLDER
        .replace_all(description, |captures: &Captures<'_>| {
            let token = captures.get(0).map_or("", |found| found.as_str());
            resolve_placeholder(token, context).unwrap_or_else(|| token.to_owned())
        })
        .into_owned()
}

fn resolve_placeholder(token: &str, context: &DescriptionContext<'_>) -> Option<String> {
    let body = token.strip_prefix(':')?;
    let (root, path) = body.split_once('.')?;
    let structure = context.structure_for(PlaceholderRoot::parse(root)?)?;
    lookup_path(&structure, path).map(stringify)
}

/// Looks up a dotted path inside a nested JSON structure.
///
/// A top-level key equal to the whole path wins over a nested walk. Array
/// elements are addressed by numeric segments.
///
/// # Examples
///
/// ```
/// use activitylog::activity::domain::lookup_path;
/// use serde_json::json;
///
/// let value = json!({"items": [{"sku": "A1"}], "a.b": 1});
/// assert_eq!(lookup_path(&value, "items.0.sku"), Some(&json!("A1")));
/// assert_eq!(lookup_path(&value, "a.b"), Some(&json!(1)));
/// assert_eq!(lookup_path(&value, "items.1.sku"), None);
/// ```
#[must_use]
pub fn lookup_path<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    if let Some(found) = root.as_object().and_then(|map| map.get(path)) {
        return Some(found);
    }
    path.split('.')
        .try_fold(root, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        })
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "1".to_owned(),
        other => other.to_string(),
    }
}
