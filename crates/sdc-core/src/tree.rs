// Generic ordered tree built from an XML document.
// - Element with only text -> `Text`; empty element -> `Null`.
// - Attributes become `@name` members; mixed text becomes `#text`.
// - Repeated sibling tags collapse into one `List` at the first occurrence.
// Member order follows the document.
use serde_json::json;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Result, SaveError};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Text(String),
    Map(Vec<(String, Value)>),
    List(Vec<Value>),
}

impl Value {
    pub fn member(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Map(members) => members.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Scalar text of a leaf. Empty elements read as `""`; an element that
    /// carries only attributes reads as its `#text` (or `""`).
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Null => Some(""),
            Value::Text(s) => Some(s),
            Value::Map(members) => {
                if members.iter().any(|(n, _)| !n.starts_with('@') && n != "#text") {
                    return None;
                }
                match self.member("#text") {
                    Some(Value::Text(s)) => Some(s),
                    _ => Some(""),
                }
            }
            Value::List(_) => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Text(s) => json!(s),
            Value::Map(members) => {
                let mut map = serde_json::Map::with_capacity(members.len());
                for (name, v) in members {
                    map.insert(name.clone(), v.to_json());
                }
                serde_json::Value::Object(map)
            }
            Value::List(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
        }
    }
}

/// Parse XML text into a `Map` holding a single entry keyed by the document element.
pub fn parse_xml(text: &str) -> std::result::Result<Value, roxmltree::Error> {
    let doc = roxmltree::Document::parse(text)?;
    let root = doc.root_element();
    Ok(Value::Map(vec![(root.tag_name().name().to_string(), element_value(root))]))
}

fn element_value(node: roxmltree::Node<'_, '_>) -> Value {
    let mut members: Vec<(String, Value)> = node
        .attributes()
        .map(|a| (format!("@{}", a.name()), Value::Text(a.value().to_string())))
        .collect();
    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            push_grouped(&mut members, child.tag_name().name().to_string(), element_value(child));
        } else if child.is_text() {
            text.push_str(child.text().unwrap_or_default());
        }
    }
    let text = text.trim();
    if members.is_empty() {
        return if text.is_empty() { Value::Null } else { Value::Text(text.to_string()) };
    }
    if !text.is_empty() {
        members.push(("#text".to_string(), Value::Text(text.to_string())));
    }
    Value::Map(members)
}

fn push_grouped(members: &mut Vec<(String, Value)>, name: String, v: Value) {
    match members.iter_mut().find(|(n, _)| *n == name) {
        Some((_, Value::List(items))) => items.push(v),
        Some((_, slot)) => {
            let first = std::mem::replace(slot, Value::Null);
            *slot = Value::List(vec![first, v]);
        }
        None => members.push((name, v)),
    }
}

/// Parsed `SaveGameInfo` plus the file it came from.
#[derive(Debug, Clone)]
pub struct SaveDocument {
    source: PathBuf,
    root: Value,
}

impl SaveDocument {
    pub fn parse(source: impl Into<PathBuf>, text: &str) -> Result<Self> {
        let source = source.into();
        match parse_xml(text) {
            Ok(root) => Ok(Self { source, root }),
            Err(e) => Err(SaveError::Xml { path: source, source: e }),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(&self.root, |cur, name| cur.member(name))
    }

    pub fn require(&self, path: &[&str]) -> Result<&Value> {
        self.get(path).ok_or_else(|| SaveError::MissingField(path.join(".")))
    }

    pub fn text_at(&self, path: &[&str]) -> Result<&str> {
        self.require(path)?
            .as_text()
            .ok_or_else(|| SaveError::MissingField(path.join(".")))
    }

    pub fn parse_at<T: FromStr>(&self, path: &[&str]) -> Result<T> {
        let raw = self.text_at(path)?;
        raw.trim().parse::<T>().map_err(|_| SaveError::InvalidNumber {
            field: path.join("."),
            value: raw.to_string(),
        })
    }

    pub fn to_json(&self) -> serde_json::Value {
        self.root.to_json()
    }
}
