use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::document::{Document, NodeId};
use crate::error::CharsearchError;

/// One element of a page description, with its subtree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSpec {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            text: None,
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }
}

/// A page: the children of `body`, described in TOML
///
/// ```toml
/// title = "Guess the character"
///
/// [[element]]
/// tag = "form"
/// attrs = { action = "/classic", method = "post" }
///
/// [[element.children]]
/// tag = "input"
/// classes = ["char-input"]
/// attrs = { name = "character" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Page {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "element")]
    pub elements: Vec<ElementSpec>,
}

/// One game form: a labelled character field with its suggestion panel
fn mode_form(title: &str, action: &str, input_name: &str, mode: Option<&str>) -> ElementSpec {
    let mut input = ElementSpec::new("input")
        .class("char-input")
        .attr("name", input_name)
        .attr("type", "text")
        .attr("autocomplete", "off")
        .attr("placeholder", "Enter a character name");
    if let Some(mode) = mode {
        input = input.attr("data-mode", mode);
    }

    ElementSpec::new("form")
        .attr("action", action)
        .attr("method", "post")
        .attr("data-title", title)
        .child(
            ElementSpec::new("div")
                .class("search-group")
                .child(input)
                .child(ElementSpec::new("div").class("search-suggestions")),
        )
}

impl Page {
    /// The three guessing modes: classic, emoji and splash
    ///
    /// The classic field declares no mode, so it is sent with the default one.
    pub fn default_page() -> Self {
        Self {
            title: Some("Guess the character".to_string()),
            elements: vec![
                mode_form("Classic", "/classic", "character", None),
                mode_form("Emoji", "/emoji", "guess", Some("emoji")),
                mode_form("Splash", "/splash", "guess", Some("splash")),
            ],
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, CharsearchError> {
        toml::from_str(content).map_err(|e| CharsearchError::Page(e.message().to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, CharsearchError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn to_toml(&self) -> Result<String, CharsearchError> {
        toml::to_string_pretty(self).map_err(|e| CharsearchError::Page(e.to_string()))
    }

    /// Build a live document from this description
    pub fn build_document(&self) -> Document {
        let mut doc = Document::new();
        let body = doc.body();
        for spec in &self.elements {
            build_element(&mut doc, body, spec);
        }
        doc
    }
}

fn build_element(doc: &mut Document, parent: NodeId, spec: &ElementSpec) {
    let node = doc.create_element(&spec.tag);
    if let Some(id) = &spec.id {
        doc.set_id(node, id);
    }
    for class in &spec.classes {
        doc.add_class(node, class);
    }
    for (name, value) in &spec.attrs {
        doc.set_attr(node, name, value);
    }
    // The value attribute seeds the live value, like a browser's defaultValue
    if let Some(value) = spec.attrs.get("value") {
        doc.set_value(node, value);
    }
    if let Some(text) = &spec.text {
        let text_node = doc.create_text(text);
        doc.append_child(node, text_node);
    }
    doc.append_child(parent, node);
    for child in &spec.children {
        build_element(doc, node, child);
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod page_tests;
