use std::iter::Peekable;
use std::str::Chars;
use std::str::FromStr;

use super::document::Element;
use crate::error::CharsearchError;

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    value: Option<String>,
}

/// A compound simple selector: `input.char-input[data-mode=emoji]#id`
///
/// Combinators (descendant, child, sibling) are not supported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Selector {
    /// Match against a single element, ignoring its position in the tree
    pub fn matches(&self, el: &Element) -> bool {
        if let Some(tag) = &self.tag
            && *tag != el.tag
        {
            return false;
        }
        if let Some(id) = &self.id
            && el.id.as_deref() != Some(id.as_str())
        {
            return false;
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|m| match (&m.value, el.attrs.get(&m.name)) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(expected), Some(actual)) => expected == actual,
        })
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

fn take_ident(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&ch) = chars.peek() {
        if !is_ident_char(ch) {
            break;
        }
        ident.push(ch);
        chars.next();
    }
    ident
}

/// Attribute value: quoted with `"` or `'`, or a bare identifier
///
/// Returns `None` for an unterminated quote.
fn take_attr_value(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    match chars.peek() {
        Some(&quote) if quote == '"' || quote == '\'' => {
            chars.next();
            let mut value = String::new();
            for ch in chars.by_ref() {
                if ch == quote {
                    return Some(value);
                }
                value.push(ch);
            }
            None
        }
        _ => Some(take_ident(chars)),
    }
}

impl FromStr for Selector {
    type Err = CharsearchError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let err = |message: &str| CharsearchError::Selector {
            selector: input.to_string(),
            message: message.to_string(),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(err("empty selector"));
        }

        let mut selector = Selector::default();
        let mut chars = trimmed.chars().peekable();

        if chars.peek() == Some(&'*') {
            chars.next();
        } else {
            let tag = take_ident(&mut chars);
            if !tag.is_empty() {
                selector.tag = Some(tag.to_ascii_lowercase());
            }
        }

        while let Some(ch) = chars.next() {
            match ch {
                '.' => {
                    let class = take_ident(&mut chars);
                    if class.is_empty() {
                        return Err(err("empty class name"));
                    }
                    selector.classes.push(class);
                }
                '#' => {
                    let id = take_ident(&mut chars);
                    if id.is_empty() {
                        return Err(err("empty id"));
                    }
                    selector.id = Some(id);
                }
                '[' => {
                    let name = take_ident(&mut chars);
                    if name.is_empty() {
                        return Err(err("empty attribute name"));
                    }
                    match chars.next() {
                        Some(']') => selector.attrs.push(AttrMatch { name, value: None }),
                        Some('=') => {
                            let value = take_attr_value(&mut chars)
                                .ok_or_else(|| err("unterminated attribute value"))?;
                            if chars.next() != Some(']') {
                                return Err(err("expected ']'"));
                            }
                            selector.attrs.push(AttrMatch {
                                name,
                                value: Some(value),
                            });
                        }
                        _ => return Err(err("expected ']' or '='")),
                    }
                }
                c if c.is_whitespace() || c == '>' || c == '+' || c == '~' => {
                    return Err(err("combinators are not supported"));
                }
                other => return Err(err(&format!("unexpected character '{}'", other))),
            }
        }

        Ok(selector)
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;
