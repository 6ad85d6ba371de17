//! Host document abstraction
//!
//! Everything the page components do to the screen goes through this trait:
//! region contents, attributes, classes and keyboard focus. Elements are
//! addressed by id; every mutator reports whether the target existed so
//! callers can skip missing elements instead of failing.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::RegionContent;

/// Document Trait
///
/// Implemented by the hosting front-end. `InMemoryDocument` is the default
/// implementation used by the terminal host and by tests.
pub trait Document {
    /// Whether an element with this id exists
    fn has_element(&self, id: &str) -> bool;

    /// Append an empty element to the body (no-op when it already exists)
    fn create_element(&mut self, id: &str);

    /// Replace the content of an element. Returns `false` when the element is missing.
    fn set_content(&mut self, id: &str, content: RegionContent) -> bool;

    /// Current content of an element
    fn content(&self, id: &str) -> Option<&RegionContent>;

    /// Set an attribute. Returns `false` when the element is missing.
    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool;

    /// Read an attribute
    fn attribute(&self, id: &str, name: &str) -> Option<&str>;

    /// Add (`enabled = true`) or remove a class. Returns `false` when the element is missing.
    fn set_class(&mut self, id: &str, class: &str, enabled: bool) -> bool;

    /// Whether the element carries a class
    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Interactive descendants of an element, in document order
    fn focusable_descendants(&self, id: &str) -> Vec<String>;

    /// Id of the focused element; `None` when focus is on the body
    fn active_element(&self) -> Option<&str>;

    /// Move keyboard focus. Returns `false` when the element is missing.
    fn focus(&mut self, id: &str) -> bool;

    /// Set the document title
    fn set_title(&mut self, title: &str);

    /// Current document title
    fn title(&self) -> &str;

    /// Update the meta description. Returns `false` when the page has none.
    fn set_meta_description(&mut self, description: &str) -> bool;

    /// Discard every element and show a single full-page view instead
    fn replace_body(&mut self, content: RegionContent);

    /// The full-page view installed by `replace_body`, if any
    fn body(&self) -> Option<&RegionContent>;
}

/// A single element of `InMemoryDocument`
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub id: String,
    pub parent: Option<String>,
    pub content: RegionContent,
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    /// Natively interactive (link, button, input) or explicitly tabbable
    pub focusable: bool,
}

/// In-memory document
///
/// Elements are kept in document order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    elements: Vec<Element>,
    title: String,
    meta_description: Option<String>,
    active: Option<String>,
    body: Option<RegionContent>,
}

impl InMemoryDocument {
    /// Create an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a top-level element
    #[must_use]
    pub fn with_element(mut self, id: &str) -> Self {
        self.push(id, None, false);
        self
    }

    /// Builder: add a child element
    #[must_use]
    pub fn with_child(mut self, parent: &str, id: &str, focusable: bool) -> Self {
        self.push(id, Some(parent), focusable);
        self
    }

    /// Builder: give the page a meta description tag
    #[must_use]
    pub fn with_meta_description(mut self, description: &str) -> Self {
        self.meta_description = Some(description.to_string());
        self
    }

    /// Builder: add every id as a top-level element
    #[must_use]
    pub fn with_elements<'a>(mut self, ids: impl IntoIterator<Item = &'a str>) -> Self {
        for id in ids {
            self.push(id, None, false);
        }
        self
    }

    /// Text content of an element (`None` when missing)
    #[must_use]
    pub fn text_content(&self, id: &str) -> Option<String> {
        self.find(id).map(|el| el.content.text_content())
    }

    /// Current meta description
    #[must_use]
    pub fn meta_description(&self) -> Option<&str> {
        self.meta_description.as_deref()
    }

    /// Element lookup
    #[must_use]
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.find(id)
    }

    /// Element ids in document order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|el| el.id.as_str())
    }

    fn push(&mut self, id: &str, parent: Option<&str>, focusable: bool) {
        if self.find(id).is_some() {
            return;
        }
        self.elements.push(Element {
            id: id.to_string(),
            parent: parent.map(str::to_string),
            focusable,
            ..Element::default()
        });
    }

    fn find(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    fn is_descendant_of(&self, element: &Element, ancestor: &str) -> bool {
        let mut parent = element.parent.as_deref();
        while let Some(id) = parent {
            if id == ancestor {
                return true;
            }
            parent = self.find(id).and_then(|el| el.parent.as_deref());
        }
        false
    }
}

impl Document for InMemoryDocument {
    fn has_element(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    fn create_element(&mut self, id: &str) {
        self.push(id, None, false);
    }

    fn set_content(&mut self, id: &str, content: RegionContent) -> bool {
        match self.find_mut(id) {
            Some(el) => {
                el.content = content;
                true
            }
            None => false,
        }
    }

    fn content(&self, id: &str) -> Option<&RegionContent> {
        self.find(id).map(|el| &el.content)
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> bool {
        match self.find_mut(id) {
            Some(el) => {
                el.attributes.insert(name.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.find(id)
            .and_then(|el| el.attributes.get(name))
            .map(String::as_str)
    }

    fn set_class(&mut self, id: &str, class: &str, enabled: bool) -> bool {
        match self.find_mut(id) {
            Some(el) => {
                if enabled {
                    el.classes.insert(class.to_string());
                } else {
                    el.classes.remove(class);
                }
                true
            }
            None => false,
        }
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.find(id).is_some_and(|el| el.classes.contains(class))
    }

    fn focusable_descendants(&self, id: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|el| el.focusable && self.is_descendant_of(el, id))
            .map(|el| el.id.clone())
            .collect()
    }

    fn active_element(&self) -> Option<&str> {
        self.active.as_deref()
    }

    fn focus(&mut self, id: &str) -> bool {
        if self.has_element(id) {
            self.active = Some(id.to_string());
            true
        } else {
            false
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn set_meta_description(&mut self, description: &str) -> bool {
        match self.meta_description.as_mut() {
            Some(meta) => {
                description.clone_into(meta);
                true
            }
            None => false,
        }
    }

    fn replace_body(&mut self, content: RegionContent) {
        self.elements.clear();
        self.active = None;
        self.body = Some(content);
    }

    fn body(&self) -> Option<&RegionContent> {
        self.body.as_ref()
    }
}
