use std::sync::atomic::{AtomicU64, Ordering};

use crate::style::StyleMap;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// The host control an element maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tag {
    #[default]
    Div,
    Button,
    Input,
    Span,
    Icon,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Icon {
        glyph: String,
        class_name: String,
    },
    TextInput {
        value: String,
        placeholder: Option<String>,
    },
    Children(Vec<Element>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,
    /// Automation hook exposed to the embedding page (`data-element`).
    pub data_element: Option<String>,

    // Content
    pub content: Content,

    // Presentation
    pub classes: Vec<String>,
    pub style: StyleMap,
    pub width: Option<i32>,
    pub max_height: Option<i32>,
    /// Offset from the positioned parent's top edge.
    pub top: Option<i32>,

    // Accessibility
    pub role: Option<String>,
    pub aria_label: Option<String>,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,
    pub disabled: bool,
    /// Hidden elements stay in the tree (so they can be measured) but take
    /// no input and are skipped by focus traversal.
    pub hidden: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            data_element: None,
            content: Content::None,
            classes: Vec::new(),
            style: StyleMap::default(),
            width: None,
            max_height: None,
            top: None,
            role: None,
            aria_label: None,
            focusable: false,
            clickable: false,
            disabled: false,
            hidden: false,
        }
    }
}

impl Element {
    pub fn div() -> Self {
        Self {
            id: generate_id("div"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: Tag::Span,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// A pressable control. Buttons take focus and clicks by default.
    pub fn button() -> Self {
        Self {
            id: generate_id("button"),
            tag: Tag::Button,
            focusable: true,
            clickable: true,
            ..Default::default()
        }
    }

    pub fn icon(glyph: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            id: generate_id("icon"),
            tag: Tag::Icon,
            content: Content::Icon {
                glyph: glyph.into(),
                class_name: class_name.into(),
            },
            ..Default::default()
        }
    }

    pub fn text_input(value: impl Into<String>) -> Self {
        Self {
            id: generate_id("input"),
            tag: Tag::Input,
            content: Content::TextInput {
                value: value.into(),
                placeholder: None,
            },
            focusable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn data_element(mut self, data_element: impl Into<String>) -> Self {
        self.data_element = Some(data_element.into());
        self
    }

    // Presentation
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn class_if(self, class: impl Into<String>, condition: bool) -> Self {
        if condition {
            self.class(class)
        } else {
            self
        }
    }

    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = self.style.merge(&style);
        self
    }

    pub fn width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn max_height(mut self, max_height: i32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn top(mut self, top: i32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::TextInput { placeholder, .. } = &mut self.content {
            *placeholder = Some(text.into());
        }
        self
    }

    // Accessibility
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    // Queries
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Text of this element, or of the first descendant carrying text.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            Content::TextInput { value, .. } => Some(value),
            Content::Children(children) => children.iter().find_map(Element::text_content),
            _ => None,
        }
    }

    pub fn is_interactive(&self) -> bool {
        !self.hidden && !self.disabled
    }
}

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Whether `target` is `ancestor` itself or one of its descendants.
///
/// Returns false when `ancestor` is not in the tree.
pub fn contains(root: &Element, ancestor: &str, target: &str) -> bool {
    find_element(root, ancestor).is_some_and(|el| find_element(el, target).is_some())
}
