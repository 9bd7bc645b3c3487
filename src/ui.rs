use std::collections::BTreeMap;
use std::fmt;

/// A node in the widget's abstract UI tree
///
/// Renderers build `UiNode` subtrees instead of touching a concrete surface;
/// the host embedding walks the tree and materializes it (DOM, TUI, HTML
/// string). Nodes are addressed by child-index paths from the mount root,
/// which is also how click events come back in (see
/// [`crate::widget::Widget::dispatch_click`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiNode {
    pub tag: String,
    pub class: String,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<UiNode>,
}

impl UiNode {
    pub fn element(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = class.to_string();
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        self.styles.insert(property.to_string(), value.to_string());
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn append(&mut self, child: UiNode) {
        self.children.push(child);
    }

    pub fn append_all(&mut self, children: impl IntoIterator<Item = UiNode>) {
        self.children.extend(children);
    }

    /// Drops all children, leaving the node itself intact
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Whether the class string contains `class` as a whitespace token
    pub fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|token| token == class)
    }

    /// Follows a child-index path from this node; empty path is the node
    /// itself
    pub fn descendant(&self, path: &[usize]) -> Option<&UiNode> {
        let mut node = self;
        for &index in path {
            node = node.children.get(index)?;
        }
        Some(node)
    }

    pub fn descendant_mut(&mut self, path: &[usize]) -> Option<&mut UiNode> {
        let mut node = self;
        for &index in path {
            node = node.children.get_mut(index)?;
        }
        Some(node)
    }

    /// All nodes in the subtree (including this one) carrying the class token
    pub fn query_class(&self, class: &str) -> Vec<&UiNode> {
        let mut found = Vec::new();
        self.collect_class(class, &mut found);
        found
    }

    fn collect_class<'a>(&'a self, class: &str, found: &mut Vec<&'a UiNode>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_class(class, found);
        }
    }

    /// Path (from this node) of the first node carrying the class token, in
    /// depth-first order
    pub fn find_class_path(&self, class: &str) -> Option<Vec<usize>> {
        if self.has_class(class) {
            return Some(Vec::new());
        }
        for (index, child) in self.children.iter().enumerate() {
            if let Some(mut path) = child.find_class_path(class) {
                path.insert(0, index);
                return Some(path);
            }
        }
        None
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        write!(f, "{}<{}", pad, self.tag)?;
        if !self.class.is_empty() {
            write!(f, " class=\"{}\"", self.class)?;
        }
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, value)?;
        }
        if !self.styles.is_empty() {
            let style: Vec<String> = self
                .styles
                .iter()
                .map(|(property, value)| format!("{}: {}", property, value))
                .collect();
            write!(f, " style=\"{}\"", style.join("; "))?;
        }
        writeln!(f, ">")?;
        if let Some(text) = &self.text {
            writeln!(f, "{}  {}", pad, text)?;
        }
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        writeln!(f, "{}</{}>", pad, self.tag)
    }
}

impl fmt::Display for UiNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
