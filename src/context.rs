use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// every uri that's been pulled into the program so far
///
/// one of these is shared by the whole include tree
pub type Included = Arc<Mutex<HashSet<String>>>;

/// generated text, split up so that every file's declarations can land before
/// anything that uses them
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Output {
    /// struct forward declarations, type aliases, template usings
    pub forward_declares: String,
    /// struct bodies
    pub type_declares: String,
    /// function prototypes and globals
    pub func_declares: String,
    /// function and method bodies
    pub defines: String,
}

impl Output {
    /// tack another output onto the end of this one, section by section
    pub fn append(&mut self, other: Output) {
        self.forward_declares.push_str(&other.forward_declares);
        self.type_declares.push_str(&other.type_declares);
        self.func_declares.push_str(&other.func_declares);
        self.defines.push_str(&other.defines);
    }

    pub fn render(&self) -> String {
        let mut o = String::new();
        o.push_str("\n////////////// forward declares");
        o.push_str(&self.forward_declares);
        o.push_str("\n////////////// type declares");
        o.push_str(&self.type_declares);
        o.push_str("\n////////////// function declares");
        o.push_str(&self.func_declares);
        o.push_str("\n////////////// definitions");
        o.push_str(&self.defines);
        o
    }
}

/// what a `return` is allowed to look like in the current body
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Returns {
    Value,
    Void,
    Constructor,
}
impl Default for Returns {
    fn default() -> Self {
        Returns::Value
    }
}

/// where we are, swapped in and out around every class, function, and loop
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    /// source name of the class, for trace labels. empty outside of a class
    pub class_name: String,
    /// what `super` refers to
    pub base_class_name: String,
    /// label for trace frames, like `f` or `C.m`
    pub function_name: String,
    pub returns: Returns,
    /// how many loops deep
    pub loops: usize,
}

impl Scope {
    pub fn in_class(&self) -> bool {
        !self.class_name.is_empty()
    }
}
