//! Wrapping option cursor shared by the main and pause menus.

/// A labelled menu entry bound to an action.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem<A> {
    pub label: &'static str,
    pub action: A,
}

impl<A> MenuItem<A> {
    pub const fn new(label: &'static str, action: A) -> Self {
        Self { label, action }
    }
}

/// Ordered, non-empty list of entries with a selection that wraps at both ends.
#[derive(Debug, Clone)]
pub struct MenuOptionList<A> {
    items: Vec<MenuItem<A>>,
    selected: usize,
}

impl<A: Copy> MenuOptionList<A> {
    /// Returns `None` for an empty list.
    pub fn new(items: Vec<MenuItem<A>>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { items, selected: 0 })
    }

    /// Build from a fixed, non-empty set of entries.
    pub fn from_items<const N: usize>(items: [MenuItem<A>; N]) -> Self {
        const { assert!(N > 0, "a menu needs at least one entry") };
        Self { items: Vec::from(items), selected: 0 }
    }

    /// Move selection up (wraps to bottom)
    pub fn move_up(&mut self) {
        self.selected = (self.selected + self.items.len() - 1) % self.items.len();
    }

    /// Move selection down (wraps to top)
    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    /// The action bound to the current selection.
    pub fn activate(&self) -> A {
        self.items[self.selected].action
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> &'static str {
        self.items[self.selected].label
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &MenuItem<A>)> {
        self.items.iter().enumerate()
    }
}
