use indexmap::IndexMap;

use crate::{Placeholder, builder::Fragment};

/// Generated text for each template slot, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentBundle {
    slots: IndexMap<Placeholder, Fragment>,
}

impl FragmentBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fragment for a slot, replacing any previous one.
    pub fn insert(&mut self, placeholder: Placeholder, fragment: Fragment) {
        self.slots.insert(placeholder, fragment);
    }

    /// Builder-style [`FragmentBundle::insert`].
    pub fn with(mut self, placeholder: Placeholder, fragment: Fragment) -> Self {
        self.insert(placeholder, fragment);
        self
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&Fragment> {
        self.slots.get(&placeholder)
    }

    /// Rendered text for a slot; empty when the slot is absent.
    pub fn text(&self, placeholder: Placeholder) -> String {
        self.get(placeholder)
            .map(Fragment::render)
            .unwrap_or_default()
    }
}
