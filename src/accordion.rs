use std::collections::BTreeSet;

/// Set of expanded card indices. Cards open and close independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: BTreeSet<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Open a closed card or close an open one.
    pub fn toggle(&mut self, index: usize) {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_independent_per_index() {
        let mut acc = Accordion::new();
        assert!(!acc.is_expanded(0));

        acc.toggle(0);
        acc.toggle(1);
        assert!(acc.is_expanded(0));
        assert!(acc.is_expanded(1));

        acc.toggle(0);
        assert!(!acc.is_expanded(0));
        assert!(acc.is_expanded(1));
    }
}
