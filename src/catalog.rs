//! Category filtering over the static project and certification catalogs.

/// Selecting this key shows the whole catalog.
pub const ALL: &str = "all";

/// A catalog entry tagged with one category key.
pub trait Categorized {
    fn category(&self) -> &str;
}

/// A filter button: category key plus its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// Stable filter. Items keep their catalog order, nothing is sorted.
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], key: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| key == ALL || item.category() == key)
        .collect()
}

/// Selected category plus the catalog it filters.
#[derive(Debug, Clone)]
pub struct CategoryFilter<'a, T> {
    catalog: &'a [T],
    selected: String,
}

impl<'a, T: Categorized> CategoryFilter<'a, T> {
    pub fn new(catalog: &'a [T]) -> Self {
        Self {
            catalog,
            selected: ALL.to_string(),
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected == key
    }

    /// Replace the selection. Keys are not checked against the catalog;
    /// an unknown key just filters everything out.
    pub fn select_category(&mut self, key: impl Into<String>) {
        self.selected = key.into();
        log::debug!("category filter set to {}", self.selected);
    }

    pub fn filtered_items(&self) -> Vec<&'a T> {
        filter_by_category(self.catalog, &self.selected)
    }

    /// True when the current selection matches nothing.
    pub fn is_empty(&self) -> bool {
        self.filtered_items().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: u32,
        cat: &'static str,
    }

    impl Categorized for Item {
        fn category(&self) -> &str {
            self.cat
        }
    }

    const CATALOG: [Item; 3] = [
        Item { id: 1, cat: "cloud" },
        Item { id: 2, cat: "programming" },
        Item { id: 3, cat: "cloud" },
    ];

    fn ids(items: &[&Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_default_selection_is_all() {
        let filter = CategoryFilter::new(&CATALOG);
        assert_eq!(filter.selected(), ALL);
        assert_eq!(ids(&filter.filtered_items()), vec![1, 2, 3]);
    }

    #[test]
    fn test_cloud_then_unknown_category() {
        let mut filter = CategoryFilter::new(&CATALOG);

        filter.select_category("cloud");
        assert_eq!(ids(&filter.filtered_items()), vec![1, 3]);
        assert!(!filter.is_empty());

        filter.select_category("design");
        assert!(filter.filtered_items().is_empty());
        assert!(filter.is_empty());
        assert_eq!(filter.selected(), "design");
    }

    #[test]
    fn test_reselecting_all_restores_catalog() {
        let mut filter = CategoryFilter::new(&CATALOG);
        filter.select_category("programming");
        assert_eq!(ids(&filter.filtered_items()), vec![2]);
        assert!(filter.is_selected("programming"));

        filter.select_category(ALL);
        assert_eq!(filter.filtered_items(), CATALOG.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_is_ordered_subsequence() {
        let catalog = [
            Item { id: 10, cat: "web" },
            Item { id: 4, cat: "design" },
            Item { id: 7, cat: "web" },
            Item { id: 1, cat: "python" },
            Item { id: 9, cat: "web" },
        ];
        let web = filter_by_category(&catalog, "web");
        assert_eq!(ids(&web), vec![10, 7, 9]);

        // each result appears in the catalog in the same relative order
        let mut positions = web
            .iter()
            .map(|w| catalog.iter().position(|c| c == *w).unwrap());
        let mut last = positions.next().unwrap();
        for p in positions {
            assert!(p > last);
            last = p;
        }
    }

    #[test]
    fn test_categories_partition_catalog() {
        let catalog = [
            Item { id: 1, cat: "web" },
            Item { id: 2, cat: "python" },
            Item { id: 3, cat: "design" },
            Item { id: 4, cat: "python" },
            Item { id: 5, cat: "web" },
        ];
        let keys = ["web", "python", "design"];

        let mut rebuilt = keys
            .iter()
            .flat_map(|k| filter_by_category(&catalog, k))
            .map(|i| i.id)
            .collect::<Vec<_>>();
        rebuilt.sort();
        rebuilt.dedup();
        assert_eq!(rebuilt, vec![1, 2, 3, 4, 5]);

        let total: usize = keys
            .iter()
            .map(|k| filter_by_category(&catalog, k).len())
            .sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog: [Item; 0] = [];
        let filter = CategoryFilter::new(&catalog);
        assert!(filter.is_empty());
    }
}
