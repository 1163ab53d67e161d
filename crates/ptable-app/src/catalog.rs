// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ElementRecord;

/// The loaded record set plus its loading flag. Starts loading and empty;
/// the dataset is requested at most once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ElementRecord>,
    is_loading: bool,
    load_requested: bool,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            is_loading: true,
            load_requested: false,
        }
    }
}

impl Catalog {
    pub fn records(&self) -> &[ElementRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Returns true the first time only. Callers issue the fetch when this
    /// returns true.
    pub fn begin_load(&mut self) -> bool {
        if self.load_requested {
            return false;
        }
        self.load_requested = true;
        true
    }

    pub fn publish(&mut self, records: Vec<ElementRecord>) {
        self.records = records;
        self.is_loading = false;
    }

    pub fn publish_failure(&mut self) {
        self.publish(Vec::new());
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::{AtomicNumber, Category, ElementRecord, GridCell};

    fn hydrogen() -> ElementRecord {
        ElementRecord {
            number: AtomicNumber::new(1),
            symbol: "H".to_owned(),
            name: "Hydrogen".to_owned(),
            category: Category::Nonmetal,
            category_label: "nonmetal".to_owned(),
            cell: GridCell::new(1, 1),
            summary: None,
            source_url: None,
        }
    }

    #[test]
    fn new_catalog_is_loading_and_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_loading());
        assert!(catalog.records().is_empty());
    }

    #[test]
    fn begin_load_fires_once() {
        let mut catalog = Catalog::default();
        assert!(catalog.begin_load());
        assert!(!catalog.begin_load());
        catalog.publish(vec![hydrogen()]);
        assert!(!catalog.begin_load());
    }

    #[test]
    fn publish_stores_records_and_clears_loading() {
        let mut catalog = Catalog::default();
        catalog.publish(vec![hydrogen()]);
        assert!(!catalog.is_loading());
        assert_eq!(catalog.records(), &[hydrogen()]);
    }

    #[test]
    fn publish_failure_degrades_to_empty() {
        let mut catalog = Catalog::default();
        catalog.publish_failure();
        assert!(!catalog.is_loading());
        assert!(catalog.records().is_empty());
    }
}
