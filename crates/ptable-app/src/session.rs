// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{AtomicNumber, Catalog, ElementRecord, GridCell, ViewState};

/// Everything the presentation layer reads: the record set, the loading
/// flag, and the transient view state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub catalog: Catalog,
    pub view: ViewState,
}

impl Session {
    pub fn records(&self) -> &[ElementRecord] {
        self.catalog.records()
    }

    pub fn is_loading(&self) -> bool {
        self.catalog.is_loading()
    }

    pub fn visible_records(&self) -> Vec<&ElementRecord> {
        self.view.visible_records(self.catalog.records())
    }

    pub fn record(&self, number: AtomicNumber) -> Option<&ElementRecord> {
        self.records().iter().find(|record| record.number == number)
    }

    pub fn hovered_record(&self) -> Option<&ElementRecord> {
        self.view.hovered.and_then(|number| self.record(number))
    }

    pub fn selected_record(&self) -> Option<&ElementRecord> {
        self.view.selected.and_then(|number| self.record(number))
    }

    /// The hover tooltip is suppressed while the detail panel is open.
    pub fn tooltip_record(&self) -> Option<&ElementRecord> {
        if self.view.selected.is_some() {
            return None;
        }
        self.hovered_record()
    }

    /// Visible record occupying `cell`, if any.
    pub fn record_at(&self, cell: GridCell) -> Option<&ElementRecord> {
        self.visible_records()
            .into_iter()
            .find(|record| record.cell == cell)
    }
}
