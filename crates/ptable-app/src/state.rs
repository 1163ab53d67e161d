// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{AtomicNumber, Category, ElementRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub active_category: Option<Category>,
    pub hovered: Option<AtomicNumber>,
    pub selected: Option<AtomicNumber>,
    pub status_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    ToggleCategory(Category),
    ClearCategory,
    Hover(Option<AtomicNumber>),
    Select(Option<AtomicNumber>),
    DismissOverlay,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    FilterChanged(Option<Category>),
    HoverChanged(Option<AtomicNumber>),
    SelectionChanged(Option<AtomicNumber>),
    StatusUpdated(String),
    StatusCleared,
}

impl ViewState {
    pub fn dispatch(&mut self, command: ViewCommand) -> Vec<ViewEvent> {
        match command {
            ViewCommand::ToggleCategory(category) => {
                self.set_active_category(category);
                vec![ViewEvent::FilterChanged(self.active_category)]
            }
            ViewCommand::ClearCategory => {
                self.active_category = None;
                vec![ViewEvent::FilterChanged(None)]
            }
            ViewCommand::Hover(number) => {
                self.set_hovered(number);
                vec![ViewEvent::HoverChanged(self.hovered)]
            }
            ViewCommand::Select(number) => {
                self.set_selected(number);
                vec![ViewEvent::SelectionChanged(self.selected)]
            }
            ViewCommand::DismissOverlay => {
                self.set_selected(None);
                vec![ViewEvent::SelectionChanged(None)]
            }
            ViewCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![ViewEvent::StatusUpdated(message)]
            }
            ViewCommand::ClearStatus => {
                self.status_line = None;
                vec![ViewEvent::StatusCleared]
            }
        }
    }

    /// Selecting the already-active category clears the filter.
    pub fn set_active_category(&mut self, category: Category) {
        self.active_category = if self.active_category == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    pub fn set_hovered(&mut self, number: Option<AtomicNumber>) {
        self.hovered = number;
    }

    pub fn set_selected(&mut self, number: Option<AtomicNumber>) {
        self.selected = number;
    }

    /// Stable filter over `records`; source order is preserved.
    pub fn visible_records<'a>(&self, records: &'a [ElementRecord]) -> Vec<&'a ElementRecord> {
        match self.active_category {
            None => records.iter().collect(),
            Some(category) => records
                .iter()
                .filter(|record| record.category == category)
                .collect(),
        }
    }
}
