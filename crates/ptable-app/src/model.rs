// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ids::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    NobleGas,
    Halogen,
    Lanthanoid,
    Actinoid,
    Unknown,
}

impl Category {
    /// Legend order.
    pub const ALL: [Self; 11] = [
        Self::AlkaliMetal,
        Self::AlkalineEarthMetal,
        Self::TransitionMetal,
        Self::PostTransitionMetal,
        Self::Metalloid,
        Self::Nonmetal,
        Self::NobleGas,
        Self::Halogen,
        Self::Lanthanoid,
        Self::Actinoid,
        Self::Unknown,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlkaliMetal => "alkali metal",
            Self::AlkalineEarthMetal => "alkaline earth metal",
            Self::TransitionMetal => "transition metal",
            Self::PostTransitionMetal => "post-transition metal",
            Self::Metalloid => "metalloid",
            Self::Nonmetal => "nonmetal",
            Self::NobleGas => "noble gas",
            Self::Halogen => "halogen",
            Self::Lanthanoid => "lanthanoid",
            Self::Actinoid => "actinoid",
            Self::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
    }

    /// Maps a dataset category string onto a legend category. The public
    /// dataset mixes IUPAC and older spellings and qualifies some groups
    /// ("diatomic nonmetal", "unknown, probably transition metal").
    pub fn classify(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        if let Some(category) = Self::parse(&normalized) {
            return category;
        }
        match normalized.as_str() {
            "lanthanide" => Self::Lanthanoid,
            "actinide" => Self::Actinoid,
            "diatomic nonmetal" | "polyatomic nonmetal" | "reactive nonmetal" => Self::Nonmetal,
            "alkaline earth" => Self::AlkalineEarthMetal,
            "post transition metal" => Self::PostTransitionMetal,
            _ => Self::Unknown,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|category| *category == self)
            .unwrap_or(Self::ALL.len() - 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRecord {
    pub number: AtomicNumber,
    pub symbol: String,
    pub name: String,
    pub category: Category,
    pub category_label: String,
    pub cell: GridCell,
    pub summary: Option<String>,
    pub source_url: Option<String>,
}

impl ElementRecord {
    pub fn tooltip_text(&self) -> String {
        format!(
            "{} • #{} • {}",
            self.name,
            self.number.get(),
            self.category_label
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, ElementRecord};
    use crate::{AtomicNumber, GridCell};

    #[test]
    fn parse_accepts_only_canonical_labels() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("lanthanide"), None);
        assert_eq!(Category::parse("Noble Gas"), None);
    }

    #[test]
    fn classify_normalizes_dataset_spellings() {
        assert_eq!(Category::classify("noble gas"), Category::NobleGas);
        assert_eq!(Category::classify("Noble Gas "), Category::NobleGas);
        assert_eq!(Category::classify("lanthanide"), Category::Lanthanoid);
        assert_eq!(Category::classify("actinide"), Category::Actinoid);
        assert_eq!(Category::classify("diatomic nonmetal"), Category::Nonmetal);
        assert_eq!(Category::classify("polyatomic nonmetal"), Category::Nonmetal);
        assert_eq!(
            Category::classify("unknown, probably transition metal"),
            Category::Unknown
        );
        assert_eq!(Category::classify(""), Category::Unknown);
    }

    #[test]
    fn index_follows_legend_order() {
        assert_eq!(Category::AlkaliMetal.index(), 0);
        assert_eq!(Category::Unknown.index(), 10);
    }

    #[test]
    fn tooltip_text_uses_raw_category_label() {
        let record = ElementRecord {
            number: AtomicNumber::new(2),
            symbol: "He".to_owned(),
            name: "Helium".to_owned(),
            category: Category::NobleGas,
            category_label: "noble gas".to_owned(),
            cell: GridCell::new(18, 1),
            summary: None,
            source_url: None,
        };
        assert_eq!(record.tooltip_text(), "Helium • #2 • noble gas");
    }
}
