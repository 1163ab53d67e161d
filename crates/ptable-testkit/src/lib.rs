// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use ptable_app::{AtomicNumber, Category, ElementRecord, GridCell};
use serde_json::{Value, json};

// (number, symbol, name, dataset category, xpos, ypos)
const SAMPLE_ELEMENTS: [(u16, &str, &str, &str, u16, u16); 14] = [
    (1, "H", "Hydrogen", "diatomic nonmetal", 1, 1),
    (2, "He", "Helium", "noble gas", 18, 1),
    (3, "Li", "Lithium", "alkali metal", 1, 2),
    (4, "Be", "Beryllium", "alkaline earth metal", 2, 2),
    (5, "B", "Boron", "metalloid", 13, 2),
    (6, "C", "Carbon", "polyatomic nonmetal", 14, 2),
    (9, "F", "Fluorine", "diatomic nonmetal", 17, 2),
    (10, "Ne", "Neon", "noble gas", 18, 2),
    (13, "Al", "Aluminium", "post-transition metal", 13, 3),
    (17, "Cl", "Chlorine", "halogen", 17, 3),
    (26, "Fe", "Iron", "transition metal", 8, 4),
    (57, "La", "Lanthanum", "lanthanide", 3, 9),
    (89, "Ac", "Actinium", "actinide", 3, 10),
    (118, "Og", "Oganesson", "unknown, probably noble gas", 18, 7),
];

pub fn element(
    number: u16,
    symbol: &str,
    name: &str,
    category_label: &str,
    column: u16,
    row: u16,
) -> ElementRecord {
    ElementRecord {
        number: AtomicNumber::new(number),
        symbol: symbol.to_owned(),
        name: name.to_owned(),
        category: Category::classify(category_label),
        category_label: category_label.to_owned(),
        cell: GridCell::new(column, row),
        summary: Some(format!("{name} is element {number}.")),
        source_url: Some(format!("https://en.wikipedia.org/wiki/{name}")),
    }
}

pub fn hydrogen() -> ElementRecord {
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

/// A small slice of the table spread across every legend category, in
/// atomic-number order.
pub fn sample_records() -> Vec<ElementRecord> {
    SAMPLE_ELEMENTS
        .iter()
        .map(|(number, symbol, name, category, column, row)| {
            element(*number, symbol, name, category, *column, *row)
        })
        .collect()
}

/// Renders records in the wire format served by the dataset endpoint.
pub fn dataset_json(records: &[ElementRecord]) -> String {
    let elements = records.iter().map(element_json).collect::<Vec<Value>>();
    json!({ "elements": elements }).to_string()
}

pub fn sample_dataset_json() -> String {
    dataset_json(&sample_records())
}

pub const HYDROGEN_DATASET_JSON: &str = r#"{"elements":[{"number":1,"symbol":"H","name":"Hydrogen","category":"nonmetal","xpos":1,"ypos":1}]}"#;

fn element_json(record: &ElementRecord) -> Value {
    let mut value = json!({
        "number": record.number.get(),
        "symbol": record.symbol,
        "name": record.name,
        "category": record.category_label,
        "xpos": record.cell.column,
        "ypos": record.cell.row,
    });
    if let Some(summary) = &record.summary {
        value["summary"] = json!(summary);
    }
    if let Some(source) = &record.source_url {
        value["source"] = json!(source);
    }
    value
}
