// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use ptable_app::{AtomicNumber, Category, ElementRecord, GridCell};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/Bowserinator/Periodic-Table-JSON/master/PeriodicTableJSON.json";

#[derive(Debug, Clone)]
pub struct Client {
    url: Url,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let url = parse_dataset_url(url)?;
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self { url, timeout, http })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Issues one GET against the dataset URL and decodes the whole document.
    pub fn fetch_elements(&self) -> Result<Vec<ElementRecord>> {
        log::debug!("GET {}", self.url);
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .map_err(|error| connection_error(self.url.as_str(), error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        let body = response.text().context("read dataset body")?;
        let records = parse_dataset(&body)?;
        log::debug!("decoded {} elements ({} bytes)", records.len(), body.len());
        Ok(records)
    }
}

pub fn parse_dataset_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("data.url must not be empty");
    }
    let url = Url::parse(trimmed).with_context(|| format!("invalid dataset URL {trimmed:?}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "dataset URL {trimmed:?} uses scheme {:?}; only http and https are supported",
            url.scheme()
        );
    }
    Ok(url)
}

/// Decodes a dataset document. Any malformed element or broken invariant
/// rejects the whole document.
pub fn parse_dataset(body: &str) -> Result<Vec<ElementRecord>> {
    let document: DatasetDocument =
        serde_json::from_str(body).context("decode dataset document")?;

    let mut numbers = HashSet::new();
    let mut cells = HashSet::new();
    let mut records = Vec::with_capacity(document.elements.len());
    for raw in document.elements {
        let record = raw.into_record()?;
        if !numbers.insert(record.number) {
            bail!("duplicate atomic number {} in dataset", record.number.get());
        }
        if !cells.insert(record.cell) {
            bail!(
                "element {} shares grid cell ({}, {}) with another element",
                record.symbol,
                record.cell.column,
                record.cell.row
            );
        }
        records.push(record);
    }
    Ok(records)
}

fn connection_error(url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!(
        "cannot reach {} -- check network access or set [data].url ({})",
        url,
        error
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if body.len() < 100 && !body.contains('<') && !body.trim().is_empty() {
        return anyhow!("dataset server error ({}): {}", status.as_u16(), body.trim());
    }
    anyhow!("dataset server returned {}", status.as_u16())
}

#[derive(Debug, Deserialize)]
struct DatasetDocument {
    elements: Vec<RawElement>,
}

#[derive(Debug, Deserialize)]
struct RawElement {
    number: AtomicNumber,
    symbol: String,
    name: String,
    category: String,
    xpos: u16,
    ypos: u16,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    source: Option<String>,
}

impl RawElement {
    fn into_record(self) -> Result<ElementRecord> {
        let number = self.number.get();
        if number == 0 {
            bail!("element {:?} has atomic number 0", self.symbol);
        }
        let cell = GridCell::new(self.xpos, self.ypos);
        if !cell.in_layout() {
            bail!(
                "element {} has grid position ({}, {}); columns run 1-{} and rows 1-{}",
                number,
                self.xpos,
                self.ypos,
                GridCell::COLUMNS,
                GridCell::ROWS
            );
        }
        let symbol = self.symbol.trim();
        if symbol.is_empty() {
            bail!("element {number} has an empty symbol");
        }
        if symbol.chars().count() > 3 || !symbol.chars().all(char::is_alphabetic) {
            bail!("element {number} has symbol {symbol:?}; symbols are 1-3 letters");
        }

        Ok(ElementRecord {
            number: self.number,
            symbol: symbol.to_owned(),
            name: self.name,
            category: Category::classify(&self.category),
            category_label: self.category,
            cell,
            summary: non_empty(self.summary),
            source_url: non_empty(self.source),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
