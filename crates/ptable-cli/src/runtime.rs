// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use ptable_app::ElementRecord;
use ptable_data::Client;
use ptable_tui::InternalEvent;
use std::sync::mpsc::Sender;
use std::thread;

pub struct DataRuntime {
    client: Client,
}

impl DataRuntime {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl ptable_tui::AppRuntime for DataRuntime {
    fn load_dataset(&mut self) -> Result<Vec<ElementRecord>> {
        self.client.fetch_elements()
    }

    fn spawn_dataset_load(&mut self, tx: Sender<InternalEvent>) -> Result<()> {
        let client = self.client.clone();
        thread::Builder::new()
            .name("dataset-load".to_owned())
            .spawn(move || {
                let event = match client.fetch_elements() {
                    Ok(records) => {
                        log::info!("loaded {} elements from {}", records.len(), client.url());
                        InternalEvent::DatasetLoaded(records)
                    }
                    Err(error) => InternalEvent::DatasetFailed(format!("{error:#}")),
                };
                // The UI may already be gone; nothing is waiting for the result then.
                let _ = tx.send(event);
            })
            .context("spawn dataset loader thread")?;
        Ok(())
    }
}
