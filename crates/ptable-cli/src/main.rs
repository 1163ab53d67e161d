// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logger;
mod runtime;

use anyhow::{Context, Result};
use config::Config;
use ptable_app::Session;
use ptable_data::Client;
use ptable_tui::{AppRuntime, UiOptions};
use runtime::DataRuntime;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `ptable --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let dataset_url = options
        .dataset_url
        .clone()
        .unwrap_or_else(|| config.dataset_url().to_owned());
    let client = Client::new(&dataset_url, config.timeout()?)
        .with_context(|| format!("invalid dataset URL {dataset_url:?}; fix [data].url or --url"))?;

    let mut runtime = DataRuntime::new(client);
    if options.check_only {
        let records = runtime.load_dataset()?;
        println!(
            "{} elements from {} (timeout {:?})",
            records.len(),
            runtime.client().url(),
            runtime.client().timeout()
        );
        return Ok(());
    }

    if logger::init_or_disable(config.log_path(), config.log_level()?) {
        log::info!("starting; dataset {}", runtime.client().url());
    }

    let palette = config.palette()?;
    let ui_options = UiOptions {
        title: config.title().to_owned(),
        show_names: config.show_names(),
    };

    let mut session = Session::default();
    ptable_tui::run_app(&mut session, &mut runtime, &palette, &ui_options)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    dataset_url: Option<String>,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        dataset_url: None,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--url" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--url requires a dataset URL"))?;
                options.dataset_url = Some(value.as_ref().to_owned());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("ptable - interactive periodic table");
    println!("  --config <path>          Use a specific config path");
    println!("  --url <url>              Fetch the element dataset from this URL");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --check                  Fetch the dataset once and report the element count");
    println!("  --help                   Show this help");
}
