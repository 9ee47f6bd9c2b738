//! Command handlers.

use crate::cli::{CatalogAction, GenerateArgs, KeyAction};
use crate::config::AppConfig;
use crate::selection::select_categories;
use advaitzz_core::{
    default_catalog, expand, export_records, with_spinner, DorkService, ExportFormat,
    HistoryEntry, HistoryRepository, JsonHistoryStore, JsonKeyStore, RunReport, TemplateCatalog,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use indicatif::ProgressDrawTarget;
use log::info;

const SPINNER_MESSAGE: &str = "Generating dorks";

/// Built-in catalog, or the catalog file when one is configured.
pub fn load_catalog(config: &AppConfig) -> Result<TemplateCatalog> {
    match &config.catalog_path {
        Some(path) => TemplateCatalog::from_json_file(path)
            .with_context(|| format!("cannot load catalog `{}`", path.display())),
        None => Ok(default_catalog()),
    }
}

pub fn list_categories(catalog: &TemplateCatalog) {
    for (index, category) in catalog.iter().enumerate() {
        println!(
            "{:>3}. {} {}",
            index + 1,
            category.name.bold(),
            format!("({} templates)", category.templates.len()).dimmed()
        );
    }
}

pub fn generate(config: &AppConfig, catalog: TemplateCatalog, args: &GenerateArgs) -> Result<()> {
    let categories = select_categories(&catalog, &args.categories, args.all)?;

    // Reject a bad destination before the run lands in history.
    if let Some(output) = &args.output {
        let format = ExportFormat::from_path(output)?;
        anyhow::ensure!(
            format.is_available(),
            "{format} export is not available in this build"
        );
    }

    let target = config.spinner.then(ProgressDrawTarget::stderr);

    let report = if args.no_history {
        let records = with_spinner(SPINNER_MESSAGE, target, || {
            expand(&catalog, &args.domain, &categories)
        })?;
        RunReport {
            records,
            history_recorded: false,
        }
    } else {
        let store = JsonHistoryStore::open(&config.history_path).with_context(|| {
            format!(
                "cannot open history file `{}`",
                config.history_path.display()
            )
        })?;
        let service = DorkService::new(catalog, store);
        with_spinner(SPINNER_MESSAGE, target, || {
            service.generate(&args.domain, &categories, &args.note)
        })?
    };

    println!(
        "{} {} dorks for {}\n",
        "Generated".green().bold(),
        report.records.len(),
        args.domain.trim().cyan()
    );
    for record in &report.records {
        println!("{}", record.dork);
    }

    if !args.no_history && !report.history_recorded {
        eprintln!(
            "{} run was not recorded in history; see the log for details",
            "warning:".yellow().bold()
        );
    }

    if let Some(output) = &args.output {
        let summary = export_records(&report.records, output)
            .with_context(|| format!("export to `{}` failed", output.display()))?;
        println!(
            "\n{} {} dorks to {} ({})",
            "Saved".green().bold(),
            summary.records,
            summary.path.display(),
            summary.format
        );
    }

    Ok(())
}

pub fn history(config: &AppConfig, limit: Option<usize>) -> Result<()> {
    let store = JsonHistoryStore::open(&config.history_path).with_context(|| {
        format!(
            "cannot open history file `{}`",
            config.history_path.display()
        )
    })?;
    let runs = store.list_runs();
    if runs.is_empty() {
        println!("No runs recorded yet.");
        return Ok(());
    }

    let skip = limit.map_or(0, |limit| runs.len().saturating_sub(limit));
    for entry in runs.iter().skip(skip) {
        println!("{}", format_entry(entry));
    }
    Ok(())
}

pub fn catalog(catalog: &TemplateCatalog, action: &CatalogAction) -> Result<()> {
    match action {
        CatalogAction::Export { path } => {
            catalog
                .save_json_file(path)
                .with_context(|| format!("cannot write catalog `{}`", path.display()))?;
            println!(
                "{} {} categories to {}",
                "Saved".green().bold(),
                catalog.len(),
                path.display()
            );
        }
    }
    Ok(())
}

pub fn keys(config: &AppConfig, action: &KeyAction) -> Result<()> {
    let store = JsonKeyStore::open(&config.keys_path)
        .with_context(|| format!("cannot open key store `{}`", config.keys_path.display()))?;

    match action {
        KeyAction::List => {
            let data = store.load()?;
            if data.is_empty() {
                println!("No keys stored.");
            }
            for (key, value) in &data {
                println!("{} = {}", key.bold(), mask(value));
            }
        }
        KeyAction::Get { key } => match store.get(key)? {
            Some(value) => println!("{value}"),
            None => anyhow::bail!("no value stored for `{key}`"),
        },
        KeyAction::Set { key, value } => {
            store.set(key.as_str(), value.as_str())?;
            info!("event=key_set module=cli status=ok");
            println!("{} `{key}`", "Stored".green().bold());
        }
        KeyAction::Remove { key } => {
            if store.remove(key)? {
                println!("{} `{key}`", "Removed".green().bold());
            } else {
                println!("No value stored for `{key}`");
            }
        }
    }
    Ok(())
}

fn format_entry(entry: &HistoryEntry) -> String {
    let when = DateTime::<Utc>::from_timestamp_millis(entry.timestamp)
        .filter(|_| entry.timestamp > 0)
        .map(|time| time.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown time".to_string());

    let mut line = format!(
        "{}  {}  [{}]  {} dorks",
        when.dimmed(),
        entry.domains.join(", ").cyan(),
        entry.categories.join(", "),
        entry.count
    );
    if !entry.note.is_empty() {
        line.push_str(&format!("  {}", entry.note.italic()));
    }
    line
}

fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{tail}", "*".repeat(chars.len() - 4))
}
