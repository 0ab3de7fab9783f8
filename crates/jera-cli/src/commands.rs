use std::fs;
use std::io::ErrorKind;

use anyhow::Context;
use colored::{ColoredString, Colorize};
use serde_json::Value;

use jera_diff::EraDocument;
use jera_types::{Change, ChangeMode};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Update(args) => cmd_update(args, cli.format),
        Command::Show(args) => cmd_show(args, cli.format),
    }
}

fn cmd_update(args: UpdateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let doc = load_json(&args.json)?;

    let mut era_doc = match load_era(&args.era)? {
        Some(existing) => existing,
        None => {
            tracing::debug!(era = %args.era, "no era state found, initializing");
            EraDocument::new(doc.clone())
        }
    };

    let changes = era_doc.update(doc);
    report_changes(&changes, &format)?;

    save_era(&args.era, &era_doc, args.pretty)
}

fn cmd_show(args: ShowArgs, format: OutputFormat) -> anyhow::Result<()> {
    let era_doc =
        load_era(&args.era)?.with_context(|| format!("era state file not found: {}", args.era))?;

    match format {
        OutputFormat::Json => {
            let summary = serde_json::json!({"docEra": era_doc.doc_era, "era": era_doc.era});
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            println!("Document era: {}", era_doc.doc_era.to_string().yellow().bold());
            if let Some(root) = era_doc.era.child("") {
                for (name, era) in root.eras() {
                    let pointer = jera_pointer::format(&[name.to_string()]);
                    println!("  {:<32} {}", pointer, era);
                }
            }
        }
    }

    Ok(())
}

fn report_changes(changes: &[Change], format: &OutputFormat) -> anyhow::Result<()> {
    if changes.is_empty() {
        println!("No changes.");
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(changes)?),
        OutputFormat::Text => {
            println!(
                "{:<40} {:>6}  {}",
                "json-pointer".bold(),
                "era".bold(),
                "mode".bold()
            );
            for change in changes {
                let pointer = jera_pointer::format(&change.path);
                println!("{:<40} {:>6}  {}", pointer, change.era, mode_label(change.mode));
            }
        }
    }

    Ok(())
}

fn mode_label(mode: ChangeMode) -> ColoredString {
    match mode {
        ChangeMode::New => mode.to_string().green(),
        ChangeMode::Updated => mode.to_string().yellow(),
        ChangeMode::Deleted => mode.to_string().red(),
        ChangeMode::Equal => mode.to_string().normal(),
    }
}

fn load_json(path: &str) -> anyhow::Result<Value> {
    let text = fs::read_to_string(path).with_context(|| format!("reading document {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing document {path}"))
}

fn load_era(path: &str) -> anyhow::Result<Option<EraDocument>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err).with_context(|| format!("reading era state {path}")),
    };
    let era_doc =
        serde_json::from_str(&text).with_context(|| format!("parsing era state {path}"))?;
    Ok(Some(era_doc))
}

fn save_era(path: &str, era_doc: &EraDocument, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(era_doc)?
    } else {
        serde_json::to_string(era_doc)?
    };
    fs::write(path, text).with_context(|| format!("writing era state {path}"))
}
