// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use cardrank::{load_catalog, load_config, Engine, Field, RawItem, ScoringConfig};

mod cli;
use cli::display::*;
use cli::{Cli, Commands, TerminalPresenter};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CARDRANK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Rank {
            catalog,
            query,
            limit,
            config,
            json,
        } => run_rank(&catalog, &query, limit, config.as_deref(), json),
        Commands::Inspect { catalog, json } => run_inspect(&catalog, json),
        Commands::Repl {
            catalog,
            limit,
            config,
        } => run_repl(&catalog, limit, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Load the catalog and build an engine; an empty catalog is reported, not an error.
fn open_engine(catalog: &Path, config: Option<&Path>) -> Result<Option<(Vec<RawItem>, Engine)>> {
    let raw = load_catalog(catalog)
        .with_context(|| format!("could not load catalog {}", catalog.display()))?;
    let config = match config {
        Some(path) => load_config(path)
            .with_context(|| format!("could not load config {}", path.display()))?,
        None => ScoringConfig::default(),
    };

    let engine = Engine::from_catalog(Some(raw.as_slice()), config)
        .with_context(|| format!("could not build engine for {}", catalog.display()))?;
    match engine {
        Some(engine) => {
            tracing::info!(items = engine.items().len(), "catalog loaded");
            Ok(Some((raw, engine)))
        }
        None => {
            eprintln!("⚠️  Catalog {} is empty; nothing to rank", catalog.display());
            Ok(None)
        }
    }
}

fn run_rank(
    catalog: &Path,
    query: &str,
    limit: usize,
    config: Option<&Path>,
    json: bool,
) -> Result<()> {
    let Some((raw, engine)) = open_engine(catalog, config)? else {
        return Ok(());
    };

    if json {
        let mut entries = engine.rank(query).entries();
        if limit > 0 {
            entries.truncate(limit);
        }
        let out = serde_json::to_string_pretty(&entries).context("serialize ranking")?;
        println!("{}", out);
        return Ok(());
    }

    let mut presenter = TerminalPresenter::new(&raw);
    engine.apply(query, &mut presenter);
    presenter.render(query, limit);
    Ok(())
}

fn run_inspect(catalog: &Path, json: bool) -> Result<()> {
    let Some((_, engine)) = open_engine(catalog, None)? else {
        return Ok(());
    };

    if json {
        let out = serde_json::to_string_pretty(engine.items()).context("serialize models")?;
        println!("{}", out);
        return Ok(());
    }

    for model in engine.items() {
        section_top(&format!("#{} {}", model.original_index, model.id));
        for field in Field::ALL {
            let counts = model
                .field(field)
                .token_counts()
                .iter()
                .map(|(token, count)| {
                    if *count > 1 {
                        format!("{}×{}", token, count)
                    } else {
                        token.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            row(&format!(
                " {} {}",
                themed(CYAN, &[], &pad_right(field.as_str(), 12)),
                truncate(&counts, BOX_WIDTH - 14)
            ));
        }
        row(&format!(
            " {} {}",
            themed(GRAY, &[], &pad_right("extra", 12)),
            truncate(&model.extra_text, BOX_WIDTH - 14)
        ));
        row(&format!(
            " {} {}",
            themed(GRAY, &[], &pad_right("fallback", 12)),
            truncate(&model.fallback_text, BOX_WIDTH - 14)
        ));
        section_bot();
    }
    Ok(())
}

fn run_repl(catalog: &Path, limit: usize, config: Option<&Path>) -> Result<()> {
    let Some((raw, engine)) = open_engine(catalog, config)? else {
        return Ok(());
    };

    let mut presenter = TerminalPresenter::new(&raw);
    engine.apply("", &mut presenter);
    presenter.render("", limit);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("{} ", themed(BRIGHT_CYAN, &[BOLD], "query>"));
        stdout.flush().context("flush stdout")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("read stdin")? == 0 {
            break;
        }
        let query = line.trim_end_matches(['\n', '\r']);
        if query == ":q" {
            break;
        }

        engine.apply(query, &mut presenter);
        presenter.render(query, limit);
    }
    Ok(())
}
