use super::render::{render_config, render_messages};
use super::session::{add_dialog, restock_dialog, run_menu, Console, ShoePreset};
use super::setup::{Cli, Commands};
use clap::Parser;
use shoestock::api::{ConfigAction, MessageLevel, StockApi};
use shoestock::config::{StockConfig, CONFIG_FILENAME};
use shoestock::error::Result;
use shoestock::store::fs::FileStore;
use std::io::{self, IsTerminal, StdinLock, StdoutLock};
use std::path::{Path, PathBuf};

struct AppContext {
    api: StockApi<FileStore>,
    console: Console<StdinLock<'static>, StdoutLock<'static>>,
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let config_path = resolve_config_path(cli.config.as_deref());

    // Config does not need the inventory
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&config_path, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, &config_path)?;

    match cli.command {
        None | Some(Commands::Menu) => run_menu(&mut ctx.api, &mut ctx.console),
        Some(Commands::Add {
            country,
            code,
            product,
            cost,
            quantity,
        }) => {
            load_quietly(&mut ctx)?;
            let preset = ShoePreset {
                country,
                code,
                product,
                cost,
                quantity,
            };
            add_dialog(&mut ctx.api, &mut ctx.console, preset)
        }
        Some(Commands::View) => {
            load_quietly(&mut ctx)?;
            let result = ctx.api.view();
            ctx.console.show(&result)
        }
        Some(Commands::Search { code }) => {
            load_quietly(&mut ctx)?;
            let result = ctx.api.search(&code);
            ctx.console.show(&result)
        }
        Some(Commands::Restock { yes, amount }) => {
            load_quietly(&mut ctx)?;
            restock_dialog(&mut ctx.api, &mut ctx.console, yes, amount)
        }
        Some(Commands::Value) => {
            load_quietly(&mut ctx)?;
            let result = ctx.api.stock_value();
            ctx.console.show(&result)
        }
        Some(Commands::Highest) => {
            load_quietly(&mut ctx)?;
            let result = ctx.api.highest()?;
            ctx.console.show(&result)
        }
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(CONFIG_FILENAME),
    }
}

fn init_context(cli: &Cli, config_path: &Path) -> Result<AppContext> {
    let config = StockConfig::load_file(config_path)?;
    let base_dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let inventory_path = match &cli.file {
        Some(path) => path.clone(),
        None => config.inventory_path(&base_dir),
    };
    let strict = cli.strict || config.strict;
    log::debug!(
        "inventory file {} (strict: {})",
        inventory_path.display(),
        strict
    );

    let store = FileStore::new(inventory_path);
    let api = StockApi::new(store, strict, config_path.to_path_buf());
    let console = Console::new(io::stdin().lock(), io::stdout().lock(), config.currency);

    Ok(AppContext {
        api,
        console,
        verbose: cli.verbose,
    })
}

/// Loads the inventory for a one-shot command. Success is only announced
/// in verbose mode; a missing file is always reported.
fn load_quietly(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.load()?;
    let shown: Vec<_> = result
        .messages
        .into_iter()
        .filter(|m| ctx.verbose || !matches!(m.level, MessageLevel::Success))
        .collect();
    ctx.console.write(&render_messages(&shown))
}

fn handle_config(config_path: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = shoestock::commands::config::run(config_path, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print!("{}", render_config(config));
        }
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}
