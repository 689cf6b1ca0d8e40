//! Klynk - browse recipes and cook them step by step

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use klynk_core::catalog::{CategoryFilter, RecipeFilter};
use klynk_core::state::SessionState;
use klynk_protocol::TableDump;
use tokio::io::BufReader;
use tokio::runtime;
use tracing::info;

use klynk_app::channels::session_channel;
use klynk_app::config::{load_config, ConfigOrigin, DEFAULT_CONFIG_PATH};
use klynk_app::display::Renderer;
use klynk_app::logging::init_logging;
use klynk_app::tasks::{
    render_current_state, run_session, selected_category, spawn_input, SessionEnd,
};
use klynk_app::{Controller, BUNDLED_CATALOG};

#[derive(Parser)]
#[command(
    name = "klynk",
    version,
    about = "Browse recipes and cook them step by step",
    long_about = "Recipe catalog with serving-scaled ingredients and a guided cooking mode with per-step timers"
)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Recipe table dump (JSON) instead of the bundled sample catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// List recipes
    List {
        /// Search title, description and tags
        #[arg(long)]
        search: Option<String>,

        /// Category id, e.g. "Snacks"
        #[arg(long)]
        category: Option<String>,

        /// Longest cooking time in minutes
        #[arg(long)]
        max_time: Option<u16>,
    },

    /// Show a recipe with its ingredients
    Show {
        /// Recipe id
        id: String,

        /// Scale ingredients to this many servings
        #[arg(long)]
        servings: Option<u16>,
    },

    /// Cook a recipe step by step
    Cook {
        /// Recipe id
        id: String,

        /// Scale ingredients to this many servings
        #[arg(long)]
        servings: Option<u16>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let (config, origin) = load_config(&config_path)
        .with_context(|| format!("loading configuration {}", config_path.display()))?;

    init_logging(&config.log.level);
    match &origin {
        ConfigOrigin::File(path) => info!(path = %path.display(), "configuration loaded"),
        ConfigOrigin::Embedded => info!(
            path = %config_path.display(),
            "no configuration file, using defaults"
        ),
    }

    let catalog_path = cli.catalog.as_deref().or(config.catalog.path.as_deref());
    let source = open_catalog(catalog_path)?;
    let mut controller = Controller::new(source, config.client());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        CliCommand::List {
            search,
            category,
            max_time,
        } => {
            let mut filter = RecipeFilter::default();
            if let Some(query) = search {
                filter = filter.with_query(query);
            }
            if let Some(category) = category {
                filter = filter.with_category(CategoryFilter::from_id(&category));
            }
            if let Some(minutes) = max_time {
                filter = filter.with_max_cooking_time(minutes);
            }

            let recipes = controller.catalog(&filter)?;
            let mut renderer = Renderer::new();
            renderer.render_catalog(
                filter.section_title(),
                controller.categories(),
                selected_category(&filter.category),
                &recipes,
            );
            write!(out, "{}", renderer.screen())?;
        }

        CliCommand::Show { id, servings } => {
            open(&mut controller, &id, servings);
            let mut renderer = Renderer::new();
            render_current_state(&controller, &mut renderer);
            write!(out, "{}", renderer.screen())?;

            if controller.state() == SessionState::NotFound {
                bail!("recipe {} not found", id);
            }
        }

        CliCommand::Cook { id, servings } => {
            open(&mut controller, &id, servings);
            if controller.state() == SessionState::Detail {
                controller.start_cooking();
            }

            cook(&mut controller, &mut out)?;
        }
    }

    Ok(())
}

/// Run an interactive session on a single-threaded runtime
fn cook<W: Write>(controller: &mut Controller<TableDump>, out: &mut W) -> Result<SessionEnd> {
    let runtime = runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("starting runtime")?;

    let end = runtime.block_on(async {
        let (tx, mut rx) = session_channel();
        spawn_input(BufReader::new(tokio::io::stdin()), tx);
        run_session(controller, &mut rx, out).await
    });

    // A blocked stdin read cannot be cancelled
    runtime.shutdown_background();
    Ok(end?)
}

/// Load the table dump at `path`, or the bundled catalog
fn open_catalog(path: Option<&Path>) -> Result<TableDump> {
    let dump = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            TableDump::from_json(&json)
                .with_context(|| format!("parsing catalog {}", path.display()))?
        }
        None => TableDump::from_json(BUNDLED_CATALOG).context("parsing bundled catalog")?,
    };
    info!(recipes = dump.recipes.len(), "catalog ready");
    Ok(dump)
}

fn open(controller: &mut Controller<TableDump>, id: &str, servings: Option<u16>) {
    controller.open_recipe(id);
    if let Some(count) = servings {
        controller.set_servings(count);
    }
}
