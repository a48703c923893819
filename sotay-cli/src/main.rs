use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sotay_core::{
    Category, ParseResponse, TransactionType, default_categories, sort_categories,
};
use sotay_nlp::{draft_transaction, extract_keywords, parse_message, rank_categories};
use tracing_subscriber::EnvFilter;

mod chat;
mod config;
mod fmt;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "sotay",
    version,
    about = "Family finance notebook: log transactions as chat messages"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse one message, e.g. `sotay parse xăng 50k`
    Parse {
        /// Message text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print the raw parse result as JSON
        #[arg(long)]
        json: bool,

        /// Show every category score
        #[arg(long)]
        explain: bool,

        /// Transaction date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Interactive entry: one transaction per line
    Chat,

    /// Category commands
    Categories {
        #[command(subcommand)]
        command: CategoriesCommand,
    },

    /// Config commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CategoriesCommand {
    /// List categories in matching order
    List {
        /// Only this type (expense|income)
        #[arg(long = "type")]
        kind: Option<TransactionType>,
    },

    /// Write the default Vietnamese category set to the categories file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write ~/.sotay/config.toml with defaults
    Init,
    /// Print the effective config
    Show,
}

fn init_tracing(cfg: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log.filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_categories(cfg: &Config) -> Result<Vec<Category>> {
    let path = cfg.categories_path()?;
    let mut categories = state::load_categories(&path)?;
    if cfg.categories.sort {
        sort_categories(&mut categories);
    }
    tracing::debug!(count = categories.len(), path = %path.display(), "categories loaded");
    Ok(categories)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::load(&config::config_path()?)?;
    init_tracing(&cfg);

    match cli.command {
        Command::Parse {
            text,
            json,
            explain,
            date,
        } => {
            let input = text.join(" ");
            let categories = load_categories(&cfg)?;
            parse_once(&input, &categories, json, explain, date)?;
        }

        Command::Chat => {
            let categories = load_categories(&cfg)?;
            let journal = if cfg.chat.journal {
                Some(state::Journal::open_today()?)
            } else {
                None
            };
            chat::run_chat(&categories, journal).await?;
        }

        Command::Categories { command } => match command {
            CategoriesCommand::List { kind } => {
                let categories = load_categories(&cfg)?;
                list_categories(&categories, kind);
            }
            CategoriesCommand::Init { force } => {
                let path = cfg.categories_path()?;
                if path.exists() && !force {
                    bail!(
                        "Categories file already exists: {} (pass --force to overwrite)",
                        path.display()
                    );
                }
                let categories = default_categories();
                state::write_categories(&path, &categories)?;
                println!("Wrote {} categories to {}", categories.len(), path.display());
            }
        },

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                let path = config::config_path()?;
                if Config::create_default(&path)? {
                    println!("Wrote {}", path.display());
                } else {
                    println!("Config already exists: {}", path.display());
                }
            }
            ConfigCommand::Show => {
                let s = toml::to_string_pretty(&cfg).context("serialize config")?;
                println!("# {}", config::config_path()?.display());
                println!("{}", s.trim_end());
                println!("# categories: {}", cfg.categories_path()?.display());
            }
        },
    }

    Ok(())
}

fn parse_once(
    input: &str,
    categories: &[Category],
    json: bool,
    explain: bool,
    date: Option<NaiveDate>,
) -> Result<()> {
    if json {
        let response = ParseResponse::from(parse_message(input, categories));
        println!("{}", serde_json::to_string_pretty(&response)?);
        if !response.is_success() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let draft = match draft_transaction(input, categories, date) {
        Ok(draft) => draft,
        Err(err) => bail!("{err}"),
    };

    println!("{}", fmt::draft_line(&draft));
    println!("  type={} date={} category_id={}", draft.kind, draft.date, draft.category_id);

    if explain {
        let keywords = extract_keywords(input);
        println!("\nKeywords: {}", keywords.join(", "));
        let ranked = rank_categories(&keywords, categories);
        if ranked.is_empty() {
            println!("No category scored; fell back to the default {} category", draft.kind);
        }
        for (category, score) in ranked {
            let marker = if category.is_default { " (default)" } else { "" };
            println!("  {score:>5.1}  {}{marker}", category.name);
        }
    }

    Ok(())
}

fn list_categories(categories: &[Category], kind: Option<TransactionType>) {
    for category in categories
        .iter()
        .filter(|c| kind.is_none_or(|k| c.kind == k))
    {
        let icon = category.icon.as_deref().unwrap_or(" ");
        let marker = if category.is_default { " *" } else { "" };
        println!(
            "{icon} [{}] {}{marker} ({} keywords)",
            category.kind,
            category.name,
            category.keywords.len()
        );
    }
}
