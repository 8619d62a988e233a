use anyhow::bail;
use clap::{Parser, Subcommand};
use orchestra_cli::commands;
use orchestra_cli::state::{build_state, load_config};
use orchestra_core::{CardAction, ProjectStatus};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "orchestra", about = "Track the status of a handful of projects")]
struct Cli {
    /// JSON file the board is stored in.
    #[arg(long, env = "ORCHESTRA_DATA", global = true)]
    data: Option<PathBuf>,

    /// TOML config file.
    #[arg(long, env = "ORCHESTRA_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every project card.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show header counts.
    Stats,
    /// Add a paused project.
    Add {
        name: String,
        #[arg(long)]
        port: Option<String>,
    },
    /// Accept the proposed next step and set the project running.
    Approve { id: String },
    /// Pause the project and wait for new direction.
    Reject { id: String },
    /// Force a status.
    Status { id: String, status: ProjectStatus },
    /// Press a card button (approve, reject, pause, resume, retry, continue).
    Act { id: String, action: CardAction },
    /// Remove a project after a y/N confirmation.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Print the seed board as JSON.
    Demo,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ORCHESTRA_LOG")
        .unwrap_or_else(|_| EnvFilter::new("orchestra=info,warn"));
    let format = env::var("ORCHESTRA_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());
    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
            .init(),
        _ => registry
            .with(fmt::layer().compact().with_writer(io::stderr))
            .init(),
    }
}

fn prompt_yes_no(prompt: &str) -> bool {
    eprint!("{prompt} [y/N] ");
    let _ = io::stderr().flush();
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn report(changed: bool, id: &str) {
    if changed {
        println!("updated {id}");
    } else {
        println!("nothing to do for {id}");
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Command::Demo = cli.command {
        return orchestra_cli::run_demo();
    }

    let config = load_config(cli.config.as_deref())?;
    let mut state = build_state(cli.data, config)?;

    match cli.command {
        Command::List { json } => {
            let cards = commands::list_cards(&state);
            if json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else {
                for card in &cards {
                    println!("{}", commands::render_card(card));
                }
            }
        }
        Command::Stats => println!("{}", commands::render_stats(&commands::stats(&state))),
        Command::Add { name, port } => {
            let project = commands::add_project(&mut state, &name, port.as_deref())?;
            println!("added {} ({})", project.name, project.id);
        }
        Command::Approve { id } => report(commands::approve(&mut state, &id)?, &id),
        Command::Reject { id } => report(commands::reject(&mut state, &id)?, &id),
        Command::Status { id, status } => {
            report(commands::set_status(&mut state, &id, status)?, &id);
        }
        Command::Act { id, action } => report(commands::act(&mut state, &id, action)?, &id),
        Command::Delete { id, yes } => {
            let removed = if yes {
                commands::delete(&mut state, &id, &mut |_: &str| true)?
            } else {
                commands::delete(&mut state, &id, &mut prompt_yes_no)?
            };
            if removed {
                println!("deleted {id}");
            } else {
                println!("kept {id}");
            }
        }
        Command::Demo => bail!("demo is handled before the board is opened"),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    run(Cli::parse())
}
