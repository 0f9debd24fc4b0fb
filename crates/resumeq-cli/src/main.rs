use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use resumeq_core::config::{queue_path, resolve_root};
use resumeq_core::ops::{self, AddRequest};

#[derive(Parser)]
#[command(name = "resumeq", version, about = "Persistent task-resume queue for agent sessions")]
struct Cli {
    /// Project root holding the queue document (defaults to config discovery)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record an interrupted task, or refresh the matching entry
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        context: String,
        #[arg(long, default_value = "")]
        acceptance: String,
        #[arg(long, default_value = "")]
        source: String,
        #[arg(long, default_value = "")]
        session: String,
    },
    /// Remove and print the oldest queued task
    Pop,
    /// Print every queued task in FIFO order
    List,
    /// Print queue counts grouped by source and session
    Status,
    /// Drop all queued tasks
    Clear,
    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = resolve_root(cli.root.as_deref());
    let path = queue_path(&root);

    match cli.command {
        Command::Add {
            title,
            context,
            acceptance,
            source,
            session,
        } => {
            let report = ops::add_or_update(
                &path,
                &AddRequest {
                    title,
                    context,
                    acceptance,
                    source,
                    session,
                },
            )?;
            println!("{}", serde_json::to_string(&report)?);
        }
        Command::Pop => {
            println!("{}", serde_json::to_string(&ops::pop_front(&path)?)?);
        }
        Command::List => {
            println!("{}", serde_json::to_string(&ops::list_items(&path)?)?);
        }
        Command::Status => {
            println!("{}", serde_json::to_string(&ops::summarize(&path)?)?);
        }
        Command::Clear => {
            println!("{}", serde_json::to_string(&ops::clear(&path)?)?);
        }
        Command::Version => {
            println!("resumeq {}", resumeq_core::version());
        }
    }
    Ok(())
}
