//! memory subcommand - record and inspect the architecture

use clap::Subcommand;
use memory::{MemoryConfig, Persistence, Store};

#[derive(Subcommand)]
pub enum MemoryCommands {
    /// Add or replace a system
    AddSystem {
        /// Unique key
        key: String,
        /// Display name
        label: String,
        /// What the system does
        #[arg(short, long, default_value = "")]
        description: String,
        /// Third-party system
        #[arg(short, long)]
        external: bool,
    },
    /// Add or replace a person
    AddPerson {
        /// Unique key
        key: String,
        /// Name or role
        label: String,
        /// Details
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Add or replace a relationship
    AddRelationship {
        /// Source key
        from: String,
        /// Target key
        to: String,
        /// Verb phrase
        label: String,
    },
    /// Show the stored architecture
    Show {
        /// JSON output
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cmd: MemoryCommands, config: &MemoryConfig) -> anyhow::Result<()> {
    let mut store = Store::from_config(config);

    match cmd {
        MemoryCommands::AddSystem { key, label, description, external } => {
            let result = store.add_system(&key, &label, &description, external);
            report(&store, result);
        }
        MemoryCommands::AddPerson { key, label, description } => {
            let result = store.add_person(&key, &label, &description);
            report(&store, result);
        }
        MemoryCommands::AddRelationship { from, to, label } => {
            let result = store.add_relationship(&from, &to, &label);
            report(&store, result);
        }
        MemoryCommands::Show { json } => cmd_show(&store, json)?,
    }

    Ok(())
}

fn report(store: &Store, result: Persistence) {
    match result {
        Persistence::Stale(e) => {
            let path = store.path().map(|p| p.display().to_string()).unwrap_or_default();
            eprintln!("Warning: could not save to {}: {}", path, e);
        }
        Persistence::Saved | Persistence::InMemory => {}
    }
    println!("Noted.");
}

fn cmd_show(store: &Store, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
        return Ok(());
    }

    match store.summary_text() {
        Some(summary) => println!("{}", summary),
        None => println!("No architecture recorded yet."),
    }

    Ok(())
}
