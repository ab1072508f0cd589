use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use freight_core::{CargoType, Destination, KeywordSets};
use freight_desk::{DeskConfig, FreightDesk, CATALOG_PATH_ENV, DEFAULT_CATALOG_PATH};
use freight_observability::init_tracing;
use serde::Serialize;

const SAMPLE_INQUIRIES: [&str; 12] = [
    "Olá, fazem transporte para Lisboa?",
    "Qual o preço para Madrid?",
    "Transportam paletes?",
    "E mercadorias perigosas para o Porto?",
    "Quanto tempo demora para Paris com carga refrigerada?",
    "Informação sobre contentores",
    "Custo para Braga",
    "Tempo de trânsito para Faro",
    "Serviços",
    "Transportam pianos?",
    "Quanto custa levar umas caixas para o Porto?",
    "qual o preco para paletes para lisboa",
];

#[derive(Debug, Parser)]
#[command(name = "freight-desk")]
#[command(about = "Freight catalog inquiry desk")]
struct Cli {
    #[arg(long, env = CATALOG_PATH_ENV, default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Answer a single inquiry.
    Ask { text: String },
    /// Answer inquiries interactively until `exit`.
    Chat,
    /// Run the sample inquiries and print a metrics snapshot.
    Demo,
    /// Print the loaded destinations and cargo types.
    Catalog,
}

#[derive(Debug, Serialize)]
struct CatalogListing<'a> {
    destinations: &'a [Destination],
    cargo_types: &'a [CargoType],
}

fn main() -> Result<()> {
    init_tracing("freight_cli");
    let cli = Cli::parse();

    let desk = FreightDesk::from_config(&DeskConfig {
        catalog_path: cli.catalog,
        keywords: KeywordSets::default(),
    });

    match cli.command {
        Command::Ask { text } => {
            for line in desk.resolve_inquiry(&text) {
                println!("{line}");
            }
        }
        Command::Chat => run_chat(&desk)?,
        Command::Demo => run_demo(&desk)?,
        Command::Catalog => print_catalog(&desk)?,
    }

    Ok(())
}

fn run_chat(desk: &FreightDesk) -> Result<()> {
    println!("Freight desk chat mode. type 'exit' to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed reading from stdin")?;

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        println!();
        for reply in desk.resolve_inquiry(message) {
            println!("{reply}");
        }
        println!();
    }

    Ok(())
}

fn run_demo(desk: &FreightDesk) -> Result<()> {
    for inquiry in SAMPLE_INQUIRIES {
        println!("--- {inquiry} ---");
        for line in desk.resolve_inquiry(inquiry) {
            println!("{line}");
        }
        println!();
    }

    println!("{}", serde_json::to_string_pretty(&desk.metrics())?);
    Ok(())
}

fn print_catalog(desk: &FreightDesk) -> Result<()> {
    let kb = desk.knowledge_base();
    let (Some(destinations), Some(cargo_types)) = (kb.destinations(), kb.cargo_types()) else {
        anyhow::bail!("catalog could not be loaded; the desk is running degraded");
    };

    let listing = CatalogListing {
        destinations,
        cargo_types,
    };
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}
