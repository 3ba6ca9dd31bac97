use std::path::PathBuf;

use agora_catalog::{CatalogSource, JsonFileSource, SeedSource};
use agora_core::{
    community_tags, slug, Catalog, CatalogError, Criteria, Listing, QueryEngine, ResultOrder,
    VerifiedFilter,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agora")]
#[command(about="Agora catalog CLI", long_about=None)]
struct Cli {
    /// Catalog JSON file; the built-in seed is used when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print the category taxonomy and community tags.
    Categories,
    /// Filter listings with the browse bucket vocabulary.
    Browse {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        verified: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        newest: bool,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Free-text search with the search bucket vocabulary.
    Search {
        query: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Show a single listing by id.
    Show {
        id: String,
    },
    /// Load a catalog and print a validation report.
    Validate,
}

fn load(path: &Option<PathBuf>) -> Result<Catalog> {
    let source: Box<dyn CatalogSource> = match path {
        Some(p) => Box::new(JsonFileSource::new(p)),
        None => Box::new(SeedSource),
    };
    Ok(source.load()?)
}

fn print_listings(listings: &[Listing], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(listings)?);
        return Ok(());
    }
    for l in listings {
        println!(
            "{:<4} {:<42} ${:<9} {:<13} {}",
            l.id, l.title, l.price, l.category, l.location
        );
    }
    println!("{} listing(s)", listings.len());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Categories => {
            let engine = QueryEngine::browse();
            for name in engine.taxonomy().names() {
                println!("{name}  ({})", slug(name));
            }
            println!("community tags: {}", community_tags().join(", "));
        }
        Cmd::Browse {
            category,
            price,
            verified,
            tag,
            newest,
            limit,
            json,
        } => {
            let catalog = load(&cli.catalog)?;
            let engine = QueryEngine::browse();
            let criteria = Criteria {
                category,
                price,
                verified: verified
                    .as_deref()
                    .map(VerifiedFilter::parse)
                    .unwrap_or_default(),
                tag,
                order: if newest {
                    ResultOrder::Newest
                } else {
                    ResultOrder::Catalog
                },
                limit,
                ..Criteria::default()
            };
            print_listings(&engine.filter(&catalog, &criteria), json)?;
        }
        Cmd::Search {
            query,
            category,
            location,
            price,
            limit,
            json,
        } => {
            let catalog = load(&cli.catalog)?;
            let engine = QueryEngine::search();
            let criteria = Criteria {
                text: query,
                category,
                location,
                price,
                limit,
                ..Criteria::default()
            };
            print_listings(&engine.filter(&catalog, &criteria), json)?;
        }
        Cmd::Show { id } => {
            let catalog = load(&cli.catalog)?;
            let listing = catalog.get(&id).ok_or(CatalogError::NotFound)?;
            println!("{}", serde_json::to_string_pretty(listing)?);
        }
        Cmd::Validate => {
            let catalog = load(&cli.catalog)?;
            let report = serde_json::json!({
                "listings": catalog.len(),
                "verified": catalog.iter().filter(|l| l.verified).count(),
                "community": catalog
                    .iter()
                    .filter(|l| l.category == agora_core::COMMUNITY)
                    .count(),
                "ok": true,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
