//! Bazr CLI application entry point
//!
//! Loads the configured catalog, builds a query from the command line, and
//! prints the filtered, ranked result set. A session `SelectionState` is
//! created per invocation so displayed rows carry their annotations; the
//! library is the real product, this binary is its reference surface.
//!
//! # Usage
//!
//! ```bash
//! # Register a catalog and make it the default
//! bazr config add main ./listings.json
//! bazr config set-default main
//!
//! # Search plumbing workers by rating, top five
//! bazr search plumb -c Plumbing -k worker --sort rating -n 5
//!
//! # Only in-stock products under 1000, ids only
//! bazr -q search -k product -s in-stock --max-price 1000
//!
//! # Category overview
//! bazr categories
//! ```

use bazr::cli::{Cli, Commands, ConfigCommands};
use bazr::config::BazrConfig;
use bazr::output;
use bazr::session::SelectionState;
use bazr::{BazrError, Catalog, ListingKind, discover};

type Result<T> = std::result::Result<T, BazrError>;

fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = BazrConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    match &cli.command {
        Commands::Search(params) => {
            let catalog = load_catalog(cli, &config)?;
            run_search(&catalog, params, &config, quiet)
        }
        Commands::Categories => {
            let catalog = load_catalog(cli, &config)?;
            run_categories(&catalog, quiet);
            Ok(())
        }
        Commands::Config { command } => run_config(&mut config, command),
    }
}

fn load_catalog(cli: &Cli, config: &BazrConfig) -> Result<Catalog> {
    let path = cli.resolve_catalog_path(config)?;
    Ok(Catalog::from_json_file(path)?)
}

/// Execute a search: project by kind, filter, rank, cap, and print
fn run_search(
    catalog: &Catalog,
    params: &bazr::cli::SearchParams,
    config: &BazrConfig,
    quiet: bool,
) -> Result<()> {
    let mut query = params.to_query()?;

    // Config supplies the sort when the command line leaves it unranked
    if query.sort == bazr::SortKey::Unranked
        && let Some(default_sort) = &config.default_sort
    {
        query.sort = bazr::SortKey::parse_lenient(default_sort);
    }

    let kind: Option<ListingKind> = params.kind.map(Into::into);
    let mut results = discover(catalog.listings(), &query);
    if let Some(kind) = kind {
        results.retain(|listing| listing.kind() == kind);
    }

    let limit = params.limit.or(config.limit);
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    // One session per invocation; rows are annotated from it even though
    // a fresh CLI session starts empty
    let selection = SelectionState::new();
    for listing in &results {
        println!(
            "{}",
            output::listing_row(listing, &selection.get(&listing.id), quiet)
        );
    }

    if let Some(summary) = output::result_summary(results.len(), quiet) {
        println!("{summary}");
    }

    Ok(())
}

fn run_categories(catalog: &Catalog, quiet: bool) {
    let categories = catalog.categories();

    for (category, count) in &categories {
        println!("{}", output::category_with_count(category, *count, quiet));
    }

    if let Some(summary) = output::result_summary(categories.len(), quiet) {
        println!("{summary}");
    }
}

fn run_config(config: &mut BazrConfig, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            println!("Config file: {}", BazrConfig::config_path()?.display());
            if config.catalogs.is_empty() {
                println!("No catalogs registered");
            }
            for (name, path) in &config.catalogs {
                let marker = if config.default_catalog.as_deref() == Some(name) {
                    " (default)"
                } else {
                    ""
                };
                println!("  {name}: {}{marker}", path.display());
            }
            if let Some(sort) = &config.default_sort {
                println!("Default sort: {sort}");
            }
            if let Some(limit) = config.limit {
                println!("Result limit: {limit}");
            }
        }
        ConfigCommands::Add { name, path } => {
            config.add_catalog(name.clone(), path.clone())?;
            println!("Registered catalog '{name}'");
        }
        ConfigCommands::Remove { name } => {
            config.remove_catalog(name)?;
            println!("Removed catalog '{name}'");
        }
        ConfigCommands::SetDefault { name } => {
            config.set_default_catalog(name)?;
            println!("Default catalog is now '{name}'");
        }
    }

    Ok(())
}
