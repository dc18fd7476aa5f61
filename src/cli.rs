//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for bazr using the `clap` crate.
//! CLI argument enums are separate from the domain types; `From`
//! conversions bridge the two so the engine never depends on clap.
//!
//! # Commands
//!
//! - **search**: filter and rank a catalog by text, category, price,
//!   rating, status, and kind
//! - **categories**: list distinct categories with listing counts
//! - **config**: manage named catalogs (add, remove, show, set-default)

use crate::query::{Query, QueryError, SortKey, StatusFilter};
use crate::{BazrError, ListingKind};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Sort order argument for the search command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortArg {
    /// Keep catalog order
    #[default]
    Unranked,
    /// Highest rating first
    Rating,
    /// Newest first
    Recency,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Most completed jobs / reviews first
    Popularity,
    /// Most urgent first
    Urgency,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Unranked => Self::Unranked,
            SortArg::Rating => Self::RatingDesc,
            SortArg::Recency => Self::RecencyDesc,
            SortArg::PriceAsc => Self::PriceAsc,
            SortArg::PriceDesc => Self::PriceDesc,
            SortArg::Popularity => Self::PopularityDesc,
            SortArg::Urgency => Self::UrgencyDesc,
        }
    }
}

/// Listing kind argument for per-kind projection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    /// Worker profiles
    Worker,
    /// Posted tasks
    Task,
    /// Products
    Product,
    /// Service categories
    Category,
}

impl From<KindArg> for ListingKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Worker => Self::Worker,
            KindArg::Task => Self::Task,
            KindArg::Product => Self::Product,
            KindArg::Category => Self::Category,
        }
    }
}

/// Parameters for the search command
#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Free-text query, matched as a case-insensitive substring
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Exact category to match ("all" or omitted = every category)
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Restrict to one listing kind
    #[arg(short = 'k', long = "kind", value_enum)]
    pub kind: Option<KindArg>,

    /// Inclusive minimum price
    #[arg(long = "min-price", value_name = "N")]
    pub min_price: Option<f64>,

    /// Inclusive maximum price
    #[arg(long = "max-price", value_name = "N")]
    pub max_price: Option<f64>,

    /// Minimum rating (unrated listings count as 0)
    #[arg(long = "min-rating", value_name = "N")]
    pub min_rating: Option<f64>,

    /// Allowed status keys (e.g. available, posted, in-stock)
    #[arg(short = 's', long = "status", value_name = "STATUS", num_args = 0..)]
    pub statuses: Vec<String>,

    /// Sort order
    #[arg(long = "sort", value_enum, default_value_t = SortArg::Unranked)]
    pub sort: SortArg,

    /// Show at most this many results
    #[arg(short = 'n', long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Reject unknown status keys and malformed ranges instead of
    /// silently repairing them
    #[arg(long = "strict")]
    pub strict: bool,
}

impl SearchParams {
    /// Build the engine query from these arguments
    ///
    /// In the default lenient mode, unknown status keys are dropped and
    /// inverted price ranges are swapped. With `--strict`, both reject.
    ///
    /// # Errors
    ///
    /// Returns `QueryError` only in strict mode.
    pub fn to_query(&self) -> Result<Query, QueryError> {
        let status = if self.strict {
            StatusFilter::try_from_keys(&self.statuses)?
        } else {
            StatusFilter::from_keys_lenient(&self.statuses)
        };

        let mut builder = Query::builder()
            .text(self.text.clone().unwrap_or_default())
            .category(self.category.as_deref().unwrap_or("all"))
            .status(status)
            .sort(self.sort.into());

        if let Some(min) = self.min_price {
            builder = builder.price_min(min);
        }
        if let Some(max) = self.max_price {
            builder = builder.price_max(max);
        }
        if let Some(rating) = self.min_rating {
            builder = builder.min_rating(rating);
        }

        let query = builder.build();
        if self.strict {
            // The builder has already repaired the ranges; re-check the
            // raw inputs so strict callers see the original problem
            let raw = Query {
                price_min: self.min_price,
                price_max: self.max_price,
                min_rating: self.min_rating,
                ..Query::default()
            };
            raw.validate_strict()?;
        }

        Ok(query)
    }
}

/// Subcommands for config management
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Register a catalog JSON file under a name
    Add {
        /// Name to register the catalog under
        name: String,
        /// Path to the catalog JSON file
        path: PathBuf,
    },
    /// Remove a registered catalog
    #[command(visible_alias = "rm")]
    Remove {
        /// Name of the catalog to remove
        name: String,
    },
    /// Set the default catalog
    #[command(name = "set-default")]
    SetDefault {
        /// Name of the catalog to make default
        name: String,
    },
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Search the catalog with facet filters and ranked sorting
    #[command(visible_alias = "s")]
    Search(SearchParams),

    /// List distinct categories with listing counts
    #[command(visible_alias = "cat")]
    Categories,

    /// Manage named catalogs and defaults
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Top-level CLI
#[derive(Parser, Debug)]
#[command(name = "bazr")]
#[command(about = "Search and browse marketplace listings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Catalog to use: a registered name, or a path to a JSON file
    #[arg(long = "catalog", value_name = "NAME_OR_PATH", global = true)]
    pub catalog: Option<String>,

    /// Only output result ids (scripting-friendly)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolve the catalog argument: an existing file path wins, otherwise
    /// it is treated as a registered catalog name
    ///
    /// # Errors
    ///
    /// Returns `BazrError` if no catalog can be resolved.
    pub fn resolve_catalog_path(
        &self,
        config: &crate::config::BazrConfig,
    ) -> Result<PathBuf, BazrError> {
        if let Some(value) = &self.catalog {
            let as_path = PathBuf::from(value);
            if as_path.exists() {
                return Ok(as_path);
            }
        }

        Ok(config.resolve_catalog(self.catalog.as_deref())?)
    }
}
