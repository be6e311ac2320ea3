use std::fmt::Write as _;
use std::sync::Arc;

use catalog::{CategoryNode, FacetOptions, Product, location_search, parse_query_string};
use clap::{Parser, Subcommand};
use serde::Serialize;
use storefront::api::ApiError;
use storefront::api::http::HttpCatalogApi;
use storefront::config::{ConfigError, StorefrontConfig};
use storefront::services::{categories, facets, products};
use storefront::state::AppState;
use tracing_subscriber::EnvFilter;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("catalog API error: {0}")]
    Api(#[from] ApiError),
    #[error("product fetch failed: {0}")]
    ProductFetch(String),
    #[error("category load failed: {0}")]
    CategoryLoad(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Storefront catalog filtering CLI")]
struct Cli {
    /// Backend base URL; overrides `STOREFRONT_API_URL` from the environment.
    #[arg(long, env = "STOREFRONT_API_URL")]
    api_url: Option<String>,

    /// Print JSON instead of a text table.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the products matching a URL query string (all products when omitted).
    Products { query: Option<String> },
    /// Print the canonical form of a URL query string without contacting the backend.
    Normalize { query: String },
    /// Fetch the category tree.
    Categories {
        #[arg(long, default_value_t = 3)]
        depth: usize,
    },
    /// Fetch the filter panel option lists.
    Facets,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse(), StorefrontConfig::from_env).await
}

/// Dispatch one command. `load_config` is only called by commands that
/// talk to the backend.
async fn run(cli: Cli, load_config: impl FnOnce() -> Result<StorefrontConfig, ConfigError>) -> Result<(), CliError> {
    match cli.command {
        Command::Normalize { query } => run_normalize(&query, cli.json),
        Command::Products { query } => {
            let state = connect(load_config, cli.api_url.as_deref())?;
            run_products(&state, query.as_deref().unwrap_or_default(), cli.json).await
        }
        Command::Categories { depth } => {
            let state = connect(load_config, cli.api_url.as_deref())?;
            run_categories(&state, depth, cli.json).await
        }
        Command::Facets => {
            let state = connect(load_config, cli.api_url.as_deref())?;
            run_facets(&state, cli.json).await
        }
    }
}

/// Build state over the HTTP client; `api_url` overrides the configured URL.
fn connect(
    load_config: impl FnOnce() -> Result<StorefrontConfig, ConfigError>,
    api_url: Option<&str>,
) -> Result<AppState, CliError> {
    let mut config = load_config()?;
    if let Some(api_url) = api_url {
        config = config.with_api_url(api_url);
    }
    let api = HttpCatalogApi::new(&config)?;
    tracing::info!(api_url = %api.base_url(), "storefront starting");
    Ok(AppState::new(Arc::new(api)))
}

fn run_normalize(query: &str, json: bool) -> Result<(), CliError> {
    let filter = parse_query_string(query);
    if json {
        print_json(&filter)?;
    } else {
        println!("{}", location_search(&filter));
    }
    Ok(())
}

async fn run_products(state: &AppState, query: &str, json: bool) -> Result<(), CliError> {
    products::sync_from_query(state, query).await;

    let store = state.catalog.read().await;
    if let Some(message) = store.error() {
        return Err(CliError::ProductFetch(message.to_owned()));
    }
    if json {
        print_json(store.products())?;
    } else {
        print!("{}", product_table(store.products()));
        eprintln!("{} products, {} active filters", store.products().len(), store.filter().active_facet_count());
    }
    Ok(())
}

async fn run_categories(state: &AppState, depth: usize, json: bool) -> Result<(), CliError> {
    let tree = categories::load_tree(state, depth).await;
    if let Some(message) = state.categories.read().await.error(None) {
        return Err(CliError::CategoryLoad(message.to_owned()));
    }
    if json {
        print_json(&tree)?;
    } else {
        let mut out = String::new();
        write_tree(&mut out, &tree, 0);
        print!("{out}");
    }
    Ok(())
}

async fn run_facets(state: &AppState, json: bool) -> Result<(), CliError> {
    let options = facets::load_facets(state).await?;
    if json {
        print_json(&options)?;
    } else {
        print!("{}", facet_table(&options));
    }
    Ok(())
}

fn product_table(products: &[Product]) -> String {
    let mut out = String::new();
    for product in products {
        let promo = if product.has_promotion { " *" } else { "" };
        let _ = writeln!(
            out,
            "{:>6}  {:<32}  {:>10.2}{promo}  {}",
            product.id,
            product.denomination,
            product.effective_price(),
            product.category.as_deref().unwrap_or("-"),
        );
    }
    out
}

fn write_tree(out: &mut String, nodes: &[CategoryNode], depth: usize) {
    for node in nodes {
        let _ = writeln!(out, "{}{} ({})", "  ".repeat(depth), node.category.denomination, node.category.id);
        if let Some(children) = &node.children {
            write_tree(out, children, depth + 1);
        }
    }
}

fn facet_table(options: &FacetOptions) -> String {
    format!(
        "categorias: {}\ncolores: {}\ntalles: {}\n",
        join_names(options.categories.iter().map(|c| c.denomination.as_str())),
        join_names(options.colors.iter().map(|c| c.denomination.as_str())),
        join_names(options.sizes.iter().map(|s| s.denomination.as_str())),
    )
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
