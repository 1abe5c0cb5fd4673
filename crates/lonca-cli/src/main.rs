mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lonca_core::AppConfig;
use lonca_query::SortOption;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lonca")]
#[command(about = "Browse the Lonca storefront catalog")]
struct Cli {
    /// Catalog JSON export; overrides `LONCA_CATALOG_PATH`.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Filtered, sorted product listing.
    List {
        /// Case-insensitive match on product or vendor name.
        #[arg(long, short)]
        query: Option<String>,
        /// Vendor to include; repeat for several.
        #[arg(long = "vendor")]
        vendors: Vec<String>,
        #[arg(long)]
        min_price: Option<f64>,
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(long, default_value_t = SortOption::PriceAsc)]
        sort: SortOption,
    },
    /// Product detail with its color variants and related products.
    Show { id: String },
    /// Color variants in the family of a product code.
    Colors { product_code: String },
    /// Products with exactly this code, excluding one id.
    Related {
        product_code: String,
        #[arg(long, default_value = "")]
        exclude: String,
    },
    /// Vendor directory.
    Vendors {
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Products of one vendor, by slug.
    Vendor { slug: String },
    /// Vendor facet and max price for filter controls.
    Facets,
}

/// The `--catalog` flag wins; otherwise the configured `LONCA_CATALOG_PATH`
/// (or its default) is used.
fn resolve_catalog_path(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.unwrap_or_else(|| config.catalog_path.clone())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = lonca_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog_path = resolve_catalog_path(cli.catalog, &config);
    tracing::debug!(env = %config.env, path = %catalog_path.display(), "using catalog");
    let store = lonca_catalog::CatalogStore::new(lonca_catalog::JsonFileSource::new(catalog_path));

    match cli.command {
        Some(Commands::List {
            query,
            vendors,
            min_price,
            max_price,
            sort,
        }) => commands::run_list(
            &store,
            &config,
            &commands::ListArgs {
                query,
                vendors,
                min_price,
                max_price,
                sort,
            },
        ),
        Some(Commands::Show { id }) => commands::run_show(&store, &id),
        Some(Commands::Colors { product_code }) => commands::run_colors(&store, &product_code),
        Some(Commands::Related {
            product_code,
            exclude,
        }) => commands::run_related(&store, &product_code, &exclude),
        Some(Commands::Vendors { query }) => commands::run_vendors(&store, query.as_deref()),
        Some(Commands::Vendor { slug }) => commands::run_vendor(&store, &slug),
        Some(Commands::Facets) => commands::run_facets(&store, &config),
        None => {
            let response = store.load_catalog();
            println!("lonca catalog ready: {} products", response.total);
            Ok(())
        }
    }
}
