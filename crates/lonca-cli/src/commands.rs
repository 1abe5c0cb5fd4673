//! Command handlers for the CLI.
//!
//! Each handler queries the catalog store and prints pretty JSON to stdout.
//! Store queries never fail; only a missing product in `show` is reported
//! as an error.

use lonca_catalog::{filter_vendor_summaries, CatalogSource, CatalogStore};
use lonca_core::{AppConfig, Product, ProductColor};
use lonca_query::{ListingState, SortOption};
use serde::Serialize;

#[derive(Debug)]
pub(crate) struct ListArgs {
    pub query: Option<String>,
    pub vendors: Vec<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: SortOption,
}

#[derive(Debug, Serialize)]
struct ProductDetail {
    display_name: String,
    pack_price: Option<f64>,
    product: Product,
    colors: Vec<ProductColor>,
    related: Vec<Product>,
}

#[derive(Debug, Serialize)]
struct Facets {
    vendors: Vec<String>,
    max_price: f64,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Builds the listing for the loaded catalog: filters start from a reset
/// (every vendor, `0..=max_price`) and `args` are layered on top, the same
/// way a listing screen applies user input.
pub(crate) fn build_listing<S: CatalogSource>(
    store: &CatalogStore<S>,
    config: &AppConfig,
    args: &ListArgs,
) -> ListingState {
    let mut listing = ListingState::with_fallback_max_price(config.default_max_price);
    listing.replace_products(store.load_catalog().products);
    listing.reset_filters();

    let criteria = listing.criteria_mut();
    if let Some(query) = &args.query {
        criteria.search_query.clone_from(query);
    }
    for vendor in &args.vendors {
        if !criteria.selected_vendors.contains(vendor) {
            criteria.toggle_vendor(vendor);
        }
    }
    if let Some(min) = args.min_price {
        criteria.price_range.min = min;
    }
    if let Some(max) = args.max_price {
        criteria.price_range.max = max;
    }
    criteria.sort_option = args.sort;
    listing
}

pub(crate) fn run_list<S: CatalogSource>(
    store: &CatalogStore<S>,
    config: &AppConfig,
    args: &ListArgs,
) -> anyhow::Result<()> {
    let listing = build_listing(store, config, args);
    let view = listing.view();
    tracing::info!(
        shown = view.len(),
        total = listing.products().len(),
        sort = %listing.criteria().sort_option,
        "listing"
    );
    print_json(&view)
}

pub(crate) fn run_show<S: CatalogSource>(store: &CatalogStore<S>, id: &str) -> anyhow::Result<()> {
    let product = store
        .get_product_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("product '{id}' not found"))?;

    let detail = ProductDetail {
        display_name: product.display_name().to_string(),
        pack_price: product.is_pack().then(|| product.pack_price()),
        colors: store.get_product_colors(&product.product_code),
        related: store.get_related_products(&product.product_code, &product.id),
        product,
    };
    print_json(&detail)
}

pub(crate) fn run_colors<S: CatalogSource>(
    store: &CatalogStore<S>,
    product_code: &str,
) -> anyhow::Result<()> {
    print_json(&store.get_product_colors(product_code))
}

pub(crate) fn run_related<S: CatalogSource>(
    store: &CatalogStore<S>,
    product_code: &str,
    exclude_id: &str,
) -> anyhow::Result<()> {
    print_json(&store.get_related_products(product_code, exclude_id))
}

pub(crate) fn run_vendors<S: CatalogSource>(
    store: &CatalogStore<S>,
    query: Option<&str>,
) -> anyhow::Result<()> {
    let summaries = store.vendor_summaries();
    let summaries = match query {
        Some(q) => filter_vendor_summaries(&summaries, q),
        None => summaries,
    };
    print_json(&summaries)
}

pub(crate) fn run_vendor<S: CatalogSource>(
    store: &CatalogStore<S>,
    slug: &str,
) -> anyhow::Result<()> {
    let products = store.products_by_vendor(slug);
    if products.is_empty() {
        tracing::warn!(slug, "no products for vendor");
    }
    print_json(&products)
}

pub(crate) fn run_facets<S: CatalogSource>(
    store: &CatalogStore<S>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let products = store.load_catalog().products;
    let facets = Facets {
        vendors: lonca_query::compute_vendor_facet(&products),
        max_price: lonca_query::compute_max_price_or(&products, config.default_max_price),
    };
    print_json(&facets)
}
