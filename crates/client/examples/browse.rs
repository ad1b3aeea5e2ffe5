//! Fetch the live catalog, then search and page through it.
//!
//! Run with: `cargo run -p storefront-client --example browse`
//! Point elsewhere with `STOREFRONT_API_URL`.

use anyhow::Result;
use storefront_catalog::CatalogStore;
use storefront_client::CatalogClient;
use storefront_core::{ProductSource, ViewMode};

#[tokio::main]
async fn main() -> Result<()> {
    storefront_observability::init();

    let client = CatalogClient::from_env();
    tracing::info!(base_url = client.base_url(), "fetching catalog");

    let mut store = CatalogStore::new(client.clone());
    store.fetch_items().await;

    if let Some(error) = &store.state().error {
        anyhow::bail!("catalog fetch failed: {error}");
    }

    println!(
        "{} products, {} pages, {} view",
        store.state().items.len(),
        store.total_pages(),
        store.state().view_mode.as_str(),
    );
    for product in store.paginated_items() {
        println!("  #{:<4} {} (${})", product.id, product.title, product.price);
    }

    store.set_search_query("phone");
    store.set_view_mode(ViewMode::List);
    println!(
        "\nsearch 'phone': {} matches across {} pages",
        store.filtered_items().len(),
        store.total_pages(),
    );
    for product in store.paginated_items() {
        println!("  #{:<4} {} (${})", product.id, product.title, product.price);
    }

    if let Some(id) = store.state().items.first().map(|p| p.id) {
        let product = client.fetch_product_by_id(id).await?;
        println!("\nlookup #{id}: {} [{}]", product.title, product.image);
    }

    Ok(())
}
