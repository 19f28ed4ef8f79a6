mod browse;
mod content;
mod product;

use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use atlas_client::StorefrontClient;
use atlas_core::{AppConfig, MenuPlacement, ProductFilters};

#[derive(Debug, Parser)]
#[command(name = "atlas")]
#[command(about = "Atlas Mode storefront command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show a product and resolve a design/size selection
    Product {
        id: String,
        #[arg(long)]
        design: Option<String>,
        #[arg(long)]
        size: Option<String>,
    },
    /// List products matching filters
    Products {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        title: Option<String>,
        /// Only in-stock products
        #[arg(long)]
        available: bool,
        #[arg(long)]
        min_price: Option<u64>,
        #[arg(long)]
        max_price: Option<u64>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show the home page sections
    Home,
    /// Show a navigation menu
    Menu {
        #[arg(value_enum)]
        placement: MenuArg,
    },
    /// Show the latest blog posts
    Posts,
    /// Resolve a storefront path to its page
    Route { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MenuArg {
    Header,
    Footer,
}

impl From<MenuArg> for MenuPlacement {
    fn from(arg: MenuArg) -> Self {
        match arg {
            MenuArg::Header => MenuPlacement::Header,
            MenuArg::Footer => MenuPlacement::Footer,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = atlas_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?,
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Route { path } => browse::run_route(&path),
        Commands::Product { id, design, size } => {
            let api = storefront(&config)?;
            product::run_product(api, &id, design.as_deref(), size.as_deref()).await
        }
        Commands::Products {
            category,
            color,
            size,
            title,
            available,
            min_price,
            max_price,
            page,
        } => {
            let filters = ProductFilters {
                category_id: category,
                color,
                size,
                title,
                available,
                min_price,
                max_price,
            };
            browse::run_products(storefront(&config)?, filters, page).await
        }
        Commands::Home => content::run_home(storefront(&config)?).await,
        Commands::Menu { placement } => {
            content::run_menu(storefront(&config)?, placement.into()).await
        }
        Commands::Posts => content::run_posts(storefront(&config)?).await,
    }
}

fn storefront(config: &AppConfig) -> anyhow::Result<Arc<StorefrontClient>> {
    let client = StorefrontClient::new(config)
        .map_err(|e| anyhow::anyhow!("failed to build storefront client: {e}"))?;
    tracing::debug!(env = %config.env, base_url = %config.api_base_url, "storefront client ready");
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests;
