//! Populate the database with demo restaurants, pizzas and menu entries.
//!
//! Destructive: existing rows in all three tables are removed first.

use anyhow::Context;

use pizzeria_api::config::ServerConfig;
use pizzeria_api::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    telemetry::init_tracing(config.log_format);

    let pool = pizzeria_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to connect to database")?;

    pizzeria_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Seeding demo data");
    let summary = pizzeria_db::seed::seed_demo_data(&pool)
        .await
        .context("Failed to seed demo data")?;
    tracing::info!(
        restaurants = summary.restaurants,
        pizzas = summary.pizzas,
        restaurant_pizzas = summary.restaurant_pizzas,
        "Seeding complete"
    );

    pool.close().await;
    Ok(())
}
