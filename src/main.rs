use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    // Load DATABASE_URL from a .env file if available
    dotenvy::dotenv().ok();
    cli::run_cli(migration::Migrator).await;
}
