use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    inga_cli::main_entry().await
}
