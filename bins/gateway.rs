use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    server::startup::run().await
}
