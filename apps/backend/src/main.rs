#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cardbox_backend::run().await
}
