use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    todos::cli::run().await
}
