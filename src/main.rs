#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ofdb_maps::run().await
}
