#[tokio::main]
async fn main() {
    if let Err(err) = gm_api::run().await {
        tracing::error!(error = %err, "gm-api failed");
        std::process::exit(1);
    }
}
