#[tokio::main]
async fn main() {
    if let Err(e) = leadership_survey_be::start_server().await {
        tracing::error!("Server failed to start: {}", e);
        std::process::exit(1);
    }
}
