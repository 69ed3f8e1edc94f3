use lorecrawl::commands::command_argument_builder;
use lorecrawl::handlers::handle_scan;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let matches = command_argument_builder().get_matches();

    if let Err(e) = handle_scan(&matches).await {
        eprintln!("✗ {e:#}");
        std::process::exit(1);
    }
}
