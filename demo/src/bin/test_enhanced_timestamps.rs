use std::time::Duration;

use clap::Parser;

use kagent_chatbot_client::ChatbotClient;
use kagent_chatbot_demos::scenarios::timestamps;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Parser)]
#[command(
    name = "test-enhanced-timestamps",
    version,
    about = "Checks that chatbot responses carry the enriched timestamp fields"
)]
struct Cli {
    /// Tools server base URL
    #[arg(long, env = "KAGENT_TOOLS_URL", default_value = ChatbotClient::DEFAULT_URL)]
    url: String,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let client = match ChatbotClient::with_timeout(&cli.url, REQUEST_TIMEOUT) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    let mut out = std::io::stdout();
    println!("Starting enhanced timestamp tests...");

    match timestamps::run(&client, &mut out).await {
        Ok(success) => {
            if let Err(err) = timestamps::print_summary(&mut out, success) {
                eprintln!("Failed to write demo output: {err}");
            }
        }
        Err(err) => eprintln!("Failed to write demo output: {err}"),
    }
}
