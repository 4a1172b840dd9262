use std::time::Duration;

use clap::Parser;

use kagent_chatbot_client::ChatbotClient;
use kagent_chatbot_demos::scenarios::smoke;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Parser)]
#[command(
    name = "test-chatbot",
    version,
    about = "Smoke test for the KAgent chatbot tools server"
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

    if let Err(err) = smoke::run(&client, &mut std::io::stdout()).await {
        eprintln!("Failed to write demo output: {err}");
    }
}
