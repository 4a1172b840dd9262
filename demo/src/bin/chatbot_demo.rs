use clap::Parser;

use kagent_chatbot_client::ChatbotClient;
use kagent_chatbot_demos::scenarios::full_demo;

#[derive(Parser)]
#[command(
    name = "chatbot-demo",
    version,
    about = "Interactive walkthrough of the KAgent chatbot tools server"
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

    let client = match ChatbotClient::new(&cli.url) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    println!("Starting KAgent chatbot demo");
    println!("Make sure the tools server is running on {}", cli.url);
    println!("Press Enter to continue...");
    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        return;
    }

    if let Err(err) = full_demo::run(&client, &mut std::io::stdout()).await {
        eprintln!("Failed to write demo output: {err}");
    }
}
