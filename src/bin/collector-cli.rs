use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "collector-cli")]
#[command(about = "Operator CLI for the sensor collector", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5001")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the collector is up
    Status,
    /// Ask the collector to fabricate and forward readings
    Send {
        /// Fixed sensor id; a random one is generated when omitted
        #[arg(short, long)]
        sensor_id: Option<String>,

        /// How many readings to send
        #[arg(short, long, default_value_t = 1)]
        count: u32,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/", base)).send().await?;
            let status = res.status();
            let text = res.text().await?;
            if status.is_success() {
                println!("{}", text);
            } else {
                eprintln!("Error: collector returned status {}", status);
                eprintln!("Response: {}", text);
            }
        }
        Commands::Send { sensor_id, count } => {
            let body = match sensor_id {
                Some(id) => json!({ "sensor_id": id }),
                None => json!({}),
            };
            for _ in 0..count {
                let res = client
                    .post(format!("{}/send_data", base))
                    .json(&body)
                    .send()
                    .await?;
                print_response(res).await?;
            }
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    if status.is_success() {
        println!("{}", render_body(&text));
    } else {
        eprintln!("Error: collector returned status {}", status);
        eprintln!("{}", render_body(&text));
    }
    Ok(())
}

/// Pretty-print JSON bodies; anything else is shown as sent.
fn render_body(text: &str) -> String {
    if text.trim().is_empty() {
        return "<empty body>".to_string();
    }
    serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|json| serde_json::to_string_pretty(&json).ok())
        .unwrap_or_else(|| text.trim_end().to_string())
}
