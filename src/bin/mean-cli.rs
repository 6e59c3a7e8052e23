use clap::Parser;
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "mean-cli")]
#[command(about = "Query a running random-mean service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:80")]
    url: String,

    /// Integers per upstream call (1 - 10000)
    #[arg(short, long, default_value_t = 5)]
    length: u32,

    /// Number of upstream calls (1 - 10)
    #[arg(short, long, default_value_t = 2)]
    requests: u32,

    /// Print the raw JSON response
    #[arg(long)]
    json: bool,
}

#[derive(Deserialize)]
struct Batch {
    stddev: f64,
    data: Vec<i64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/random/mean", cli.url.trim_end_matches('/')))
        .query(&[("length", cli.length), ("requests", cli.requests)])
        .send()
        .await?;

    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        eprintln!("Response: {}", text);
        std::process::exit(1);
    }

    if cli.json {
        let json: serde_json::Value = serde_json::from_str(&text)?;
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    let batches: Vec<Batch> = serde_json::from_str(&text)?;
    let total = batches.len().saturating_sub(1);
    for (i, batch) in batches.iter().enumerate() {
        let label = if i == total {
            "all".to_string()
        } else {
            format!("#{}", i + 1)
        };
        println!("{:>4}  n={:<6} stddev={:.2}", label, batch.data.len(), batch.stddev);
    }
    Ok(())
}
