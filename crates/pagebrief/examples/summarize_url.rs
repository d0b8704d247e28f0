//! Example: Summarize a webpage
//!
//! Run with: GOOGLE_API_KEY=... cargo run -p pagebrief --example summarize_url -- <URL>
//!
//! Fetches the page, prints the extracted title and a preview of the
//! visible text, then prints the model's markdown summary.

use pagebrief::{fetch, ApiConfig, Summarizer};

#[tokio::main]
async fn main() {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com".to_string());

    let page = match fetch(&url).await {
        Ok(page) => page,
        Err(e) => {
            eprintln!("Fetch failed: {e}");
            std::process::exit(1);
        }
    };

    println!("Title: {}", page.title);
    let preview = page.text.chars().take(200).collect::<String>();
    println!(
        "Text preview: {}{}\n",
        preview.replace('\n', " "),
        if page.text.len() > 200 { "..." } else { "" }
    );

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    let summarizer = match Summarizer::new(config) {
        Ok(summarizer) => summarizer,
        Err(e) => {
            eprintln!("Client error: {e}");
            std::process::exit(1);
        }
    };

    match summarizer.summarize(&page).await {
        Ok(summary) => println!("{summary}"),
        Err(e) => {
            eprintln!("Summary failed: {e}");
            std::process::exit(1);
        }
    }
}
