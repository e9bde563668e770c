use crate::prelude::{println, *};
use chrono::Utc;
use serde_json::json;
use std::time::Duration;

use leetpush_core::daily::{
    build_message, build_payload, extract_daily, DailyEnvelope, DailyQuestion, WebhookReply,
};
use leetpush_core::format::html_to_markdown;

const DEFAULT_DOMAIN: &str = "https://leetcode.cn";
const MESSAGE_TITLE: &str = "📘 LeetCode daily question";

// Short fixed timeouts, no retries. A scheduler runs this again tomorrow.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const SEND_TIMEOUT: Duration = Duration::from_secs(8);

const DAILY_QUERY: &str = r#"
query questionOfToday {
  todayRecord {
    question {
      questionFrontendId
      titleSlug
      translatedTitle
      title
      difficulty
      translatedContent
    }
  }
}
"#;

#[derive(Debug, clap::Parser)]
#[command(name = "daily")]
#[command(about = "LeetCode daily-question operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Fetch today's question and push it to the group robot webhook
    #[clap(name = "push")]
    Push(PushOptions),

    /// Fetch today's question and print the formatted message without sending
    #[clap(name = "preview")]
    Preview(PreviewOptions),
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct PushOptions {
    /// WeCom group robot webhook URL, key included
    #[clap(long, env = "WEBHOOK_URL")]
    webhook_url: String,

    /// LeetCode domain to query
    #[arg(long, env = "LEETCODE_DOMAIN", default_value = DEFAULT_DOMAIN)]
    domain: String,

    /// Print the assembled payload as JSON after sending
    #[arg(long)]
    json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct PreviewOptions {
    /// LeetCode domain to query
    #[arg(long, env = "LEETCODE_DOMAIN", default_value = DEFAULT_DOMAIN)]
    domain: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Push(options) => push(options, global).await,
        Commands::Preview(options) => preview(options, global).await,
    }
}

async fn push(options: PushOptions, global: crate::Global) -> Result<()> {
    let question = fetch_daily(&options.domain, global.verbose).await?;
    let content = assemble_content(&question);
    let payload = build_payload(MESSAGE_TITLE, &content);

    if global.verbose {
        println!("Pushing question {} to the webhook", question.id);
    }

    let client = reqwest::Client::builder().timeout(SEND_TIMEOUT).build()?;

    let response = client
        .post(&options.webhook_url)
        .json(&payload)
        .send()
        .await
        .map_err(|e| eyre!("Failed to reach the webhook: {}", e))?;

    let reply: WebhookReply = response
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse the webhook reply: {}", e))?;

    if !reply.is_ok() {
        return Err(eyre!(
            "Webhook rejected the message: {} (errcode {})",
            reply.errmsg,
            reply.errcode
        ));
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("Pushed {} ({})", question.title, question.url);
    }

    Ok(())
}

async fn preview(options: PreviewOptions, global: crate::Global) -> Result<()> {
    let question = fetch_daily(&options.domain, global.verbose).await?;
    let content = assemble_content(&question);

    if options.json {
        let payload = build_payload(MESSAGE_TITLE, &content);
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", content);
    }

    Ok(())
}

fn assemble_content(question: &DailyQuestion) -> String {
    let body = html_to_markdown(&question.content_html);
    build_message(question, &body, Utc::now().date_naive())
}

async fn fetch_daily(domain: &str, verbose: bool) -> Result<DailyQuestion> {
    let url = format!("{domain}/graphql/");

    if verbose {
        println!("Fetching daily question from {}", url);
    }

    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;

    let response = client
        .post(&url)
        .json(&json!({ "query": DAILY_QUERY }))
        .send()
        .await
        .map_err(|e| eyre!("Failed to query {}: {}", url, e))?;

    if !response.status().is_success() {
        return Err(eyre!("Failed to query {}: HTTP {}", url, response.status()));
    }

    let envelope: DailyEnvelope = response
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse the LeetCode response: {}", e))?;

    extract_daily(envelope, domain).map_err(|e| eyre!(e))
}
