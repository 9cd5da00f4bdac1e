// Mind Companion terminal entry point.
// Owns the conversation and feeds each line through the pipeline.

use anyhow::Context;
use mind_companion_core::logging::init_tracing;
use mind_companion_core::{AppConfig, AppError, ChatPipeline, ChatRequest, ChatResult, Conversation};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

const HELP: &str = "Commands: /reset clears the conversation, /json toggles raw output, /quit exits.";

fn render(result: &ChatResult) -> String {
    let mut out = format!("\n{}\n", result.message);

    if let Some(exercise) = &result.exercise {
        out.push_str(&format!(
            "\nTry this: {}\n  {}\n  ({})\n",
            exercise.name, exercise.description, exercise.benefit
        ));
    }

    if let Some(bundle) = &result.resources {
        out.push_str(&format!("\n{}\n", bundle.message));
        for resource in &bundle.resources {
            let reach = resource
                .contact
                .or(resource.helpline)
                .or(resource.website)
                .or(resource.author)
                .unwrap_or("");
            out.push_str(&format!("  - {}: {}\n", resource.name, reach));
        }
    }

    out
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    init_tracing(config.log_format)?;

    let pipeline = ChatPipeline::from_config(&config);
    let mut conversation = Conversation::new();
    let mut raw_json = false;
    info!(
        session = %conversation.id,
        generation = pipeline.has_backend(),
        "Session started"
    );

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(format!("{}\n{}\n\n> ", pipeline.greeting(), HELP).as_bytes())
        .await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let output = match line.trim() {
            "/quit" | "/exit" => break,
            "/reset" => {
                conversation.reset();
                info!(session = %conversation.id, "Conversation reset");
                format!("Conversation reset.\n\n{}\n", pipeline.greeting())
            }
            "/json" => {
                raw_json = !raw_json;
                format!("Raw output {}.\n", if raw_json { "on" } else { "off" })
            }
            _ => match ChatRequest::parse(&line) {
                Ok(request) => {
                    let result = pipeline.process(&request.message, conversation.turns()).await;
                    conversation.push_user(request.message);
                    conversation.push_assistant(result.message.clone());
                    if raw_json {
                        format!("{}\n", serde_json::to_string_pretty(&result).map_err(AppError::from)?)
                    } else {
                        render(&result)
                    }
                }
                Err(e) => {
                    warn!("Rejected input: {}", e);
                    "Please type a message.\n".to_string()
                }
            },
        };

        stdout.write_all(format!("{}\n> ", output).as_bytes()).await?;
        stdout.flush().await?;
    }

    info!(session = %conversation.id, turns = conversation.len(), "Session ended");
    Ok(())
}
