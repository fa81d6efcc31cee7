use clap::{Parser, Subcommand};
use healthbot_core::{
    ChatError, ChatService, ConversationEntry, CoreConfig, KnowledgeBase, Language,
    SessionStore, Speaker, EMPTY_QUESTION_WARNING, GREETING,
};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "healthbot")]
#[command(about = "Disease information chatbot CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question
    Ask {
        /// The question, e.g. "what are the symptoms of dengue"
        question: String,
        /// Reply language (en, hi, ta)
        #[arg(long, short, default_value = "en")]
        lang: Language,
    },
    /// List the topics the chatbot knows about
    Topics,
    /// List the supported reply languages
    Languages,
    /// Start an interactive conversation
    Chat {
        /// Reply language (en, hi, ta)
        #[arg(long, short, default_value = "en")]
        lang: Language,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("healthbot_core=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Ask { question, lang }) => {
            let chat = chat_service()?;
            match chat.ask(&question, lang).await {
                Ok(reply) => println!("{}", reply),
                Err(ChatError::EmptyQuestion) => eprintln!("⚠ {}", EMPTY_QUESTION_WARNING),
                Err(e) => eprintln!("Error answering question: {}", e),
            }
        }
        Some(Commands::Topics) => {
            for topic in KnowledgeBase::builtin().topics() {
                println!("{}: {}", topic.name, topic.about);
            }
        }
        Some(Commands::Languages) => {
            for lang in Language::ALL {
                println!("{}: {}", lang.code(), lang.display_name());
            }
        }
        Some(Commands::Chat { lang }) => {
            let chat = chat_service()?;
            run_chat(&chat, lang).await?;
        }
        None => {
            println!("Use 'healthbot --help' for commands");
        }
    }

    Ok(())
}

fn chat_service() -> anyhow::Result<ChatService> {
    let cfg = CoreConfig::from_lookup(|key| std::env::var(key).ok())?;
    Ok(ChatService::from_config(&cfg)?)
}

/// Interactive loop over stdin. `/history` prints the conversation so far,
/// `/quit` or end of input leaves.
async fn run_chat(chat: &ChatService, lang: Language) -> anyhow::Result<()> {
    let sessions = SessionStore::new();
    let session_id = sessions.create()?;

    println!("{}", GREETING);
    println!(
        "Replying in {}. Type /history to review, /quit to leave.",
        lang.display_name()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("You: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        match line.trim() {
            "/quit" => break,
            "/history" => {
                for entry in sessions.history(session_id).unwrap_or_default() {
                    println!("{}", render_entry(&entry));
                }
            }
            _ => match chat.ask_in_session(&sessions, session_id, &line, lang).await {
                Ok(reply) => println!(
                    "{}",
                    render_entry(&ConversationEntry {
                        speaker: Speaker::Chatbot,
                        message: reply,
                    })
                ),
                Err(ChatError::EmptyQuestion) => println!("⚠ {}", EMPTY_QUESTION_WARNING),
                Err(e) => eprintln!("Error answering question: {}", e),
            },
        }
    }

    Ok(())
}

fn render_entry(entry: &ConversationEntry) -> String {
    let icon = match entry.speaker {
        Speaker::You => "🧑",
        Speaker::Chatbot => "🤖",
    };
    format!("{} {}: {}", icon, entry.speaker, entry.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_ask_with_language() {
        let cli = Cli::try_parse_from(["healthbot", "ask", "dengue symptoms", "--lang", "ta"])
            .expect("should parse");
        match cli.command {
            Some(Commands::Ask { question, lang }) => {
                assert_eq!(question, "dengue symptoms");
                assert_eq!(lang, Language::Ta);
            }
            _ => panic!("expected ask command"),
        }
    }

    #[test]
    fn test_language_defaults_to_english() {
        let cli = Cli::try_parse_from(["healthbot", "chat"]).expect("should parse");
        assert!(matches!(
            cli.command,
            Some(Commands::Chat { lang: Language::En })
        ));
    }

    #[test]
    fn test_rejects_unsupported_language() {
        assert!(Cli::try_parse_from(["healthbot", "ask", "malaria", "-l", "fr"]).is_err());
    }

    #[test]
    fn test_render_entry() {
        let entry = ConversationEntry {
            speaker: Speaker::You,
            message: "covid prevention".into(),
        };
        assert_eq!(render_entry(&entry), "🧑 You: covid prevention");
    }
}
