use clap::{Parser, Subcommand};
use kalp_core::content::{catalog, Catalog, Notice};
use kalp_core::render::topic_to_text;
use kalp_core::{config::core_config_from_env_values, NarrationController, Notifier, TopicScreen};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kalp")]
#[command(about = "KalpSağlık patient education CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all topics in reading order
    List,
    /// Show a topic page
    Show {
        /// Topic id; unknown ids show the default topic
        id: String,
        /// Print the page view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Narrate a topic aloud (Ctrl-C stops)
    Speak {
        /// Topic id; unknown ids narrate the default topic
        id: String,
    },
    /// Show the patient profile
    Profile,
    /// Show pending reminders
    Reminders,
}

/// Prints notices raised during narration.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        eprintln!("{}", format_notice(&notice));
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kalp_core=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let catalog = catalog();

    match cli.command {
        Some(Commands::List) => {
            print!("{}", format_topic_list(catalog));
        }
        Some(Commands::Show { id, json }) => {
            warn_on_fallback(catalog, &id);
            if json {
                let engine = Arc::new(kalp_core::SimulatedSpeechEngine::default());
                let narration = NarrationController::new(engine, Arc::new(ConsoleNotifier));
                let screen = TopicScreen::open(catalog, Some(&id), narration);
                println!("{}", serde_json::to_string_pretty(&screen.view())?);
            } else {
                print!("{}", topic_to_text(catalog.resolve(Some(&id))));
            }
        }
        Some(Commands::Speak { id }) => {
            warn_on_fallback(catalog, &id);
            speak(catalog, &id).await?;
        }
        Some(Commands::Profile) => {
            println!("{}", format_notice(&Notice::profile()));
        }
        Some(Commands::Reminders) => {
            println!("{}", format_notice(&Notice::reminders()));
        }
        None => {
            println!("Use 'kalp --help' for commands");
        }
    }

    Ok(())
}

async fn speak(catalog: &'static Catalog, id: &str) -> anyhow::Result<()> {
    let cfg = core_config_from_env_values(
        std::env::var("KALP_SPEECH_ENGINE").ok(),
        std::env::var("KALP_SPEECH_PROGRAM").ok(),
        std::env::var("KALP_SPEECH_ARGS").ok(),
    )?;

    let narration = NarrationController::new(cfg.build_speech_engine(), Arc::new(ConsoleNotifier));
    let mut state = narration.subscribe();
    let screen = TopicScreen::open(catalog, Some(id), narration);

    println!("▶ {}", screen.topic().title);
    screen.toggle_narration().await;

    tokio::select! {
        finished = state.wait_for(|s| s.is_idle()) => {
            if finished.is_err() {
                tracing::warn!("narration state closed before the utterance ended");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            println!("⏸ Durduruldu");
        }
    }

    screen.teardown().await;
    Ok(())
}

fn warn_on_fallback(catalog: &Catalog, id: &str) {
    if catalog.get(id).is_none() {
        eprintln!(
            "Bilinmeyen konu '{id}', '{}' gösteriliyor.",
            catalog.default_topic().id
        );
    }
}

fn format_topic_list(catalog: &Catalog) -> String {
    catalog
        .topics()
        .iter()
        .enumerate()
        .map(|(i, topic)| {
            let tag = topic.tag.map(|t| format!(" [{t}]")).unwrap_or_default();
            format!(
                "{:02}  {:<10} {}{tag} ({})\n",
                i + 1,
                topic.id,
                topic.card_title,
                topic.read_time
            )
        })
        .collect()
}

fn format_notice(notice: &Notice) -> String {
    format!("{}\n\n{}\n\n[{}]", notice.title, notice.message, notice.dismiss_label)
}
