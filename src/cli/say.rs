//! One-shot "say" command

use std::error::Error;
use std::sync::Arc;

use crate::core::app::ChatStore;
use crate::core::backend::HttpBackend;
use crate::core::config::Config;
use crate::core::session::ChatMode;

pub async fn run_say(
    prompt: Vec<String>,
    uncensored: bool,
    base_url: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        eprintln!("Usage: faceless say [--uncensored] <prompt>");
        std::process::exit(1);
    }

    let config = Config::load()?;
    let backend = HttpBackend::new(&config.resolve_base_url(base_url.as_deref()))?;
    let mut store = ChatStore::new(Arc::new(backend), config.resolve_export_dir());

    store.generate_persona().await;
    if let Some(error) = store.error() {
        eprintln!("❌ {error}");
        std::process::exit(1);
    }
    if let Some(persona) = store.current_persona() {
        eprintln!("{persona}");
    }
    if uncensored && store.current_mode() == ChatMode::Regular {
        store.toggle_mode();
    }

    match store.send_message(&prompt).await {
        Ok(response) => {
            println!("{}", response.message);
            if response.filtered == Some(true) {
                eprintln!("(this reply was filtered)");
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("❌ {}: {err}", store.error().unwrap_or("Failed to send message"));
            std::process::exit(1);
        }
    }
}
