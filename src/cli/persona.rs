//! Non-interactive persona management and health check

use std::error::Error;

use crate::cli::PersonaCommands;
use crate::core::backend::{ChatBackend, HttpBackend};
use crate::core::config::Config;
use crate::core::persona::Persona;

fn connect(base_url: Option<&str>) -> Result<HttpBackend, Box<dyn Error>> {
    let config = Config::load()?;
    Ok(HttpBackend::new(&config.resolve_base_url(base_url))?)
}

pub async fn run_persona(
    command: PersonaCommands,
    base_url: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let backend = connect(base_url.as_deref())?;
    execute(&backend, command).await
}

pub(crate) async fn execute(
    backend: &dyn ChatBackend,
    command: PersonaCommands,
) -> Result<(), Box<dyn Error>> {
    match command {
        PersonaCommands::Generate => {
            let persona = backend.generate_persona().await?;
            println!("{persona}");
        }
        PersonaCommands::Add { description } => {
            let persona = backend.add_custom_persona(&description.join(" ")).await?;
            println!("✅ Added {persona}");
        }
        PersonaCommands::List => {
            let personas = backend.get_personas().await?;
            print!("{}", format_listing(&personas));
        }
        PersonaCommands::Delete { id } => {
            let message = backend.delete_persona(id).await?;
            println!("✅ {message}");
        }
    }
    Ok(())
}

pub(crate) fn format_listing(personas: &[Persona]) -> String {
    if personas.is_empty() {
        return "No personas on the server yet.\n\n💡 Create one with:\n   faceless persona add <description>\n"
            .to_string();
    }
    let mut out = String::from("Personas on the server:\n\n");
    for persona in personas {
        out.push_str(&format!("  • {persona}\n"));
    }
    out
}

pub async fn run_health(base_url: Option<String>) -> Result<(), Box<dyn Error>> {
    let backend = connect(base_url.as_deref())?;
    let health = backend.health().await?;
    println!("Backend status: {}", health.status);
    if health.chat_configured {
        println!("Chat provider: configured");
    } else {
        println!("⚠️  Chat provider: not configured (replies will fail)");
    }
    Ok(())
}
