use tracing::info;

use crate::core::app::AppContext;
use crate::core::config::Config;

/// Build the context for an interactive run from the persisted config and
/// the optional `--base-url` override.
pub fn bootstrap_context(base_url: Option<&str>) -> Result<AppContext, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let ctx = AppContext::from_config(&config, base_url)?;
    info!(
        base_url = %ctx.base_url,
        theme = %ctx.theme.appearance(),
        export_dir = %ctx.chat.export_dir().display(),
        "chat context ready"
    );
    Ok(ctx)
}
