use std::sync::OnceLock;

use base64::Engine as _;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets"]
struct CalculatorAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON: OnceLock<String> = OnceLock::new();

/// The form stylesheet, or an empty string if it failed to embed.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| {
        let Some(file) = CalculatorAssets::get("main.css") else {
            tracing::warn!("main.css missing from embedded assets");
            return String::new();
        };
        String::from_utf8_lossy(&file.data).into_owned()
    })
}

/// The SVG window icon as a `data:` URI.
pub fn favicon_data_uri() -> &'static str {
    FAVICON.get_or_init(|| {
        let Some(file) = CalculatorAssets::get("favicon.svg") else {
            tracing::warn!("favicon.svg missing from embedded assets");
            return String::new();
        };
        let encoded = base64::engine::general_purpose::STANDARD.encode(file.data.as_ref());
        format!("data:image/svg+xml;base64,{encoded}")
    })
}
