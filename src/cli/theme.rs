//! Theme command: print or change the persisted theme.

use anyhow::Result;

use crate::cli::ThemeAction;
use crate::config::SiteConfig;
use crate::core::{PreferenceStore, Theme};
use crate::log;

/// Execute theme command
pub fn run_theme(action: Option<ThemeAction>, config: &SiteConfig) -> Result<()> {
    let store = PreferenceStore::new(&config.state_dir());
    let theme = apply(&store, action)?;

    match action {
        None => println!("{}", theme.as_str()),
        Some(_) => log!("theme"; "{} (saved to {})", theme.as_str(), store.path().display()),
    }
    Ok(())
}

/// Apply `action` and return the resulting theme.
fn apply(store: &PreferenceStore, action: Option<ThemeAction>) -> Result<Theme> {
    match action {
        None => Ok(store.read_theme()),
        Some(ThemeAction::Toggle) => store.toggle_theme(),
        Some(ThemeAction::Light) => store.write_theme(Theme::Light).map(|()| Theme::Light),
        Some(ThemeAction::Dark) => store.write_theme(Theme::Dark).map(|()| Theme::Dark),
    }
}
