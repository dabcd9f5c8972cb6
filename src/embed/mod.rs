use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::GameRecord;
use crate::config::Config;
use crate::Result;

/// Feature policy granted to the embedded game frame.
pub const ALLOWED_FEATURES: &[&str] = &[
    "accelerometer",
    "autoplay",
    "clipboard-write",
    "encrypted-media",
    "gyroscope",
    "picture-in-picture",
    "web-share",
];

/// The `allow` attribute for the game frame.
pub fn allow_attribute() -> String {
    ALLOWED_FEATURES.join("; ")
}

/// A minimal page that embeds the game full-bleed with the fixed permission
/// set. The game URL itself is not validated beyond being present.
pub fn embed_page(game: &GameRecord) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} - PlayHub</title>\n\
         <style>html,body{{margin:0;height:100%;background:#0a0a0a}}iframe{{width:100%;height:100%;border:none}}</style>\n\
         </head>\n\
         <body>\n\
         <iframe src=\"{src}\" allow=\"{allow}\" allowfullscreen></iframe>\n\
         </body>\n\
         </html>\n",
        title = html_escape(&game.title),
        src = html_escape(&game.iframe_url),
        allow = allow_attribute(),
    )
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn write_page(dir: &Path, game: &GameRecord) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let page_path = dir.join(format!("{}.html", game.id));
    fs::write(&page_path, embed_page(game))?;
    Ok(page_path)
}

/// Write the embed page under the app data directory and hand it to the
/// system browser.
pub fn open_in_browser(game: &GameRecord) -> Result<()> {
    let dir = Config::data_dir()?.join("embed");
    let page = write_page(&dir, game)?;

    log::info!("Opening {} in browser ({:?})", game.title, page);
    webbrowser::open(&format!("file://{}", page.display()))?;

    Ok(())
}
