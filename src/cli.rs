// ~/winelocale/src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// The non-interactive surface. The old GTK front end is gone; a missing
/// or bad argument produces a usage error instead of opening a window.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Manages locale and font settings in the Wine registry so \
pre-Unicode executables display non-Latin text correctly"
)]
pub struct Cli {
    /// Target executable to run in Wine with the chosen locale
    pub exe: PathBuf,

    /// Locale to load the target in (en_US, ru_RU, ja_JP, ko_KR, zh_CN,
    /// zh_TW); defaults to the persisted setting
    #[arg(short, long, value_name = "CODE")]
    pub locale: Option<String>,
}

pub fn parse() -> Cli {
    Cli::parse()
}
