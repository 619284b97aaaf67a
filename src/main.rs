// ~/winelocale/src/main.rs

mod cli;
mod error;
mod logging;
mod paths;
mod registry;
mod settings;
mod wine;

use crate::error::{Error, Result};
use crate::registry::locale::{self, Locale};
use crate::registry::patch::PatchOptions;
use crate::settings::AppSettings;

fn main() {
    // Enable logging at startup
    logging::init(true);
    info!("WineLocale starting");

    if let Err(e) = run() {
        error!("{e}");
        eprintln!("winelocale: {e}");
        std::process::exit(1);
    }

    info!("WineLocale exiting");
}

fn run() -> Result<()> {
    let args = cli::parse();

    let settings_path = paths::settings_path();
    let mut settings = AppSettings::load(&settings_path)?;

    // CLI locale override is validated before it touches the settings.
    if let Some(code) = &args.locale {
        Locale::from_code(code)?;
        settings.locale = code.clone();
    }
    let locale = settings.locale()?;

    // Pre-flight: the core only ever sees an existing target.
    if !args.exe.exists() {
        return Err(Error::TargetNotFound(args.exe.clone()));
    }

    if !locale::available(&settings).contains(&locale) {
        warn!(
            "Locale {} selected but its fallback fonts are not recorded as installed",
            locale.code()
        );
    }

    // Committed settings are written back right before the launch.
    settings.save(&settings_path)?;

    let font = settings.font_descriptor();
    let opts = PatchOptions {
        use_hidpi: settings.hidpifont,
        use_smoothing: settings.smoothing,
    };
    wine::run_with_locale(&args.exe, locale, &font, opts)
}
