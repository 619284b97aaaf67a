// ~/winelocale/src/settings.rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::registry::logfont::consts::{CLEARTYPE_QUALITY, DEFAULT_QUALITY, FW_NORMAL};
use crate::registry::logfont::FontDescriptor;
use crate::registry::locale::Locale;
use crate::info;

/// Everything persisted in `~/.winelocalerc`: one `[settings]` section of
/// key/value strings. Booleans and the numeric font fields are stored as
/// `"0"`/`"1"`-style strings, the format the file has always used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub locale: String,
    pub gtkfontname: String,
    #[serde(with = "stringly")]
    pub gtkfontsize: u32,
    #[serde(with = "stringly")]
    pub gtkfontweight: i32,
    #[serde(with = "flag")]
    pub gtkfontitalic: bool,
    /// Desktop-shortcut creation belonged to the GUI layer; the flag is
    /// kept so existing files round-trip.
    #[serde(with = "flag")]
    pub shortcut: bool,
    #[serde(with = "flag")]
    pub smoothing: bool,
    #[serde(with = "flag")]
    pub hidpifont: bool,

    // Availability of the East-Asian fallback families.
    #[serde(with = "flag")]
    pub has_batang: bool,
    #[serde(with = "flag")]
    pub has_dotum: bool,
    #[serde(with = "flag")]
    pub has_umingt: bool,
    #[serde(with = "flag")]
    pub has_umingc: bool,
    #[serde(with = "flag")]
    pub has_kgoth: bool,
    #[serde(with = "flag")]
    pub has_kmin: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            locale: "en_US".to_string(),
            gtkfontname: "Bitstream Vera Sans".to_string(),
            gtkfontsize: 10,
            gtkfontweight: FW_NORMAL,
            gtkfontitalic: false,
            shortcut: false,
            smoothing: false,
            hidpifont: false,
            has_batang: false,
            has_dotum: false,
            has_umingt: false,
            has_umingc: false,
            has_kgoth: false,
            has_kmin: false,
        }
    }
}

/// On-disk shape: the settings live under one `[settings]` section.
#[derive(Debug, Serialize, Deserialize)]
struct SettingsFile {
    settings: AppSettings,
}

impl AppSettings {
    /// Load settings from `path`, creating the file with defaults on
    /// first run. A file that exists but does not parse is an error, not
    /// an excuse to silently discard the user's edits.
    pub fn load(path: &Path) -> Result<AppSettings> {
        if !path.exists() {
            info!("No settings at {}, creating defaults", path.display());
            let defaults = AppSettings::default();
            defaults.save(path)?;
            return Ok(defaults);
        }

        let text = std::fs::read_to_string(path)?;
        let file: SettingsFile = toml::from_str(&text)?;
        info!("Loaded settings from {}", path.display());
        Ok(file.settings)
    }

    /// Write the settings back, replacing the whole file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = SettingsFile {
            settings: self.clone(),
        };
        let text = toml::to_string(&file)?;
        std::fs::write(path, text)?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Parse the persisted locale code.
    pub fn locale(&self) -> Result<Locale> {
        Locale::from_code(&self.locale)
    }

    /// Build the font descriptor the registry core consumes. ClearType
    /// quality rides the smoothing flag.
    pub fn font_descriptor(&self) -> FontDescriptor {
        FontDescriptor {
            height: self.gtkfontsize,
            weight: self.gtkfontweight,
            italic: self.gtkfontitalic,
            quality: if self.smoothing {
                CLEARTYPE_QUALITY
            } else {
                DEFAULT_QUALITY
            },
            face_name: self.gtkfontname.clone(),
            ..FontDescriptor::default()
        }
    }
}

/// Boolean persisted as the strings "0"/"1".
mod flag {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &bool, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(if *v { "1" } else { "0" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        match String::deserialize(d)?.as_str() {
            "0" => Ok(false),
            "1" => Ok(true),
            other => Err(de::Error::custom(format!(
                "expected \"0\" or \"1\", got \"{other}\""
            ))),
        }
    }
}

/// Integer persisted as its decimal string.
mod stringly {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    pub fn serialize<T: Display, S: Serializer>(v: &T, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&v.to_string())
    }

    pub fn deserialize<'de, T, D>(d: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        String::deserialize(d)?.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("winelocalerc-test-{tag}-{}", std::process::id()))
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let path = temp_settings_path("roundtrip");
        let settings = AppSettings {
            locale: "ja_JP".to_string(),
            gtkfontname: "Kochi Gothic".to_string(),
            gtkfontsize: 12,
            gtkfontweight: 700,
            gtkfontitalic: true,
            shortcut: false,
            smoothing: true,
            hidpifont: true,
            has_batang: false,
            has_dotum: true,
            has_umingt: false,
            has_umingc: true,
            has_kgoth: true,
            has_kmin: true,
        };
        settings.save(&path).unwrap();
        let loaded = AppSettings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn flags_persist_as_zero_one_strings() {
        let path = temp_settings_path("format");
        let mut settings = AppSettings::default();
        settings.smoothing = true;
        settings.save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(text.contains("[settings]"));
        assert!(text.contains("smoothing = \"1\""));
        assert!(text.contains("hidpifont = \"0\""));
        assert!(text.contains("gtkfontsize = \"10\""));
        assert!(text.contains("gtkfontweight = \"400\""));
    }

    #[test]
    fn first_run_creates_defaults() {
        let path = temp_settings_path("firstrun");
        let _ = std::fs::remove_file(&path);
        let settings = AppSettings::load(&path).unwrap();
        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn malformed_flag_is_an_error() {
        let text = "[settings]\nlocale = \"en_US\"\ngtkfontname = \"X\"\n\
gtkfontsize = \"10\"\ngtkfontweight = \"400\"\ngtkfontitalic = \"2\"\n\
shortcut = \"0\"\nsmoothing = \"0\"\nhidpifont = \"0\"\nhas_batang = \"0\"\n\
has_dotum = \"0\"\nhas_umingt = \"0\"\nhas_umingc = \"0\"\nhas_kgoth = \"0\"\n\
has_kmin = \"0\"\n";
        assert!(toml::from_str::<SettingsFile>(text).is_err());
    }

    #[test]
    fn font_descriptor_maps_smoothing_to_cleartype() {
        let mut settings = AppSettings::default();
        assert_eq!(settings.font_descriptor().quality, DEFAULT_QUALITY);
        settings.smoothing = true;
        assert_eq!(settings.font_descriptor().quality, CLEARTYPE_QUALITY);
    }
}
