// ~/winelocale/src/registry/locale.rs

use crate::error::{Error, Result};
use crate::registry::logfont::consts::*;
use crate::settings::AppSettings;

/// The supported locales. Greek/Hebrew/Arabic are currently borked in
/// Wine's bidi handling and stay out of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    EnUs,
    JaJp,
    KoKr,
    RuRu,
    ZhCn,
    ZhTw,
}

/// Which `MS Shell Dlg` substitution block a locale selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogFamily {
    Ansi,
    ShiftJis,
    Hangul,
    Gb2312,
    ChineseBig5,
}

impl Locale {
    pub const ALL: [Locale; 6] = [
        Locale::EnUs,
        Locale::RuRu,
        Locale::JaJp,
        Locale::KoKr,
        Locale::ZhCn,
        Locale::ZhTw,
    ];

    /// ISO-style code as persisted in settings and accepted on the CLI.
    pub fn code(self) -> &'static str {
        match self {
            Locale::EnUs => "en_US",
            Locale::JaJp => "ja_JP",
            Locale::KoKr => "ko_KR",
            Locale::RuRu => "ru_RU",
            Locale::ZhCn => "zh_CN",
            Locale::ZhTw => "zh_TW",
        }
    }

    /// Name shown in pickers, in the language itself.
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::EnUs => "English",
            Locale::JaJp => "日本語",
            Locale::KoKr => "한국어",
            Locale::RuRu => "Русский",
            Locale::ZhCn => "中文(简体)",
            Locale::ZhTw => "中文(繁體)",
        }
    }

    /// The LANG value exported around the target-executable launch.
    pub fn unix_tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en_US.UTF-8",
            Locale::JaJp => "ja_JP.UTF-8",
            Locale::KoKr => "ko_KR.UTF-8",
            Locale::RuRu => "ru_RU.UTF-8",
            Locale::ZhCn => "zh_CN.UTF-8",
            Locale::ZhTw => "zh_TW.UTF-8",
        }
    }

    /// Windows charset id embedded in the LOGFONT for this locale.
    pub fn charset(self) -> u8 {
        match self {
            Locale::EnUs | Locale::RuRu => ANSI_CHARSET,
            Locale::JaJp => SHIFTJIS_CHARSET,
            Locale::KoKr => HANGUL_CHARSET,
            Locale::ZhCn => GB2312_CHARSET,
            Locale::ZhTw => CHINESEBIG5_CHARSET,
        }
    }

    /// Dialog-font substitution block this locale selects.
    pub fn dialog_family(self) -> DialogFamily {
        match self {
            Locale::EnUs | Locale::RuRu => DialogFamily::Ansi,
            Locale::JaJp => DialogFamily::ShiftJis,
            Locale::KoKr => DialogFamily::Hangul,
            Locale::ZhCn => DialogFamily::Gb2312,
            Locale::ZhTw => DialogFamily::ChineseBig5,
        }
    }

    /// Parse a locale code; anything outside the supported set fails.
    pub fn from_code(code: &str) -> Result<Locale> {
        Locale::ALL
            .iter()
            .copied()
            .find(|l| l.code() == code)
            .ok_or_else(|| Error::UnsupportedLocale(code.to_string()))
    }
}

/// Resolve a locale to its charset id and dialog-font block. Total over
/// the supported set.
pub fn resolve(locale: Locale) -> (u8, DialogFamily) {
    (locale.charset(), locale.dialog_family())
}

/// Locales usable with the fallback fonts recorded in settings. English
/// and Russian only need the Vera faces Wine ships; the East-Asian
/// locales each need their substitute families installed.
pub fn available(settings: &AppSettings) -> Vec<Locale> {
    let mut list = vec![Locale::EnUs, Locale::RuRu];
    if settings.has_umingc {
        list.push(Locale::ZhCn);
    }
    if settings.has_umingt {
        list.push(Locale::ZhTw);
    }
    if settings.has_batang && settings.has_dotum {
        list.push(Locale::KoKr);
    }
    if settings.has_kgoth && settings.has_kmin {
        list.push(Locale::JaJp);
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_and_dialog_reference_table() {
        let expected = [
            (Locale::EnUs, ANSI_CHARSET, DialogFamily::Ansi),
            (Locale::RuRu, ANSI_CHARSET, DialogFamily::Ansi),
            (Locale::JaJp, SHIFTJIS_CHARSET, DialogFamily::ShiftJis),
            (Locale::KoKr, HANGUL_CHARSET, DialogFamily::Hangul),
            (Locale::ZhCn, GB2312_CHARSET, DialogFamily::Gb2312),
            (Locale::ZhTw, CHINESEBIG5_CHARSET, DialogFamily::ChineseBig5),
        ];
        for (locale, charset, family) in expected {
            assert_eq!(resolve(locale), (charset, family), "{locale:?}");
        }
    }

    #[test]
    fn codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()).unwrap(), locale);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!(matches!(
            Locale::from_code("el_GR"),
            Err(Error::UnsupportedLocale(_))
        ));
        assert!(Locale::from_code("").is_err());
    }

    #[test]
    fn availability_follows_font_flags() {
        let mut settings = AppSettings::default();
        assert_eq!(available(&settings), vec![Locale::EnUs, Locale::RuRu]);

        settings.has_kgoth = true;
        // Japanese needs both Kochi faces.
        assert!(!available(&settings).contains(&Locale::JaJp));
        settings.has_kmin = true;
        assert!(available(&settings).contains(&Locale::JaJp));

        settings.has_umingt = true;
        assert!(available(&settings).contains(&Locale::ZhTw));
        assert!(!available(&settings).contains(&Locale::ZhCn));
    }
}
