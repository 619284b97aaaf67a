// ~/winelocale/src/registry/templates.rs
//
// Static material for the registry patch. The FontLink data lives here
// as structured (face, links) tables rather than opaque hex literals;
// the multi-SZ hex rendering happens at assembly time.

use crate::registry::locale::DialogFamily;

/// Patch format identifier. Wine's regedit accepts the legacy 4.x text
/// format, which keeps the file plain ASCII.
pub const REGEDIT4_HEADER: &str = "REGEDIT4\n\n";

// ---------- Registry key paths ----------

pub const KEY_FONTLINK: &str =
    "HKEY_LOCAL_MACHINE\\Software\\Microsoft\\Windows NT\\CurrentVersion\\FontLink\\SystemLink";
pub const KEY_FONTSUBS: &str =
    "HKEY_LOCAL_MACHINE\\Software\\Microsoft\\Windows NT\\CurrentVersion\\FontSubstitutes";
pub const KEY_WINDOW_METRICS: &str =
    "HKEY_CURRENT_USER\\Control Panel\\Desktop\\WindowMetrics";
pub const KEY_DESKTOP: &str = "HKEY_CURRENT_USER\\Control Panel\\Desktop";
pub const KEY_CONFIG_FONTS: &str = "HKEY_CURRENT_CONFIG\\Software\\Fonts";

// ---------- FontLink (SystemLink) ----------

/// One SystemLink value: a face name mapped to a prioritized list of
/// `file,family` fallback entries, stored as REG_MULTI_SZ.
pub struct FontLinkEntry {
    pub face: &'static str,
    pub links: &'static [&'static str],
}

pub const FONT_LINK: &[FontLinkEntry] = &[
    FontLinkEntry {
        face: "Bitstream Vera Sans",
        links: &[
            "kochi-gothic-subst.ttf,Kochi Gothic",
            "uming.ttc,AR PL UMing",
            "UnDotum.ttf,UnDotum",
        ],
    },
    FontLinkEntry {
        face: "Bitstream Vera Serif",
        links: &[
            "kochi-mincho-subst.ttf,Kochi Mincho",
            "ukai.ttc,AR PL UKai",
            "UnBatang.ttf,UnBatang",
        ],
    },
    FontLinkEntry {
        face: "Lucida Sans Unicode",
        links: &["kochi-gothic-subst.ttf,Kochi Gothic"],
    },
    FontLinkEntry {
        face: "Microsoft Sans Serif",
        links: &[
            "VeraSe.ttf,Bitstream Vera Sans",
            "kochi-gothic-subst.ttf,Kochi Gothic",
            "uming.ttc,AR PL UMing",
            "UnDotum.ttf,UnDotum",
        ],
    },
    FontLinkEntry {
        face: "MS PGothic",
        links: &["VeraSe.ttf,Bitstream Vera Sans"],
    },
    FontLinkEntry {
        face: "MS UI Gothic",
        links: &[
            "VeraSe.ttf,Bitstream Vera Sans",
            "kochi-gothic-subst.ttf,Kochi Gothic",
        ],
    },
    FontLinkEntry {
        face: "Tahoma",
        links: &[
            "VeraSe.ttf,Bitstream Vera Sans",
            "kochi-gothic-subst.ttf,Kochi Gothic",
            "uming.ttc,AR PL UMing",
            "UnDotum.ttf,UnDotum",
        ],
    },
];

// ---------- FontSubstitutes ----------

/// Windows face name → installed equivalent.
pub const FONT_SUBSTITUTES: &[(&str, &str)] = &[
    ("Arial", "Bitstream Vera Sans"),
    ("Batang", "UnBatang"),
    ("BatangChe", "UnBatang"),
    ("Dotum", "UnDotum"),
    ("DotumChe", "UnDotum"),
    ("Gulim", "UnDotum"),
    ("GulimChe", "UnDotum"),
    ("Helvetica", "Bitstream Vera Sans"),
    ("MingLiU", "AR PL UMing TW"),
    ("MS Gothic", "Kochi Gothic"),
    ("MS Mincho", "Kochi Mincho"),
    ("MS PGothic", "Kochi Gothic"),
    ("MS PMincho", "Kochi Mincho"),
    ("MS Shell Dlg 2", "Bitstream Vera Sans"),
    ("MS UI Gothic", "Bitstream Vera Sans"),
    ("PMingLiU", "AR PL UMing TW"),
    ("SimSun", "AR PL UMing CN"),
    ("Songti", "AR PL UMing CN"),
    ("Tahoma", "Bitstream Vera Sans"),
    ("Times", "Bitstream Vera Serif"),
    ("Tms Rmn", "Bitstream Vera Serif"),
];

/// The `MS Shell Dlg` face each charset family substitutes.
pub fn dialog_face(family: DialogFamily) -> &'static str {
    match family {
        DialogFamily::Ansi => "Bitstream Vera Sans",
        DialogFamily::ShiftJis => "Kochi Gothic",
        DialogFamily::Hangul => "UnDotum",
        DialogFamily::Gb2312 => "AR PL UMing CN",
        DialogFamily::ChineseBig5 => "AR PL UMing TW",
    }
}

// ---------- WindowMetrics ----------

/// All five system fonts receive the same LOGFONT blob; Wine offers no
/// per-role customization worth exposing.
pub const METRIC_FONT_VALUES: [&str; 5] = [
    "CaptionFont",
    "MenuFont",
    "MessageFont",
    "SmCaptionFont",
    "StatusFont",
];

// ---------- DPI ----------

/// LogPixels for the 120dpi "large fonts" mode.
pub const DPI_HIGH: u32 = 0x78;
/// LogPixels for the standard 96dpi mode.
pub const DPI_STANDARD: u32 = 0x60;

// ---------- Smoothing ----------

/// Control Panel\Desktop values enabling ClearType-style smoothing.
/// `FontSmoothing` is a REG_SZ, the rest are dwords.
pub const SMOOTHING_VALUES: &[(&str, SmoothingValue)] = &[
    ("FontSmoothing", SmoothingValue::Sz("2")),
    ("FontSmoothingGamma", SmoothingValue::Dword(0x0578)),
    ("FontSmoothingOrientation", SmoothingValue::Dword(0x0001)),
    ("FontSmoothingType", SmoothingValue::Dword(0x0002)),
];

pub enum SmoothingValue {
    Sz(&'static str),
    Dword(u32),
}

// ---------- Value rendering ----------

/// Render a REG_MULTI_SZ value as `hex(7):` comma-separated bytes: each
/// string NUL-terminated, with a final empty string closing the list.
pub fn render_multi_sz(strings: &[&str]) -> String {
    let mut bytes: Vec<u8> = Vec::new();
    for s in strings {
        bytes.extend_from_slice(s.as_bytes());
        bytes.push(0);
    }
    bytes.push(0);

    let mut out = String::with_capacity(7 + bytes.len() * 3);
    out.push_str("hex(7):");
    let mut first = true;
    for b in bytes {
        if !first {
            out.push(',');
        }
        out.push_str(&format!("{b:02x}"));
        first = false;
    }
    out
}

/// Render a REG_DWORD value.
pub fn render_dword(value: u32) -> String {
    format!("dword:{value:08x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_sz_single_entry() {
        // "AB\0\0"
        assert_eq!(render_multi_sz(&["AB"]), "hex(7):41,42,00,00");
    }

    #[test]
    fn multi_sz_matches_legacy_fontlink_bytes() {
        // The MS PGothic SystemLink value as it appeared in shipped
        // patches: "VeraSe.ttf,Bitstream Vera Sans" NUL NUL.
        let rendered = render_multi_sz(&["VeraSe.ttf,Bitstream Vera Sans"]);
        assert_eq!(
            rendered,
            "hex(7):56,65,72,61,53,65,2e,74,74,66,2c,42,69,74,73,74,72,65,\
61,6d,20,56,65,72,61,20,53,61,6e,73,00,00"
        );
    }

    #[test]
    fn dword_rendering() {
        assert_eq!(render_dword(DPI_HIGH), "dword:00000078");
        assert_eq!(render_dword(DPI_STANDARD), "dword:00000060");
    }

    #[test]
    fn every_family_has_a_dialog_face() {
        for family in [
            DialogFamily::Ansi,
            DialogFamily::ShiftJis,
            DialogFamily::Hangul,
            DialogFamily::Gb2312,
            DialogFamily::ChineseBig5,
        ] {
            assert!(!dialog_face(family).is_empty());
        }
    }
}
