// ~/winelocale/src/registry/patch.rs

use crate::registry::fontsize;
use crate::registry::locale::{resolve, Locale};
use crate::registry::logfont::{encode, FontDescriptor};
use crate::registry::templates::{
    dialog_face, render_dword, render_multi_sz, SmoothingValue, DPI_HIGH, DPI_STANDARD,
    FONT_LINK, FONT_SUBSTITUTES, KEY_CONFIG_FONTS, KEY_DESKTOP, KEY_FONTLINK, KEY_FONTSUBS,
    KEY_WINDOW_METRICS, METRIC_FONT_VALUES, REGEDIT4_HEADER, SMOOTHING_VALUES,
};
use crate::error::Result;
use crate::info;

/// Feature toggles that shape the patch beyond locale and font.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatchOptions {
    /// Emit the 120dpi LogPixels value instead of the 96dpi one.
    pub use_hidpi: bool,
    /// Emit the font-smoothing block.
    pub use_smoothing: bool,
}

/// Compose the full REGEDIT4 patch text for one launch. Block order is
/// significant: regedit applies top to bottom, so later blocks win when
/// keys repeat.
pub fn assemble(locale: Locale, font: &FontDescriptor, opts: PatchOptions) -> Result<String> {
    let (charset, family) = resolve(locale);
    let blob = encode(charset, font)?;
    let metrics = fontsize::lookup(font.height)?;

    let mut out = String::new();
    out.push_str(REGEDIT4_HEADER);

    // Fallback font chains for the faces Wine ships.
    out.push_str(&format!("[{KEY_FONTLINK}]\n"));
    for entry in FONT_LINK {
        out.push_str(&format!(
            "\"{}\"={}\n",
            entry.face,
            render_multi_sz(entry.links)
        ));
    }
    out.push('\n');

    // Map the common Windows faces to installed equivalents.
    out.push_str(&format!("[{KEY_FONTSUBS}]\n"));
    for (from, to) in FONT_SUBSTITUTES {
        out.push_str(&format!("\"{from}\"=\"{to}\"\n"));
    }
    out.push('\n');

    // Locale-appropriate dialog face, last so it overrides the table.
    out.push_str(&format!(
        "[{KEY_FONTSUBS}]\n\"MS Shell Dlg\"=\"{}\"\n\n",
        dialog_face(family)
    ));

    // The same LOGFONT for every system font role.
    for value in METRIC_FONT_VALUES {
        out.push_str(&format!("[{KEY_WINDOW_METRICS}]\n\"{value}\"={blob}\n\n"));
    }

    // Menubar sizing has to track the font or Wine clips the labels.
    let menubar = metrics.menubar_height;
    out.push_str(&format!(
        "[{KEY_WINDOW_METRICS}]\n\"MenuHeight\"=\"{menubar}\"\n\n"
    ));
    out.push_str(&format!(
        "[{KEY_WINDOW_METRICS}]\n\"MenuWidth\"=\"{menubar}\"\n\n"
    ));

    if opts.use_smoothing {
        out.push_str(&format!("[{KEY_DESKTOP}]\n"));
        for (name, value) in SMOOTHING_VALUES {
            match value {
                SmoothingValue::Sz(s) => out.push_str(&format!("\"{name}\"=\"{s}\"\n")),
                SmoothingValue::Dword(d) => {
                    out.push_str(&format!("\"{name}\"={}\n", render_dword(*d)))
                }
            }
        }
        out.push('\n');
    }

    // Exactly one DPI block, high xor standard.
    let dpi = if opts.use_hidpi { DPI_HIGH } else { DPI_STANDARD };
    out.push_str(&format!(
        "[{KEY_CONFIG_FONTS}]\n\"LogPixels\"={}\n\n",
        render_dword(dpi)
    ));

    info!(
        "Assembled registry patch: locale={}, face='{}', {}dpi, smoothing={}",
        locale.code(),
        font.face_name,
        if opts.use_hidpi { 120 } else { 96 },
        opts.use_smoothing
    );
    Ok(out)
}
