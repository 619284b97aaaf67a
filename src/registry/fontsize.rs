// ~/winelocale/src/registry/fontsize.rs

use crate::error::{Error, Result};

/// Device metrics for one logical point size at 96dpi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Glyph cell height in pixels. Negated when packed into a LOGFONT.
    pub pixel_height: i32,
    /// Menubar height Wine draws for this font size. GTK and Wine do not
    /// agree on sizing, so the pairing is hand-calibrated.
    pub menubar_height: u32,
}

// 96dpi table (default). Calibrated against Wine's menubar rendering;
// this has nothing to do with the Wine dpi registry setting.
static TABLE_96: [(u32, FontMetrics); 10] = [
    (6, FontMetrics { pixel_height: 9, menubar_height: 15 }),
    (7, FontMetrics { pixel_height: 10, menubar_height: 17 }),
    (8, FontMetrics { pixel_height: 11, menubar_height: 18 }),
    (9, FontMetrics { pixel_height: 13, menubar_height: 20 }),
    (10, FontMetrics { pixel_height: 14, menubar_height: 22 }),
    (11, FontMetrics { pixel_height: 15, menubar_height: 23 }),
    (12, FontMetrics { pixel_height: 16, menubar_height: 24 }),
    (13, FontMetrics { pixel_height: 18, menubar_height: 27 }),
    (14, FontMetrics { pixel_height: 20, menubar_height: 28 }),
    (16, FontMetrics { pixel_height: 22, menubar_height: 31 }),
];

/// Look up the 96dpi metrics for a logical point size. Sizes outside the
/// calibrated set are a configuration bug and must fail loudly rather
/// than let a bad default reach the registry.
pub fn lookup(points: u32) -> Result<FontMetrics> {
    TABLE_96
        .iter()
        .find(|(pt, _)| *pt == points)
        .map(|(_, m)| *m)
        .ok_or(Error::UnsupportedFontSize(points))
}

/// Point sizes the table knows about, for UI pickers and validation.
pub fn supported_sizes() -> impl Iterator<Item = u32> {
    TABLE_96.iter().map(|(pt, _)| *pt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_size_metrics() {
        let m = lookup(10).unwrap();
        assert_eq!(m.pixel_height, 14);
        assert_eq!(m.menubar_height, 22);
    }

    #[test]
    fn all_supported_sizes_resolve() {
        for pt in supported_sizes() {
            assert!(lookup(pt).is_ok(), "size {pt} missing from table");
        }
    }

    #[test]
    fn unsupported_size_is_an_error() {
        assert!(matches!(lookup(15), Err(Error::UnsupportedFontSize(15))));
        assert!(matches!(lookup(0), Err(Error::UnsupportedFontSize(0))));
    }
}
