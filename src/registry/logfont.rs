// ~/winelocale/src/registry/logfont.rs
//
// Builds the binary LOGFONT value pumped into the WindowMetrics registry
// keys. Wine stores these as REG_BINARY; we render the packed struct as a
// `hex:` byte list in the patch text.
//
// typedef struct tagLOGFONT {
//   LONG lfHeight;
//   LONG lfWidth;
//   LONG lfEscapement;
//   LONG lfOrientation;
//   LONG lfWeight;
//   BYTE lfItalic;
//   BYTE lfUnderline;
//   BYTE lfStrikeOut;
//   BYTE lfCharSet;
//   BYTE lfOutPrecision;
//   BYTE lfClipPrecision;
//   BYTE lfQuality;
//   BYTE lfPitchAndFamily;
//   TCHAR lfFaceName[LF_FACESIZE];  // 32 units max including the NUL
// } LOGFONT;

use crate::error::{Error, Result};
use crate::registry::fontsize;

/// LOGFONT field constants, as Microsoft defines them.
pub mod consts {
    #![allow(dead_code)]

    // Font weights
    pub const FW_DONTCARE: i32 = 0;
    pub const FW_THIN: i32 = 100;
    pub const FW_EXTRALIGHT: i32 = 200;
    pub const FW_LIGHT: i32 = 300;
    pub const FW_NORMAL: i32 = 400;
    pub const FW_MEDIUM: i32 = 500;
    pub const FW_SEMIBOLD: i32 = 600;
    pub const FW_BOLD: i32 = 700;
    pub const FW_EXTRABOLD: i32 = 800;
    pub const FW_HEAVY: i32 = 900;

    // Locale character sets
    pub const ANSI_CHARSET: u8 = 0;
    pub const DEFAULT_CHARSET: u8 = 1;
    pub const SYMBOL_CHARSET: u8 = 2;
    pub const SHIFTJIS_CHARSET: u8 = 128;
    pub const HANGUL_CHARSET: u8 = 129;
    pub const JOHAB_CHARSET: u8 = 130;
    pub const GB2312_CHARSET: u8 = 134;
    pub const CHINESEBIG5_CHARSET: u8 = 136;
    pub const GREEK_CHARSET: u8 = 161;
    pub const TURKISH_CHARSET: u8 = 162;
    pub const VIETNAMESE_CHARSET: u8 = 163;
    pub const BALTIC_CHARSET: u8 = 186;
    pub const RUSSIAN_CHARSET: u8 = 204;
    pub const EASTEUROPE_CHARSET: u8 = 238;
    pub const OEM_CHARSET: u8 = 255;

    // Display / clipping precision (usually 0)
    pub const OUT_DEFAULT_PRECIS: u8 = 0;
    pub const CLIP_DEFAULT_PRECIS: u8 = 0;

    // Font smoothing
    pub const DEFAULT_QUALITY: u8 = 0;
    pub const DRAFT_QUALITY: u8 = 1;
    pub const PROOF_QUALITY: u8 = 2;
    pub const NONANTIALIASED_QUALITY: u8 = 3;
    pub const ANTIALIASED_QUALITY: u8 = 4;
    pub const CLEARTYPE_QUALITY: u8 = 5;

    // Font spacing
    pub const DEFAULT_PITCH: u8 = 0;
    pub const FIXED_PITCH: u8 = 1;
    pub const VARIABLE_PITCH: u8 = 2;

    // Font family
    pub const FF_DONTCARE: u8 = 0 << 4;
    pub const FF_ROMAN: u8 = 1 << 4;
    pub const FF_SWISS: u8 = 2 << 4;
    pub const FF_MODERN: u8 = 3 << 4;
    pub const FF_SCRIPT: u8 = 4 << 4;
    pub const FF_DECORATIVE: u8 = 5 << 4;
}

use consts::*;

/// Face names are capped at 31 units plus the NUL.
const MAX_FACE_UNITS: usize = 31;

/// Wine's default WindowMetrics font values are 184 bytes, which renders
/// to 277 characters of `xx,` pairs after the `hex:` prefix. Padding to
/// this length keeps the value size independent of the face name.
const PADDED_HEX_LEN: usize = 277;

/// A logical font to be installed for one Wine session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    /// Logical point size; must be a key of the 96dpi metrics table.
    pub height: u32,
    /// 0 lets Wine derive the width from the height.
    pub width: i32,
    pub weight: i32,
    pub italic: bool,
    pub underline: bool,
    pub strikeout: bool,
    /// Carried for completeness; the encoder uses the charset id the
    /// locale policy resolves, never this field.
    pub charset: u8,
    pub out_precision: u8,
    pub clip_precision: u8,
    pub quality: u8,
    pub pitch_and_family: u8,
    /// Truncated to 31 units when encoded, never rejected.
    pub face_name: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            height: 10,
            width: 0,
            weight: FW_NORMAL,
            italic: false,
            underline: false,
            strikeout: false,
            charset: DEFAULT_CHARSET,
            out_precision: OUT_DEFAULT_PRECIS,
            clip_precision: CLIP_DEFAULT_PRECIS,
            quality: DEFAULT_QUALITY,
            pitch_and_family: VARIABLE_PITCH | FF_SWISS,
            face_name: "Bitstream Vera Sans".to_string(),
        }
    }
}

/// Pack a LOGFONT for `font` with the policy-resolved `charset` and
/// render it as a `hex:` byte list. Pure and deterministic; the output
/// length is constant regardless of the face name.
pub fn encode(charset: u8, font: &FontDescriptor) -> Result<String> {
    let metrics = fontsize::lookup(font.height)?;

    let face: String = font.face_name.chars().take(MAX_FACE_UNITS).collect();
    if let Some(ch) = face.chars().find(|c| (*c as u32) > 0xFF) {
        return Err(Error::Encoding {
            face: font.face_name.clone(),
            ch,
        });
    }

    // Five LONGs, eight BYTEs, then the face name widened to 16-bit
    // units by interleaving a NUL after every character.
    let mut packed: Vec<u8> = Vec::with_capacity(28 + face.len() * 2);
    for long in [
        -metrics.pixel_height,
        font.width,
        0, // lfEscapement
        0, // lfOrientation
        font.weight,
    ] {
        packed.extend_from_slice(&long.to_le_bytes());
    }
    packed.extend_from_slice(&[
        font.italic as u8,
        font.underline as u8,
        font.strikeout as u8,
        charset,
        font.out_precision,
        font.clip_precision,
        font.quality,
        font.pitch_and_family,
    ]);
    for ch in face.chars() {
        packed.push(ch as u8);
        packed.push(0);
    }

    let mut hex = String::with_capacity(PADDED_HEX_LEN + 2);
    hex.push_str("hex:");
    for byte in &packed {
        hex.push_str(&format!("{byte:02x},"));
    }
    // Pad out the unused face-name capacity, then close without a comma.
    while hex.len() < PADDED_HEX_LEN {
        hex.push_str("00,");
    }
    hex.push_str("00");

    Ok(hex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::fontsize::supported_sizes;

    #[test]
    fn default_font_encodes_expected_header() {
        let font = FontDescriptor::default();
        let hex = encode(ANSI_CHARSET, &font).unwrap();
        // -14 (table entry for 10pt, negated) little-endian, then width,
        // escapement, orientation all zero, then weight 400 = 0x190.
        assert!(hex.starts_with(
            "hex:f2,ff,ff,ff,00,00,00,00,00,00,00,00,00,00,00,00,90,01,00,00,"
        ));
        // Style bytes: italic/underline/strikeout 0, ANSI charset 0,
        // precisions and quality 0, pitch-and-family 0x22.
        assert!(hex[64..].starts_with("00,00,00,00,00,00,00,22,"));
    }

    #[test]
    fn output_length_is_constant() {
        let mut font = FontDescriptor::default();
        let short = encode(ANSI_CHARSET, &font).unwrap();

        font.face_name = "A".to_string();
        let one = encode(ANSI_CHARSET, &font).unwrap();

        font.face_name = "An Extremely Long Font Face Name Indeed".to_string();
        let long = encode(ANSI_CHARSET, &font).unwrap();

        assert_eq!(short.len(), 279);
        assert_eq!(one.len(), 279);
        assert_eq!(long.len(), 279);
        assert!(long.ends_with("00"));
        assert!(!long.ends_with(","));
    }

    #[test]
    fn constant_length_holds_for_every_table_size() {
        let mut font = FontDescriptor::default();
        for pt in supported_sizes() {
            font.height = pt;
            assert_eq!(encode(SHIFTJIS_CHARSET, &font).unwrap().len(), 279);
        }
    }

    #[test]
    fn encode_is_deterministic() {
        let font = FontDescriptor {
            weight: FW_BOLD,
            italic: true,
            ..FontDescriptor::default()
        };
        let a = encode(GB2312_CHARSET, &font).unwrap();
        let b = encode(GB2312_CHARSET, &font).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn long_face_names_are_truncated() {
        let mut font = FontDescriptor::default();
        font.face_name = "x".repeat(64);
        let hex = encode(ANSI_CHARSET, &font).unwrap();
        assert_eq!(hex.len(), 279);
        // 31 units survive: 28 header bytes + 31 interleaved pairs.
        let x_pairs = hex.matches("78,00").count();
        assert_eq!(x_pairs, 31);
    }

    #[test]
    fn charset_param_overrides_descriptor_field() {
        let font = FontDescriptor {
            charset: DEFAULT_CHARSET,
            ..FontDescriptor::default()
        };
        let hex = encode(CHINESEBIG5_CHARSET, &font).unwrap();
        // Byte 23 of the pack is lfCharSet: offset 4 + 23*3 in the text.
        assert_eq!(&hex[4 + 23 * 3..4 + 23 * 3 + 2], "88");
    }

    #[test]
    fn non_latin1_face_name_is_rejected() {
        let mut font = FontDescriptor::default();
        font.face_name = "Kochi ゴシック".to_string();
        match encode(SHIFTJIS_CHARSET, &font) {
            Err(Error::Encoding { ch, .. }) => assert_eq!(ch, 'ゴ'),
            other => panic!("expected Encoding error, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_height_propagates() {
        let mut font = FontDescriptor::default();
        font.height = 15;
        assert!(matches!(
            encode(ANSI_CHARSET, &font),
            Err(Error::UnsupportedFontSize(15))
        ));
    }
}
