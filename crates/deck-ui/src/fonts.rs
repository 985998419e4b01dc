//! Font setup
//!
//! egui's bundled fonts have no CJK glyphs, so a system font is added as a
//! fallback for both font families.

use std::path::{Path, PathBuf};

use deck_core::DeckError;
use egui::{Context, FontData, FontDefinitions, FontFamily};
use tracing::{info, warn};

const CJK_FONT_NAME: &str = "deck-cjk";

/// Well-known CJK font locations, tried in order
const SYSTEM_CJK_FONTS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/ipafont-gothic/ipagp.ttf",
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "C:\\Windows\\Fonts\\YuGothM.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
];

/// First existing system CJK font
pub fn find_system_cjk_font() -> Option<PathBuf> {
    SYSTEM_CJK_FONTS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// Default definitions with `font` appended as a fallback
pub fn font_definitions(font: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(CJK_FONT_NAME.to_owned(), FontData::from_owned(font));

    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_owned());
    }
    fonts
}

/// Install a CJK-capable font
///
/// A configured path must exist; without one the system locations are
/// searched. Returns the installed font, or `None` when only the bundled
/// fonts are available.
pub fn install_fonts(ctx: &Context, configured: Option<&Path>) -> Result<Option<PathBuf>, DeckError> {
    let path = match configured {
        Some(path) => path.to_path_buf(),
        None => match find_system_cjk_font() {
            Some(path) => path,
            None => {
                warn!("No CJK font found, Japanese text will not render; set font_path in the settings");
                return Ok(None);
            }
        },
    };

    let bytes = std::fs::read(&path)?;
    ctx.set_fonts(font_definitions(bytes));
    info!("Installed font {:?}", path);
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_is_fallback_for_both_families() {
        let fonts = font_definitions(vec![0u8; 4]);
        assert!(fonts.font_data.contains_key(CJK_FONT_NAME));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            let names = &fonts.families[&family];
            assert_eq!(names.last().map(String::as_str), Some(CJK_FONT_NAME));
            assert!(names.len() > 1, "bundled fonts stay first");
        }
    }

    #[test]
    fn test_missing_configured_font_is_an_error() {
        let ctx = Context::default();
        let result = install_fonts(&ctx, Some(Path::new("no/such/font.ttf")));
        assert!(matches!(result, Err(DeckError::Io(_))));
    }
}
