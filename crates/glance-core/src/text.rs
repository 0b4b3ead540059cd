//! Separator glyph handling for page subtitles.
//!
//! Pages hosting two actions render their texts joined by a leading bullet
//! separator; pages hosting a single action drop it. [`reformat_bullet`]
//! normalizes a subtitle either way once the final action count is known.

/// Separator glyph between a page's date anchor and its action texts.
pub const BULLET: char = '·';

/// Normalize the leading separator glyph on `text`.
///
/// With `single` set any leading glyph is removed; otherwise an existing
/// glyph is kept, normalized to the canonical form. Text without a glyph
/// never gains one here.
pub fn reformat_bullet(text: &str, single: bool) -> String {
    let trimmed = text.trim_start();
    let stripped = match trimmed.strip_prefix(['·', '•']) {
        Some(rest) => rest.trim_start(),
        None => {
            return if single {
                trimmed.to_string()
            } else {
                text.to_string()
            };
        }
    };
    if single || stripped.is_empty() {
        stripped.to_string()
    } else {
        format!("{} {}", BULLET, stripped)
    }
}
