//! Approximate text metrics.
//!
//! Layout runs without a font stack, so every grapheme is assumed to be
//! `GLYPH_ADVANCE_EM` wide. The renderer shapes real glyphs inside the rects
//! computed from these numbers.

use unicode_segmentation::UnicodeSegmentation;

pub const GLYPH_ADVANCE_EM: f32 = 0.6;
pub const LINE_HEIGHT_EM: f32 = 1.3;

pub fn line_height(font_size: f32) -> f32 {
    font_size * LINE_HEIGHT_EM
}

pub fn measure_width(text: &str, font_size: f32, letter_spacing: f32) -> f32 {
    let n = text.graphemes(true).count() as f32;
    n * (font_size * GLYPH_ADVANCE_EM + letter_spacing)
}

/// Width of the longest word; text never breaks inside a word.
pub fn min_content_width(text: &str, font_size: f32, letter_spacing: f32) -> f32 {
    text.split_whitespace()
        .map(|w| measure_width(w, font_size, letter_spacing))
        .fold(0.0, f32::max)
}

/// Greedy word wrap. A word wider than `max_width` gets a line of its own.
pub fn wrap_lines(text: &str, font_size: f32, letter_spacing: f32, max_width: f32) -> Vec<String> {
    let space = measure_width(" ", font_size, letter_spacing);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_w = 0.0;

    for word in text.split_whitespace() {
        let w = measure_width(word, font_size, letter_spacing);
        if !current.is_empty() && current_w + space + w > max_width + 0.01 {
            lines.push(std::mem::take(&mut current));
            current_w = 0.0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_w += space;
        }
        current.push_str(word);
        current_w += w;
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
