//! Plain-text outline renderer implementation.

use crate::error::Result;
use crate::model::{Presentation, Slide, TextFrame};
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::options::RenderOptions;

/// Cut `text` to at most `max_width` display columns, ending with `…` when
/// anything was dropped. Wide (CJK) characters count as two columns.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Render a presentation as an indented slide-by-slide outline.
pub fn to_outline(prs: &Presentation, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    for (i, slide) in prs.slides.iter().enumerate() {
        render_slide(&mut output, i + 1, slide, options)?;
    }

    Ok(output.trim_end().to_string())
}

fn render_slide(
    output: &mut String,
    number: usize,
    slide: &Slide,
    options: &RenderOptions,
) -> Result<()> {
    let title = slide.title_text().replace('\n', " / ");
    let title = match options.max_title_width {
        Some(width) => truncate_to_width(&title, width),
        None => title,
    };
    writeln!(output, "{:>2}. {} [{}]", number, title, slide.layout.name())?;

    if options.include_body {
        for shape in slide.shapes.iter().filter(|s| !s.is_title()) {
            if let Some(ref frame) = shape.text_frame {
                render_frame(output, frame, options.indent)?;
            }
        }
    }

    if options.include_notes {
        let notes = slide.notes_text();
        if !notes.is_empty() {
            writeln!(
                output,
                "{:indent$}Notes: {}",
                "",
                notes.replace('\n', " "),
                indent = options.indent
            )?;
        }
    }

    Ok(())
}

fn render_frame(output: &mut String, frame: &TextFrame, indent: usize) -> Result<()> {
    for para in &frame.paragraphs {
        let text = para.text();
        if text.is_empty() {
            continue;
        }
        let pad = indent * (usize::from(para.level) + 1);
        writeln!(output, "{:pad$}{}", "", text, pad = pad)?;
    }
    Ok(())
}
