//! Slide and notes-slide part generation.

use crate::error::Result;
use crate::model::{
    Background, Font, NotesSlide, Paragraph, RgbColor, Shape, Slide, TextFrame, TextRun,
};
use crate::opc::namespace as ns;
use quick_xml::escape::escape;
use std::fmt::Write;

/// Root element namespace declarations shared by slide-like parts.
fn write_root_start(xml: &mut String, tag: &str) -> Result<()> {
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<{} xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        tag,
        ns::DML_MAIN,
        ns::OFC_RELATIONSHIPS,
        ns::PML_MAIN
    )?;
    Ok(())
}

/// Group-shape header every `p:spTree` starts with.
pub(crate) fn write_tree_header(xml: &mut String) {
    xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
    xml.push_str("<p:grpSpPr><a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm></p:grpSpPr>");
}

pub(crate) fn write_solid_fill(xml: &mut String, color: RgbColor) -> Result<()> {
    write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.hex())?;
    Ok(())
}

/// Generate `ppt/slides/slideN.xml`.
pub fn slide_xml(slide: &Slide) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    write_root_start(&mut xml, "p:sld")?;
    xml.push_str("<p:cSld>");

    // p:bg must precede p:spTree
    if let Some(background) = slide.background() {
        write_background(&mut xml, background)?;
    }

    xml.push_str("<p:spTree>");
    write_tree_header(&mut xml);
    for shape in &slide.shapes {
        write_shape(&mut xml, shape)?;
    }
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");
    Ok(xml)
}

/// Generate `ppt/notesSlides/notesSlideN.xml`.
pub fn notes_xml(notes: &NotesSlide) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    write_root_start(&mut xml, "p:notes")?;
    xml.push_str("<p:cSld><p:spTree>");
    write_tree_header(&mut xml);

    xml.push_str("<p:sp><p:nvSpPr>");
    xml.push_str(r#"<p:cNvPr id="2" name="Slide Image Placeholder 1"/>"#);
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1" noRot="1" noChangeAspect="1"/></p:cNvSpPr>"#);
    xml.push_str(r#"<p:nvPr><p:ph type="sldImg"/></p:nvPr>"#);
    xml.push_str("</p:nvSpPr><p:spPr/></p:sp>");

    xml.push_str("<p:sp><p:nvSpPr>");
    xml.push_str(r#"<p:cNvPr id="3" name="Notes Placeholder 2"/>"#);
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    xml.push_str(r#"<p:nvPr><p:ph type="body" idx="1"/></p:nvPr>"#);
    xml.push_str("</p:nvSpPr><p:spPr/>");
    write_text_body(&mut xml, &notes.text_frame)?;
    xml.push_str("</p:sp>");

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:notes>");
    Ok(xml)
}

fn write_background(xml: &mut String, background: &Background) -> Result<()> {
    xml.push_str("<p:bg><p:bgPr>");
    match background {
        Background::Solid(color) => write_solid_fill(xml, *color)?,
    }
    xml.push_str("<a:effectLst/></p:bgPr></p:bg>");
    Ok(())
}

fn write_shape(xml: &mut String, shape: &Shape) -> Result<()> {
    xml.push_str("<p:sp><p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{}"/>"#,
        shape.id,
        escape(shape.name.as_str())
    )?;

    match shape.placeholder {
        Some(ph) => {
            xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph"#);
            if let Some(ph_type) = ph.kind.xml_type() {
                write!(xml, r#" type="{}""#, ph_type)?;
            }
            if ph.idx != 0 {
                write!(xml, r#" idx="{}""#, ph.idx)?;
            }
            xml.push_str("/></p:nvPr>");
        }
        None => xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/>"#),
    }
    xml.push_str("</p:nvSpPr>");

    // Placeholders take their geometry from the layout.
    xml.push_str("<p:spPr/>");

    if let Some(ref frame) = shape.text_frame {
        write_text_body(xml, frame)?;
    }
    xml.push_str("</p:sp>");
    Ok(())
}

/// Write a `p:txBody`. An empty frame still carries one empty paragraph,
/// since the schema requires at least one `a:p`.
pub(crate) fn write_text_body(xml: &mut String, frame: &TextFrame) -> Result<()> {
    xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/>");
    if frame.paragraphs.is_empty() {
        xml.push_str(r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#);
    }
    for para in &frame.paragraphs {
        write_paragraph(xml, para)?;
    }
    xml.push_str("</p:txBody>");
    Ok(())
}

fn write_paragraph(xml: &mut String, para: &Paragraph) -> Result<()> {
    xml.push_str("<a:p>");

    if para.level > 0 || !para.font.is_empty() {
        xml.push_str("<a:pPr");
        if para.level > 0 {
            write!(xml, r#" lvl="{}""#, para.level)?;
        }
        if para.font.is_empty() {
            xml.push_str("/>");
        } else {
            xml.push('>');
            write_run_properties(xml, "a:defRPr", &para.font)?;
            xml.push_str("</a:pPr>");
        }
    }

    for run in &para.runs {
        write_run(xml, run)?;
    }

    if para.runs.is_empty() {
        xml.push_str(r#"<a:endParaRPr lang="en-US" dirty="0"/>"#);
    }
    xml.push_str("</a:p>");
    Ok(())
}

/// Write a run. Each `'\n'` becomes an `a:br` carrying the run's properties.
fn write_run(xml: &mut String, run: &TextRun) -> Result<()> {
    if run.text.is_empty() {
        xml.push_str("<a:r>");
        write_run_properties(xml, "a:rPr", &run.font)?;
        xml.push_str("<a:t></a:t></a:r>");
        return Ok(());
    }

    for (i, segment) in run.text.split('\n').enumerate() {
        if i > 0 {
            xml.push_str("<a:br>");
            write_run_properties(xml, "a:rPr", &run.font)?;
            xml.push_str("</a:br>");
        }
        if !segment.is_empty() {
            xml.push_str("<a:r>");
            write_run_properties(xml, "a:rPr", &run.font)?;
            write!(xml, "<a:t>{}</a:t>", escape(segment))?;
            xml.push_str("</a:r>");
        }
    }
    Ok(())
}

/// Write `a:rPr` / `a:defRPr` with the font's explicit properties.
fn write_run_properties(xml: &mut String, tag: &str, font: &Font) -> Result<()> {
    write!(xml, "<{}", tag)?;
    if tag == "a:rPr" {
        xml.push_str(r#" lang="en-US""#);
    }
    if let Some(size) = font.size {
        write!(xml, r#" sz="{}""#, size)?;
    }
    if let Some(bold) = font.bold {
        write!(xml, r#" b="{}""#, u8::from(bold))?;
    }
    if let Some(italic) = font.italic {
        write!(xml, r#" i="{}""#, u8::from(italic))?;
    }
    if tag == "a:rPr" {
        xml.push_str(r#" dirty="0""#);
    }

    match font.color {
        Some(color) => {
            xml.push('>');
            write_solid_fill(xml, color)?;
            write!(xml, "</{}>", tag)?;
        }
        None => xml.push_str("/>"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SlideLayout;

    #[test]
    fn test_slide_xml_background_before_tree() {
        let mut slide = Slide::new(256, SlideLayout::TitleAndContent);
        slide.title_mut().unwrap().set_text("Agenda");
        slide.set_solid_background(RgbColor::new(24, 26, 27));

        let xml = slide_xml(&slide).unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains(r#"<a:srgbClr val="181A1B"/>"#));
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains(r#"<p:ph idx="1"/>"#));
        assert!(xml.contains("<a:t>Agenda</a:t>"));
    }

    #[test]
    fn test_run_properties() {
        let mut para = Paragraph::new();
        para.font.set_size_pt(20);
        let run: &mut TextRun = para.add_run("Tokens & <claims>");
        run.font.set_color(RgbColor::WHITE);

        let mut xml = String::new();
        write_paragraph(&mut xml, &para).unwrap();
        assert!(xml.contains(r#"<a:pPr><a:defRPr sz="2000"/></a:pPr>"#));
        assert!(xml.contains(concat!(
            r#"<a:rPr lang="en-US" dirty="0">"#,
            r#"<a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill></a:rPr>"#
        )));
        assert!(xml.contains("<a:t>Tokens &amp; &lt;claims&gt;</a:t>"));
    }

    #[test]
    fn test_line_break_inside_paragraph() {
        let mut para = Paragraph::with_text("Presenter\nSession 1\n");
        para.runs[0].font.set_color(RgbColor::WHITE);

        let mut xml = String::new();
        write_paragraph(&mut xml, &para).unwrap();
        assert!(!xml.contains("Presenter\n"));
        assert_eq!(xml.matches("<a:br>").count(), 2);
        assert_eq!(xml.matches("<a:r>").count(), 2);
        let brk = xml.find("<a:br>").unwrap();
        assert!(xml.find("<a:t>Presenter</a:t>").unwrap() < brk);
        assert!(xml.find("<a:t>Session 1</a:t>").unwrap() > brk);
    }

    #[test]
    fn test_empty_frame_has_one_paragraph() {
        let mut xml = String::new();
        write_text_body(&mut xml, &TextFrame::new()).unwrap();
        assert_eq!(xml.matches("<a:p>").count(), 1);
    }

    #[test]
    fn test_notes_xml() {
        let mut notes = NotesSlide::new();
        notes.set_text("Outline of today's beta session for developers/devops.");
        let xml = notes_xml(&notes).unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
        assert!(xml.contains("developers/devops."));
        assert!(xml.ends_with("</p:notes>"));
    }
}
