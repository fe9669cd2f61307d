//! PPTX parser implementation.

use crate::container::OoxmlContainer;
use crate::error::{Error, Result};
use crate::model::{
    Background, Emu, Font, NotesSlide, Paragraph, Placeholder, PlaceholderKind, Presentation,
    RgbColor, Shape, Slide, SlideLayout, SlideSize, TextFrame, TextRun,
};
use crate::opc::relationship_type as rt;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Slide reference from `p:sldIdLst`.
#[derive(Debug, Clone)]
struct SlideRef {
    id: u32,
    rel_id: String,
}

/// Parser for PPTX (PowerPoint) presentations.
pub struct PptxParser {
    container: OoxmlContainer,
}

/// Read an attribute value by qualified name.
fn attr(e: &BytesStart, key: &[u8]) -> Result<Option<String>> {
    for a in e.attributes().flatten() {
        if a.key.as_ref() == key {
            let value = a
                .unescape_value()
                .map_err(|e| Error::XmlParse(e.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn parse_number<T: std::str::FromStr>(value: Option<String>, what: &str) -> Result<Option<T>> {
    value
        .map(|v| {
            v.parse::<T>()
                .map_err(|_| Error::InvalidData(format!("invalid {}: {}", what, v)))
        })
        .transpose()
}

/// Which font a nested `a:srgbClr` belongs to while walking a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FontTarget {
    Paragraph,
    Run,
}

/// Incremental state for walking the shape tree of a slide-like part.
#[derive(Debug, Default)]
struct ShapeTreeState {
    shapes: Vec<Shape>,
    background: Option<Background>,
    current: Option<Shape>,
    font_target: Option<FontTarget>,
    in_background: bool,
    in_text: bool,
    /// Inside an `a:br`, whose properties are not kept.
    in_break: bool,
    /// The next `a:r` continues the run before the last `a:br`.
    merge_next: bool,
}

impl ShapeTreeState {
    fn frame_mut(&mut self) -> Option<&mut TextFrame> {
        self.current.as_mut().and_then(|s| s.text_frame.as_mut())
    }

    fn paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        self.frame_mut().and_then(|f| f.paragraphs.last_mut())
    }

    fn run_mut(&mut self) -> Option<&mut TextRun> {
        self.paragraph_mut().and_then(|p| p.runs.last_mut())
    }

    fn font_mut(&mut self) -> Option<&mut Font> {
        match self.font_target? {
            FontTarget::Paragraph => self.paragraph_mut().map(|p| &mut p.font),
            FontTarget::Run => self.run_mut().map(|r| &mut r.font),
        }
    }

    /// Handle a start or empty element. `empty` elements have no children.
    fn open(&mut self, e: &BytesStart, empty: bool) -> Result<()> {
        match e.name().local_name().as_ref() {
            b"bg" => self.in_background = !empty,
            b"sp" if !empty => {
                self.current = Some(Shape {
                    id: 0,
                    name: String::new(),
                    placeholder: None,
                    text_frame: None,
                });
            }
            b"cNvPr" => {
                let id = parse_number(attr(e, b"id")?, "shape id")?;
                let name = attr(e, b"name")?;
                if let Some(shape) = self.current.as_mut() {
                    shape.id = id.unwrap_or_default();
                    shape.name = name.unwrap_or_default();
                }
            }
            b"ph" => {
                let kind = PlaceholderKind::from_xml_type(attr(e, b"type")?.as_deref());
                let idx = parse_number(attr(e, b"idx")?, "placeholder idx")?.unwrap_or(0);
                if let Some(shape) = self.current.as_mut() {
                    shape.placeholder = Some(Placeholder::new(kind, idx));
                }
            }
            b"txBody" => {
                if let Some(shape) = self.current.as_mut() {
                    shape.text_frame = Some(TextFrame::new());
                }
            }
            b"p" => {
                self.merge_next = false;
                if let Some(frame) = self.frame_mut() {
                    frame.paragraphs.push(Paragraph::new());
                }
            }
            b"pPr" => {
                let level = parse_number(attr(e, b"lvl")?, "paragraph level")?;
                if let Some(para) = self.paragraph_mut() {
                    para.level = level.unwrap_or(0);
                }
            }
            b"r" if !empty => {
                if std::mem::take(&mut self.merge_next) {
                    return Ok(());
                }
                if let Some(para) = self.paragraph_mut() {
                    para.runs.push(TextRun::default());
                }
            }
            b"br" => {
                self.in_break = !empty;
                self.line_break();
            }
            b"rPr" if self.in_break => {}
            b"defRPr" | b"rPr" => {
                let target = if e.name().local_name().as_ref() == b"rPr" {
                    FontTarget::Run
                } else {
                    FontTarget::Paragraph
                };
                self.font_target = Some(target);
                let size = parse_number(attr(e, b"sz")?, "font size")?;
                let bold = attr(e, b"b")?.map(|v| v == "1" || v == "true");
                let italic = attr(e, b"i")?.map(|v| v == "1" || v == "true");
                if let Some(font) = self.font_mut() {
                    font.size = size;
                    font.bold = bold;
                    font.italic = italic;
                }
                if empty {
                    self.font_target = None;
                }
            }
            b"srgbClr" => {
                let color = attr(e, b"val")?
                    .map(|v| {
                        RgbColor::from_hex(&v)
                            .ok_or_else(|| Error::InvalidData(format!("invalid color: {}", v)))
                    })
                    .transpose()?;
                if let Some(color) = color {
                    if self.font_target.is_some() {
                        if let Some(font) = self.font_mut() {
                            font.color = Some(color);
                        }
                    } else if self.in_background && self.background.is_none() {
                        self.background = Some(Background::Solid(color));
                    }
                }
            }
            b"t" if !empty => self.in_text = true,
            _ => {}
        }
        Ok(())
    }

    fn close(&mut self, local_name: &[u8]) {
        match local_name {
            b"bg" => self.in_background = false,
            b"sp" => {
                if let Some(shape) = self.current.take() {
                    self.shapes.push(shape);
                }
            }
            b"txBody" => {
                // Writers emit a lone empty paragraph for an empty frame.
                if let Some(frame) = self.frame_mut() {
                    if let [only] = frame.paragraphs.as_slice() {
                        if *only == Paragraph::default() {
                            frame.paragraphs.clear();
                        }
                    }
                }
            }
            b"defRPr" | b"rPr" => self.font_target = None,
            b"br" => self.in_break = false,
            b"t" => self.in_text = false,
            _ => {}
        }
    }

    /// Fold an `a:br` into the last run as `'\n'`.
    fn line_break(&mut self) {
        let Some(para) = self.paragraph_mut() else {
            return;
        };
        if para.runs.is_empty() {
            para.runs.push(TextRun::default());
        }
        if let Some(run) = para.runs.last_mut() {
            run.text.push('\n');
        }
        self.merge_next = true;
    }

    fn text(&mut self, text: &str) {
        if self.in_text {
            if let Some(run) = self.run_mut() {
                run.text.push_str(text);
            }
        }
    }
}

/// Walk a slide or notes part, collecting its shapes and background.
fn parse_shape_tree(xml: &str) -> Result<(Vec<Shape>, Option<Background>)> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut state = ShapeTreeState::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => state.open(&e, false)?,
            Event::Empty(e) => state.open(&e, true)?,
            Event::End(e) => state.close(e.name().local_name().as_ref()),
            Event::Text(e) => {
                let text = e.unescape().map_err(|e| Error::XmlParse(e.to_string()))?;
                state.text(&text);
            }
            Event::CData(e) => state.text(&String::from_utf8_lossy(&e)),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok((state.shapes, state.background))
}

impl PptxParser {
    /// Open a PPTX file for parsing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            container: OoxmlContainer::open(path)?,
        })
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Ok(Self {
            container: OoxmlContainer::from_bytes(data)?,
        })
    }

    /// Parse the package into a presentation model.
    pub fn parse(&self) -> Result<Presentation> {
        let pkg_rels = self.container.read_package_relationships()?;
        let pres_path = pkg_rels
            .first_of_type(rt::OFFICE_DOCUMENT)
            .map(|r| OoxmlContainer::resolve_path("", &r.target))
            .ok_or_else(|| Error::MissingComponent("officeDocument relationship".to_string()))?;

        let pres_xml = self.container.read_xml(&pres_path)?;
        let (slide_size, slide_refs) = Self::parse_presentation(&pres_xml)?;
        let pres_rels = self.container.read_relationships(&pres_path)?;

        let mut prs = Presentation::new();
        prs.set_slide_size(slide_size);
        prs.metadata = self.container.parse_core_metadata()?;

        for slide_ref in &slide_refs {
            let target = pres_rels
                .get(&slide_ref.rel_id)
                .ok_or_else(|| Error::MissingComponent(format!("slide {}", slide_ref.rel_id)))?;
            let slide_path = OoxmlContainer::resolve_path(&pres_path, &target.target);
            prs.slides.push(self.parse_slide(slide_ref.id, &slide_path)?);
        }

        log::debug!("parsed {} slides from {}", prs.slide_count(), pres_path);
        Ok(prs)
    }

    /// Parse `p:sldSz` and `p:sldIdLst` from presentation.xml.
    fn parse_presentation(xml: &str) -> Result<(SlideSize, Vec<SlideRef>)> {
        let mut reader = quick_xml::Reader::from_str(xml);
        let mut size = SlideSize::default();
        let mut slides = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) | Event::Empty(e) => match e.name().local_name().as_ref() {
                    b"sldSz" => {
                        if let Some(cx) = parse_number::<i64>(attr(&e, b"cx")?, "slide width")? {
                            size.width = Emu(cx);
                        }
                        if let Some(cy) = parse_number::<i64>(attr(&e, b"cy")?, "slide height")? {
                            size.height = Emu(cy);
                        }
                    }
                    b"sldId" => {
                        let id = parse_number(attr(&e, b"id")?, "slide id")?.unwrap_or_default();
                        if let Some(rel_id) = attr(&e, b"r:id")? {
                            slides.push(SlideRef { id, rel_id });
                        }
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        Ok((size, slides))
    }

    fn parse_slide(&self, id: u32, slide_path: &str) -> Result<Slide> {
        let rels = self.container.read_relationships(slide_path)?;

        let layout = match rels.first_of_type(rt::SLIDE_LAYOUT) {
            Some(r) => {
                let layout_path = OoxmlContainer::resolve_path(slide_path, &r.target);
                self.parse_layout_name(&layout_path)?
                    .and_then(|name| SlideLayout::from_name(&name))
                    .unwrap_or_else(|| {
                        log::warn!("{}: unrecognised layout, assuming default", slide_path);
                        SlideLayout::default()
                    })
            }
            None => SlideLayout::default(),
        };

        let xml = self.container.read_xml(slide_path)?;
        let (shapes, background) = parse_shape_tree(&xml)?;

        let notes = match rels.first_of_type(rt::NOTES_SLIDE) {
            Some(r) => {
                let notes_path = OoxmlContainer::resolve_path(slide_path, &r.target);
                Some(self.parse_notes(&notes_path)?)
            }
            None => None,
        };

        Ok(Slide {
            id,
            layout,
            shapes,
            background,
            notes,
        })
    }

    /// Read `p:cSld/@name` of a layout part.
    fn parse_layout_name(&self, layout_path: &str) -> Result<Option<String>> {
        let xml = self.container.read_xml(layout_path)?;
        let mut reader = quick_xml::Reader::from_str(&xml);
        loop {
            match reader.read_event()? {
                Event::Start(e) | Event::Empty(e) if e.name().local_name().as_ref() == b"cSld" => {
                    return attr(&e, b"name");
                }
                Event::Eof => return Ok(None),
                _ => {}
            }
        }
    }

    /// Parse a notes page, keeping the text of its body placeholder.
    fn parse_notes(&self, notes_path: &str) -> Result<NotesSlide> {
        let xml = self.container.read_xml(notes_path)?;
        let (shapes, _) = parse_shape_tree(&xml)?;
        let text_frame = shapes
            .into_iter()
            .find(|s| s.placeholder.is_some_and(|ph| ph.kind == PlaceholderKind::Body))
            .and_then(|s| s.text_frame)
            .unwrap_or_default();
        Ok(NotesSlide { text_frame })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shape_tree() {
        let xml = r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld>
            <p:bg><p:bgPr><a:solidFill><a:srgbClr val="181A1B"/></a:solidFill></p:bgPr></p:bg>
            <p:spTree>
              <p:nvGrpSpPr><p:cNvPr id="1" name=""/></p:nvGrpSpPr>
              <p:sp>
                <p:nvSpPr>
                  <p:cNvPr id="2" name="Title 1"/><p:nvPr><p:ph type="title"/></p:nvPr>
                </p:nvSpPr>
                <p:txBody><a:p><a:r>
                  <a:rPr lang="en-US"><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill></a:rPr>
                  <a:t>Demo &amp; Q&apos;A</a:t>
                </a:r></a:p></p:txBody>
              </p:sp>
              <p:sp>
                <p:nvSpPr>
                  <p:cNvPr id="3" name="Content Placeholder 2"/><p:nvPr><p:ph idx="1"/></p:nvPr>
                </p:nvSpPr>
                <p:txBody><a:p>
                  <a:pPr lvl="1"><a:defRPr sz="2000"/></a:pPr>
                  <a:r><a:rPr lang="en-US"/><a:t>first</a:t></a:r>
                </a:p></p:txBody>
              </p:sp>
            </p:spTree></p:cSld></p:sld>"#;

        let (shapes, background) = parse_shape_tree(xml).unwrap();
        assert_eq!(background, Some(Background::Solid(RgbColor::new(24, 26, 27))));
        assert_eq!(shapes.len(), 2);

        let title = &shapes[0];
        assert!(title.is_title());
        assert_eq!(title.text(), "Demo & Q'A");
        let run = &title.text_frame.as_ref().unwrap().paragraphs[0].runs[0];
        assert_eq!(run.font.color, Some(RgbColor::WHITE));

        let body = &shapes[1];
        assert_eq!(body.placeholder, Some(Placeholder::new(PlaceholderKind::Content, 1)));
        let para = &body.text_frame.as_ref().unwrap().paragraphs[0];
        assert_eq!(para.level, 1);
        assert_eq!(para.font.size, Some(2000));
        assert_eq!(para.runs[0].font.color, None);
    }

    #[test]
    fn test_line_breaks_join_runs() {
        let xml = r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld><p:spTree>
              <p:sp>
                <p:nvSpPr><p:cNvPr id="2" name="Body"/><p:nvPr><p:ph idx="1"/></p:nvPr></p:nvSpPr>
                <p:txBody>
                  <a:p><a:r><a:t>one</a:t></a:r><a:br/><a:r><a:t>two</a:t></a:r></a:p>
                  <a:p><a:br><a:rPr sz="900"/></a:br><a:r><a:t>three</a:t></a:r></a:p>
                </p:txBody>
              </p:sp>
            </p:spTree></p:cSld></p:sld>"#;

        let (shapes, _) = parse_shape_tree(xml).unwrap();
        let frame = shapes[0].text_frame.as_ref().unwrap();
        assert_eq!(frame.paragraphs.len(), 2);
        assert_eq!(frame.paragraphs[0].runs.len(), 1);
        assert_eq!(frame.paragraphs[0].text(), "one\ntwo");
        assert_eq!(frame.paragraphs[1].text(), "\nthree");
        assert_eq!(frame.paragraphs[1].runs[0].font.size, None);
    }

    #[test]
    fn test_line_break_round_trip() {
        let mut prs = Presentation::new();
        let slide = prs.add_slide(SlideLayout::TitleAndContent);
        let frame = slide
            .placeholder_mut(1)
            .and_then(|s| s.text_frame.as_mut())
            .unwrap();
        frame.clear();
        let para = frame.add_paragraph();
        para.set_text("line one\nline two\n");
        para.font.set_size_pt(20);
        slide.recolor_text(RgbColor::WHITE);

        let parsed = PptxParser::from_bytes(prs.to_bytes().unwrap())
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(parsed, prs);
        let body = parsed.slides[0].placeholder(1).unwrap().text_frame.as_ref().unwrap();
        assert_eq!(body.paragraphs.len(), 1);
        assert_eq!(body.paragraphs[0].text(), "line one\nline two\n");
    }

    #[test]
    fn test_parse_presentation_part() {
        let xml = r#"<p:presentation xmlns:p="p" xmlns:r="r">
            <p:sldIdLst><p:sldId id="256" r:id="rId7"/><p:sldId id="257" r:id="rId8"/></p:sldIdLst>
            <p:sldSz cx="12188952" cy="6858000"/>
            </p:presentation>"#;
        let (size, slides) = PptxParser::parse_presentation(xml).unwrap();
        assert_eq!(size, SlideSize::WIDESCREEN);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[1].id, 257);
        assert_eq!(slides[1].rel_id, "rId8");
    }

    #[test]
    fn test_round_trip_through_writer() {
        let mut prs = Presentation::new();
        prs.set_slide_size(SlideSize::WIDESCREEN);
        let slide = prs.add_slide(SlideLayout::SectionHeader);
        slide.title_mut().unwrap().set_text("Section");
        slide.placeholder_mut(1).unwrap().set_text("line <1>\nline 2");
        slide.set_solid_background(RgbColor::BLACK);
        slide.notes_slide_mut().set_text("say this");

        let parsed = PptxParser::from_bytes(prs.to_bytes().unwrap())
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(parsed, prs);
    }

    #[test]
    fn test_not_a_package() {
        assert!(PptxParser::from_bytes(b"not a zip".to_vec()).is_err());
    }
}
