//! Slide master and slide layout part generation.
//!
//! Placeholder geometry is laid out as fractions of the canvas, so the master
//! fits whichever slide size the presentation uses.

use super::slide::write_tree_header;
use super::templates;
use crate::error::Result;
use crate::model::{PlaceholderKind, SlideLayout, SlideSize};
use crate::opc::namespace as ns;
use std::fmt::Write;

/// Placeholder frame in thousandths of the canvas: (x, y, width, height).
type Frame = (i64, i64, i64, i64);

const MASTER_TITLE: Frame = (50, 40, 900, 170);
const MASTER_BODY: Frame = (50, 233, 900, 660);
const CENTER_TITLE: Frame = (75, 310, 850, 214);
const SUBTITLE: Frame = (150, 567, 700, 255);
const SECTION_TITLE: Frame = (79, 643, 850, 199);
const SECTION_BODY: Frame = (79, 424, 850, 219);

/// Layout-specific geometry overrides; `None` inherits from the master.
fn layout_frame(layout: SlideLayout, kind: PlaceholderKind) -> Option<Frame> {
    match (layout, kind) {
        (SlideLayout::TitleSlide, PlaceholderKind::CenterTitle) => Some(CENTER_TITLE),
        (SlideLayout::TitleSlide, PlaceholderKind::Subtitle) => Some(SUBTITLE),
        (SlideLayout::SectionHeader, PlaceholderKind::Title) => Some(SECTION_TITLE),
        (SlideLayout::SectionHeader, PlaceholderKind::Body) => Some(SECTION_BODY),
        _ => None,
    }
}

fn write_xfrm(xml: &mut String, size: SlideSize, frame: Frame) -> Result<()> {
    let (x, y, cx, cy) = frame;
    let w = size.width.value();
    let h = size.height.value();
    write!(
        xml,
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        w * x / 1000,
        h * y / 1000,
        w * cx / 1000,
        h * cy / 1000
    )?;
    Ok(())
}

fn write_placeholder(
    xml: &mut String,
    id: u32,
    name: &str,
    kind: PlaceholderKind,
    idx: u32,
    geometry: Option<(SlideSize, Frame)>,
) -> Result<()> {
    xml.push_str("<p:sp><p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name="{}"/>"#, id, name)?;
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph"#);
    if let Some(ph_type) = kind.xml_type() {
        write!(xml, r#" type="{}""#, ph_type)?;
    }
    if idx != 0 {
        write!(xml, r#" idx="{}""#, idx)?;
    }
    xml.push_str("/></p:nvPr></p:nvSpPr>");

    match geometry {
        Some((size, frame)) => {
            xml.push_str("<p:spPr>");
            write_xfrm(xml, size, frame)?;
            xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#);
        }
        None => xml.push_str("<p:spPr/>"),
    }

    let prompt = match kind {
        k if k.is_title() => "Click to edit Master title style",
        PlaceholderKind::Subtitle => "Click to edit Master subtitle style",
        _ => "Click to edit Master text styles",
    };
    write!(
        xml,
        r#"<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:r><a:rPr lang="en-US"/><a:t>{}</a:t></a:r></a:p></p:txBody>"#,
        prompt
    )?;
    xml.push_str("</p:sp>");
    Ok(())
}

/// Relationship ID of layout `index` in the master's rels (1-based, layouts first).
pub(crate) fn master_layout_rel_id(layout: SlideLayout) -> String {
    format!("rId{}", layout.index() + 1)
}

/// Relationship ID of the theme in the master's rels, after all layouts.
pub(crate) fn master_theme_rel_id() -> String {
    format!("rId{}", SlideLayout::ALL.len() + 1)
}

/// Generate `ppt/slideMasters/slideMaster1.xml`.
pub fn slide_master_xml(size: SlideSize) -> Result<String> {
    let mut xml = String::with_capacity(8192);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        ns::DML_MAIN,
        ns::OFC_RELATIONSHIPS,
        ns::PML_MAIN
    )?;
    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str("<p:spTree>");
    write_tree_header(&mut xml);
    write_placeholder(
        &mut xml,
        2,
        "Title Placeholder 1",
        PlaceholderKind::Title,
        0,
        Some((size, MASTER_TITLE)),
    )?;
    write_placeholder(
        &mut xml,
        3,
        "Text Placeholder 2",
        PlaceholderKind::Body,
        1,
        Some((size, MASTER_BODY)),
    )?;
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
    );

    xml.push_str("<p:sldLayoutIdLst>");
    for (offset, layout) in SlideLayout::ALL.iter().enumerate() {
        // Layout IDs share the ID space with the master ID 2147483648.
        write!(
            xml,
            r#"<p:sldLayoutId id="{}" r:id="{}"/>"#,
            2_147_483_649u64 + offset as u64,
            master_layout_rel_id(*layout)
        )?;
    }
    xml.push_str("</p:sldLayoutIdLst>");
    xml.push_str(templates::MASTER_TEXT_STYLES);
    xml.push_str("</p:sldMaster>");
    Ok(xml)
}

/// Generate `ppt/slideLayouts/slideLayoutN.xml`.
pub fn slide_layout_xml(layout: SlideLayout, size: SlideSize) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    let layout_type = match layout {
        SlideLayout::TitleSlide => "title",
        SlideLayout::TitleAndContent => "obj",
        SlideLayout::SectionHeader => "secHead",
        SlideLayout::TitleOnly => "titleOnly",
        SlideLayout::Blank => "blank",
    };
    write!(
        xml,
        r#"<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" type="{}" preserve="1">"#,
        ns::DML_MAIN,
        ns::OFC_RELATIONSHIPS,
        ns::PML_MAIN,
        layout_type
    )?;
    write!(xml, r#"<p:cSld name="{}"><p:spTree>"#, layout.name())?;
    write_tree_header(&mut xml);
    for (&(kind, idx, name), id) in layout.placeholders().iter().zip(2u32..) {
        let geometry = layout_frame(layout, kind).map(|frame| (size, frame));
        write_placeholder(&mut xml, id, name, kind, idx, geometry)?;
    }
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    Ok(xml)
}
