//! Package assembly: every part of a PPTX, its relationships and content types.

use super::master::{master_layout_rel_id, master_theme_rel_id, slide_layout_xml, slide_master_xml};
use super::slide::{notes_xml, slide_xml};
use super::templates;
use crate::container::Relationship;
use crate::error::Result;
use crate::model::{Metadata, Presentation, SlideLayout, SlideSize};
use crate::opc::{content_type as ct, namespace as ns, relationship_type as rt};
use quick_xml::escape::escape;
use std::fmt::Write;

/// A serialized package part.
#[derive(Debug, Clone)]
pub struct PackagePart {
    /// Part name without the leading '/', e.g. "ppt/slides/slide1.xml"
    pub name: String,
    /// Content type; `None` for parts covered by a Default entry (.rels)
    pub content_type: Option<&'static str>,
    pub xml: String,
}

impl PackagePart {
    fn new(name: impl Into<String>, content_type: &'static str, xml: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: Some(content_type),
            xml: xml.into(),
        }
    }

    fn rels(name: impl Into<String>, rels: &[Relationship]) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            content_type: None,
            xml: relationships_xml(rels)?,
        })
    }
}

fn rel(id: impl Into<String>, rel_type: &str, target: impl Into<String>) -> Relationship {
    Relationship {
        id: id.into(),
        rel_type: rel_type.to_string(),
        target: target.into(),
        external: false,
    }
}

/// Serialize a relationships part.
pub fn relationships_xml(rels: &[Relationship]) -> Result<String> {
    let mut xml = String::with_capacity(256 + rels.len() * 160);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<Relationships xmlns="{}">"#, ns::OPC_RELATIONSHIPS)?;
    for r in rels {
        write!(
            xml,
            r#"<Relationship Id="{}" Type="{}" Target="{}""#,
            r.id,
            r.rel_type,
            escape(r.target.as_str())
        )?;
        if r.external {
            xml.push_str(r#" TargetMode="External""#);
        }
        xml.push_str("/>");
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

/// Serialize `[Content_Types].xml` for the given parts.
pub fn content_types_xml(parts: &[PackagePart]) -> Result<String> {
    let mut xml = String::with_capacity(512 + parts.len() * 160);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<Types xmlns="{}">"#, ns::OPC_CONTENT_TYPES)?;
    write!(
        xml,
        r#"<Default Extension="rels" ContentType="{}"/>"#,
        ct::RELATIONSHIPS
    )?;
    write!(xml, r#"<Default Extension="xml" ContentType="{}"/>"#, ct::XML)?;
    for part in parts {
        if let Some(content_type) = part.content_type {
            write!(
                xml,
                r#"<Override PartName="/{}" ContentType="{}"/>"#,
                part.name, content_type
            )?;
        }
    }
    xml.push_str("</Types>");
    Ok(xml)
}

fn core_properties_xml(meta: &Metadata) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
    for (tag, value) in [
        ("dc:title", &meta.title),
        ("dc:subject", &meta.subject),
        ("dc:creator", &meta.author),
    ] {
        if let Some(value) = value {
            write!(xml, "<{0}>{1}</{0}>", tag, escape(value.as_str()))?;
        }
    }
    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

fn presentation_format(size: SlideSize) -> &'static str {
    if size == SlideSize::WIDESCREEN {
        "Widescreen"
    } else if size == SlideSize::STANDARD {
        "On-screen Show (4:3)"
    } else {
        "Custom"
    }
}

fn app_properties_xml(prs: &Presentation) -> Result<String> {
    let notes = prs.slides.iter().filter(|s| s.notes.is_some()).count();
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    xml.push_str("<Application>deckwright</Application>");
    write!(
        xml,
        "<PresentationFormat>{}</PresentationFormat>",
        presentation_format(prs.slide_size)
    )?;
    write!(xml, "<Slides>{}</Slides>", prs.slide_count())?;
    write!(xml, "<Notes>{}</Notes>", notes)?;
    xml.push_str("</Properties>");
    Ok(xml)
}

// Fixed relationship IDs in ppt/_rels/presentation.xml.rels; slides follow.
const PRES_REL_MASTER: &str = "rId1";
const PRES_REL_NOTES_MASTER: &str = "rId2";
const PRES_REL_PRES_PROPS: &str = "rId3";
const PRES_REL_VIEW_PROPS: &str = "rId4";
const PRES_REL_THEME: &str = "rId5";
const PRES_REL_TABLE_STYLES: &str = "rId6";
const PRES_REL_FIRST_SLIDE: usize = 7;

fn slide_rel_id(index: usize) -> String {
    format!("rId{}", PRES_REL_FIRST_SLIDE + index)
}

fn presentation_xml(prs: &Presentation) -> Result<String> {
    let mut xml = String::with_capacity(1024 + prs.slides.len() * 48);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
        ns::DML_MAIN,
        ns::OFC_RELATIONSHIPS,
        ns::PML_MAIN
    )?;
    write!(
        xml,
        r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="{}"/></p:sldMasterIdLst>"#,
        PRES_REL_MASTER
    )?;
    write!(
        xml,
        r#"<p:notesMasterIdLst><p:notesMasterId r:id="{}"/></p:notesMasterIdLst>"#,
        PRES_REL_NOTES_MASTER
    )?;
    if !prs.slides.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for (index, slide) in prs.slides.iter().enumerate() {
            write!(
                xml,
                r#"<p:sldId id="{}" r:id="{}"/>"#,
                slide.id,
                slide_rel_id(index)
            )?;
        }
        xml.push_str("</p:sldIdLst>");
    }
    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        prs.slide_size.width, prs.slide_size.height
    )?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    Ok(xml)
}

/// Produce every part of the package, `[Content_Types].xml` first.
pub fn package_parts(prs: &Presentation) -> Result<Vec<PackagePart>> {
    let mut parts = Vec::with_capacity(24 + prs.slides.len() * 4);

    parts.push(PackagePart::rels(
        "_rels/.rels",
        &[
            rel("rId1", rt::OFFICE_DOCUMENT, "ppt/presentation.xml"),
            rel("rId2", rt::CORE_PROPERTIES, "docProps/core.xml"),
            rel("rId3", rt::EXTENDED_PROPERTIES, "docProps/app.xml"),
        ],
    )?);
    parts.push(PackagePart::new(
        "docProps/core.xml",
        ct::CORE_PROPERTIES,
        core_properties_xml(&prs.metadata)?,
    ));
    parts.push(PackagePart::new(
        "docProps/app.xml",
        ct::EXTENDED_PROPERTIES,
        app_properties_xml(prs)?,
    ));

    // Presentation part and its relationships
    parts.push(PackagePart::new(
        "ppt/presentation.xml",
        ct::PML_PRESENTATION_MAIN,
        presentation_xml(prs)?,
    ));
    let mut pres_rels = vec![
        rel(PRES_REL_MASTER, rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
        rel(PRES_REL_NOTES_MASTER, rt::NOTES_MASTER, "notesMasters/notesMaster1.xml"),
        rel(PRES_REL_PRES_PROPS, rt::PRES_PROPS, "presProps.xml"),
        rel(PRES_REL_VIEW_PROPS, rt::VIEW_PROPS, "viewProps.xml"),
        rel(PRES_REL_THEME, rt::THEME, "theme/theme1.xml"),
        rel(PRES_REL_TABLE_STYLES, rt::TABLE_STYLES, "tableStyles.xml"),
    ];
    for index in 0..prs.slides.len() {
        pres_rels.push(rel(
            slide_rel_id(index),
            rt::SLIDE,
            format!("slides/slide{}.xml", index + 1),
        ));
    }
    parts.push(PackagePart::rels("ppt/_rels/presentation.xml.rels", &pres_rels)?);

    parts.push(PackagePart::new("ppt/presProps.xml", ct::PML_PRES_PROPS, templates::PRES_PROPS));
    parts.push(PackagePart::new("ppt/viewProps.xml", ct::PML_VIEW_PROPS, templates::VIEW_PROPS));
    parts.push(PackagePart::new(
        "ppt/tableStyles.xml",
        ct::PML_TABLE_STYLES,
        templates::TABLE_STYLES,
    ));
    parts.push(PackagePart::new("ppt/theme/theme1.xml", ct::THEME, templates::THEME));
    parts.push(PackagePart::new("ppt/theme/theme2.xml", ct::THEME, templates::THEME));

    // Slide master and layouts
    parts.push(PackagePart::new(
        "ppt/slideMasters/slideMaster1.xml",
        ct::PML_SLIDE_MASTER,
        slide_master_xml(prs.slide_size)?,
    ));
    let mut master_rels: Vec<Relationship> = SlideLayout::ALL
        .iter()
        .map(|layout| {
            rel(
                master_layout_rel_id(*layout),
                rt::SLIDE_LAYOUT,
                format!("../slideLayouts/{}", layout.part_name()),
            )
        })
        .collect();
    master_rels.push(rel(master_theme_rel_id(), rt::THEME, "../theme/theme1.xml"));
    parts.push(PackagePart::rels(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &master_rels,
    )?);

    for layout in SlideLayout::ALL {
        parts.push(PackagePart::new(
            format!("ppt/slideLayouts/{}", layout.part_name()),
            ct::PML_SLIDE_LAYOUT,
            slide_layout_xml(layout, prs.slide_size)?,
        ));
        parts.push(PackagePart::rels(
            format!("ppt/slideLayouts/_rels/{}.rels", layout.part_name()),
            &[rel("rId1", rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml")],
        )?);
    }

    // Notes master
    parts.push(PackagePart::new(
        "ppt/notesMasters/notesMaster1.xml",
        ct::PML_NOTES_MASTER,
        templates::NOTES_MASTER,
    ));
    parts.push(PackagePart::rels(
        "ppt/notesMasters/_rels/notesMaster1.xml.rels",
        &[rel("rId1", rt::THEME, "../theme/theme2.xml")],
    )?);

    // Slides and their notes pages
    for (index, slide) in prs.slides.iter().enumerate() {
        let number = index + 1;
        parts.push(PackagePart::new(
            format!("ppt/slides/slide{}.xml", number),
            ct::PML_SLIDE,
            slide_xml(slide)?,
        ));

        let mut slide_rels = vec![rel(
            "rId1",
            rt::SLIDE_LAYOUT,
            format!("../slideLayouts/{}", slide.layout.part_name()),
        )];

        if let Some(ref notes) = slide.notes {
            slide_rels.push(rel(
                "rId2",
                rt::NOTES_SLIDE,
                format!("../notesSlides/notesSlide{}.xml", number),
            ));
            parts.push(PackagePart::new(
                format!("ppt/notesSlides/notesSlide{}.xml", number),
                ct::PML_NOTES_SLIDE,
                notes_xml(notes)?,
            ));
            parts.push(PackagePart::rels(
                format!("ppt/notesSlides/_rels/notesSlide{}.xml.rels", number),
                &[
                    rel("rId1", rt::NOTES_MASTER, "../notesMasters/notesMaster1.xml"),
                    rel("rId2", rt::SLIDE, format!("../slides/slide{}.xml", number)),
                ],
            )?);
        }

        parts.push(PackagePart::rels(
            format!("ppt/slides/_rels/slide{}.xml.rels", number),
            &slide_rels,
        )?);
    }

    let content_types = PackagePart {
        name: "[Content_Types].xml".to_string(),
        content_type: None,
        xml: content_types_xml(&parts)?,
    };
    parts.insert(0, content_types);

    Ok(parts)
}
