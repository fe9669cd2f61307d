//! ZIP container abstraction for reading OOXML packages.

use crate::error::{Error, Result};
use crate::model::Metadata;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// A relationship entry from a .rels file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path (relative or absolute)
    pub target: String,
    /// Whether the target is external
    pub external: bool,
}

/// Collection of relationships parsed from a .rels file.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    /// Map from relationship ID to relationship data
    pub by_id: HashMap<String, Relationship>,
    /// Map from relationship type to list of relationships
    pub by_type: HashMap<String, Vec<Relationship>>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a relationship by ID.
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.by_id.get(id)
    }

    /// Get relationships by type.
    pub fn get_by_type(&self, rel_type: &str) -> Vec<&Relationship> {
        self.by_type
            .get(rel_type)
            .map(|v| v.iter().collect())
            .unwrap_or_default()
    }

    /// First relationship of a type, if any.
    pub fn first_of_type(&self, rel_type: &str) -> Option<&Relationship> {
        self.by_type.get(rel_type).and_then(|v| v.first())
    }

    /// Add a relationship.
    pub fn add(&mut self, rel: Relationship) {
        self.by_type
            .entry(rel.rel_type.clone())
            .or_default()
            .push(rel.clone());
        self.by_id.insert(rel.id.clone(), rel);
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Decode XML part bytes, dropping a UTF-8 byte order mark if present.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    String::from_utf8(bytes.to_vec()).map_err(|e| Error::InvalidData(e.to_string()))
}

/// OOXML container abstraction over a ZIP archive.
///
/// Provides methods to read XML parts and relationships from a package.
pub struct OoxmlContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl OoxmlContainer {
    /// Open an OOXML container from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use deckwright::container::OoxmlContainer;
    ///
    /// let container = OoxmlContainer::open("OIDC_Beta_Intro.pptx")?;
    /// # Ok::<(), deckwright::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Create an OOXML container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(data))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Read an XML part from the archive as a string.
    pub fn read_xml(&self, path: &str) -> Result<String> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::MissingComponent(path.to_string()))?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        decode_xml_bytes(&bytes)
    }

    /// Check if a part exists in the archive.
    pub fn exists(&self, path: &str) -> bool {
        let archive = self.archive.borrow();
        let found = archive.file_names().any(|n| n == path);
        found
    }

    /// List all part names in the archive.
    pub fn list_files(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        archive.file_names().map(String::from).collect()
    }

    /// List part names matching a prefix.
    pub fn list_files_with_prefix(&self, prefix: &str) -> Vec<String> {
        let archive = self.archive.borrow();
        archive
            .file_names()
            .filter(|n| n.starts_with(prefix))
            .map(String::from)
            .collect()
    }

    /// Read and parse the relationships of a part.
    ///
    /// A part without a .rels file has no relationships.
    pub fn read_relationships(&self, part_path: &str) -> Result<Relationships> {
        let rels_path = match part_path.rsplit_once('/') {
            Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
            None if part_path.is_empty() => "_rels/.rels".to_string(),
            None => format!("_rels/{}.rels", part_path),
        };

        if !self.exists(&rels_path) {
            return Ok(Relationships::new());
        }
        let content = self.read_xml(&rels_path)?;
        parse_relationships(&content)
    }

    /// Read package-level relationships (_rels/.rels).
    pub fn read_package_relationships(&self) -> Result<Relationships> {
        self.read_relationships("")
    }

    /// Parse core metadata from docProps/core.xml.
    pub fn parse_core_metadata(&self) -> Result<Metadata> {
        let mut meta = Metadata::default();
        if !self.exists("docProps/core.xml") {
            return Ok(meta);
        }

        let xml = self.read_xml("docProps/core.xml")?;
        let mut reader = quick_xml::Reader::from_str(&xml);
        let mut current_element: Option<String> = None;

        loop {
            match reader.read_event()? {
                quick_xml::events::Event::Start(e) => {
                    current_element =
                        Some(String::from_utf8_lossy(e.name().local_name().as_ref()).into_owned());
                }
                quick_xml::events::Event::Text(e) => {
                    if let Some(ref elem) = current_element {
                        let text = e
                            .unescape()
                            .map_err(|e| Error::XmlParse(e.to_string()))?
                            .into_owned();
                        match elem.as_str() {
                            "title" => meta.title = Some(text),
                            "creator" => meta.author = Some(text),
                            "subject" => meta.subject = Some(text),
                            _ => {}
                        }
                    }
                }
                quick_xml::events::Event::End(_) => current_element = None,
                quick_xml::events::Event::Eof => break,
                _ => {}
            }
        }

        Ok(meta)
    }

    /// Resolve a relationship target against the part that owns it.
    pub fn resolve_path(base: &str, relative: &str) -> String {
        if let Some(stripped) = relative.strip_prefix('/') {
            return stripped.to_string();
        }

        let mut segments: Vec<&str> = base.split('/').collect();
        segments.pop();
        for segment in relative.split('/') {
            match segment {
                ".." => {
                    segments.pop();
                }
                "." | "" => {}
                s => segments.push(s),
            }
        }
        segments.join("/")
    }
}

/// Parse the content of a .rels part.
pub fn parse_relationships(content: &str) -> Result<Relationships> {
    let mut rels = Relationships::new();
    let mut reader = quick_xml::Reader::from_str(content);

    loop {
        match reader.read_event()? {
            quick_xml::events::Event::Empty(e) | quick_xml::events::Event::Start(e)
                if e.name().as_ref() == b"Relationship" =>
            {
                let mut id = String::new();
                let mut rel_type = String::new();
                let mut target = String::new();
                let mut external = false;

                for attr in e.attributes().flatten() {
                    let value = attr
                        .unescape_value()
                        .map_err(|e| Error::XmlParse(e.to_string()))?
                        .into_owned();
                    match attr.key.as_ref() {
                        b"Id" => id = value,
                        b"Type" => rel_type = value,
                        b"Target" => target = value,
                        b"TargetMode" => external = value.eq_ignore_ascii_case("external"),
                        _ => {}
                    }
                }

                if !id.is_empty() {
                    rels.add(Relationship {
                        id,
                        rel_type,
                        target,
                        external,
                    });
                }
            }
            quick_xml::events::Event::Eof => break,
            _ => {}
        }
    }

    Ok(rels)
}

impl std::fmt::Debug for OoxmlContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OoxmlContainer")
            .field("files", &self.list_files().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Presentation, SlideLayout};
    use crate::opc::relationship_type as rt;

    fn sample_container() -> OoxmlContainer {
        let mut prs = Presentation::new();
        prs.metadata.title = Some("Sample".to_string());
        prs.add_slide(SlideLayout::TitleAndContent)
            .notes_slide_mut()
            .set_text("notes");
        OoxmlContainer::from_bytes(prs.to_bytes().unwrap()).unwrap()
    }

    #[test]
    fn test_resolve_path() {
        assert_eq!(
            OoxmlContainer::resolve_path(
                "ppt/slides/slide1.xml",
                "../slideLayouts/slideLayout2.xml"
            ),
            "ppt/slideLayouts/slideLayout2.xml"
        );
        assert_eq!(
            OoxmlContainer::resolve_path("ppt/presentation.xml", "slides/slide1.xml"),
            "ppt/slides/slide1.xml"
        );
        assert_eq!(
            OoxmlContainer::resolve_path("", "ppt/presentation.xml"),
            "ppt/presentation.xml"
        );
        assert_eq!(
            OoxmlContainer::resolve_path("ppt/slides/slide1.xml", "/ppt/media/image1.png"),
            "ppt/media/image1.png"
        );
    }

    #[test]
    fn test_relationships_collection() {
        let mut rels = Relationships::new();
        rels.add(Relationship {
            id: "rId1".to_string(),
            rel_type: "http://test/type1".to_string(),
            target: "target1.xml".to_string(),
            external: false,
        });
        rels.add(Relationship {
            id: "rId2".to_string(),
            rel_type: "http://test/type1".to_string(),
            target: "target2.xml".to_string(),
            external: false,
        });

        assert!(rels.get("rId1").is_some());
        assert!(rels.get("rId3").is_none());
        assert_eq!(rels.get_by_type("http://test/type1").len(), 2);
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_read_written_package() {
        let container = sample_container();
        assert!(container.exists("[Content_Types].xml"));
        assert!(container.exists("ppt/presentation.xml"));
        assert_eq!(container.list_files_with_prefix("ppt/slides/slide").len(), 1);

        let pkg_rels = container.read_package_relationships().unwrap();
        let main = pkg_rels.first_of_type(rt::OFFICE_DOCUMENT).unwrap();
        assert_eq!(main.target, "ppt/presentation.xml");

        let slide_rels = container.read_relationships("ppt/slides/slide1.xml").unwrap();
        assert!(slide_rels.first_of_type(rt::NOTES_SLIDE).is_some());
    }

    #[test]
    fn test_missing_rels_is_empty() {
        let container = sample_container();
        let rels = container.read_relationships("ppt/presProps.xml").unwrap();
        assert!(rels.is_empty());
    }

    #[test]
    fn test_core_metadata() {
        let meta = sample_container().parse_core_metadata().unwrap();
        assert_eq!(meta.title.as_deref(), Some("Sample"));
        assert_eq!(meta.author, None);
    }

    #[test]
    fn test_decode_strips_bom() {
        assert_eq!(decode_xml_bytes(b"\xEF\xBB\xBF<?xml?>").unwrap(), "<?xml?>");
        assert_eq!(decode_xml_bytes(b"<a/>").unwrap(), "<a/>");
        assert!(decode_xml_bytes(b"\xFF\xFE<").is_err());
    }
}
