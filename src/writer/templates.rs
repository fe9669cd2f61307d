//! Static package parts that do not depend on deck content.

/// Office theme used by the slide master and the notes master.
pub const THEME: &str = include_str!("../../resources/theme.xml");

/// `p:txStyles` block appended to the slide master.
pub const MASTER_TEXT_STYLES: &str = include_str!("../../resources/masterTextStyles.xml");

pub const NOTES_MASTER: &str = include_str!("../../resources/notesMaster.xml");

pub const PRES_PROPS: &str = include_str!("../../resources/presProps.xml");

pub const VIEW_PROPS: &str = include_str!("../../resources/viewProps.xml");

pub const TABLE_STYLES: &str = include_str!("../../resources/tableStyles.xml");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_are_xml_parts() {
        for part in [THEME, NOTES_MASTER, PRES_PROPS, VIEW_PROPS, TABLE_STYLES] {
            assert!(part.starts_with("<?xml"));
        }
        assert!(MASTER_TEXT_STYLES.trim_start().starts_with("<p:txStyles>"));
    }

    #[test]
    fn test_templates_are_well_formed() {
        for part in [THEME, NOTES_MASTER, PRES_PROPS, VIEW_PROPS, TABLE_STYLES] {
            let mut reader = quick_xml::Reader::from_str(part);
            loop {
                match reader.read_event() {
                    Ok(quick_xml::events::Event::Eof) => break,
                    Ok(_) => {}
                    Err(e) => panic!("malformed template: {}", e),
                }
            }
        }
    }
}
