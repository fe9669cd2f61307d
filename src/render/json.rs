//! JSON renderer implementation.

use crate::error::{Error, Result};
use crate::model::Presentation;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Convert a presentation to JSON.
pub fn to_json(prs: &Presentation, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(prs),
        JsonFormat::Pretty => serde_json::to_string_pretty(prs),
    };
    json.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Convert a presentation to pretty-printed JSON.
pub fn to_json_default(prs: &Presentation) -> Result<String> {
    to_json(prs, JsonFormat::Pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RgbColor, SlideLayout};

    fn sample() -> Presentation {
        let mut prs = Presentation::new();
        prs.metadata.title = Some("Test".to_string());
        let slide = prs.add_slide(SlideLayout::TitleAndContent);
        slide.title_mut().unwrap().set_text("Hello");
        slide.set_solid_background(RgbColor::new(24, 26, 27));
        prs
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\": \"Test\""));
        assert!(json.contains("\"text\": \"Hello\""));
        assert!(json.contains("181A1B"));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"title\":\"Test\""));
    }

    #[test]
    fn test_to_json_default() {
        let json = to_json_default(&Presentation::new()).unwrap();
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_presentation_roundtrip() {
        let prs = sample();
        let json = to_json(&prs, JsonFormat::Pretty).unwrap();
        let parsed: Presentation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, prs);
    }
}
