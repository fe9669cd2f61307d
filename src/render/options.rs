//! Rendering options configuration.

/// Options for rendering presentation outlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Include body paragraphs under each slide title
    pub include_body: bool,

    /// Include speaker notes
    pub include_notes: bool,

    /// Truncate slide titles to this display width (None = no limit)
    pub max_title_width: Option<usize>,

    /// Indentation per outline level
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_body: true,
            include_notes: true,
            max_title_width: None,
            indent: 2,
        }
    }
}

impl RenderOptions {
    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only list slide titles.
    pub fn titles_only() -> Self {
        Self {
            include_body: false,
            include_notes: false,
            ..Self::default()
        }
    }

    pub fn with_body(mut self, include: bool) -> Self {
        self.include_body = include;
        self
    }

    pub fn with_notes(mut self, include: bool) -> Self {
        self.include_notes = include;
        self
    }

    /// Set the maximum title width. Widths below 2 are raised to 2, room for
    /// one character plus the ellipsis.
    pub fn with_max_title_width(mut self, width: usize) -> Self {
        self.max_title_width = Some(width.max(2));
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = RenderOptions::default();
        assert!(opts.include_body);
        assert!(opts.include_notes);
        assert_eq!(opts.max_title_width, None);
        assert_eq!(opts.indent, 2);
    }

    #[test]
    fn test_builder_pattern() {
        let opts = RenderOptions::new()
            .with_notes(false)
            .with_max_title_width(40)
            .with_indent(4);

        assert!(opts.include_body);
        assert!(!opts.include_notes);
        assert_eq!(opts.max_title_width, Some(40));
        assert_eq!(opts.indent, 4);
    }

    #[test]
    fn test_title_width_floor() {
        let opts = RenderOptions::new().with_max_title_width(0);
        assert_eq!(opts.max_title_width, Some(2));
    }

    #[test]
    fn test_titles_only() {
        let opts = RenderOptions::titles_only();
        assert!(!opts.include_body);
        assert!(!opts.include_notes);
    }
}
