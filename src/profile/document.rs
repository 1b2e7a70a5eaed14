use serde::{Deserialize, Serialize};

const PROGRAM_EXTENSIONS: [&str; 3] = ["CBL", "COB", "COBOL"];

/// An open program source as reported by the editor session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenDocument {
    pub path: String,
}

impl OpenDocument {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Path segments split on either separator. Empty segments are kept.
    pub fn segments(&self) -> Vec<&str> {
        self.path.split(['/', '\\']).collect()
    }

    pub fn file_name(&self) -> &str {
        self.path.rsplit(['/', '\\']).next().unwrap_or_default()
    }

    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name();
        match name.rfind('.') {
            Some(0) | None => None,
            Some(index) => Some(&name[index + 1..]),
        }
    }

    pub fn is_program(&self) -> bool {
        self.extension().is_some_and(|ext| {
            PROGRAM_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
    }

    /// Immediate parent directory name, if the path has at least two segments.
    pub fn parent_segment(&self) -> Option<&str> {
        let segments = self.segments();
        if segments.len() < 2 {
            return None;
        }
        segments.get(segments.len() - 2).copied()
    }
}

/// Supplies a snapshot of the currently open program sources.
pub trait DocumentSource {
    fn open_documents(&self) -> Vec<OpenDocument>;
}

impl DocumentSource for Vec<OpenDocument> {
    fn open_documents(&self) -> Vec<OpenDocument> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_program_extensions_case_insensitively() {
        assert!(OpenDocument::new("/ws/A/foo.cbl").is_program());
        assert!(OpenDocument::new("/ws/A/FOO.COB").is_program());
        assert!(OpenDocument::new("/ws/A/foo.Cobol").is_program());
        assert!(!OpenDocument::new("/ws/A/foo.cpy").is_program());
        assert!(!OpenDocument::new("/ws/A/cbl").is_program());
        assert!(!OpenDocument::new("/ws/A/.cbl").is_program());
    }

    #[test]
    fn splits_on_both_separators() {
        let doc = OpenDocument::new(r"C:\ws\PROFA\foo.cbl");
        assert_eq!(doc.file_name(), "foo.cbl");
        assert_eq!(doc.parent_segment(), Some("PROFA"));

        let doc = OpenDocument::new("/ws/PROFB/foo.cbl");
        assert_eq!(doc.segments(), ["", "ws", "PROFB", "foo.cbl"]);
        assert_eq!(doc.parent_segment(), Some("PROFB"));
    }

    #[test]
    fn single_segment_has_no_parent() {
        let doc = OpenDocument::new("foo.cbl");
        assert_eq!(doc.file_name(), "foo.cbl");
        assert_eq!(doc.parent_segment(), None);
    }

    #[test]
    fn leading_separator_yields_empty_parent() {
        assert_eq!(OpenDocument::new("/foo.cbl").parent_segment(), Some(""));
    }
}
