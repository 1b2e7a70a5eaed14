//! Tiered profile resolution.
//!
//! Strategies run in priority order and the first hit wins:
//! the persisted setting, then the parent directory of an open program
//! document whose file name matches the program being resolved.

use tracing::debug;

use super::catalog::ProfileCatalog;
use super::document::OpenDocument;

/// Returns the persisted profile name when the catalog knows it.
pub fn from_settings<'a>(catalog: &ProfileCatalog, setting: Option<&'a str>) -> Option<&'a str> {
    let name = setting?;
    if catalog.contains(name) {
        debug!(profile = name, "profile resolved from settings");
        return Some(name);
    }

    debug!(profile = name, "configured profile is not in the catalog");
    None
}

/// Scans `documents` in order for a program named `program_name` whose parent
/// directory is a catalog key.
pub fn from_documents<'a>(
    program_name: &str,
    catalog: &ProfileCatalog,
    documents: &'a [OpenDocument],
) -> Option<&'a str> {
    documents
        .iter()
        .filter(|doc| doc.is_program() && doc.file_name() == program_name)
        .find_map(|doc| {
            let candidate = doc.parent_segment()?;
            if catalog.contains(candidate) {
                debug!(profile = candidate, path = %doc.path, "profile resolved from document path");
                Some(candidate)
            } else {
                debug!(candidate, path = %doc.path, "document parent is not a known profile");
                None
            }
        })
}

pub fn resolve(
    program_name: &str,
    catalog: &ProfileCatalog,
    setting: Option<&str>,
    documents: &[OpenDocument],
) -> Option<String> {
    from_settings(catalog, setting)
        .or_else(|| from_documents(program_name, catalog, documents))
        .map(ToOwned::to_owned)
}
