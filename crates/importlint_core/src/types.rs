use crate::constants::WILDCARD_SUFFIX;

/// A single `import <raw_name>;` declaration found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    /// Text between `import` and `;`, kept verbatim
    pub raw_name: String,
    pub is_wildcard: bool,
    /// The name the import makes available in the file body
    pub simple_name: String,
}

impl ImportDeclaration {
    pub fn new(raw_name: &str) -> Self {
        let is_wildcard = raw_name.ends_with(WILDCARD_SUFFIX);
        let mut segments = raw_name.rsplit('.');
        let simple_name = if is_wildcard { segments.nth(1) } else { segments.next() };

        Self {
            raw_name: raw_name.to_string(),
            is_wildcard,
            simple_name: simple_name.unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name_is_last_segment() {
        let decl = ImportDeclaration::new("java.util.List");
        assert_eq!(decl.simple_name, "List");
        assert!(!decl.is_wildcard);
    }

    #[test]
    fn test_wildcard_uses_package_segment() {
        let decl = ImportDeclaration::new("a.b.*");
        assert_eq!(decl.simple_name, "b");
        assert!(decl.is_wildcard);
    }

    #[test]
    fn test_unqualified_name() {
        let decl = ImportDeclaration::new("Foo");
        assert_eq!(decl.simple_name, "Foo");
    }

    #[test]
    fn test_static_import_keeps_prefix_in_raw_name() {
        let decl = ImportDeclaration::new("static org.junit.Assert.assertEquals");
        assert_eq!(decl.raw_name, "static org.junit.Assert.assertEquals");
        assert_eq!(decl.simple_name, "assertEquals");
    }

    #[test]
    fn test_bare_wildcard_marker() {
        // ".*" splits into ["", "*"], so the package segment is empty
        let decl = ImportDeclaration::new(".*");
        assert!(decl.is_wildcard);
        assert_eq!(decl.simple_name, "");
    }
}
