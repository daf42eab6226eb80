//! Defaults for discovery and the wildcard marker recognised in imports.

/// Directory scanned when no root is given
pub const DEFAULT_ROOT: &str = "src";

/// File extension (without the leading dot) scanned when none is given
pub const DEFAULT_EXTENSION: &str = "java";

/// Trailing marker of an on-demand import such as `import java.util.*;`
pub const WILDCARD_SUFFIX: &str = ".*";
