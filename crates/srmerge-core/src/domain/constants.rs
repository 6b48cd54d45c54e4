//! Shared string constants for rule discovery and splicing.

/// Suffix identifying a rule fragment file.
pub const RULES_FILE_SUFFIX: &str = ".rules";

/// Output-like file names that are never merged, even though they carry the
/// fragment suffix.
pub const RESERVED_RULE_FILES: [&str; 2] = ["firestore.rules", "storage.rules"];

/// Separator used when joining fragments and re-joining indented lines.
pub const NEW_LINE: &str = "\n";

/// Indent applied to every non-blank fragment line.
pub const FRAGMENT_INDENT: &str = "    ";

/// Delimiter closing the template's rule body.
pub const CLOSING_DELIMITER: char = '}';

/// Number of trailing closing delimiters that bound the insertion point.
pub const CLOSING_DELIMITER_COUNT: usize = 2;

// CLI flag names shared by the argument parser and user-facing hints.
pub const CLI_ARG_WORKSPACE_PATH: &str = "workspace_path";
pub const CLI_ARG_ROOT_SR_TEMPLATE: &str = "root_sr_template";
pub const CLI_ARG_ROOT_SR_FILE: &str = "root_sr_file";

/// `true` if `name` is one of [`RESERVED_RULE_FILES`].
pub fn is_reserved(name: &str) -> bool {
    RESERVED_RULE_FILES.contains(&name)
}
