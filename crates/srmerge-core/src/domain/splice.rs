//! Splicing merged fragment text into a template.
//!
//! A template ends with two nested closing delimiters:
//!
//! ```text
//! rules_version = '2';
//! service cloud.firestore {
//!   match /databases/{database}/documents {
//!     // existing rules (or nothing)
//!   }
//! }
//! ```
//!
//! The content is split into a prefix and the trailing closers (`\n  }\n}`
//! above). Fragments are indented and inserted between the two, so they land
//! after any existing rules and inside the innermost block.

use crate::domain::constants::{
    CLOSING_DELIMITER, CLOSING_DELIMITER_COUNT, FRAGMENT_INDENT, NEW_LINE,
};

/// Outcome of [`splice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Splice {
    /// Fragments were inserted before the trailing closers.
    Spliced(String),
    /// The template has fewer than two trailing closers; content is the
    /// template, unchanged.
    Unmodified(String),
}

impl Splice {
    pub fn content(&self) -> &str {
        match self {
            Self::Spliced(content) | Self::Unmodified(content) => content,
        }
    }

    pub fn into_content(self) -> String {
        match self {
            Self::Spliced(content) | Self::Unmodified(content) => content,
        }
    }

    pub fn is_spliced(&self) -> bool {
        matches!(self, Self::Spliced(_))
    }
}

/// Split `content` into `(prefix, trailing_closers)`.
///
/// `trailing_closers` matches "whitespace, `}`, whitespace, `}`, whitespace"
/// at the very end of the content. The whitespace before the first of the two
/// closers joins the closers from its first line break on; whitespace left on
/// the last body line stays in the prefix. Returns `None` when the content
/// does not end with two closers.
///
/// This is a linear scan from the end; no backtracking.
pub fn split_trailing_closers(content: &str) -> Option<(&str, &str)> {
    let mut cursor = content.trim_end().len();
    let mut first_closer = cursor;

    for _ in 0..CLOSING_DELIMITER_COUNT {
        if !content[..cursor].ends_with(CLOSING_DELIMITER) {
            return None;
        }
        first_closer = cursor - CLOSING_DELIMITER.len_utf8();
        cursor = content[..first_closer].trim_end().len();
    }

    let leading_ws = &content[cursor..first_closer];
    let start = leading_ws
        .find(['\n', '\r'])
        .map_or(first_closer, |offset| cursor + offset);

    Some(content.split_at(start))
}

/// Prefix every non-blank line with [`FRAGMENT_INDENT`]; blank lines become
/// empty.
pub fn indent_fragments(text: &str) -> String {
    text.split(NEW_LINE)
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{FRAGMENT_INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join(NEW_LINE)
}

/// Join fragment contents in order, one newline between each.
pub fn join_fragments<S: AsRef<str>>(contents: &[S]) -> String {
    contents
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(NEW_LINE)
}

/// Insert `merged_fragments` into `template` just before its trailing closers.
pub fn splice(template: &str, merged_fragments: &str) -> Splice {
    match split_trailing_closers(template) {
        Some((prefix, closers)) => {
            let indented = indent_fragments(merged_fragments);
            Splice::Spliced(format!("{prefix}{NEW_LINE}{indented}{closers}"))
        }
        None => Splice::Unmodified(template.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLES: &str = "
match /articles/{article} {
  allow read: if request.auth != null;
  allow create, update: if request.auth.token.admin == true;
}";

    const IMAGES: &str = "
match /images/{imageId} {
  allow read: if true;
  allow write: if request.auth != null;
}";

    const EMPTY_TEMPLATE: &str = "
rules_version = '2';

service cloud.firestore {
  match /databases/{database}/documents {

  }
}";

    const EXPECTED_FROM_EMPTY: &str = "
rules_version = '2';

service cloud.firestore {
  match /databases/{database}/documents {

    match /articles/{article} {
      allow read: if request.auth != null;
      allow create, update: if request.auth.token.admin == true;
    }

    match /images/{imageId} {
      allow read: if true;
      allow write: if request.auth != null;
    }

  }
}";

    const TEMPLATE_WITH_RULE: &str = "
rules_version = '2';

service cloud.firestore {
  match /databases/{database}/documents {

    match /articles/{id} {
      allow read: if request.auth != null;
      allow create, update: if request.auth == false;
    }

  }
}";

    const EXPECTED_FROM_EXISTING: &str = "
rules_version = '2';

service cloud.firestore {
  match /databases/{database}/documents {

    match /articles/{id} {
      allow read: if request.auth != null;
      allow create, update: if request.auth == false;
    }

    match /articles/{article} {
      allow read: if request.auth != null;
      allow create, update: if request.auth.token.admin == true;
    }

    match /images/{imageId} {
      allow read: if true;
      allow write: if request.auth != null;
    }

  }
}";

    #[test]
    fn splits_at_first_line_break_before_closers() {
        let (prefix, closers) = split_trailing_closers(EMPTY_TEMPLATE).unwrap();
        assert!(prefix.ends_with("documents {"));
        assert_eq!(closers, "\n\n  }\n}");
    }

    #[test]
    fn closers_keep_trailing_whitespace() {
        let (prefix, closers) = split_trailing_closers("a {\n b {\n }\n}\n\n").unwrap();
        assert_eq!(prefix, "a {\n b {");
        assert_eq!(closers, "\n }\n}\n\n");
    }

    #[test]
    fn same_line_whitespace_stays_in_prefix() {
        let (prefix, closers) = split_trailing_closers("x  \n  }}").unwrap();
        assert_eq!(prefix, "x  ");
        assert_eq!(closers, "\n  }}");

        let (prefix, closers) = split_trailing_closers("{ } }").unwrap();
        assert_eq!(prefix, "{ ");
        assert_eq!(closers, "} }");
    }

    #[test]
    fn crlf_templates_split_at_carriage_return() {
        let (prefix, closers) = split_trailing_closers("a {\r\n  b {\r\n  }\r\n}").unwrap();
        assert_eq!(prefix, "a {\r\n  b {");
        assert_eq!(closers, "\r\n  }\r\n}");
    }

    #[test]
    fn single_closer_does_not_match() {
        assert_eq!(split_trailing_closers("service x {\n}"), None);
        assert_eq!(split_trailing_closers("}"), None);
        assert_eq!(split_trailing_closers(""), None);
        assert_eq!(split_trailing_closers("a } b }"), None);
    }

    #[test]
    fn bare_closers_have_empty_prefix() {
        assert_eq!(split_trailing_closers("}}"), Some(("", "}}")));
        assert_eq!(split_trailing_closers("\n}\n}"), Some(("", "\n}\n}")));
    }

    #[test]
    fn indent_skips_blank_lines() {
        let indented = indent_fragments("a\n   \n  b\n\t\nc");
        assert_eq!(indented, "    a\n\n      b\n\n    c");
    }

    #[test]
    fn splice_into_empty_body() {
        let merged = join_fragments(&[ARTICLES, IMAGES]);
        let result = splice(EMPTY_TEMPLATE, &merged);
        assert!(result.is_spliced());
        assert_eq!(result.content(), EXPECTED_FROM_EMPTY);
    }

    #[test]
    fn splice_after_existing_rules() {
        let merged = join_fragments(&[ARTICLES, IMAGES]);
        let result = splice(TEMPLATE_WITH_RULE, &merged);
        assert_eq!(result.into_content(), EXPECTED_FROM_EXISTING);
    }

    #[test]
    fn splice_without_closers_leaves_template_untouched() {
        let template = "rules_version = '2';\nservice cloud.firestore {\n";
        let result = splice(template, "match /a {}");
        assert_eq!(result, Splice::Unmodified(template.to_string()));
    }

    #[test]
    fn join_uses_single_newline() {
        assert_eq!(join_fragments(&["a", "b", "c"]), "a\nb\nc");
        assert_eq!(join_fragments::<&str>(&[]), "");
    }
}
