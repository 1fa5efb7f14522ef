use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::Project;

const SEPARATOR: char = '-';

/// Bytes escaped when a slug is written into a path: all but ASCII
/// alphanumerics and the separator.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-');

/// Encode a project name into its URL slug.
///
/// Lowercases the name, collapses every run of non-alphanumeric characters
/// into a single `-`, and trims separators from both ends. Lowercasing comes
/// first, so marks produced by case mapping (`İ` becomes `i` plus a combining
/// dot) are treated as separators too. Names without any alphanumeric
/// character encode to the empty string, which never matches a route
/// parameter.
///
/// Non-ASCII letters are kept; [`escape`] makes the slug safe to put in a URL.
#[must_use]
pub fn encode(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }
    slug
}

/// Percent-encode a slug for use as a path segment.
#[must_use]
pub fn escape(slug: &str) -> Cow<'_, str> {
    utf8_percent_encode(slug, PATH_SEGMENT).into()
}

/// Decode a path segment back into the slug it carries. Invalid UTF-8 is
/// replaced, so such a segment simply never resolves.
#[must_use]
pub fn unescape(segment: &str) -> Cow<'_, str> {
    percent_decode_str(segment).decode_utf8_lossy()
}

/// Route path of a project's detail view.
#[must_use]
pub fn project_path(project: &Project) -> String {
    format!("/projects/{}", escape(&encode(&project.name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 9] = [
        "Acme Corp",
        "Home / Garden",
        "",
        "ÀÉÎ",
        "a_b_c",
        "İstanbul",
        "Café Über",
        "ǅemal Σίσυφος",
        "東京 Office",
    ];

    #[test]
    fn encodes_basic_names() {
        assert_eq!(encode("Acme Corp"), "acme-corp");
        assert_eq!(encode("Test 123!"), "test-123");
        assert_eq!(encode("  Multiple   Spaces  "), "multiple-spaces");
        assert_eq!(encode("Q3 -- Roadmap / Draft"), "q3-roadmap-draft");
    }

    #[test]
    fn degenerate_names_encode_to_empty() {
        assert_eq!(encode(""), "");
        assert_eq!(encode("   "), "");
        assert_eq!(encode("--!!--"), "");
    }

    #[test]
    fn keeps_unicode_letters() {
        assert_eq!(encode("Café Über"), "café-über");
        assert_eq!(encode("東京 Office"), "東京-office");
    }

    #[test]
    fn case_mapping_marks_become_separators() {
        assert_eq!(encode("İstanbul"), "i-stanbul");
    }

    #[test]
    fn slug_alphabet_is_alphanumerics_and_separator() {
        for name in NAMES {
            let slug = encode(name);
            assert!(
                slug.chars().all(|ch| ch.is_alphanumeric() || ch == SEPARATOR),
                "{name:?} -> {slug:?}"
            );
            assert!(!slug.starts_with(SEPARATOR) && !slug.ends_with(SEPARATOR), "{slug:?}");
            assert!(!slug.contains("--"), "{slug:?}");
        }
    }

    #[test]
    fn encoding_is_deterministic_and_idempotent() {
        for name in NAMES {
            let slug = encode(name);
            assert_eq!(encode(name), slug);
            assert_eq!(encode(&slug), slug, "{name:?}");
        }
    }

    #[test]
    fn equal_names_share_a_slug() {
        assert_eq!(encode("Side Project"), encode("side-project"));
    }

    #[test]
    fn project_path_uses_slug() {
        let project = Project::new("Acme Corp");
        assert_eq!(project_path(&project), "/projects/acme-corp");
    }

    #[test]
    fn project_path_is_url_safe() {
        let project = Project::new("Café Über");
        let path = project_path(&project);
        assert_eq!(path, "/projects/caf%C3%A9-%C3%BCber");
        assert!(path.is_ascii());
    }

    #[test]
    fn escaped_slugs_decode_back() {
        for name in NAMES {
            let slug = encode(name);
            assert_eq!(unescape(&escape(&slug)), slug);
        }
        assert_eq!(escape("acme-corp"), "acme-corp");
        assert_eq!(unescape("caf%C3%A9"), "café");
    }
}
