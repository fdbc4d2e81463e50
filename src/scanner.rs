//! Identifier extraction rules.
//!
//! Scanning is regex-based, not a real parser. The patterns deliberately
//! mirror the substitution patterns in [`crate::rewriter`]: whatever the
//! scanner can find, the rewriter can replace, and nothing more. Known
//! limitations are kept as-is rather than fixed:
//!
//! - A multi-class attribute (`class="a b"`) is captured as one identifier,
//!   not split on spaces.
//! - `querySelector`/`querySelectorAll` arguments skip exactly one leading
//!   sigil character before the identifier, so `querySelector("#nav")`
//!   contributes `nav` to the class-like set.
//! - Attribute matching is substring-based; `data-id="x"` also feeds `x`
//!   into the id set.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// File category used to select the matching rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `.css` files: selector-token matching.
    Stylesheet,
    /// Everything else (HTML, JS): attribute and accessor-call matching.
    Markup,
}

impl FileKind {
    pub fn of(path: &Path) -> Self {
        if path.extension().is_some_and(|ext| ext == "css") {
            FileKind::Stylesheet
        } else {
            FileKind::Markup
        }
    }
}

/// Identifiers extracted from one file, split by origin.
///
/// The split is informational only; the pipeline merges both sets into a
/// single namespace before building the replacement map.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub classes: HashSet<String>,
    pub ids: HashSet<String>,
}

static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"class=["']([^"']+)["']"#).unwrap());
static CLASS_NAME_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"className=["']([^"']+)["']"#).unwrap());
static ID_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"id=["']([^"']+)["']"#).unwrap());

// Selector calls: the `.` after the opening quote consumes the sigil
// character (`.` or `#`), whatever it is.
static QUERY_SELECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"querySelector\(["'].([^"']+)["']\)"#).unwrap());
static QUERY_SELECTOR_ALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"querySelectorAll\(["'].([^"']+)["']\)"#).unwrap());
static GET_BY_CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"getElementsByClassName\(["']([^"']+)["']\)"#).unwrap());
static GET_BY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"getElementById\(["']([^"']+)["']\)"#).unwrap());

// CSS selector tokens. The trailing character is required: a selector at the
// very end of the input with nothing after it is not matched.
static CSS_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([a-zA-Z0-9_-]+)(\s|[{:,])").unwrap());
static CSS_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([a-zA-Z0-9_-]+)(\s|[{:,])").unwrap());

/// Extract identifiers using the rule set for `kind`.
pub fn scan(content: &str, kind: FileKind) -> ScanResult {
    match kind {
        FileKind::Stylesheet => scan_css(content),
        FileKind::Markup => scan_markup(content),
    }
}

/// Extract class names and IDs from HTML/JS content.
pub fn scan_markup(content: &str) -> ScanResult {
    let mut result = ScanResult::default();

    for re in [
        &CLASS_ATTR,
        &CLASS_NAME_ATTR,
        &QUERY_SELECTOR,
        &QUERY_SELECTOR_ALL,
        &GET_BY_CLASS_NAME,
    ] {
        result.classes.extend(captures_of(re, content));
    }
    for re in [&ID_ATTR, &GET_BY_ID] {
        result.ids.extend(captures_of(re, content));
    }

    result
}

/// Extract simple `.class` and `#id` selector tokens from CSS content.
///
/// Compound selectors (`.a.b`), attribute selectors, and nested forms are
/// out of scope for these patterns.
pub fn scan_css(content: &str) -> ScanResult {
    ScanResult {
        classes: captures_of(&CSS_CLASS, content).collect(),
        ids: captures_of(&CSS_ID, content).collect(),
    }
}

fn captures_of<'a>(re: &'a Regex, content: &'a str) -> impl Iterator<Item = String> + 'a {
    re.captures_iter(content)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
}
