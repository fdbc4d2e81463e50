//! Identifier substitution rules.
//!
//! Each substitution pattern is the inverse of a scanner pattern, anchored
//! by the surrounding syntax (quotes, selector sigils, delimiters), so an
//! identifier that is a substring of another is never clobbered. Output
//! quoting is normalized to double quotes regardless of the source style,
//! and `querySelector`/`querySelectorAll` sigils are normalized to `.`.

use std::collections::HashMap;

use anyhow::Result;
use regex::Regex;

use crate::scanner::FileKind;

/// Global old-identifier to replacement-token mapping.
///
/// Built once during the scan phase, read-only afterward. Class names and
/// IDs share this one namespace.
pub type ReplacementMap = HashMap<String, String>;

/// Apply the substitution rule set for `kind`.
pub fn rewrite(content: &str, kind: FileKind, replacements: &ReplacementMap) -> Result<String> {
    match kind {
        FileKind::Stylesheet => rewrite_css(content, replacements),
        FileKind::Markup => rewrite_markup(content, replacements),
    }
}

/// Replace mapped class names and IDs in HTML/JS content.
pub fn rewrite_markup(content: &str, replacements: &ReplacementMap) -> Result<String> {
    let mut content = content.to_string();

    for (old, new) in replacements {
        let old = regex::escape(old);
        let rules = [
            (
                format!(r#"class=["']{old}["']"#),
                format!(r#"class="{new}""#),
            ),
            (
                format!(r#"className=["']{old}["']"#),
                format!(r#"className="{new}""#),
            ),
            (
                format!(r#"\bquerySelector\(["'].{old}["']\)"#),
                format!(r#"querySelector(".{new}")"#),
            ),
            (
                format!(r#"\bquerySelectorAll\(["'].{old}["']\)"#),
                format!(r#"querySelectorAll(".{new}")"#),
            ),
            (
                format!(r#"\bgetElementsByClassName\(["']{old}["']\)"#),
                format!(r#"getElementsByClassName("{new}")"#),
            ),
            (format!(r#"id=["']{old}["']"#), format!(r#"id="{new}""#)),
            (
                format!(r#"\bgetElementById\(["']{old}["']\)"#),
                format!(r#"getElementById("{new}")"#),
            ),
        ];

        for (pattern, replacement) in rules {
            content = Regex::new(&pattern)?
                .replace_all(&content, replacement.as_str())
                .into_owned();
        }
    }

    Ok(content)
}

/// Replace mapped `.class` and `#id` selector tokens in CSS content.
///
/// The trailing character that anchors the match (whitespace, `{`, `:`, `,`)
/// is preserved via a capture group.
pub fn rewrite_css(content: &str, replacements: &ReplacementMap) -> Result<String> {
    let mut content = content.to_string();

    for (old, new) in replacements {
        let old = regex::escape(old);

        content = Regex::new(&format!(r"\.{old}(\s|[{{:,])"))?
            .replace_all(&content, format!(".{new}$1").as_str())
            .into_owned();
        content = Regex::new(&format!(r"#{old}(\s|[{{:,])"))?
            .replace_all(&content, format!("#{new}$1").as_str())
            .into_owned();
    }

    Ok(content)
}
