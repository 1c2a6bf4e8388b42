//! Syntax-aware separator tables.
//!
//! Each profile is a priority-ordered separator list tuned to one syntax's
//! structural boundaries, coarsest first, falling back to generic whitespace
//! and the empty string ("split anywhere"). The tables are pure data consumed
//! by the recursive splitter; their ordering is deliberate and must not be
//! reshuffled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named separator table for a document syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorProfile {
    /// Markdown: headings, code fences, horizontal rules, then paragraphs.
    Markdown,
    /// HTML: block-level structural tags, coarsest container first.
    Html,
}

impl SeparatorProfile {
    /// Returns the profile's separator list, most-preferred boundary first.
    pub fn separators(&self) -> Vec<String> {
        let table: &[&str] = match self {
            Self::Markdown => &[
                // Headings, level 2 downward. A level-1 heading usually sits
                // at the very top of the document and would produce a leading
                // empty piece rather than a useful boundary.
                "\n## ",
                "\n### ",
                "\n#### ",
                "\n##### ",
                "\n###### ",
                // Closing code fence.
                "```\n\n",
                // Horizontal rules.
                "\n\n***\n\n",
                "\n\n---\n\n",
                "\n\n___\n\n",
                "\n\n",
                "\n",
                " ",
                "",
            ],
            Self::Html => &[
                "<body",
                "<div",
                "<p",
                "<br",
                "<li",
                "<h1",
                "<h2",
                "<h3",
                "<h4",
                "<h5",
                "<h6",
                "<span",
                "<table",
                "<tr",
                "<td",
                "<th",
                "<ul",
                "<ol",
                "<header",
                "<footer",
                "<nav",
                "<head",
                "<style",
                "<script",
                "<meta",
                "<title",
                "",
            ],
        };
        table.iter().map(|s| (*s).to_string()).collect()
    }
}

impl fmt::Display for SeparatorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => f.write_str("markdown"),
            Self::Html => f.write_str("html"),
        }
    }
}

impl FromStr for SeparatorProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            other => Err(format!("unknown separator profile '{other}'")),
        }
    }
}
