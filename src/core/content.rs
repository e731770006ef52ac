//! Compiled-in reference content: the four Paanini documents and the Home page copy.

use crate::core::document::Document;

/// Markdown body of the Home view (hero, install, features, examples, keyword table).
pub const HOME: &str = include_str!("../../content/home.md");

pub const HERO_TITLE: &str = "पाणिनि (Paanini)";
pub const HERO_SUBTITLE: &str = "Sanskrit Programming Language";

const BUILTIN: [(&str, &str, &str); 4] = [
    ("intro", "Introduction", include_str!("../../content/intro.md")),
    ("guide", "Language Guide", include_str!("../../content/guide.md")),
    ("npm", "NPM Package", include_str!("../../content/npm.md")),
    ("dev", "Development Guide", include_str!("../../content/dev.md")),
];

pub fn builtin_documents() -> Vec<Document> {
    BUILTIN
        .iter()
        .map(|(id, title, content)| Document::new(*id, *title, *content))
        .collect()
}
