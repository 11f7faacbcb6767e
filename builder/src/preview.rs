//! Single-document preview of a generated project

use crate::error::{BuilderError, Result};
use crate::generator::{MARKUP_FILE, SCRIPT_FILE, STYLESHEET_FILE};
use crate::project::GeneratedProject;

/// Inline the stylesheet before `</head>` and the script before `</body>`.
pub fn render_preview(project: &GeneratedProject) -> Result<String> {
    let file = |name: &str| {
        project
            .files
            .get(name)
            .ok_or_else(|| BuilderError::MissingFile(name.to_string()))
    };
    let markup = file(MARKUP_FILE)?;
    let css = file(STYLESHEET_FILE)?;
    let js = file(SCRIPT_FILE)?;

    Ok(markup
        .replacen("</head>", &format!("<style>{css}</style></head>"), 1)
        .replacen("</body>", &format!("<script>{js}</script></body>"), 1))
}
