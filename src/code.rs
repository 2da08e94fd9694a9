//! Code projects shown as multi-file `code-project` media items.

use serde::{Deserialize, Serialize};

use crate::ids::{id_or_generate, IdGenerator};
use crate::types::{CodeLanguage, Identifier};

/// A set of source files presented together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeProject {
    /// Unique identifier.
    pub id: Identifier,
    /// Project title.
    pub title: String,
    /// Files in display order.
    pub files: Vec<CodeFile>,
}

/// One file of a code project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFile {
    /// Unique identifier.
    pub id: Identifier,
    /// File name.
    pub name: String,
    /// Source language.
    pub language: CodeLanguage,
    /// Raw file text.
    pub content: String,
}

/// How the host first shows a code project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// File list with summary.
    #[default]
    Overview,
    /// Single file in the editor.
    Editor,
    /// Rendered output.
    Preview,
}

/// Project description as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeProjectInput {
    /// Project title, also used as the media item name.
    pub title: String,
    /// Files in display order.
    pub files: Vec<CodeFileInput>,
    /// Initial view; defaults to overview.
    pub view_mode: Option<ViewMode>,
}

/// File description as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFileInput {
    /// Kept when set and non-empty.
    pub id: Option<Identifier>,
    /// File name.
    pub name: String,
    /// Source language.
    pub language: CodeLanguage,
    /// Raw file text.
    pub content: String,
}

impl CodeFileInput {
    /// File without a preset identifier.
    pub fn new(name: impl Into<String>, language: CodeLanguage, content: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            language,
            content: content.into(),
        }
    }
}

impl CodeProjectInput {
    /// Project description with the default view.
    pub fn new(title: impl Into<String>, files: Vec<CodeFileInput>) -> Self {
        Self { title: title.into(), files, view_mode: None }
    }

    /// Assign identifiers. The project id is always fresh.
    pub fn into_project(self, ids: &dyn IdGenerator) -> (CodeProject, ViewMode) {
        let project = CodeProject {
            id: ids.next_id(),
            title: self.title,
            files: self
                .files
                .into_iter()
                .map(|f| CodeFile {
                    id: id_or_generate(ids, f.id),
                    name: f.name,
                    language: f.language,
                    content: f.content,
                })
                .collect(),
        };
        (project, self.view_mode.unwrap_or_default())
    }
}
