// src/document.rs
use std::io::Read;
use std::path::Path;

use crate::error::{AppError, Result};

/// Immutable snapshot of the document under analysis: the full text plus
/// metadata that the analyzer itself never looks at.
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    pub name: String,
    pub path: String,
    pub ext: String,
    pub language_id: String,
}

impl Document {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::DocumentRead {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();
        let language_id = language_id(&ext).to_string();

        Ok(Self {
            text,
            name,
            path: path.display().to_string(),
            ext,
            language_id,
        })
    }

    pub fn from_stdin() -> Result<Self> {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(Self {
            text,
            name: "<stdin>".to_string(),
            path: "<stdin>".to_string(),
            ext: String::new(),
            language_id: "plaintext".to_string(),
        })
    }
}

/// Map a file extension to an editor-style language id. Unknown
/// extensions fall back to `plaintext`.
pub fn language_id(ext: &str) -> &'static str {
    match ext {
        "rs" => "rust",
        "py" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "ts" => "typescript",
        "c" | "h" => "c",
        "cpp" | "cc" | "hpp" => "cpp",
        "java" => "java",
        "go" => "go",
        "rb" => "ruby",
        "sh" | "bash" => "shellscript",
        "md" => "markdown",
        "html" | "htm" => "html",
        "css" => "css",
        "json" => "json",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        _ => "plaintext",
    }
}
