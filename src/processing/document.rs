//! Document structures

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub file_path: String,
    pub document_type: DocumentType,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Resume,
    JobDescription,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub word_count: usize,
    pub character_count: usize,
}

impl Document {
    pub fn new(content: String, file_path: String, document_type: DocumentType) -> Self {
        let word_count = content.split_whitespace().count();
        let character_count = content.chars().count();

        Self {
            content,
            file_path,
            document_type,
            metadata: DocumentMetadata {
                word_count,
                character_count,
            },
        }
    }

    /// File name without directories, or the full path if it has none
    pub fn file_name(&self) -> String {
        Path::new(&self.file_path)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.file_path.clone())
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DocumentType::Resume => write!(f, "Resume"),
            DocumentType::JobDescription => write!(f, "Job Description"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::new(
            "Jane Roe\nRust developer".to_string(),
            "/tmp/cv/resume.txt".to_string(),
            DocumentType::Resume,
        );

        assert_eq!(doc.metadata.word_count, 4);
        assert_eq!(doc.metadata.character_count, 23);
        assert_eq!(doc.file_name(), "resume.txt");
        assert!(!doc.is_blank());
    }

    #[test]
    fn test_blank_document() {
        let doc = Document::new("  \n ".to_string(), String::new(), DocumentType::JobDescription);

        assert!(doc.is_blank());
        assert_eq!(doc.file_name(), "");
        assert_eq!(doc.document_type.to_string(), "Job Description");
    }
}
