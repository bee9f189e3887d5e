//! The uniform success/error envelope returned by every generator.

use serde::Serialize;

/// Status kind carried by an [`Outcome`], mirroring the transport statuses
/// upstream collaborators map it to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    Unprocessable,
    Internal,
    NotFound,
}

/// Metadata attached to a successfully generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMetadata {
    pub filename: String,
    pub content_type: String,
}

impl DocumentMetadata {
    pub fn pdf(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content_type: "application/pdf".to_string(),
        }
    }
}

/// Success-or-error envelope. Every generator (and the supplemental
/// services) returns one of these rather than surfacing raw errors, so
/// callers consume a single shape.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome<T = Vec<u8>> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
    pub status: Status,
}

impl<T> Outcome<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            metadata: None,
            status: Status::Ok,
        }
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn error(message: impl Into<String>, status: Status) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            metadata: None,
            status,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_data_and_ok_status() {
        let outcome = Outcome::success(vec![1u8, 2, 3]).with_metadata(DocumentMetadata::pdf("x.pdf"));
        assert!(outcome.is_success());
        assert_eq!(outcome.status, Status::Ok);
        assert_eq!(outcome.metadata.unwrap().content_type, "application/pdf");
    }

    #[test]
    fn error_serializes_status_snake_case() {
        let outcome: Outcome = Outcome::error("nope", Status::Unprocessable);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "unprocessable");
        assert_eq!(json["success"], false);
        assert!(json.get("data").is_none());
    }
}
