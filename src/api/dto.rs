use serde::{Deserialize, Serialize};

use crate::inventory::PartError;
use crate::model::{Money, Part, PartForm, PartId, PartUpdate};

// -------------------------
// Request DTOs
// -------------------------

/// One operation against the session, tagged by `op`.
///
/// ```json
/// {"op":"search","query":"brake"}
/// {"op":"update","part_id":"P1","update":{"quantity":10}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Add { part: Part },
    AddForm { form: PartForm },
    List,
    Total,
    Search {
        #[serde(default)]
        query: String,
    },
    Get { part_id: PartId },
    Ids,
    Update {
        part_id: PartId,
        #[serde(default)]
        update: PartUpdate,
    },
    Delete { part_id: PartId },
}

// -------------------------
// Response DTOs
// -------------------------

/// User-facing outcome of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    ValidationWarning,
    NotFound,
    Error,
}

impl From<&PartError> for Status {
    fn from(e: &PartError) -> Self {
        match e {
            PartError::Validation { .. }
            | PartError::DuplicateId(_)
            | PartError::InvalidNumber { .. }
            | PartError::UnknownCategory(_) => Status::ValidationWarning,
            PartError::NotFound(_) => Status::NotFound,
            PartError::ActorCommunicationError(_) => Status::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: Status,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part: Option<Part>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<PartId>>,
}

impl Response {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            parts: None,
            part: None,
            total: None,
            ids: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Status::Success, message)
    }

    pub fn with_parts(mut self, parts: Vec<Part>) -> Self {
        self.parts = Some(parts);
        self
    }

    pub fn with_part(mut self, part: Part) -> Self {
        self.part = Some(part);
        self
    }

    pub fn with_total(mut self, total: Money) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_ids(mut self, ids: Vec<PartId>) -> Self {
        self.ids = Some(ids);
        self
    }
}

impl From<PartError> for Response {
    fn from(e: PartError) -> Self {
        let message = match &e {
            PartError::Validation { .. } => "Please enter both Part ID and Part Name.".to_string(),
            other => other.to_string(),
        };
        Response::new(Status::from(&e), message)
    }
}
