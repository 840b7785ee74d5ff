//! Message types and core domain identifiers for topic and queue operations.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Attribute key/value pairs attached to messages, topics, and queues
pub type AttributeMap = HashMap<String, String>;

// ============================================================================
// Core Domain Identifiers
// ============================================================================

/// Resource name of a publish/subscribe topic
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopicArn(String);

impl TopicArn {
    /// Create new topic identifier with validation
    pub fn new(arn: String) -> Result<Self, ValidationError> {
        if arn.is_empty() {
            return Err(ValidationError::Required {
                field: "topic_arn".to_string(),
            });
        }

        if !arn.chars().all(|c| c.is_ascii() && !c.is_ascii_control() && c != ' ') {
            return Err(ValidationError::InvalidFormat {
                field: "topic_arn".to_string(),
                message: "only non-space ASCII printable characters allowed".to_string(),
            });
        }

        Ok(Self(arn))
    }

    /// Get topic identifier as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TopicArn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TopicArn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// Validated queue name with length and character restrictions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueueName(String);

impl QueueName {
    /// Create new queue name with validation
    pub fn new(name: String) -> Result<Self, ValidationError> {
        if name.is_empty() || name.len() > 120 {
            return Err(ValidationError::OutOfRange {
                field: "queue_name".to_string(),
                message: "must be 1-120 characters".to_string(),
            });
        }

        // ASCII alphanumeric, hyphens, underscores; a trailing ".fifo"
        // suffix marks ordered queues.
        let base = name.strip_suffix(".fifo").unwrap_or(name.as_str());
        if base.is_empty()
            || !base
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::InvalidFormat {
                field: "queue_name".to_string(),
                message: "only ASCII alphanumeric, hyphens, and underscores allowed".to_string(),
            });
        }

        Ok(Self(name))
    }

    /// Check if queue is an ordered (FIFO) queue
    pub fn is_fifo(&self) -> bool {
        self.0.ends_with(".fifo")
    }

    /// Get queue name as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QueueName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QueueName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// Resolved address of a queue, as returned by the queue service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueueUrl(String);

impl QueueUrl {
    /// Create new queue URL with validation
    pub fn new(url: String) -> Result<Self, ValidationError> {
        if url.is_empty() {
            return Err(ValidationError::Required {
                field: "queue_url".to_string(),
            });
        }

        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ValidationError::InvalidFormat {
                field: "queue_url".to_string(),
                message: "must be an http(s) URL".to_string(),
            });
        }

        Ok(Self(url))
    }

    /// Get queue URL as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QueueUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QueueUrl {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// Unique identifier assigned to a message by the service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(String);

impl MessageId {
    /// Generate new random message ID (test fixtures and local transports)
    pub fn new() -> Self {
        let id = uuid::Uuid::new_v4();
        Self(id.to_string())
    }

    /// Get message ID as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MessageId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "message_id".to_string(),
            });
        }

        Ok(Self(s.to_string()))
    }
}

/// Opaque token for deleting a received message
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptHandle(String);

impl ReceiptHandle {
    /// Create new receipt handle with validation
    pub fn new(handle: String) -> Result<Self, ValidationError> {
        if handle.is_empty() {
            return Err(ValidationError::Required {
                field: "receipt_handle".to_string(),
            });
        }

        Ok(Self(handle))
    }

    /// Get handle string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ReceiptHandle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

// ============================================================================
// Operation Results
// ============================================================================

/// Service acknowledgement for a published topic message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishReceipt {
    pub message_id: MessageId,
    /// Sequence number assigned on ordered topics
    pub sequence_number: Option<String>,
}

/// Service acknowledgement for a sent queue message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub message_id: MessageId,
    /// Sequence number assigned on ordered queues
    pub sequence_number: Option<String>,
}

/// A message received from a queue with its delivery metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedMessage {
    pub message_id: MessageId,
    /// Opaque text payload
    pub body: String,
    pub attributes: AttributeMap,
    pub system_attributes: AttributeMap,
    pub receipt_handle: ReceiptHandle,
}

impl ReceivedMessage {
    /// Get receipt handle for deletion
    pub fn receipt_handle(&self) -> &ReceiptHandle {
        &self.receipt_handle
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
