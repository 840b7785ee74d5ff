//! Outbound request synthesis.
//!
//! Effective options plus the mandatory call arguments become one
//! protocol-level request per operation. Optional fields are carried only
//! when set so the service applies its own defaults to everything omitted.
//! Synthesis is pure; no I/O happens here.

use crate::message::{AttributeMap, QueueName, QueueUrl, ReceivedMessage, ReceiptHandle, TopicArn};
use crate::options::{PublishOptions, ReceiveOptions, SendOptions, ALL_ATTRIBUTES};
use crate::zero::IsUnset;

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;

/// Outbound request for publishing a message to a topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub topic_arn: TopicArn,
    pub message: String,
    pub message_attributes: Option<AttributeMap>,
    pub deduplication_id: Option<String>,
    pub group_id: Option<String>,
}

impl PublishRequest {
    /// Build publish request from mandatory fields and effective options
    pub fn build(topic: &TopicArn, message: &str, options: Option<&PublishOptions>) -> Self {
        let mut request = Self {
            topic_arn: topic.clone(),
            message: message.to_string(),
            message_attributes: None,
            deduplication_id: None,
            group_id: None,
        };

        let Some(options) = options else {
            return request;
        };

        if !options.message_attributes.is_unset() {
            request.message_attributes = Some(options.message_attributes.clone());
        }
        if !options.group_id.is_unset() {
            request.group_id = options.group_id.clone();
        }
        if !options.deduplication_id.is_unset() {
            request.deduplication_id = options.deduplication_id.clone();
        }

        request
    }
}

/// Outbound request for looking up topic attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicAttributesRequest {
    pub topic_arn: TopicArn,
}

impl TopicAttributesRequest {
    pub fn new(topic: &TopicArn) -> Self {
        Self {
            topic_arn: topic.clone(),
        }
    }
}

/// Outbound request for resolving a queue name to its URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueUrlRequest {
    pub queue_name: QueueName,
    pub owner_account_id: String,
}

impl QueueUrlRequest {
    pub fn new(queue_name: &QueueName, owner_account_id: &str) -> Self {
        Self {
            queue_name: queue_name.clone(),
            owner_account_id: owner_account_id.to_string(),
        }
    }
}

/// Outbound request for sending a message to a queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageRequest {
    pub queue_url: QueueUrl,
    pub message_body: String,
    pub delay_seconds: Option<u32>,
    pub message_attributes: Option<AttributeMap>,
    pub system_attributes: Option<AttributeMap>,
    pub deduplication_id: Option<String>,
    pub group_id: Option<String>,
}

impl SendMessageRequest {
    /// Build send request from mandatory fields and effective options
    pub fn build(queue_url: &QueueUrl, message: &str, options: Option<&SendOptions>) -> Self {
        let mut request = Self {
            queue_url: queue_url.clone(),
            message_body: message.to_string(),
            delay_seconds: None,
            message_attributes: None,
            system_attributes: None,
            deduplication_id: None,
            group_id: None,
        };

        let Some(options) = options else {
            return request;
        };

        if !options.delay_seconds.is_unset() {
            request.delay_seconds = Some(options.delay_seconds);
        }
        if !options.message_attributes.is_unset() {
            request.message_attributes = Some(options.message_attributes.clone());
        }
        if !options.system_attributes.is_unset() {
            request.system_attributes = Some(options.system_attributes.clone());
        }
        if !options.group_id.is_unset() {
            request.group_id = options.group_id.clone();
        }
        if !options.deduplication_id.is_unset() {
            request.deduplication_id = options.deduplication_id.clone();
        }

        request
    }
}

/// Outbound request for receiving messages from a queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiveMessageRequest {
    pub queue_url: QueueUrl,
    pub max_messages: Option<u32>,
    pub attribute_names: Option<Vec<String>>,
    pub system_attribute_names: Option<Vec<String>>,
    pub visibility_timeout: Option<u32>,
    pub wait_time_seconds: Option<u32>,
}

impl ReceiveMessageRequest {
    /// Build receive request from the queue URL and effective options
    pub fn build(queue_url: &QueueUrl, options: Option<&ReceiveOptions>) -> Self {
        let mut request = Self {
            queue_url: queue_url.clone(),
            max_messages: None,
            attribute_names: None,
            system_attribute_names: None,
            visibility_timeout: None,
            wait_time_seconds: None,
        };

        let Some(options) = options else {
            return request;
        };

        if !options.max_messages.is_unset() {
            request.max_messages = Some(options.max_messages);
        }
        if !options.attribute_names.is_unset() {
            request.attribute_names = Some(options.attribute_names.clone());
        }
        if !options.system_attribute_names.is_unset() {
            request.system_attribute_names = Some(options.system_attribute_names.clone());
        }
        if !options.visibility_timeout.is_unset() {
            request.visibility_timeout = Some(options.visibility_timeout);
        }
        if !options.wait_time_seconds.is_unset() {
            request.wait_time_seconds = Some(options.wait_time_seconds);
        }

        request
    }
}

/// Outbound request for looking up queue attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueAttributesRequest {
    pub queue_url: QueueUrl,
    pub attribute_names: Vec<String>,
}

impl QueueAttributesRequest {
    /// Build attribute lookup request; an empty name list requests all
    /// attributes.
    pub fn new(queue_url: &QueueUrl, attribute_names: &[String]) -> Self {
        let attribute_names = if attribute_names.is_empty() {
            vec![ALL_ATTRIBUTES.to_string()]
        } else {
            attribute_names.to_vec()
        };

        Self {
            queue_url: queue_url.clone(),
            attribute_names,
        }
    }
}

/// Outbound request for deleting a received message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteMessageRequest {
    pub queue_url: QueueUrl,
    pub receipt_handle: ReceiptHandle,
}

impl DeleteMessageRequest {
    pub fn new(queue_url: &QueueUrl, message: &ReceivedMessage) -> Self {
        Self {
            queue_url: queue_url.clone(),
            receipt_handle: message.receipt_handle().clone(),
        }
    }
}
