//! Transport traits implemented by service-specific backends.
//!
//! The clients in this crate resolve options and synthesize requests; the
//! network round trip itself belongs to an implementation of one of these
//! traits. Transport errors pass through the clients unchanged.

use crate::error::CourierError;
use crate::message::{AttributeMap, PublishReceipt, QueueUrl, ReceivedMessage, SendReceipt};
use crate::request::{
    DeleteMessageRequest, PublishRequest, QueueAttributesRequest, QueueUrlRequest,
    ReceiveMessageRequest, SendMessageRequest, TopicAttributesRequest,
};
use async_trait::async_trait;

/// Wire operations against a publish/subscribe topic service
#[async_trait]
pub trait TopicTransport: Send + Sync {
    /// Publish single message to a topic
    async fn publish(&self, request: PublishRequest) -> Result<PublishReceipt, CourierError>;

    /// Look up topic attributes
    async fn topic_attributes(
        &self,
        request: TopicAttributesRequest,
    ) -> Result<AttributeMap, CourierError>;
}

/// Wire operations against a point-to-point queue service
#[async_trait]
pub trait QueueTransport: Send + Sync {
    /// Resolve queue name to its URL
    async fn queue_url(&self, request: QueueUrlRequest) -> Result<QueueUrl, CourierError>;

    /// Send single message to a queue
    async fn send_message(&self, request: SendMessageRequest)
        -> Result<SendReceipt, CourierError>;

    /// Receive messages from a queue (long poll)
    async fn receive_messages(
        &self,
        request: ReceiveMessageRequest,
    ) -> Result<Vec<ReceivedMessage>, CourierError>;

    /// Look up queue attributes
    async fn queue_attributes(
        &self,
        request: QueueAttributesRequest,
    ) -> Result<AttributeMap, CourierError>;

    /// Delete a received message
    async fn delete_message(&self, request: DeleteMessageRequest) -> Result<(), CourierError>;
}
