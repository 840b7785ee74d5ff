//! Client for point-to-point queue operations.

use crate::error::CourierError;
use crate::message::{AttributeMap, QueueName, QueueUrl, ReceivedMessage, SendReceipt};
use crate::options::{default_call_timeout, resolve_options, ReceiveOptions, SendOptions};
use crate::request::{
    DeleteMessageRequest, QueueAttributesRequest, QueueUrlRequest, ReceiveMessageRequest,
    SendMessageRequest,
};
use crate::timeout::{bounded, resolve_timeout};
use crate::transport::QueueTransport;
use chrono::Duration;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;

/// Per-client defaults consumed by send and receive calls
struct QueueDefaults {
    send_options: SendOptions,
    receive_options: ReceiveOptions,
    timeout: Duration,
    append_attributes: bool,
}

/// Client for a point-to-point queue service
///
/// Holds a transport plus mutable per-client defaults. Defaults live behind a
/// lock so setters may race with in-flight calls without tearing; each call
/// reads the defaults once, resolves its effective options, and never holds
/// the lock across the transport round trip.
pub struct QueueClient {
    transport: Box<dyn QueueTransport>,
    defaults: RwLock<QueueDefaults>,
}

impl QueueClient {
    /// Create new queue client over a transport
    pub fn new(transport: Box<dyn QueueTransport>) -> Self {
        Self {
            transport,
            defaults: RwLock::new(QueueDefaults {
                send_options: SendOptions::baseline(),
                receive_options: ReceiveOptions::baseline(),
                timeout: default_call_timeout(),
                append_attributes: false,
            }),
        }
    }

    /// Replace the default send option set
    pub fn set_default_send_options(&self, options: SendOptions) {
        self.write_defaults().send_options = options;
    }

    /// Replace the default receive option set
    pub fn set_default_receive_options(&self, options: ReceiveOptions) {
        self.write_defaults().receive_options = options;
    }

    /// Replace the default call deadline; zero disables it
    pub fn set_default_timeout(&self, timeout: Duration) {
        self.write_defaults().timeout = timeout;
    }

    /// Switch collection-valued option fields to merge instead of replace
    pub fn enable_append_attributes(&self) {
        self.write_defaults().append_attributes = true;
    }

    /// Resolve a queue name to its URL
    ///
    /// Runs under the client default deadline.
    pub async fn queue_url(
        &self,
        queue_name: &QueueName,
        owner_account_id: &str,
    ) -> Result<QueueUrl, CourierError> {
        let timeout = self.read_defaults().timeout;
        let request = QueueUrlRequest::new(queue_name, owner_account_id);

        debug!(queue = %queue_name, "resolving queue URL");
        bounded(timeout, self.transport.queue_url(request)).await
    }

    /// Send a message to a queue
    ///
    /// Call options override the client defaults field by field; the call
    /// deadline comes from the effective options with the client default as
    /// fallback.
    pub async fn send_message(
        &self,
        queue_url: &QueueUrl,
        message: &str,
        options: Option<SendOptions>,
    ) -> Result<SendReceipt, CourierError> {
        let (effective, client_timeout) = {
            let defaults = self.read_defaults();
            let effective =
                resolve_options(options, &defaults.send_options, defaults.append_attributes);
            (effective, defaults.timeout)
        };

        let timeout = resolve_timeout(effective.timeout, client_timeout);
        let request = SendMessageRequest::build(queue_url, message, Some(&effective));

        debug!(queue_url = %queue_url, timeout = ?timeout, "sending message");
        bounded(timeout, self.transport.send_message(request)).await
    }

    /// Receive messages from a queue
    ///
    /// The long-poll wait time routinely exceeds the client default deadline,
    /// so receives run under the caller's own task with no deadline of their
    /// own; the wait-time option governs how long the service holds the
    /// request open.
    pub async fn receive_messages(
        &self,
        queue_url: &QueueUrl,
        options: Option<ReceiveOptions>,
    ) -> Result<Vec<ReceivedMessage>, CourierError> {
        let effective = {
            let defaults = self.read_defaults();
            resolve_options(options, &defaults.receive_options, defaults.append_attributes)
        };

        let request = ReceiveMessageRequest::build(queue_url, Some(&effective));

        debug!(queue_url = %queue_url, wait = effective.wait_time_seconds, "receiving messages");
        self.transport.receive_messages(request).await
    }

    /// Look up the attributes of a queue
    ///
    /// An empty name list requests all attributes. Runs under the client
    /// default deadline.
    pub async fn queue_attributes(
        &self,
        queue_url: &QueueUrl,
        attribute_names: &[String],
    ) -> Result<AttributeMap, CourierError> {
        let timeout = self.read_defaults().timeout;
        let request = QueueAttributesRequest::new(queue_url, attribute_names);

        debug!(queue_url = %queue_url, "looking up queue attributes");
        bounded(timeout, self.transport.queue_attributes(request)).await
    }

    /// Delete a received message from a queue
    ///
    /// Runs under the client default deadline.
    pub async fn delete_message(
        &self,
        queue_url: &QueueUrl,
        message: &ReceivedMessage,
    ) -> Result<(), CourierError> {
        let timeout = self.read_defaults().timeout;
        let request = DeleteMessageRequest::new(queue_url, message);

        debug!(queue_url = %queue_url, message_id = %message.message_id, "deleting message");
        bounded(timeout, self.transport.delete_message(request)).await
    }

    fn read_defaults(&self) -> RwLockReadGuard<'_, QueueDefaults> {
        self.defaults.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_defaults(&self) -> RwLockWriteGuard<'_, QueueDefaults> {
        self.defaults
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
