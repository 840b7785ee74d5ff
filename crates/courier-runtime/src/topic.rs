//! Client for publish/subscribe topic operations.

use crate::error::CourierError;
use crate::message::{AttributeMap, PublishReceipt, TopicArn};
use crate::options::{default_call_timeout, resolve_options, PublishOptions};
use crate::request::{PublishRequest, TopicAttributesRequest};
use crate::timeout::{bounded, resolve_timeout};
use crate::transport::TopicTransport;
use chrono::Duration;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[cfg(test)]
#[path = "topic_tests.rs"]
mod tests;

/// Per-client defaults consumed by every publish call
struct TopicDefaults {
    publish_options: PublishOptions,
    timeout: Duration,
    append_attributes: bool,
}

/// Client for a publish/subscribe topic service
///
/// Holds a transport plus mutable per-client defaults. Defaults live behind a
/// lock so setters may race with in-flight calls without tearing; each call
/// reads the defaults once, resolves its effective options, and never holds
/// the lock across the transport round trip.
pub struct TopicClient {
    transport: Box<dyn TopicTransport>,
    defaults: RwLock<TopicDefaults>,
}

impl TopicClient {
    /// Create new topic client over a transport
    pub fn new(transport: Box<dyn TopicTransport>) -> Self {
        Self {
            transport,
            defaults: RwLock::new(TopicDefaults {
                publish_options: PublishOptions::baseline(),
                timeout: default_call_timeout(),
                append_attributes: false,
            }),
        }
    }

    /// Replace the default publish option set
    pub fn set_default_publish_options(&self, options: PublishOptions) {
        self.write_defaults().publish_options = options;
    }

    /// Replace the default call deadline; zero disables it
    pub fn set_default_timeout(&self, timeout: Duration) {
        self.write_defaults().timeout = timeout;
    }

    /// Switch collection-valued option fields to merge instead of replace
    pub fn enable_append_attributes(&self) {
        self.write_defaults().append_attributes = true;
    }

    /// Publish a message to a topic
    ///
    /// Call options override the client defaults field by field; the call
    /// deadline comes from the effective options with the client default as
    /// fallback.
    pub async fn publish(
        &self,
        topic: &TopicArn,
        message: &str,
        options: Option<PublishOptions>,
    ) -> Result<PublishReceipt, CourierError> {
        let (effective, client_timeout) = {
            let defaults = self.read_defaults();
            let effective =
                resolve_options(options, &defaults.publish_options, defaults.append_attributes);
            (effective, defaults.timeout)
        };

        let timeout = resolve_timeout(effective.timeout, client_timeout);
        let request = PublishRequest::build(topic, message, Some(&effective));

        debug!(topic = %topic, timeout = ?timeout, "publishing message");
        bounded(timeout, self.transport.publish(request)).await
    }

    /// Look up the attributes of a topic
    ///
    /// Runs under the client default deadline.
    pub async fn topic_attributes(&self, topic: &TopicArn) -> Result<AttributeMap, CourierError> {
        let timeout = self.read_defaults().timeout;
        let request = TopicAttributesRequest::new(topic);

        debug!(topic = %topic, "looking up topic attributes");
        bounded(timeout, self.transport.topic_attributes(request)).await
    }

    fn read_defaults(&self) -> RwLockReadGuard<'_, TopicDefaults> {
        self.defaults.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_defaults(&self) -> RwLockWriteGuard<'_, TopicDefaults> {
        self.defaults
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
