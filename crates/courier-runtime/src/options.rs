//! Option sets for publish, send, and receive operations, and the rules for
//! resolving them against client defaults.
//!
//! Each option set is a flat record whose fields default to their unset
//! state. For every call the client resolves one effective option set from
//! the call-supplied overrides and its own defaults; resolution is a pure
//! function and never touches the stored defaults.

use crate::message::AttributeMap;
use crate::zero::IsUnset;
use chrono::Duration;

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;

// ============================================================================
// Library Defaults
// ============================================================================

/// Attribute name wildcard requesting every attribute
pub const ALL_ATTRIBUTES: &str = "All";

/// Maximum number of messages fetched per receive unless overridden
pub const DEFAULT_RECEIVE_MAX_MESSAGES: u32 = 1;

/// Long-poll wait applied to receives unless overridden, in seconds
pub const DEFAULT_RECEIVE_WAIT_TIME_SECONDS: u32 = 20;

/// Deadline applied to every call kind unless overridden
pub fn default_call_timeout() -> Duration {
    Duration::seconds(5)
}

/// Deadline for publish calls installed on a new topic client
pub fn default_publish_timeout() -> Duration {
    Duration::seconds(5)
}

/// Deadline for send calls installed on a new queue client
pub fn default_send_timeout() -> Duration {
    Duration::seconds(5)
}

// ============================================================================
// Option Resolution
// ============================================================================

/// Per-field resolution of a call option set against a default option set
pub trait MergeDefaults: Sized {
    /// Produce the effective option set for one call.
    ///
    /// Scalar and identifier fields keep the call value whenever it is set;
    /// unset fields take the default. Collection fields follow the same rule
    /// unless `append_collections` is on, in which case a set call collection
    /// is combined with the default one: map entries from the default are
    /// copied in and overwrite colliding call keys (the defaults act as an
    /// enforced baseline), list entries from the default are appended after
    /// the call's own, duplicates included.
    fn merged_with(&self, defaults: &Self, append_collections: bool) -> Self;
}

/// Resolve the effective option set for one call
///
/// Absent call options resolve to a copy of the defaults; otherwise the call
/// options are merged per [`MergeDefaults`].
pub fn resolve_options<O>(call: Option<O>, defaults: &O, append_collections: bool) -> O
where
    O: MergeDefaults + Clone,
{
    match call {
        Some(options) => options.merged_with(defaults, append_collections),
        None => defaults.clone(),
    }
}

fn merge_scalar<T: IsUnset + Clone>(call: &mut T, default: &T) {
    if call.is_unset() {
        *call = default.clone();
    }
}

fn merge_map(call: &mut AttributeMap, default: &AttributeMap, append: bool) {
    if call.is_unset() {
        *call = default.clone();
    } else if append {
        // Default entries win on key collision.
        for (key, value) in default {
            call.insert(key.clone(), value.clone());
        }
    }
}

fn merge_list(call: &mut Vec<String>, default: &[String], append: bool) {
    if call.is_unset() {
        *call = default.to_vec();
    } else if append {
        call.extend(default.iter().cloned());
    }
}

// ============================================================================
// Publish Options
// ============================================================================

/// Optional settings for publishing a message to a topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOptions {
    /// Attributes attached to the published message
    pub message_attributes: AttributeMap,
    /// Deduplication ID for ordered topics
    pub deduplication_id: Option<String>,
    /// Group ID for ordered topics
    pub group_id: Option<String>,
    /// Deadline for this call; unset falls back to the client default
    pub timeout: Duration,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            message_attributes: AttributeMap::new(),
            deduplication_id: None,
            group_id: None,
            timeout: Duration::zero(),
        }
    }
}

impl PublishOptions {
    /// Create new publish options with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Default option set installed on a new topic client
    pub fn baseline() -> Self {
        Self {
            timeout: default_publish_timeout(),
            ..Self::default()
        }
    }

    /// Add a message attribute
    pub fn with_attribute(mut self, key: String, value: String) -> Self {
        self.message_attributes.insert(key, value);
        self
    }

    /// Set deduplication ID
    pub fn with_deduplication_id(mut self, id: String) -> Self {
        self.deduplication_id = Some(id);
        self
    }

    /// Set group ID
    pub fn with_group_id(mut self, id: String) -> Self {
        self.group_id = Some(id);
        self
    }

    /// Set call deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl IsUnset for PublishOptions {
    fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

impl MergeDefaults for PublishOptions {
    fn merged_with(&self, defaults: &Self, append_collections: bool) -> Self {
        let mut effective = self.clone();
        merge_scalar(&mut effective.timeout, &defaults.timeout);
        merge_map(
            &mut effective.message_attributes,
            &defaults.message_attributes,
            append_collections,
        );
        merge_scalar(&mut effective.group_id, &defaults.group_id);
        merge_scalar(&mut effective.deduplication_id, &defaults.deduplication_id);
        effective
    }
}

// ============================================================================
// Send Options
// ============================================================================

/// Optional settings for sending a message to a queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOptions {
    /// Delivery delay in seconds
    pub delay_seconds: u32,
    /// Attributes attached to the sent message
    pub message_attributes: AttributeMap,
    /// System attributes attached to the sent message
    pub system_attributes: AttributeMap,
    /// Deduplication ID for ordered queues
    pub deduplication_id: Option<String>,
    /// Group ID for ordered queues
    pub group_id: Option<String>,
    /// Deadline for this call; unset falls back to the client default
    pub timeout: Duration,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            delay_seconds: 0,
            message_attributes: AttributeMap::new(),
            system_attributes: AttributeMap::new(),
            deduplication_id: None,
            group_id: None,
            timeout: Duration::zero(),
        }
    }
}

impl SendOptions {
    /// Create new send options with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Default option set installed on a new queue client
    pub fn baseline() -> Self {
        Self {
            timeout: default_send_timeout(),
            ..Self::default()
        }
    }

    /// Set delivery delay in seconds
    pub fn with_delay_seconds(mut self, delay: u32) -> Self {
        self.delay_seconds = delay;
        self
    }

    /// Add a message attribute
    pub fn with_attribute(mut self, key: String, value: String) -> Self {
        self.message_attributes.insert(key, value);
        self
    }

    /// Add a system attribute
    pub fn with_system_attribute(mut self, key: String, value: String) -> Self {
        self.system_attributes.insert(key, value);
        self
    }

    /// Set deduplication ID
    pub fn with_deduplication_id(mut self, id: String) -> Self {
        self.deduplication_id = Some(id);
        self
    }

    /// Set group ID
    pub fn with_group_id(mut self, id: String) -> Self {
        self.group_id = Some(id);
        self
    }

    /// Set call deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl IsUnset for SendOptions {
    fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

impl MergeDefaults for SendOptions {
    fn merged_with(&self, defaults: &Self, append_collections: bool) -> Self {
        let mut effective = self.clone();
        merge_scalar(&mut effective.timeout, &defaults.timeout);
        merge_scalar(&mut effective.delay_seconds, &defaults.delay_seconds);
        merge_map(
            &mut effective.message_attributes,
            &defaults.message_attributes,
            append_collections,
        );
        merge_map(
            &mut effective.system_attributes,
            &defaults.system_attributes,
            append_collections,
        );
        merge_scalar(&mut effective.group_id, &defaults.group_id);
        merge_scalar(&mut effective.deduplication_id, &defaults.deduplication_id);
        effective
    }
}

// ============================================================================
// Receive Options
// ============================================================================

/// Optional settings for receiving messages from a queue
///
/// Receives carry no per-call deadline; the long-poll wait time governs how
/// long the service holds the request open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReceiveOptions {
    /// Maximum number of messages returned in one call
    pub max_messages: u32,
    /// Message attribute names to request; `["All"]` requests every attribute
    pub attribute_names: Vec<String>,
    /// System attribute names to request
    pub system_attribute_names: Vec<String>,
    /// Visibility timeout applied to received messages, in seconds
    pub visibility_timeout: u32,
    /// Long-poll wait time, in seconds
    pub wait_time_seconds: u32,
}

impl ReceiveOptions {
    /// Create new receive options with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Default option set installed on a new queue client: one message per
    /// call, 20 second long poll, all attributes and system attributes.
    pub fn baseline() -> Self {
        Self {
            max_messages: DEFAULT_RECEIVE_MAX_MESSAGES,
            attribute_names: vec![ALL_ATTRIBUTES.to_string()],
            system_attribute_names: vec![ALL_ATTRIBUTES.to_string()],
            visibility_timeout: 0,
            wait_time_seconds: DEFAULT_RECEIVE_WAIT_TIME_SECONDS,
        }
    }

    /// Set maximum number of messages per call
    pub fn with_max_messages(mut self, max: u32) -> Self {
        self.max_messages = max;
        self
    }

    /// Request a specific message attribute by name
    pub fn with_attribute_name(mut self, name: String) -> Self {
        self.attribute_names.push(name);
        self
    }

    /// Request a specific system attribute by name
    pub fn with_system_attribute_name(mut self, name: String) -> Self {
        self.system_attribute_names.push(name);
        self
    }

    /// Set visibility timeout in seconds
    pub fn with_visibility_timeout(mut self, seconds: u32) -> Self {
        self.visibility_timeout = seconds;
        self
    }

    /// Set long-poll wait time in seconds
    pub fn with_wait_time_seconds(mut self, seconds: u32) -> Self {
        self.wait_time_seconds = seconds;
        self
    }
}

impl IsUnset for ReceiveOptions {
    fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

impl MergeDefaults for ReceiveOptions {
    fn merged_with(&self, defaults: &Self, append_collections: bool) -> Self {
        let mut effective = self.clone();
        merge_scalar(&mut effective.max_messages, &defaults.max_messages);
        merge_list(
            &mut effective.attribute_names,
            &defaults.attribute_names,
            append_collections,
        );
        merge_list(
            &mut effective.system_attribute_names,
            &defaults.system_attribute_names,
            append_collections,
        );
        merge_scalar(&mut effective.visibility_timeout, &defaults.visibility_timeout);
        merge_scalar(&mut effective.wait_time_seconds, &defaults.wait_time_seconds);
        effective
    }
}
