//! # Courier Runtime
//!
//! Defaults-aware client layer over two managed messaging primitives: a
//! publish/subscribe topic service and a point-to-point queue service.
//!
//! Callers supply only the options that differ from sensible defaults; the
//! library resolves, for every call, which value wins among the library-wide
//! default, the per-client default, and the per-call override, then
//! synthesizes the outbound request and bounds the transport round trip with
//! a deadline.
//!
//! ## Module Organization
//!
//! - [error] - Error types for all operations
//! - [message] - Identifiers, receipts, and received messages
//! - [zero] - Unset-value detection for option fields
//! - [options] - Option sets and default-resolution rules
//! - [request] - Outbound request synthesis
//! - [timeout] - Deadline resolution and bounded execution
//! - [transport] - Traits implemented by service-specific backends
//! - [topic] - Topic client
//! - [queue] - Queue client

// Module declarations
pub mod error;
pub mod message;
pub mod options;
pub mod queue;
pub mod request;
pub mod timeout;
pub mod topic;
pub mod transport;
pub mod zero;

// Re-export commonly used types at crate root for convenience
pub use error::{CourierError, ValidationError};
pub use message::{
    AttributeMap, MessageId, PublishReceipt, QueueName, QueueUrl, ReceiptHandle, ReceivedMessage,
    SendReceipt, TopicArn,
};
pub use options::{
    default_call_timeout, resolve_options, MergeDefaults, PublishOptions, ReceiveOptions,
    SendOptions, ALL_ATTRIBUTES,
};
pub use queue::QueueClient;
pub use timeout::{bounded, resolve_timeout};
pub use topic::TopicClient;
pub use transport::{QueueTransport, TopicTransport};
pub use zero::IsUnset;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
