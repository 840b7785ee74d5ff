//! Tests for the queue client.

use super::*;
use crate::message::{MessageId, ReceiptHandle};
use crate::options::ALL_ATTRIBUTES;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

// ============================================================================
// Recording Fake Transport
// ============================================================================

#[derive(Default)]
struct Recorded {
    url_lookups: Mutex<Vec<QueueUrlRequest>>,
    sends: Mutex<Vec<SendMessageRequest>>,
    receives: Mutex<Vec<ReceiveMessageRequest>>,
    attribute_lookups: Mutex<Vec<QueueAttributesRequest>>,
    deletes: Mutex<Vec<DeleteMessageRequest>>,
}

/// Fake transport that records every request and answers with canned results
#[derive(Clone, Default)]
struct FakeQueueTransport {
    recorded: Arc<Recorded>,
    delay: Option<std::time::Duration>,
}

impl FakeQueueTransport {
    fn slow(delay: std::time::Duration) -> Self {
        Self {
            recorded: Arc::default(),
            delay: Some(delay),
        }
    }

    fn last_send(&self) -> SendMessageRequest {
        self.recorded
            .sends
            .lock()
            .unwrap()
            .last()
            .expect("a send request should have been recorded")
            .clone()
    }

    fn last_receive(&self) -> ReceiveMessageRequest {
        self.recorded
            .receives
            .lock()
            .unwrap()
            .last()
            .expect("a receive request should have been recorded")
            .clone()
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl QueueTransport for FakeQueueTransport {
    async fn queue_url(&self, request: QueueUrlRequest) -> Result<QueueUrl, CourierError> {
        let url = format!(
            "https://queues.example.com/{}/{}",
            request.owner_account_id, request.queue_name
        );
        self.recorded.url_lookups.lock().unwrap().push(request);
        self.pause().await;
        Ok(QueueUrl::new(url).expect("canned URL should be valid"))
    }

    async fn send_message(
        &self,
        request: SendMessageRequest,
    ) -> Result<SendReceipt, CourierError> {
        self.recorded.sends.lock().unwrap().push(request);
        self.pause().await;
        Ok(SendReceipt {
            message_id: MessageId::new(),
            sequence_number: None,
        })
    }

    async fn receive_messages(
        &self,
        request: ReceiveMessageRequest,
    ) -> Result<Vec<ReceivedMessage>, CourierError> {
        self.recorded.receives.lock().unwrap().push(request);
        self.pause().await;
        Ok(vec![ReceivedMessage {
            message_id: MessageId::new(),
            body: "payload".to_string(),
            attributes: AttributeMap::new(),
            system_attributes: AttributeMap::new(),
            receipt_handle: ReceiptHandle::new("receipt-1".to_string()).unwrap(),
        }])
    }

    async fn queue_attributes(
        &self,
        request: QueueAttributesRequest,
    ) -> Result<AttributeMap, CourierError> {
        self.recorded.attribute_lookups.lock().unwrap().push(request);
        self.pause().await;
        let mut attributes = AttributeMap::new();
        attributes.insert("ApproximateNumberOfMessages".to_string(), "0".to_string());
        Ok(attributes)
    }

    async fn delete_message(&self, request: DeleteMessageRequest) -> Result<(), CourierError> {
        self.recorded.deletes.lock().unwrap().push(request);
        self.pause().await;
        Ok(())
    }
}

fn queue_url() -> QueueUrl {
    QueueUrl::new("https://queues.example.com/123/orders".to_string()).unwrap()
}

// ============================================================================
// Queue URL Resolution
// ============================================================================

#[tokio::test]
async fn test_queue_url_resolution() {
    let transport = FakeQueueTransport::default();
    let client = QueueClient::new(Box::new(transport.clone()));
    let name = QueueName::new("orders".to_string()).unwrap();

    let url = client
        .queue_url(&name, "123456789012")
        .await
        .expect("resolution should succeed");

    assert_eq!(url.as_str(), "https://queues.example.com/123456789012/orders");
    let request = transport
        .recorded
        .url_lookups
        .lock()
        .unwrap()
        .last()
        .cloned()
        .unwrap();
    assert_eq!(request.queue_name, name);
    assert_eq!(request.owner_account_id, "123456789012");
}

#[tokio::test(start_paused = true)]
async fn test_queue_url_runs_under_client_deadline() {
    let transport = FakeQueueTransport::slow(std::time::Duration::from_secs(3600));
    let client = QueueClient::new(Box::new(transport));
    client.set_default_timeout(Duration::seconds(1));

    let result = client
        .queue_url(&QueueName::new("orders".to_string()).unwrap(), "123")
        .await;

    match result.unwrap_err() {
        CourierError::Timeout { duration } => assert_eq!(duration, Duration::seconds(1)),
        other => panic!("Expected Timeout error, got: {:?}", other),
    }
}

// ============================================================================
// Send
// ============================================================================

#[tokio::test]
async fn test_send_without_options_uses_baseline() {
    let transport = FakeQueueTransport::default();
    let client = QueueClient::new(Box::new(transport.clone()));

    client
        .send_message(&queue_url(), "hi", None)
        .await
        .expect("send should succeed");

    let request = transport.last_send();
    assert_eq!(request.queue_url, queue_url());
    assert_eq!(request.message_body, "hi");
    // Baseline send options only carry a deadline; nothing optional goes on
    // the wire.
    assert_eq!(request.delay_seconds, None);
    assert_eq!(request.message_attributes, None);
    assert_eq!(request.system_attributes, None);
    assert_eq!(request.deduplication_id, None);
    assert_eq!(request.group_id, None);
}

#[tokio::test(start_paused = true)]
async fn test_send_end_to_end_resolution() {
    // Client defaults {attrs:{x:0,y:2}, timeout:3s} with append mode on;
    // call {attrs:{x:1}, timeout:0} must go out with attributes {x:0,y:2}
    // under a 3 second deadline.
    let transport = FakeQueueTransport::slow(std::time::Duration::from_secs(3600));
    let client = QueueClient::new(Box::new(transport.clone()));
    client.set_default_send_options(
        SendOptions::new()
            .with_attribute("x".to_string(), "0".to_string())
            .with_attribute("y".to_string(), "2".to_string())
            .with_timeout(Duration::seconds(3)),
    );
    client.enable_append_attributes();

    let call_options = SendOptions::new().with_attribute("x".to_string(), "1".to_string());
    let result = client
        .send_message(&queue_url(), "hi", Some(call_options))
        .await;

    match result.unwrap_err() {
        CourierError::Timeout { duration } => assert_eq!(duration, Duration::seconds(3)),
        other => panic!("Expected Timeout error, got: {:?}", other),
    }

    let attributes = transport.last_send().message_attributes.unwrap();
    assert_eq!(attributes.get("x"), Some(&"0".to_string()));
    assert_eq!(attributes.get("y"), Some(&"2".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_send_falls_back_to_client_deadline() {
    let transport = FakeQueueTransport::slow(std::time::Duration::from_secs(3600));
    let client = QueueClient::new(Box::new(transport));
    // Send options with no deadline of their own.
    client.set_default_send_options(SendOptions::new());
    client.set_default_timeout(Duration::seconds(2));

    let result = client.send_message(&queue_url(), "hi", None).await;

    match result.unwrap_err() {
        CourierError::Timeout { duration } => assert_eq!(duration, Duration::seconds(2)),
        other => panic!("Expected Timeout error, got: {:?}", other),
    }
}

// ============================================================================
// Receive
// ============================================================================

#[tokio::test]
async fn test_receive_without_options_uses_baseline() {
    let transport = FakeQueueTransport::default();
    let client = QueueClient::new(Box::new(transport.clone()));

    let messages = client
        .receive_messages(&queue_url(), None)
        .await
        .expect("receive should succeed");

    assert_eq!(messages.len(), 1);
    let request = transport.last_receive();
    assert_eq!(request.max_messages, Some(1));
    assert_eq!(request.wait_time_seconds, Some(20));
    assert_eq!(request.attribute_names, Some(vec![ALL_ATTRIBUTES.to_string()]));
    assert_eq!(
        request.system_attribute_names,
        Some(vec![ALL_ATTRIBUTES.to_string()])
    );
}

#[tokio::test]
async fn test_receive_call_options_override_defaults() {
    let transport = FakeQueueTransport::default();
    let client = QueueClient::new(Box::new(transport.clone()));

    let options = ReceiveOptions::new()
        .with_max_messages(10)
        .with_visibility_timeout(45);
    client
        .receive_messages(&queue_url(), Some(options))
        .await
        .expect("receive should succeed");

    let request = transport.last_receive();
    assert_eq!(request.max_messages, Some(10));
    assert_eq!(request.visibility_timeout, Some(45));
    // Unset call fields still come from the baseline.
    assert_eq!(request.wait_time_seconds, Some(20));
}

#[tokio::test(start_paused = true)]
async fn test_receive_is_not_bounded_by_client_deadline() {
    // The long poll outlives the 1 second client deadline and must still
    // complete; receives run without a deadline of their own.
    let transport = FakeQueueTransport::slow(std::time::Duration::from_secs(20));
    let client = QueueClient::new(Box::new(transport));
    client.set_default_timeout(Duration::seconds(1));

    let result = client.receive_messages(&queue_url(), None).await;

    assert!(result.is_ok(), "Long poll should outlive the client deadline");
}

// ============================================================================
// Queue Attributes
// ============================================================================

#[tokio::test]
async fn test_queue_attributes_empty_names_request_all() {
    let transport = FakeQueueTransport::default();
    let client = QueueClient::new(Box::new(transport.clone()));

    client
        .queue_attributes(&queue_url(), &[])
        .await
        .expect("lookup should succeed");

    let request = transport
        .recorded
        .attribute_lookups
        .lock()
        .unwrap()
        .last()
        .cloned()
        .unwrap();
    assert_eq!(request.attribute_names, vec![ALL_ATTRIBUTES.to_string()]);
}

#[tokio::test]
async fn test_queue_attributes_names_pass_through() {
    let transport = FakeQueueTransport::default();
    let client = QueueClient::new(Box::new(transport.clone()));
    let names = vec!["VisibilityTimeout".to_string(), "DelaySeconds".to_string()];

    client
        .queue_attributes(&queue_url(), &names)
        .await
        .expect("lookup should succeed");

    let request = transport
        .recorded
        .attribute_lookups
        .lock()
        .unwrap()
        .last()
        .cloned()
        .unwrap();
    assert_eq!(request.attribute_names, names);
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_message_carries_receipt_handle() {
    let transport = FakeQueueTransport::default();
    let client = QueueClient::new(Box::new(transport.clone()));

    let received = client
        .receive_messages(&queue_url(), None)
        .await
        .expect("receive should succeed")
        .pop()
        .expect("should have one message");

    client
        .delete_message(&queue_url(), &received)
        .await
        .expect("delete should succeed");

    let request = transport
        .recorded
        .deletes
        .lock()
        .unwrap()
        .last()
        .cloned()
        .unwrap();
    assert_eq!(request.queue_url, queue_url());
    assert_eq!(request.receipt_handle, received.receipt_handle);
}
