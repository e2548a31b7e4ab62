//! Outbound wizard events.
//!
//! Sessions broadcast events to any number of host subscribers. Slow
//! subscribers never block the controller: a full buffer drops that
//! subscriber's oldest undelivered events.

use futures::Stream;
use pin_project_lite::pin_project;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;

use graph_model::NodeRef;

use crate::state::WizardSnapshot;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// An event emitted by a wizard session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardEvent {
    /// The session state changed; re-render from the snapshot
    StateChanged {
        /// Post-operation state
        snapshot: WizardSnapshot,
    },
    /// Submission succeeded; the node can join the rendered graph
    EntityCreated {
        /// The created node
        node: NodeRef,
    },
    /// The word being created already exists; redirect to it
    ExistingEntityFound {
        /// The existing node
        node: NodeRef,
    },
    /// An operation failed; `message` is display-ready
    ErrorOccurred {
        /// Human-readable description
        message: String,
    },
}

pin_project! {
    /// Stream of events from one wizard session.
    pub struct WizardEventStream {
        #[pin]
        inner: BroadcastStream<WizardEvent>,
    }
}

impl WizardEventStream {
    pub(crate) fn new(receiver: broadcast::Receiver<WizardEvent>) -> Self {
        Self {
            inner: BroadcastStream::new(receiver),
        }
    }
}

impl Stream for WizardEventStream {
    type Item = WizardEvent;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            match this.inner.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(event))) => return Poll::Ready(Some(event)),
                Poll::Ready(Some(Err(BroadcastStreamRecvError::Lagged(skipped)))) => {
                    tracing::warn!(skipped, "Event subscriber lagged, events dropped");
                    continue;
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use graph_model::NodeKind;

    #[tokio::test]
    async fn test_stream_delivers_events() {
        let (tx, rx) = broadcast::channel(8);
        let mut stream = WizardEventStream::new(rx);

        tx.send(WizardEvent::ErrorOccurred {
            message: "nope".into(),
        })
        .unwrap();
        tx.send(WizardEvent::EntityCreated {
            node: NodeRef::new("node-1", NodeKind::Word, "liberty"),
        })
        .unwrap();
        drop(tx);

        let first = stream.next().await.unwrap();
        assert!(matches!(first, WizardEvent::ErrorOccurred { .. }));
        let second = stream.next().await.unwrap();
        assert!(matches!(second, WizardEvent::EntityCreated { .. }));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_lagged_subscriber_skips_rather_than_errors() {
        let (tx, rx) = broadcast::channel(1);
        let mut stream = WizardEventStream::new(rx);

        for i in 0..4 {
            tx.send(WizardEvent::ErrorOccurred {
                message: format!("event {i}"),
            })
            .unwrap();
        }
        drop(tx);

        // Only the newest event survives the depth-1 buffer
        let event = stream.next().await.unwrap();
        match event {
            WizardEvent::ErrorOccurred { message } => assert_eq!(message, "event 3"),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(stream.next().await.is_none());
    }

    #[test]
    fn test_event_wire_format() {
        let event = WizardEvent::ExistingEntityFound {
            node: NodeRef::new("node-9", NodeKind::Word, "liberty"),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "existing_entity_found");
        assert_eq!(json["node"]["id"], "node-9");
    }
}
