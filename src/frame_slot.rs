//! Single-slot latest-frame buffer between the capture task and the
//! processing loop.
//!
//! The camera produces frames at its own cadence on its own task; the
//! pipeline only ever wants the most recent one. A `tokio::sync::watch`
//! channel is exactly that: a one-slot mailbox where a new frame silently
//! replaces an unconsumed one. Dropped frames are normal operation, not data
//! loss — the tracker treats a skipped frame the same as any other gap in
//! delivery, and frames are consumed in capture order because there is a
//! single producer.

use crate::core_modules::frame::Frame;
use tokio::sync::watch;

/// Creates a connected publisher/receiver pair around an empty slot.
pub fn channel() -> (FramePublisher, FrameReceiver) {
    let (tx, rx) = watch::channel(None);
    (FramePublisher { tx }, FrameReceiver { rx })
}

/// The capture side: overwrites the slot with each new frame.
pub struct FramePublisher {
    tx: watch::Sender<Option<Frame>>,
}

impl FramePublisher {
    /// Publishes a frame, replacing any unconsumed one.
    ///
    /// Returns `false` once the receiver is gone, so a capture task knows to
    /// stop.
    pub fn publish(&self, frame: Frame) -> bool {
        self.tx.send(Some(frame)).is_ok()
    }
}

/// The processing side: hands out the most recent frame, at most once.
pub struct FrameReceiver {
    rx: watch::Receiver<Option<Frame>>,
}

impl FrameReceiver {
    /// Takes the latest frame if one arrived since the last call.
    pub fn latest(&mut self) -> Option<Frame> {
        if self.rx.has_changed().unwrap_or(false) {
            self.rx.borrow_and_update().clone()
        } else {
            None
        }
    }

    /// Waits for the next published frame. Returns `None` once the publisher
    /// is gone. Intermediate frames published while the consumer was busy
    /// are skipped, never queued.
    pub async fn recv(&mut self) -> Option<Frame> {
        loop {
            self.rx.changed().await.ok()?;
            if let Some(frame) = self.rx.borrow_and_update().clone() {
                return Some(frame);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(brightness: u8) -> Frame {
        Frame::new(2, 2, vec![brightness; 4]).unwrap()
    }

    #[test]
    fn newer_frame_replaces_unconsumed_one() {
        let (tx, mut rx) = channel();
        assert!(rx.latest().is_none());

        assert!(tx.publish(frame(10)));
        assert!(tx.publish(frame(20)));

        let latest = rx.latest().unwrap();
        assert_eq!(latest.pixels()[0], 20);
        // Consumed; nothing new since.
        assert!(rx.latest().is_none());
    }

    #[test]
    fn publish_fails_after_receiver_drop() {
        let (tx, rx) = channel();
        drop(rx);
        assert!(!tx.publish(frame(1)));
    }

    #[tokio::test]
    async fn recv_returns_published_frame_then_none_on_close() {
        let (tx, mut rx) = channel();
        assert!(tx.publish(frame(7)));
        let received = rx.recv().await.unwrap();
        assert_eq!(received.pixels()[0], 7);

        drop(tx);
        assert!(rx.recv().await.is_none());
    }
}
