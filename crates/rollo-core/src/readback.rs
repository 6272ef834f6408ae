//! Readback of the simulated position and zoom to the host UI layer.
//!
//! Only the newest value matters to the host, so the channel has no queue:
//! an unread snapshot is simply overwritten by the next one.

use std::sync::{Arc, Mutex};

/// Scale of the 16.16 fixed-point readback packet.
pub const FIXED_POINT_ONE: f32 = (1 << 16) as f32;

/// Values reported to the host after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReadbackSnapshot {
    pub page: f32,
    pub velocity: f32,
    pub zoom: f32,
}

impl ReadbackSnapshot {
    pub fn new(page: f32, velocity: f32, zoom: f32) -> Self {
        Self {
            page,
            velocity,
            zoom,
        }
    }

    /// Encodes as three 16.16 fixed-point integers: page, velocity, zoom.
    pub fn to_fixed(&self) -> [i32; 3] {
        [
            (self.page * FIXED_POINT_ONE) as i32,
            (self.velocity * FIXED_POINT_ONE) as i32,
            (self.zoom * FIXED_POINT_ONE) as i32,
        ]
    }

    pub fn from_fixed(packet: [i32; 3]) -> Self {
        Self {
            page: packet[0] as f32 / FIXED_POINT_ONE,
            velocity: packet[1] as f32 / FIXED_POINT_ONE,
            zoom: packet[2] as f32 / FIXED_POINT_ONE,
        }
    }
}

/// Destination for readback snapshots. Writes must not block.
pub trait ReadbackSink {
    fn send(&mut self, snapshot: ReadbackSnapshot);
}

impl<F> ReadbackSink for F
where
    F: FnMut(ReadbackSnapshot),
{
    fn send(&mut self, snapshot: ReadbackSnapshot) {
        self(snapshot)
    }
}

/// Single-slot mailbox holding the most recent unread snapshot.
///
/// Clones share the slot, so the render side can keep one handle and the
/// host another.
#[derive(Debug, Clone, Default)]
pub struct LatestReadback {
    slot: Arc<Mutex<Option<ReadbackSnapshot>>>,
}

impl LatestReadback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the pending snapshot, leaving the slot empty.
    pub fn take(&self) -> Option<ReadbackSnapshot> {
        match self.slot.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        }
    }

    /// Returns the pending snapshot without consuming it.
    pub fn peek(&self) -> Option<ReadbackSnapshot> {
        match self.slot.lock() {
            Ok(slot) => *slot,
            Err(_) => None,
        }
    }
}

impl ReadbackSink for LatestReadback {
    fn send(&mut self, snapshot: ReadbackSnapshot) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(snapshot);
        }
    }
}

/// Forwards snapshots to a sink only when they differ from the last one
/// sent.
pub struct ReadbackPublisher<S: ReadbackSink> {
    sink: S,
    last_sent: Option<ReadbackSnapshot>,
    sent_count: u64,
}

impl<S: ReadbackSink> ReadbackPublisher<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            last_sent: None,
            sent_count: 0,
        }
    }

    /// Sends `snapshot` if it changed. Returns whether it was sent.
    pub fn publish(&mut self, snapshot: ReadbackSnapshot) -> bool {
        if self.last_sent == Some(snapshot) {
            return false;
        }
        log::trace!(
            "readback page={:.4} velocity={:.4} zoom={:.4}",
            snapshot.page,
            snapshot.velocity,
            snapshot.zoom
        );
        self.last_sent = Some(snapshot);
        self.sent_count += 1;
        self.sink.send(snapshot);
        true
    }

    pub fn last_sent(&self) -> Option<ReadbackSnapshot> {
        self.last_sent
    }

    /// Number of snapshots actually forwarded to the sink.
    pub fn sent_count(&self) -> u64 {
        self.sent_count
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
