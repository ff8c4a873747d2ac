//! Cross-view activity relay
//!
//! Multiple live views of the same binder share one notion of "user is
//! active" so that touching one view resets the auto-lock countdown for
//! all. Best effort only: no ordering, no acknowledgement, last writer
//! wins by timestamp. A missing or failing relay silently degrades to
//! per-view activity tracking and never surfaces as an error.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

/// A live subscription to the activity topic.
///
/// Held only while the session is unlocked; the session closes it on every
/// lock transition so no activity leaks into a locked session.
pub trait ActivityRelay: Send {
    /// Broadcast a local activity timestamp to other subscribers
    fn publish(&mut self, at: DateTime<Utc>);

    /// Take all timestamps received since the last drain
    fn drain(&mut self) -> Vec<DateTime<Utc>>;

    /// Unsubscribe and release the channel resource
    fn close(&mut self);
}

/// A source of activity subscriptions
pub trait ActivityBus: Send {
    fn subscribe(&self) -> Box<dyn ActivityRelay>;
}

#[derive(Default)]
struct BusState {
    next_id: u64,
    queues: Vec<(u64, VecDeque<DateTime<Utc>>)>,
}

/// In-process broadcast bus: one queue per subscriber, fixed topic.
///
/// Clones share the same topic, so several session controllers inside one
/// process observe each other's activity.
#[derive(Clone, Default)]
pub struct InProcessActivityBus {
    state: Arc<Mutex<BusState>>,
}

impl InProcessActivityBus {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActivityBus for InProcessActivityBus {
    fn subscribe(&self) -> Box<dyn ActivityRelay> {
        let id = match self.state.lock() {
            Ok(mut state) => {
                let id = state.next_id;
                state.next_id += 1;
                state.queues.push((id, VecDeque::new()));
                id
            }
            // Poisoned bus: hand back a subscription that will no-op
            Err(_) => u64::MAX,
        };
        Box::new(BusSubscription {
            id,
            state: Arc::clone(&self.state),
            closed: false,
        })
    }
}

struct BusSubscription {
    id: u64,
    state: Arc<Mutex<BusState>>,
    closed: bool,
}

impl ActivityRelay for BusSubscription {
    fn publish(&mut self, at: DateTime<Utc>) {
        if self.closed {
            return;
        }
        if let Ok(mut state) = self.state.lock() {
            for (id, queue) in state.queues.iter_mut() {
                if *id != self.id {
                    queue.push_back(at);
                }
            }
        }
    }

    fn drain(&mut self) -> Vec<DateTime<Utc>> {
        if self.closed {
            return Vec::new();
        }
        match self.state.lock() {
            Ok(mut state) => state
                .queues
                .iter_mut()
                .find(|(id, _)| *id == self.id)
                .map(|(_, queue)| queue.drain(..).collect())
                .unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Ok(mut state) = self.state.lock() {
            state.queues.retain(|(id, _)| *id != self.id);
        }
    }
}

impl Drop for BusSubscription {
    fn drop(&mut self) {
        self.close();
    }
}
