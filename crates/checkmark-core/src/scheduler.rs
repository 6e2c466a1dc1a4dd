//! Animation scheduling.
//!
//! [`AnimationScheduler`] is the seam between code that *describes* animations
//! and the engine that *runs* them. Groups are submitted under a string key;
//! a second submission under the same key replaces the first outright. The
//! engine reports lifecycle through [`AnimationEvent`]s, which the submitter
//! drains after submitting and after each frame.
//!
//! [`FrameScheduler`] is the in-process engine: it advances every attached
//! group by the frame delta the host passes to [`AnimationScheduler::advance`].
//! It keeps only the most recent events for inspection, so a long-lived
//! control does not grow it.

use crate::animation::{AnimatableProperty, AnimationGroup};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use tracing::{debug, trace};

/// Number of past events [`FrameScheduler::recent_events`] keeps.
pub const RECENT_EVENT_CAPACITY: usize = 32;

/// Identifier of one submitted group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnimationId(pub u64);

/// Lifecycle notification for a submitted group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationEvent {
    /// The group began running.
    Started {
        /// Group identifier
        id: AnimationId,
        /// Key it was submitted under
        key: String,
    },
    /// The group stopped running.
    Stopped {
        /// Group identifier
        id: AnimationId,
        /// Key it was submitted under
        key: String,
        /// True when the timeline ran to completion, false when it was
        /// replaced or removed first.
        finished: bool,
    },
}

impl AnimationEvent {
    /// Identifier of the group this event concerns.
    #[must_use]
    pub const fn id(&self) -> AnimationId {
        match self {
            Self::Started { id, .. } | Self::Stopped { id, .. } => *id,
        }
    }
}

/// Engine that runs keyed animation groups.
pub trait AnimationScheduler {
    /// Attach `group` under `key`, replacing any group already attached there.
    ///
    /// A replaced group that had not finished reports
    /// `Stopped { finished: false }` before the new group reports `Started`.
    fn add(&mut self, key: &str, group: AnimationGroup) -> AnimationId;

    /// Advance the engine clock by `dt` seconds.
    fn advance(&mut self, dt: f64);

    /// Take the lifecycle events produced since the last call, oldest first.
    fn drain_events(&mut self) -> Vec<AnimationEvent>;

    /// Value currently presented for `property` by the group under `key`, or
    /// `None` if that group does not drive the property right now.
    fn presentation_value(&self, key: &str, property: AnimatableProperty) -> Option<f64>;

    /// Whether the group under `key` is still running.
    fn is_running(&self, key: &str) -> bool;
}

#[derive(Debug, Clone)]
struct Attached {
    id: AnimationId,
    group: AnimationGroup,
    elapsed: f64,
    finished: bool,
}

/// In-process scheduler driven by host frame deltas.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    attached: HashMap<String, Attached>,
    pending: Vec<AnimationEvent>,
    recent: VecDeque<AnimationEvent>,
    next_id: u64,
}

impl FrameScheduler {
    /// Create an idle scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&mut self, event: AnimationEvent) {
        trace!(?event, "animation event");
        if self.recent.len() == RECENT_EVENT_CAPACITY {
            self.recent.pop_front();
        }
        self.recent.push_back(event.clone());
        self.pending.push(event);
    }

    /// The last [`RECENT_EVENT_CAPACITY`] events, oldest first, including
    /// drained ones.
    pub fn recent_events(&self) -> impl Iterator<Item = &AnimationEvent> {
        self.recent.iter()
    }
}

impl AnimationScheduler for FrameScheduler {
    fn add(&mut self, key: &str, group: AnimationGroup) -> AnimationId {
        self.next_id += 1;
        let id = AnimationId(self.next_id);

        if let Some(previous) = self.attached.remove(key) {
            if !previous.finished {
                debug!(
                    key,
                    replaced = previous.id.0,
                    elapsed = previous.elapsed,
                    "replacing running animation group"
                );
                self.emit(AnimationEvent::Stopped {
                    id: previous.id,
                    key: key.to_string(),
                    finished: false,
                });
            }
        }

        debug!(key, id = id.0, duration = group.duration, "animation group added");
        self.attached.insert(
            key.to_string(),
            Attached {
                id,
                group,
                elapsed: 0.0,
                finished: false,
            },
        );
        self.emit(AnimationEvent::Started {
            id,
            key: key.to_string(),
        });
        id
    }

    fn advance(&mut self, dt: f64) {
        let mut completed = Vec::new();
        for (key, attached) in &mut self.attached {
            if attached.finished {
                continue;
            }
            attached.elapsed += dt.max(0.0);
            if attached.group.is_complete(attached.elapsed) {
                attached.elapsed = attached.group.duration;
                attached.finished = true;
                completed.push((key.clone(), attached.id));
            }
        }

        completed.sort_by_key(|(_, id)| *id);
        for (key, id) in completed {
            let detach = self
                .attached
                .get(&key)
                .is_some_and(|a| a.group.removed_on_completion);
            if detach {
                self.attached.remove(&key);
            }
            self.emit(AnimationEvent::Stopped {
                id,
                key,
                finished: true,
            });
        }
    }

    fn drain_events(&mut self) -> Vec<AnimationEvent> {
        std::mem::take(&mut self.pending)
    }

    fn presentation_value(&self, key: &str, property: AnimatableProperty) -> Option<f64> {
        self.attached
            .get(key)
            .and_then(|a| a.group.value_at(property, a.elapsed))
    }

    fn is_running(&self, key: &str) -> bool {
        self.attached.get(key).is_some_and(|a| !a.finished)
    }
}
