//! Live event feed shared by the whole classroom.
//!
//! Events are immutable log entries: appended at the front, trimmed to a
//! bounded recent-history window, never mutated except to add or remove a
//! reaction.

use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::agent::AgentId;
use crate::core::constants::LIVE_FEED_CAP;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    HackSuccess,
    HackFail,
    HackShielded,
    ItemActivation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveEvent {
    pub id: String,
    pub kind: EventKind,
    pub message: String,
    pub timestamp: i64,
    /// Emoji -> ids of agents who reacted with it. Empty lists are dropped.
    #[serde(default)]
    pub reactions: BTreeMap<String, Vec<AgentId>>,
}

/// Bounded recent-history window of live events, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveFeed {
    events: VecDeque<LiveEvent>,
}

impl LiveFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the feed with the classroom boot banner.
    pub fn with_boot_banner(now_ms: i64) -> Self {
        let mut feed = Self::new();
        feed.push(
            EventKind::ItemActivation,
            "System Initialized. Welcome, Agents.".to_string(),
            now_ms,
        );
        feed
    }

    /// Appends an event at the front and trims the window.
    pub fn push(&mut self, kind: EventKind, message: String, now_ms: i64) -> &LiveEvent {
        self.events.push_front(LiveEvent {
            id: Uuid::new_v4().to_string(),
            kind,
            message,
            timestamp: now_ms,
            reactions: BTreeMap::new(),
        });
        self.events.truncate(LIVE_FEED_CAP);
        &self.events[0]
    }

    /// Applies one agent's reaction to an event.
    ///
    /// An agent holds at most one reaction per event: reacting with a new
    /// emoji moves it, reacting with the same emoji removes it. Unknown
    /// event ids are ignored (the event may have been trimmed).
    pub fn react(&mut self, event_id: &str, agent_id: &AgentId, emoji: &str) {
        let Some(event) = self.events.iter_mut().find(|e| e.id == event_id) else {
            return;
        };

        let had_same_emoji = event
            .reactions
            .get(emoji)
            .is_some_and(|ids| ids.contains(agent_id));

        for ids in event.reactions.values_mut() {
            ids.retain(|id| id != agent_id);
        }
        event.reactions.retain(|_, ids| !ids.is_empty());

        if !had_same_emoji {
            event
                .reactions
                .entry(emoji.to_string())
                .or_default()
                .push(agent_id.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Newest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &LiveEvent> {
        self.events.iter()
    }

    pub fn latest(&self) -> Option<&LiveEvent> {
        self.events.front()
    }

    pub fn into_events(self) -> Vec<LiveEvent> {
        self.events.into()
    }

    pub fn from_events(events: Vec<LiveEvent>) -> Self {
        let mut events: VecDeque<LiveEvent> = events.into();
        events.truncate(LIVE_FEED_CAP);
        Self { events }
    }
}
