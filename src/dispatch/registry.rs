//! Handler registry
//!
//! Pure bookkeeping: which handlers are eligible for which event kinds, and
//! in what order. The registry performs no execution and is read-only while
//! a dispatch is in flight - the configuration boundary populates it once,
//! before dispatch begins.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use regex::Regex;

use crate::core::{HookError, HookResult};
use crate::events::EventKind;

use super::handler::Handler;

/// Everything a handler declares at registration time
#[derive(Debug, Clone)]
pub struct HandlerRegistration {
    /// Stable string id, unique per event kind
    pub id: String,
    /// Event kinds this handler subscribes to
    pub kinds: HashSet<EventKind>,
    /// Per-invocation execution timeout
    pub timeout: Duration,
    /// Composition-order priority; lower values win ties. Never used to
    /// short-circuit other handlers.
    pub priority: i32,
    /// Optional tool-name pattern; tool events whose `tool_name` does not
    /// match are skipped. Non-tool events ignore the matcher.
    matcher: Option<Regex>,
}

impl HandlerRegistration {
    /// Create a registration with no tool matcher (applies to every tool)
    pub fn new(
        id: impl Into<String>,
        kinds: impl IntoIterator<Item = EventKind>,
        timeout: Duration,
        priority: i32,
    ) -> Self {
        Self {
            id: id.into(),
            kinds: kinds.into_iter().collect(),
            timeout,
            priority,
            matcher: None,
        }
    }

    /// Restrict this registration to tool names matching a regex pattern
    ///
    /// Pattern examples: `"Bash"`, `"Read|Write|Edit"`, `"^mcp__"`.
    pub fn with_matcher(mut self, pattern: &str) -> HookResult<Self> {
        self.matcher = Some(Regex::new(pattern)?);
        Ok(self)
    }

    /// Whether this registration applies to the given tool name
    pub fn matches_tool(&self, tool_name: &str) -> bool {
        match &self.matcher {
            Some(regex) => regex.is_match(tool_name),
            None => true,
        }
    }
}

/// One registered handler as the dispatcher sees it
#[derive(Clone)]
pub struct RegisteredHandler {
    /// The declaration made at registration time
    pub registration: Arc<HandlerRegistration>,
    /// The handler implementation
    pub handler: Arc<dyn Handler>,
}

struct Entry {
    registered: RegisteredHandler,
    /// Registration sequence number, breaks priority ties (stable order)
    seq: usize,
}

/// Holds, per event kind, the ordered set of registered handlers
#[derive(Default)]
pub struct HandlerRegistry {
    entries: HashMap<EventKind, Vec<Entry>>,
    next_seq: usize,
}

impl HandlerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for every kind in its registration
    ///
    /// Fails with `HookError::DuplicateHandler` if the id is already
    /// registered for any of the given kinds; previously registered handlers
    /// are left untouched either way - there is no silent overwrite.
    pub fn register(
        &mut self,
        registration: HandlerRegistration,
        handler: Arc<dyn Handler>,
    ) -> HookResult<()> {
        for kind in &registration.kinds {
            let taken = self
                .entries
                .get(kind)
                .is_some_and(|v| v.iter().any(|e| e.registered.registration.id == registration.id));
            if taken {
                return Err(HookError::DuplicateHandler {
                    handler_id: registration.id.clone(),
                    kind: *kind,
                });
            }
        }

        tracing::debug!(
            "[HandlerRegistry] Registering handler '{}' for {} kind(s)",
            registration.id,
            registration.kinds.len()
        );

        let seq = self.next_seq;
        self.next_seq += 1;

        let registered = RegisteredHandler {
            registration: Arc::new(registration),
            handler,
        };
        for kind in registered.registration.kinds.iter() {
            self.entries.entry(*kind).or_default().push(Entry {
                registered: registered.clone(),
                seq,
            });
        }
        Ok(())
    }

    /// Handlers eligible for one kind, in ascending priority order
    ///
    /// Ties are broken by registration order (stable).
    pub fn handlers_for(&self, kind: EventKind) -> Vec<RegisteredHandler> {
        let mut entries: Vec<&Entry> = self
            .entries
            .get(&kind)
            .map(|v| v.iter().collect())
            .unwrap_or_default();
        entries.sort_by_key(|e| (e.registered.registration.priority, e.seq));
        entries.into_iter().map(|e| e.registered.clone()).collect()
    }

    /// Whether any handler is registered for a kind
    pub fn has_handlers(&self, kind: EventKind) -> bool {
        self.entries.get(&kind).is_some_and(|v| !v.is_empty())
    }

    /// Number of handlers registered for a kind
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.entries.get(&kind).map(|v| v.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (kind, entries) in &self.entries {
            map.entry(kind, &entries.len());
        }
        map.finish()
    }
}
