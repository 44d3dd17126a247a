//! The ordered set of workers to schedule.
//!
//! Registration order is significant: the placement phase gives earlier
//! workers first pick of capacity-limited cells, and the conflict phase
//! upgrades workers in the same order.  `WorkerId(n)` is the n-th worker
//! registered.

use std::collections::HashSet;
use std::ops::Index;

use rota_core::WorkerId;

use crate::{PreferenceTable, RosterError, RosterResult};

// ── Worker ────────────────────────────────────────────────────────────────────

/// A worker's identity and weekly preferences.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worker {
    /// Unique within a roster.
    pub name: String,
    pub preferences: PreferenceTable,
}

// ── Roster ────────────────────────────────────────────────────────────────────

/// Immutable, ordered worker list.  Build with [`RosterBuilder`].
#[derive(Clone, Debug, Default)]
pub struct Roster {
    workers: Vec<Worker>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn get(&self, id: WorkerId) -> Option<&Worker> {
        self.workers.get(id.index())
    }

    /// The worker's name, or `None` for an id outside this roster.
    pub fn name(&self, id: WorkerId) -> Option<&str> {
        self.get(id).map(|w| w.name.as_str())
    }

    /// Look a worker up by exact name.
    pub fn find(&self, name: &str) -> Option<WorkerId> {
        self.workers
            .iter()
            .position(|w| w.name == name)
            .map(|i| WorkerId(i as u32))
    }

    /// All ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = WorkerId> + '_ {
        (0..self.workers.len() as u32).map(WorkerId)
    }

    /// `(id, worker)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (WorkerId, &Worker)> + '_ {
        self.workers
            .iter()
            .enumerate()
            .map(|(i, w)| (WorkerId(i as u32), w))
    }
}

impl Index<WorkerId> for Roster {
    type Output = Worker;

    /// # Panics
    ///
    /// Panics if `id` was not issued by this roster.
    fn index(&self, id: WorkerId) -> &Worker {
        &self.workers[id.index()]
    }
}

// ── RosterBuilder ─────────────────────────────────────────────────────────────

/// Registers workers one at a time, enforcing unique non-empty names.
///
/// ```rust
/// use rota_roster::{PreferenceTable, RosterBuilder};
///
/// let mut builder = RosterBuilder::new();
/// let ann = builder.add("Ann", PreferenceTable::default()).unwrap();
/// let roster = builder.build();
/// assert_eq!(roster.name(ann), Some("Ann"));
/// ```
#[derive(Default)]
pub struct RosterBuilder {
    workers: Vec<Worker>,
    names:   HashSet<String>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a worker and return their id.  Names are trimmed.
    pub fn add(&mut self, name: &str, preferences: PreferenceTable) -> RosterResult<WorkerId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if !self.names.insert(name.to_string()) {
            return Err(RosterError::DuplicateWorker(name.to_string()));
        }
        let id = WorkerId::try_from(self.workers.len())
            .map_err(|_| RosterError::Parse("too many workers".into()))?;
        self.workers.push(Worker { name: name.to_string(), preferences });
        Ok(id)
    }

    /// Chaining form of [`add`](Self::add).
    pub fn with(mut self, name: &str, preferences: PreferenceTable) -> RosterResult<Self> {
        self.add(name, preferences)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn build(self) -> Roster {
        Roster { workers: self.workers }
    }
}
