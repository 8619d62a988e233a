//! The project board: the in-memory list and its durable mirror.

use crate::actions::CardAction;
use crate::error::StoreError;
use crate::model::{seed_projects, NewProject, Project, ProjectStatus};
use crate::stats::Stats;
use crate::storage::KeyValueStore;

pub const APPROVED_PREFIX: &str = "Approved: ";
pub const APPROVED_NEXT_STEP: &str = "Continue...";
pub const REJECTED_ACTION: &str = "Rejected, awaiting new direction";
pub const DELETE_PROMPT: &str = "Delete this project?";

/// Yes/no gate in front of destructive operations.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Owns the ordered project list. Every mutation rewrites the whole list to
/// `storage` under `key` before it becomes visible; a failed write leaves
/// the in-memory list untouched.
///
/// Operations on an id that is not on the board are no-ops returning
/// `Ok(false)`: a card can outlive its record for one event turn.
#[derive(Debug)]
pub struct ProjectStore<S> {
    storage: S,
    key: String,
    projects: Vec<Project>,
}

impl<S: KeyValueStore> ProjectStore<S> {
    /// Load the board from `storage`, or the seed board if nothing is stored.
    /// The seed is not written back until the first mutation.
    pub fn open(storage: S, key: impl Into<String>) -> Result<Self, StoreError> {
        let key = key.into();
        let projects = match storage.get(&key)? {
            Some(blob) => serde_json::from_str(&blob).map_err(StoreError::Decode)?,
            None => {
                tracing::debug!(key = %key, "no stored projects, using seed board");
                seed_projects()
            }
        };
        Ok(Self {
            storage,
            key,
            projects,
        })
    }

    /// Like [`open`](Self::open), but a malformed or unreadable blob falls
    /// back to the seed board instead of failing.
    pub fn open_or_seed(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let projects = match storage.get(&key) {
            Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_else(|err| {
                tracing::warn!(key = %key, error = %err, "stored projects are malformed, using seed board");
                seed_projects()
            }),
            Ok(None) => seed_projects(),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "failed to read stored projects, using seed board");
                seed_projects()
            }
        };
        Self {
            storage,
            key,
            projects,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn stats(&self) -> Stats {
        Stats::from_projects(&self.projects)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Mark the proposed next step as accepted and set the project running.
    /// Applies whatever the current status is; see [`dispatch`](Self::dispatch)
    /// for the status-checked path.
    pub fn approve(&mut self, id: &str) -> Result<bool, StoreError> {
        self.update(id, "approve", |p| {
            p.status = ProjectStatus::Running;
            p.last_action = format!("{APPROVED_PREFIX}{}", p.next_step);
            p.next_step = APPROVED_NEXT_STEP.to_string();
        })
    }

    pub fn reject(&mut self, id: &str) -> Result<bool, StoreError> {
        self.update(id, "reject", |p| {
            p.status = ProjectStatus::Paused;
            p.last_action = REJECTED_ACTION.to_string();
        })
    }

    pub fn set_status(&mut self, id: &str, status: ProjectStatus) -> Result<bool, StoreError> {
        self.update(id, "set_status", |p| p.status = status)
    }

    /// Apply a card button. Buttons the card would not show for the record's
    /// current status are ignored.
    pub fn dispatch(&mut self, id: &str, action: CardAction) -> Result<bool, StoreError> {
        let Some(status) = self.get(id).map(|p| p.status) else {
            tracing::debug!(id, %action, "no project with id, ignoring action");
            return Ok(false);
        };
        if !action.is_offered_for(status) {
            tracing::debug!(id, %action, %status, "action not offered for status, ignoring");
            return Ok(false);
        }

        match (action, action.target_status()) {
            (CardAction::Approve, _) => self.approve(id),
            (CardAction::Reject, _) => self.reject(id),
            (_, Some(target)) => self.set_status(id, target),
            (_, None) => Ok(false),
        }
    }

    /// Append a new project stamped with the current wall-clock time.
    pub fn add(&mut self, new: NewProject) -> Result<Project, StoreError> {
        self.add_at(new, chrono::Utc::now().timestamp_millis())
    }

    /// Append a new project whose id derives from `now_ms`. If the clock has
    /// not moved past the newest numeric id, the id is bumped past it; if that
    /// would overflow, the first free id from `now_ms` upward is used.
    pub fn add_at(&mut self, new: NewProject, now_ms: i64) -> Result<Project, StoreError> {
        let project = new.into_project(self.next_id(now_ms));
        let mut next = self.projects.clone();
        next.push(project.clone());
        self.commit(next)?;
        tracing::debug!(id = %project.id, name = %project.name, "added project");
        Ok(project)
    }

    /// Remove a project once `confirm` agrees. Declining changes nothing.
    pub fn delete(&mut self, id: &str, confirm: &mut impl Confirm) -> Result<bool, StoreError> {
        if !confirm.confirm(DELETE_PROMPT) {
            tracing::debug!(id, "delete declined");
            return Ok(false);
        }
        let Some(index) = self.position(id) else {
            tracing::debug!(id, "no project with id, ignoring delete");
            return Ok(false);
        };

        let mut next = self.projects.clone();
        next.remove(index);
        self.commit(next)?;
        tracing::debug!(id, "deleted project");
        Ok(true)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }

    fn next_id(&self, now_ms: i64) -> String {
        let newest = self
            .projects
            .iter()
            .filter_map(|p| p.id.parse::<i64>().ok())
            .max();
        let mut candidate = match newest.and_then(|newest| newest.checked_add(1)) {
            Some(floor) => now_ms.max(floor),
            None => now_ms,
        };
        // Only reachable when the newest id is already i64::MAX.
        while self.get(&candidate.to_string()).is_some() {
            candidate = candidate.wrapping_add(1);
        }
        candidate.to_string()
    }

    fn update(
        &mut self,
        id: &str,
        op: &'static str,
        apply: impl FnOnce(&mut Project),
    ) -> Result<bool, StoreError> {
        let Some(index) = self.position(id) else {
            tracing::debug!(id, op, "no project with id, ignoring");
            return Ok(false);
        };

        let mut next = self.projects.clone();
        apply(&mut next[index]);
        self.commit(next)?;
        tracing::debug!(id, op, status = %self.projects[index].status, "updated project");
        Ok(true)
    }

    fn commit(&mut self, next: Vec<Project>) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&next).map_err(StoreError::Encode)?;
        self.storage.set(&self.key, &blob)?;
        self.projects = next;
        Ok(())
    }
}
