use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Trip form parameters attached to a planning session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDetails {
    pub origin: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub currency: String,
    pub budget: f64,
    pub travelers: u32,
}

impl Default for TripDetails {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            start_date: NaiveDate::default(),
            end_date: NaiveDate::default(),
            currency: "PHP".to_string(),
            budget: 100_000.0,
            travelers: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSession {
    pub id: u64,
    pub name: String,
    pub details: TripDetails,
    /// Raw document from the last generation, if any.
    pub document: Option<String>,
}

/// In-memory store for planning sessions with an explicit
/// create/select/rename/delete lifecycle. Lives entirely outside the
/// parsing pipeline; callers feed session data into rendering as plain
/// values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStore {
    sessions: Vec<PlanSession>,
    active: Option<u64>,
    counter: u64,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with default details, names it `Trip {n}`, and
    /// makes it active.
    pub fn create(&mut self) -> &PlanSession {
        self.counter += 1;
        let session = PlanSession {
            id: self.counter,
            name: format!("Trip {}", self.counter),
            details: TripDetails::default(),
            document: None,
        };
        self.sessions.push(session);
        self.active = Some(self.counter);
        self.sessions.last().expect("session was just pushed")
    }

    pub fn select(&mut self, id: u64) -> Result<&PlanSession, PlanError> {
        let session = self
            .sessions
            .iter()
            .find(|session| session.id == id)
            .ok_or(PlanError::UnknownSession(id))?;
        self.active = Some(id);
        Ok(session)
    }

    pub fn rename(&mut self, id: u64, name: impl Into<String>) -> Result<(), PlanError> {
        let session = self.get_mut(id)?;
        session.name = name.into();
        Ok(())
    }

    /// Removes a session. When the active session is deleted, the first
    /// remaining session becomes active.
    pub fn delete(&mut self, id: u64) -> Result<(), PlanError> {
        let index = self
            .sessions
            .iter()
            .position(|session| session.id == id)
            .ok_or(PlanError::UnknownSession(id))?;
        self.sessions.remove(index);

        if self.active == Some(id) {
            self.active = self.sessions.first().map(|session| session.id);
        }
        Ok(())
    }

    #[must_use]
    pub fn list(&self) -> &[PlanSession] {
        &self.sessions
    }

    #[must_use]
    pub fn active(&self) -> Option<&PlanSession> {
        let id = self.active?;
        self.sessions.iter().find(|session| session.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Result<&mut PlanSession, PlanError> {
        self.sessions
            .iter_mut()
            .find(|session| session.id == id)
            .ok_or(PlanError::UnknownSession(id))
    }

    pub fn to_json(&self) -> Result<String, PlanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::SessionStore;
    use crate::error::PlanError;

    #[test]
    fn create_numbers_sessions_and_activates_them() {
        let mut store = SessionStore::new();
        let first_id = store.create().id;
        let second = store.create();
        assert_eq!(second.name, "Trip 2");
        assert_eq!(store.active().map(|session| session.id), Some(2));
        assert_eq!(store.list().len(), 2);

        store.select(first_id).expect("session exists");
        assert_eq!(store.active().map(|session| session.id), Some(first_id));
    }

    #[test]
    fn deleting_active_session_falls_back_to_first_remaining() {
        let mut store = SessionStore::new();
        let first = store.create().id;
        let second = store.create().id;

        store.delete(second).expect("session exists");
        assert_eq!(store.active().map(|session| session.id), Some(first));

        store.delete(first).expect("session exists");
        assert_eq!(store.active(), None);
        assert!(store.list().is_empty());
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut store = SessionStore::new();
        let first = store.create().id;
        store.delete(first).expect("session exists");
        assert_eq!(store.create().id, 2);
    }

    #[test]
    fn unknown_session_id_errors() {
        let mut store = SessionStore::new();
        let err = store.select(7).expect_err("no sessions yet");
        assert!(matches!(err, PlanError::UnknownSession(7)));
    }

    #[test]
    fn rename_and_json_round_trip() {
        let mut store = SessionStore::new();
        let id = store.create().id;
        store.rename(id, "Tokyo Spring").expect("session exists");

        let json = store.to_json().expect("serializes");
        let restored = SessionStore::from_json(&json).expect("deserializes");
        assert_eq!(restored, store);
        assert_eq!(
            restored.active().map(|session| session.name.as_str()),
            Some("Tokyo Spring")
        );
    }
}
