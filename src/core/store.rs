use super::task::TaskRecord;
use crate::errors::Error;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// In-memory task store, the single source of truth for task state.
///
/// Locking is per shard, so operations on different ids rarely contend.
/// Readers always get a cloned snapshot taken under the shard lock and never
/// see a half-applied update. Records are kept for the whole process
/// lifetime; there is no eviction.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: DashMap<String, TaskRecord>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fully constructed record, refusing to overwrite an existing id
    pub fn insert(&self, record: TaskRecord) -> Result<(), Error> {
        match self.tasks.entry(record.id.clone()) {
            Entry::Occupied(entry) => Err(Error::DuplicateId(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(record);
                Ok(())
            }
        }
    }

    /// Returns a snapshot of the record
    pub fn get(&self, id: &str) -> Result<TaskRecord, Error> {
        self.tasks
            .get(id)
            .map(|record| record.value().clone())
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Applies `mutator` atomically and returns the updated snapshot.
    ///
    /// The mutator runs against a copy; the stored record is replaced only if
    /// it returns `Ok`, so a rejected mutation leaves no trace.
    pub fn update<F>(&self, id: &str, mutator: F) -> Result<TaskRecord, Error>
    where
        F: FnOnce(&mut TaskRecord) -> Result<(), Error>,
    {
        let mut entry = self
            .tasks
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        let mut draft = entry.value().clone();
        mutator(&mut draft)?;
        *entry.value_mut() = draft.clone();
        Ok(draft)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ApiSurface, TaskSpec, TaskState};
    use std::sync::Arc;

    fn record(id: &str) -> TaskRecord {
        let spec = TaskSpec {
            url: None,
            navigation_goal: format!("goal for {}", id),
            navigation_payload: None,
            max_steps: 10,
            proxy_location: None,
        };
        TaskRecord::new(id.to_string(), spec, ApiSurface::Unversioned)
    }

    #[test]
    fn insert_then_get() {
        let store = TaskStore::new();
        store.insert(record("a")).unwrap();

        let fetched = store.get("a").unwrap();
        assert_eq!(fetched.id, "a");
        assert_eq!(fetched.state, TaskState::Pending);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_insert_is_rejected_without_overwrite() {
        let store = TaskStore::new();
        store.insert(record("a")).unwrap();
        store.update("a", |r| r.start_processing()).unwrap();

        let err = store.insert(record("a")).unwrap_err();
        assert!(matches!(err, Error::DuplicateId(id) if id == "a"));
        assert_eq!(store.get("a").unwrap().state, TaskState::Processing);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let store = TaskStore::new();
        store.insert(record("a")).unwrap();

        assert!(matches!(store.get("b"), Err(Error::NotFound(_))));
        assert!(matches!(
            store.update("b", |r| r.start_processing()),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn failed_mutation_leaves_record_untouched() {
        let store = TaskStore::new();
        store.insert(record("a")).unwrap();
        let before = store.get("a").unwrap();

        let err = store
            .update("a", |r| {
                r.error = Some("scribble".to_string());
                r.fail("not yet processing")
            })
            .unwrap_err();

        assert!(matches!(err, Error::InvalidTransition { .. }));
        let after = store.get("a").unwrap();
        assert_eq!(after.state, before.state);
        assert_eq!(after.updated_at, before.updated_at);
        assert!(after.error.is_none());
    }

    #[test]
    fn concurrent_writers_on_distinct_ids_keep_fields_apart() {
        let store = Arc::new(TaskStore::new());
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    let id = format!("task-{}", i);
                    store.insert(record(&id)).unwrap();
                    store.update(&id, |r| r.start_processing()).unwrap();
                    store
                        .update(&id, |r| r.fail(format!("error of {}", id)))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 16);
        for i in 0..16 {
            let id = format!("task-{}", i);
            let r = store.get(&id).unwrap();
            assert_eq!(r.spec.navigation_goal, format!("goal for {}", id));
            assert_eq!(r.error, Some(format!("error of {}", id)));
        }
    }
}
