use crate::{kv_store::KeyValueStore, window_bounds::WindowBounds, APP_STORE_SCOPE, BOUNDS_STORE_KEY};

/// Reads and writes `app.bounds` in the backing store.
#[derive(Debug)]
pub(crate) struct BoundsStore<S> {
    store: S,
}

impl<S: KeyValueStore> BoundsStore<S> {
    pub(crate) fn new(store: S) -> Self {
        Self { store }
    }

    pub(crate) fn load<F>(&self, log: F) -> Option<WindowBounds>
    where
        F: Fn(&str),
    {
        let raw = self.store.get(APP_STORE_SCOPE, BOUNDS_STORE_KEY)?;
        if raw.is_null() {
            return None;
        }

        match serde_json::from_value::<WindowBounds>(raw) {
            Ok(bounds) => Some(bounds),
            Err(error) => {
                log(&format!(
                    "ignoring unreadable {APP_STORE_SCOPE}.{BOUNDS_STORE_KEY}: {error}"
                ));
                None
            }
        }
    }

    pub(crate) fn save(&mut self, bounds: &WindowBounds) -> Result<(), String> {
        let value = serde_json::to_value(bounds)
            .map_err(|error| format!("Failed to serialize window bounds: {error}"))?;
        self.store.set(APP_STORE_SCOPE, BOUNDS_STORE_KEY, value)
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::json;

    use super::*;
    use crate::kv_store::MemoryStore;

    #[test]
    fn load_returns_none_when_absent() {
        let store = BoundsStore::new(MemoryStore::default());
        assert_eq!(store.load(|_| {}), None);
    }

    #[test]
    fn save_then_load_returns_last_written_bounds() {
        let mut store = BoundsStore::new(MemoryStore::default());
        let first = WindowBounds {
            x: 0,
            y: 0,
            width: 900,
            height: 600,
        };
        let second = WindowBounds {
            x: 10,
            y: 20,
            width: 800,
            height: 500,
        };
        store.save(&first).expect("save first");
        store.save(&second).expect("save second");

        assert_eq!(store.load(|_| {}), Some(second));
        assert_eq!(
            store.store().get(APP_STORE_SCOPE, BOUNDS_STORE_KEY),
            Some(json!({"x": 10, "y": 20, "width": 800, "height": 500}))
        );
    }

    #[test]
    fn load_ignores_malformed_value_and_logs() {
        let mut backing = MemoryStore::default();
        backing
            .set(APP_STORE_SCOPE, BOUNDS_STORE_KEY, json!({"x": "left"}))
            .expect("seed malformed bounds");
        let store = BoundsStore::new(backing);

        let logs = RefCell::new(Vec::new());
        assert_eq!(store.load(|line| logs.borrow_mut().push(line.to_string())), None);
        assert_eq!(logs.borrow().len(), 1);
    }
}
