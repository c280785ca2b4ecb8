use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

/// Durable key-value storage grouped by scope, e.g. `app.bounds`.
pub(crate) trait KeyValueStore {
    fn get(&self, scope: &str, key: &str) -> Option<Value>;
    fn set(&mut self, scope: &str, key: &str, value: Value) -> Result<(), String>;
}

fn empty_state_object() -> Value {
    Value::Object(Map::new())
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = empty_state_object();
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("value was just normalized into a JSON object"),
    }
}

/// JSON file backed store. The whole document is cached in memory and
/// rewritten on every `set`.
#[derive(Debug)]
pub(crate) struct JsonFileStore {
    path: PathBuf,
    document: Value,
}

impl JsonFileStore {
    pub(crate) fn open<F>(path: PathBuf, log: F) -> Self
    where
        F: Fn(&str),
    {
        let document = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(value) if value.is_object() => value,
                Ok(_) => {
                    log(&format!(
                        "store {} has non-object root; starting from an empty store",
                        path.display()
                    ));
                    empty_state_object()
                }
                Err(error) => {
                    log(&format!(
                        "failed to parse store {}: {}. starting from an empty store",
                        path.display(),
                        error
                    ));
                    empty_state_object()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => empty_state_object(),
            Err(error) => {
                log(&format!(
                    "failed to read store {}: {}. starting from an empty store",
                    path.display(),
                    error
                ));
                empty_state_object()
            }
        };

        Self { path, document }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), String> {
        if let Some(parent_dir) = self.path.parent() {
            fs::create_dir_all(parent_dir).map_err(|error| {
                format!(
                    "Failed to create store directory {}: {}",
                    parent_dir.display(),
                    error
                )
            })?;
        }

        let serialized = serde_json::to_string_pretty(&self.document)
            .map_err(|error| format!("Failed to serialize store: {error}"))?;
        let mut staging = self.path.as_os_str().to_owned();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);
        fs::write(&staging, serialized).map_err(|error| {
            format!("Failed to write store {}: {}", staging.display(), error)
        })?;
        fs::rename(&staging, &self.path).map_err(|error| {
            format!("Failed to replace store {}: {}", self.path.display(), error)
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, scope: &str, key: &str) -> Option<Value> {
        self.document.get(scope)?.get(key).cloned()
    }

    fn set(&mut self, scope: &str, key: &str, value: Value) -> Result<(), String> {
        let root = ensure_object(&mut self.document);
        let scoped = root
            .entry(scope.to_string())
            .or_insert_with(empty_state_object);
        ensure_object(scoped).insert(key.to_string(), value);
        self.flush()
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    pub(crate) entries: std::collections::HashMap<(String, String), Value>,
    pub(crate) writes: usize,
    pub(crate) fail_writes: bool,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, scope: &str, key: &str) -> Option<Value> {
        self.entries
            .get(&(scope.to_string(), key.to_string()))
            .cloned()
    }

    fn set(&mut self, scope: &str, key: &str, value: Value) -> Result<(), String> {
        if self.fail_writes {
            return Err("Failed to write memory store: writes disabled".to_string());
        }
        self.writes += 1;
        self.entries
            .insert((scope.to_string(), key.to_string()), value);
        Ok(())
    }
}
