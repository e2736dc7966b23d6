//! BENCH-009: structured-data parse and nested field lookup
//!
//! Reads the whole document, decodes it into a `serde_json::Value` tree, then
//! walks a fixed path. The three failure classes stay distinct:
//!
//! - file missing / unreadable → [`BenchError::Io`]
//! - malformed document → [`BenchError::Parse`]
//! - path does not fit the data → [`BenchError::IndexOutOfRange`],
//!   [`BenchError::MissingField`], [`BenchError::TypeMismatch`]
//!
//! Nesting depth is bounded only by memory. The decoder's recursion limit is
//! disabled and decoding runs through `serde_stacker`, which moves the
//! recursion onto heap-allocated stack segments as the thread stack runs low.
//! Decoded trees are owned by [`Document`], which tears them down iteratively.

use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::bench::params::{self, BenchmarkId, PathSegment, render_path};
use crate::bench::verification::Checksum;
use crate::error::{BenchError, Result};
use crate::workloads::Workload;

/// A decoded document.
///
/// `Value`'s own drop recurses once per nesting level; this wrapper releases
/// the tree with an explicit work list instead.
#[derive(Debug, Default)]
pub struct Document(Value);

impl Document {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Take the tree out. The caller owns its (recursive) drop.
    pub fn into_value(mut self) -> Value {
        std::mem::take(&mut self.0)
    }
}

impl Deref for Document {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.0
    }
}

impl Drop for Document {
    fn drop(&mut self) {
        let mut pending = vec![std::mem::take(&mut self.0)];
        while let Some(value) = pending.pop() {
            match value {
                Value::Array(items) => pending.extend(items),
                Value::Object(map) => pending.extend(map.into_iter().map(|(_, v)| v)),
                _ => {}
            }
        }
    }
}

/// Decode a complete JSON document from bytes.
pub fn parse_document(bytes: &[u8], path: &Path) -> Result<Document> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let parse_err = |source: serde_json::Error| BenchError::Parse {
        path: path.to_path_buf(),
        source,
    };
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de)).map_err(parse_err)?;
    let document = Document::new(value);
    de.end().map_err(parse_err)?;
    Ok(document)
}

/// Read and decode the whole document at `path`.
pub fn read_document(path: &Path) -> Result<Document> {
    let bytes = fs::read(path).map_err(|e| BenchError::io(path, e))?;
    parse_document(&bytes, path)
}

/// `value[index]`, where `at` names `value` for diagnostics.
pub fn index<'a>(value: &'a Value, idx: usize, at: &str) -> Result<&'a Value> {
    let items = value.as_array().ok_or_else(|| BenchError::TypeMismatch {
        at: at.to_string(),
        expected: "array",
    })?;
    items.get(idx).ok_or(BenchError::IndexOutOfRange {
        at: at.to_string(),
        index: idx,
        len: items.len(),
    })
}

/// `value.key`, where `at` names `value` for diagnostics.
pub fn field<'a>(value: &'a Value, key: &str, at: &str) -> Result<&'a Value> {
    let map = value.as_object().ok_or_else(|| BenchError::TypeMismatch {
        at: at.to_string(),
        expected: "object",
    })?;
    map.get(key).ok_or_else(|| BenchError::MissingField {
        at: at.to_string(),
        field: key.to_string(),
    })
}

/// Walk `path` from the document root.
pub fn resolve<'a>(root: &'a Value, path: &[PathSegment]) -> Result<&'a Value> {
    let mut current = root;
    for (depth, segment) in path.iter().enumerate() {
        let at = match depth {
            0 => "$".to_string(),
            _ => render_path(&path[..depth]),
        };
        current = match *segment {
            PathSegment::Key(key) => field(current, key, &at)?,
            PathSegment::Index(idx) => index(current, idx, &at)?,
        };
    }
    Ok(current)
}

/// Resolve `path` and require a string leaf.
pub fn extract_str<'a>(root: &'a Value, path: &[PathSegment]) -> Result<&'a str> {
    resolve(root, path)?
        .as_str()
        .ok_or_else(|| BenchError::TypeMismatch {
            at: render_path(path),
            expected: "string",
        })
}

/// Lookup of `users[500].profile.location.city` in one document
#[derive(Debug, Clone)]
pub struct JsonFieldLookup {
    pub path: PathBuf,
    pub field_path: &'static [PathSegment],
}

impl JsonFieldLookup {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            field_path: params::json_parsing::FIELD_PATH,
        }
    }
}

impl Workload for JsonFieldLookup {
    type Input = Document;
    type Output = String;

    fn id(&self) -> BenchmarkId {
        BenchmarkId::JsonParsing
    }

    fn prepare(&self) -> Result<Document> {
        read_document(&self.path)
    }

    fn execute(&self, document: Document) -> Result<String> {
        extract_str(&document, self.field_path).map(str::to_string)
    }

    fn checksum(&self, output: &String) -> Checksum {
        Checksum::Text(output.clone())
    }
}
