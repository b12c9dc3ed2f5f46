//! Incremental JSON value builder.
//!
//! Builds a `serde_json::Value` tree one token at a time, the way a writer
//! streams keys and values. The builder keeps a stack of open containers and
//! validates every operation against its current state; out-of-order calls
//! fail with `BuilderError::InvalidSequence` instead of producing a
//! malformed tree.

use std::fmt;

use serde_json::{Map, Value};

/// Where the builder is in the token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// Nothing written yet; a root value or container is expected
    Empty,
    /// Inside an object; a key or the end of the object is expected
    ExpectKey,
    /// After a key, or inside an array; a value or container is expected
    /// (an array may also be closed here)
    ExpectValue,
    /// The root value is finished; only `build` is valid
    Complete,
}

impl fmt::Display for BuilderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BuilderState::Empty => "empty",
            BuilderState::ExpectKey => "expecting key",
            BuilderState::ExpectValue => "expecting value",
            BuilderState::Complete => "complete",
        };
        f.write_str(s)
    }
}

/// Error from an operation that is not valid in the builder's state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    #[error("invalid sequence: {operation} while {state}")]
    InvalidSequence {
        operation: &'static str,
        state: BuilderState,
    },
}

/// An open container on the builder stack.
#[derive(Debug)]
enum Frame {
    Object {
        entries: Map<String, Value>,
        pending_key: Option<String>,
    },
    Array(Vec<Value>),
}

/// State-machine builder for `serde_json::Value` trees.
///
/// # Examples
///
/// ```
/// use transport_catalogue::json::Builder;
/// use serde_json::json;
///
/// let value = Builder::new()
///     .start_object()?
///     .key("request_id")?
///     .value(7)?
///     .key("buses")?
///     .start_array()?
///     .value("14")?
///     .end_array()?
///     .end_object()?
///     .build()?;
///
/// assert_eq!(value, json!({"request_id": 7, "buses": ["14"]}));
///
/// // A key outside an object is rejected
/// assert!(Builder::new().key("oops").is_err());
/// # Ok::<(), transport_catalogue::json::BuilderError>(())
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    root: Option<Value>,
    stack: Vec<Frame>,
}

impl Builder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The builder's current state.
    pub fn state(&self) -> BuilderState {
        match self.stack.last() {
            None if self.root.is_some() => BuilderState::Complete,
            None => BuilderState::Empty,
            Some(Frame::Object {
                pending_key: None, ..
            }) => BuilderState::ExpectKey,
            Some(Frame::Object {
                pending_key: Some(_),
                ..
            }) => BuilderState::ExpectValue,
            Some(Frame::Array(_)) => BuilderState::ExpectValue,
        }
    }

    /// Write a key inside an object.
    pub fn key(mut self, key: impl Into<String>) -> Result<Self, BuilderError> {
        let accepted = match self.stack.last_mut() {
            Some(Frame::Object { pending_key, .. }) if pending_key.is_none() => {
                *pending_key = Some(key.into());
                true
            }
            _ => false,
        };
        if accepted {
            Ok(self)
        } else {
            Err(self.invalid("key"))
        }
    }

    /// Write a complete value: the root, an object entry, or an array item.
    pub fn value(mut self, value: impl Into<Value>) -> Result<Self, BuilderError> {
        self.expect_value("value")?;
        self.attach(value.into());
        Ok(self)
    }

    /// Open an object.
    pub fn start_object(mut self) -> Result<Self, BuilderError> {
        self.expect_value("start_object")?;
        self.stack.push(Frame::Object {
            entries: Map::new(),
            pending_key: None,
        });
        Ok(self)
    }

    /// Open an array.
    pub fn start_array(mut self) -> Result<Self, BuilderError> {
        self.expect_value("start_array")?;
        self.stack.push(Frame::Array(Vec::new()));
        Ok(self)
    }

    /// Close the innermost object. Fails if a key is waiting for its value.
    pub fn end_object(mut self) -> Result<Self, BuilderError> {
        match self.stack.pop() {
            Some(Frame::Object {
                entries,
                pending_key: None,
            }) => {
                self.attach(Value::Object(entries));
                Ok(self)
            }
            Some(frame) => {
                self.stack.push(frame);
                Err(self.invalid("end_object"))
            }
            None => Err(self.invalid("end_object")),
        }
    }

    /// Close the innermost array.
    pub fn end_array(mut self) -> Result<Self, BuilderError> {
        match self.stack.pop() {
            Some(Frame::Array(items)) => {
                self.attach(Value::Array(items));
                Ok(self)
            }
            Some(frame) => {
                self.stack.push(frame);
                Err(self.invalid("end_array"))
            }
            None => Err(self.invalid("end_array")),
        }
    }

    /// Finish and return the root value.
    pub fn build(self) -> Result<Value, BuilderError> {
        if self.state() != BuilderState::Complete {
            return Err(self.invalid("build"));
        }
        self.root.ok_or(BuilderError::InvalidSequence {
            operation: "build",
            state: BuilderState::Empty,
        })
    }

    fn expect_value(&self, operation: &'static str) -> Result<(), BuilderError> {
        match self.state() {
            BuilderState::Empty | BuilderState::ExpectValue => Ok(()),
            _ => Err(self.invalid(operation)),
        }
    }

    /// Place a finished value into the innermost container, or make it the
    /// root. Callers have already checked the state.
    fn attach(&mut self, value: Value) {
        match self.stack.last_mut() {
            Some(Frame::Object {
                entries,
                pending_key,
            }) => {
                if let Some(key) = pending_key.take() {
                    entries.insert(key, value);
                }
            }
            Some(Frame::Array(items)) => items.push(value),
            None => self.root = Some(value),
        }
    }

    fn invalid(&self, operation: &'static str) -> BuilderError {
        BuilderError::InvalidSequence {
            operation,
            state: self.state(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_root() {
        let value = Builder::new().value(42).unwrap().build().unwrap();
        assert_eq!(value, json!(42));
    }

    #[test]
    fn nested_containers() {
        let value = Builder::new()
            .start_array()
            .unwrap()
            .start_object()
            .unwrap()
            .key("type")
            .unwrap()
            .value("Wait")
            .unwrap()
            .key("time")
            .unwrap()
            .value(6.0)
            .unwrap()
            .end_object()
            .unwrap()
            .start_array()
            .unwrap()
            .end_array()
            .unwrap()
            .value(json!(null))
            .unwrap()
            .end_array()
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(value, json!([{"type": "Wait", "time": 6.0}, [], null]));
    }

    #[test]
    fn state_transitions() {
        let b = Builder::new();
        assert_eq!(b.state(), BuilderState::Empty);
        let b = b.start_object().unwrap();
        assert_eq!(b.state(), BuilderState::ExpectKey);
        let b = b.key("k").unwrap();
        assert_eq!(b.state(), BuilderState::ExpectValue);
        let b = b.start_array().unwrap();
        assert_eq!(b.state(), BuilderState::ExpectValue);
        let b = b.end_array().unwrap();
        assert_eq!(b.state(), BuilderState::ExpectKey);
        let b = b.end_object().unwrap();
        assert_eq!(b.state(), BuilderState::Complete);
    }

    #[test]
    fn key_outside_object_rejected() {
        let err = Builder::new().key("k").unwrap_err();
        assert_eq!(
            err,
            BuilderError::InvalidSequence {
                operation: "key",
                state: BuilderState::Empty
            }
        );

        let err = Builder::new().start_array().unwrap().key("k").unwrap_err();
        assert_eq!(
            err,
            BuilderError::InvalidSequence {
                operation: "key",
                state: BuilderState::ExpectValue
            }
        );
    }

    #[test]
    fn two_keys_in_a_row_rejected() {
        let err = Builder::new()
            .start_object()
            .unwrap()
            .key("a")
            .unwrap()
            .key("b")
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid sequence: key while expecting value");
    }

    #[test]
    fn value_without_key_rejected() {
        let err = Builder::new().start_object().unwrap().value(1).unwrap_err();
        assert_eq!(
            err,
            BuilderError::InvalidSequence {
                operation: "value",
                state: BuilderState::ExpectKey
            }
        );
    }

    #[test]
    fn mismatched_close_rejected() {
        assert!(Builder::new().start_object().unwrap().end_array().is_err());
        assert!(Builder::new().start_array().unwrap().end_object().is_err());
        assert!(Builder::new().end_object().is_err());
        // Key without a value cannot be closed
        assert!(
            Builder::new()
                .start_object()
                .unwrap()
                .key("dangling")
                .unwrap()
                .end_object()
                .is_err()
        );
    }

    #[test]
    fn nothing_after_complete() {
        let b = Builder::new().value("done").unwrap();
        assert_eq!(b.state(), BuilderState::Complete);
        let err = b.value("again").unwrap_err();
        assert_eq!(
            err,
            BuilderError::InvalidSequence {
                operation: "value",
                state: BuilderState::Complete
            }
        );
        assert!(Builder::new().value(1).unwrap().start_array().is_err());
    }

    #[test]
    fn build_incomplete_rejected() {
        assert!(Builder::new().build().is_err());
        let err = Builder::new().start_array().unwrap().build().unwrap_err();
        assert_eq!(
            err,
            BuilderError::InvalidSequence {
                operation: "build",
                state: BuilderState::ExpectValue
            }
        );
    }
}
