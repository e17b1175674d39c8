// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Contract for configuration variables ("cvars"): named scalars that live
//! in an external store and are read and written by name.
//!
//! The store is injected wherever cvars are needed (see [`crate::menu::Menu`]),
//! so tests and tools can substitute their own implementation.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// The kind of value a cvar holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CvarKind {
    /// An on/off flag.
    Bool,
    /// A floating-point scalar.
    Float,
}

/// The current value of a cvar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CvarValue {
    /// An on/off flag.
    Bool(bool),
    /// A floating-point scalar.
    Float(f32),
}

impl CvarValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> CvarKind {
        match self {
            CvarValue::Bool(_) => CvarKind::Bool,
            CvarValue::Float(_) => CvarKind::Float,
        }
    }

    /// Returns the flag if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            CvarValue::Bool(b) => Some(b),
            CvarValue::Float(_) => None,
        }
    }

    /// Returns the scalar if this is a `Float`.
    pub fn as_float(&self) -> Option<f32> {
        match *self {
            CvarValue::Float(v) => Some(v),
            CvarValue::Bool(_) => None,
        }
    }
}

impl Display for CvarValue {
    /// Flags print as `on`/`off`, scalars with two decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CvarValue::Bool(true) => write!(f, "on"),
            CvarValue::Bool(false) => write!(f, "off"),
            CvarValue::Float(v) => write!(f, "{v:.2}"),
        }
    }
}

impl From<bool> for CvarValue {
    fn from(value: bool) -> Self {
        CvarValue::Bool(value)
    }
}

impl From<f32> for CvarValue {
    fn from(value: f32) -> Self {
        CvarValue::Float(value)
    }
}

/// A specialized `Result` type for cvar operations.
pub type CvarResult<T> = Result<T, CvarError>;

/// An error that can occur when accessing a cvar store.
#[derive(Debug, Clone, PartialEq)]
pub enum CvarError {
    /// No cvar is registered under the given name.
    NotFound(String),
    /// A cvar with the given name is already registered.
    AlreadyRegistered(String),
    /// The cvar holds a different kind of value than the operation expects.
    TypeMismatch {
        /// The name of the cvar.
        name: String,
        /// The kind the operation expected.
        expected: CvarKind,
        /// The kind actually stored.
        found: CvarKind,
    },
}

impl Display for CvarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CvarError::NotFound(name) => write!(f, "Cvar not found: {name}"),
            CvarError::AlreadyRegistered(name) => write!(f, "Cvar already registered: {name}"),
            CvarError::TypeMismatch {
                name,
                expected,
                found,
            } => write!(
                f,
                "Type mismatch for cvar '{name}': expected {expected:?}, found {found:?}"
            ),
        }
    }
}

impl std::error::Error for CvarError {}

/// Declares a cvar: its name, what it controls, and the value it starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvarDefinition {
    /// The stable identifier used for lookups.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// The initial value, restored by a reset.
    pub default: CvarValue,
}

impl CvarDefinition {
    /// Creates a new definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        default: impl Into<CvarValue>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default: default.into(),
        }
    }
}

/// A name-keyed store of cvar values.
///
/// Implementations own the values; callers never cache them across calls.
/// Methods take `&self` so a store can be shared behind an `Arc`.
pub trait CvarStore: Send + Sync + Debug {
    /// Reads the current value of `name`.
    fn get(&self, name: &str) -> CvarResult<CvarValue>;

    /// Replaces the value of `name`. Implementations reject kind changes.
    fn set(&self, name: &str, value: CvarValue) -> CvarResult<()>;

    /// Returns `true` if `name` is registered.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// Reads `name` as a flag.
    fn get_bool(&self, name: &str) -> CvarResult<bool> {
        let value = self.get(name)?;
        value
            .as_bool()
            .ok_or_else(|| type_mismatch(name, CvarKind::Bool, value.kind()))
    }

    /// Reads `name` as a scalar.
    fn get_float(&self, name: &str) -> CvarResult<f32> {
        let value = self.get(name)?;
        value
            .as_float()
            .ok_or_else(|| type_mismatch(name, CvarKind::Float, value.kind()))
    }

    /// Writes a flag to `name`.
    fn set_bool(&self, name: &str, value: bool) -> CvarResult<()> {
        self.set(name, CvarValue::Bool(value))
    }

    /// Writes a scalar to `name`.
    fn set_float(&self, name: &str, value: f32) -> CvarResult<()> {
        self.set(name, CvarValue::Float(value))
    }
}

/// Builds a [`CvarError::TypeMismatch`].
pub fn type_mismatch(name: &str, expected: CvarKind, found: CvarKind) -> CvarError {
    CvarError::TypeMismatch {
        name: name.to_string(),
        expected,
        found,
    }
}
