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

//! Errors raised while building or driving a [`Menu`](super::Menu).

use crate::cvar::CvarError;
use std::fmt;

/// A specialized `Result` type for menu operations.
pub type MenuResult<T> = Result<T, MenuError>;

/// An error raised by the menu framework.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuError {
    /// A label does not fit the fixed display width.
    LabelTooLong {
        /// The rejected label.
        label: String,
        /// Its length in characters.
        length: usize,
        /// The maximum allowed length.
        max: usize,
    },
    /// Slider bounds are not finite, have a non-positive step, or `min > max`.
    InvalidBounds {
        /// The rejected step.
        step: f32,
        /// The rejected minimum.
        min: f32,
        /// The rejected maximum.
        max: f32,
    },
    /// The bound cvar is missing or holds the wrong kind of value.
    Cvar(CvarError),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::LabelTooLong { label, length, max } => write!(
                f,
                "Menu label '{label}' is {length} characters long, maximum is {max}"
            ),
            MenuError::InvalidBounds { step, min, max } => write!(
                f,
                "Invalid menu bounds: step={step}, min={min}, max={max}"
            ),
            MenuError::Cvar(err) => write!(f, "Menu cvar error: {err}"),
        }
    }
}

impl std::error::Error for MenuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MenuError::Cvar(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CvarError> for MenuError {
    fn from(err: CvarError) -> Self {
        MenuError::Cvar(err)
    }
}
