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

//! Fixed-width menu labels.

use super::{MenuError, MenuResult};
use std::fmt;

/// The width, in characters, that every label is padded to.
pub const MENU_LABEL_WIDTH: usize = 25;

/// A label validated to fit in [`MENU_LABEL_WIDTH`] characters.
///
/// Lengths are counted in `char`s so multi-byte text is measured the way
/// it is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLabel(String);

impl MenuLabel {
    /// Validates `text`, rejecting labels wider than [`MENU_LABEL_WIDTH`].
    pub fn new(text: impl Into<String>) -> MenuResult<Self> {
        let text = text.into();
        let length = text.chars().count();
        if length > MENU_LABEL_WIDTH {
            return Err(MenuError::LabelTooLong {
                label: text,
                length,
                max: MENU_LABEL_WIDTH,
            });
        }
        Ok(Self(text))
    }

    /// The label right-aligned in a [`MENU_LABEL_WIDTH`]-wide column.
    pub fn padded(&self) -> String {
        format!("{:>width$}", self.0, width = MENU_LABEL_WIDTH)
    }
}

impl fmt::Display for MenuLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
