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

//! The rows a menu is made of.

use super::{AdjustDirection, MenuBounds, MenuKey, MenuLabel, MenuResult};
use crate::cvar::{CvarStore, CvarValue};

/// One row of a [`Menu`](super::Menu).
///
/// Bound entries hold the *name* of their cvar; the value itself is read from
/// and written to the store every time it is needed.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    /// An on/off row bound to a boolean cvar.
    Toggle {
        /// The row label.
        label: MenuLabel,
        /// The bound cvar.
        cvar: String,
    },
    /// A stepped row bound to a float cvar.
    Slider {
        /// The row label.
        label: MenuLabel,
        /// The bound cvar.
        cvar: String,
        /// Step and range for adjustments.
        bounds: MenuBounds,
    },
    /// A blank, non-selectable row.
    Separator,
}

/// A formatted row, ready to be laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    /// The right-aligned label, or empty for separators.
    pub label: String,
    /// The formatted value, or `None` for separators.
    pub value: Option<String>,
}

impl MenuEntry {
    /// Returns `true` if the cursor may rest on this entry.
    pub fn is_selectable(&self) -> bool {
        !matches!(self, MenuEntry::Separator)
    }

    /// The row label, if any.
    pub fn label(&self) -> Option<&MenuLabel> {
        match self {
            MenuEntry::Toggle { label, .. } | MenuEntry::Slider { label, .. } => Some(label),
            MenuEntry::Separator => None,
        }
    }

    /// The name of the bound cvar, if any.
    pub fn cvar(&self) -> Option<&str> {
        match self {
            MenuEntry::Toggle { cvar, .. } | MenuEntry::Slider { cvar, .. } => Some(cvar),
            MenuEntry::Separator => None,
        }
    }

    /// Applies a value key to this entry, writing the result to `store`.
    ///
    /// Returns the value written, or `None` if the key does not affect this
    /// kind of entry.
    pub fn apply_key(&self, key: MenuKey, store: &dyn CvarStore) -> MenuResult<Option<CvarValue>> {
        match (self, key) {
            (MenuEntry::Toggle { cvar, .. }, MenuKey::Left | MenuKey::Right | MenuKey::Enter) => {
                let flipped = !store.get_bool(cvar)?;
                store.set_bool(cvar, flipped)?;
                Ok(Some(CvarValue::Bool(flipped)))
            }
            (MenuEntry::Slider { cvar, bounds, .. }, MenuKey::Left | MenuKey::Right) => {
                let direction = if key == MenuKey::Left {
                    AdjustDirection::Decrease
                } else {
                    AdjustDirection::Increase
                };
                let adjusted = bounds.adjust(store.get_float(cvar)?, direction);
                store.set_float(cvar, adjusted)?;
                Ok(Some(CvarValue::Float(adjusted)))
            }
            _ => Ok(None),
        }
    }

    /// Formats the label and the current value read from `store`.
    pub fn format_row(&self, store: &dyn CvarStore) -> MenuResult<MenuRow> {
        let row = match self {
            MenuEntry::Toggle { label, cvar } => MenuRow {
                label: label.padded(),
                value: Some(CvarValue::Bool(store.get_bool(cvar)?).to_string()),
            },
            MenuEntry::Slider { label, cvar, .. } => MenuRow {
                label: label.padded(),
                value: Some(CvarValue::Float(store.get_float(cvar)?).to_string()),
            },
            MenuEntry::Separator => MenuRow {
                label: String::new(),
                value: None,
            },
        };
        Ok(row)
    }
}
