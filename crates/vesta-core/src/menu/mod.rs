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

//! Menus whose rows are bound directly to cvars.
//!
//! A [`Menu`] is composed once from [`MenuEntry`] rows, each naming the cvar
//! it controls. Key presses then read the current value from the injected
//! [`CvarStore`](crate::cvar::CvarStore), adjust it, and write it back; a draw
//! pass formats every row against the store's current values.

mod bound_menu;
mod bounds;
mod entry;
mod error;
mod key;
mod label;
pub mod surface;

pub use bound_menu::Menu;
pub use bounds::{AdjustDirection, MenuBounds};
pub use entry::{MenuEntry, MenuRow};
pub use error::{MenuError, MenuResult};
pub use key::{
    KeyOutcome, MenuKey, K_DOWNARROW, K_ENTER, K_ESCAPE, K_LEFTARROW, K_RIGHTARROW, K_UPARROW,
};
pub use label::{MenuLabel, MENU_LABEL_WIDTH};
pub use surface::DrawSurface;
