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

//! The surface a menu draws onto, and the layout it draws with.
//!
//! Coordinates are in a 320-unit-wide virtual screen with 8-unit text rows.

/// Width of the virtual screen menus are laid out on.
pub const VIRTUAL_WIDTH: i32 = 320;
/// Width of one text character.
pub const CHAR_WIDTH: i32 = 8;
/// Vertical position of the title.
pub const TITLE_Y: i32 = 4;
/// Vertical position of the first entry row.
pub const MENU_TOP: i32 = 32;
/// Height of one entry row.
pub const ROW_HEIGHT: i32 = 8;
/// Horizontal position of the (padded) label column.
pub const LABEL_X: i32 = 16;
/// Horizontal position of the cursor marker.
pub const CURSOR_X: i32 = 224;
/// Horizontal position of the value column.
pub const VALUE_X: i32 = 232;

/// Receives positioned text from a menu draw pass.
///
/// Implementations decide how text is actually displayed.
pub trait DrawSurface {
    /// Draws `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str);

    /// Draws the selection marker at `(x, y)`.
    fn draw_cursor(&mut self, x: i32, y: i32);
}

/// Returns the `x` that horizontally centres `text` on the virtual screen.
pub fn centered_x(text: &str) -> i32 {
    let width = text.chars().count() as i32 * CHAR_WIDTH;
    ((VIRTUAL_WIDTH - width) / 2).max(0)
}

/// Returns the `y` of the entry row at `index`.
pub fn row_y(index: usize) -> i32 {
    MENU_TOP + index as i32 * ROW_HEIGHT
}
