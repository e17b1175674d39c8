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

use vesta_core::menu::surface::{CHAR_WIDTH, ROW_HEIGHT, VIRTUAL_WIDTH};
use vesta_core::menu::DrawSurface;

/// The marker drawn for [`DrawSurface::draw_cursor`].
pub const CURSOR_GLYPH: char = '>';

/// A [`DrawSurface`] that rasterises menu text onto a fixed character grid.
///
/// Virtual coordinates are mapped to cells by integer division by the
/// character and row size. Text running past the right edge, and anything
/// placed outside the grid, is clipped.
#[derive(Debug, Clone)]
pub struct TextSurface {
    grid: Vec<Vec<char>>,
}

impl TextSurface {
    /// Creates a blank grid with `rows` lines of `columns` cells.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            grid: vec![vec![' '; columns]; rows],
        }
    }

    /// Creates a grid that covers the virtual menu screen.
    pub fn for_virtual_screen(rows: usize) -> Self {
        Self::new((VIRTUAL_WIDTH / CHAR_WIDTH) as usize, rows)
    }

    /// Number of cells per line.
    pub fn width(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// Number of lines.
    pub fn height(&self) -> usize {
        self.grid.len()
    }

    /// Blanks every cell.
    pub fn clear(&mut self) {
        for row in &mut self.grid {
            row.fill(' ');
        }
    }

    /// Returns the text of one line, without trailing blanks.
    pub fn line(&self, row: usize) -> Option<String> {
        self.grid
            .get(row)
            .map(|cells| cells.iter().collect::<String>().trim_end().to_string())
    }

    /// The whole grid, one line per row, without trailing blanks.
    pub fn to_display_string(&self) -> String {
        (0..self.height())
            .filter_map(|row| self.line(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The grid surrounded by a box-drawing frame.
    pub fn framed(&self) -> String {
        let horiz = "─".repeat(self.width());
        let contents = self
            .grid
            .iter()
            .map(|cells| format!("│{}│", cells.iter().collect::<String>()))
            .collect::<Vec<_>>()
            .join("\n");
        format!("╭{horiz}╮\n{contents}\n╰{horiz}╯")
    }

    fn cell(x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || y < 0 {
            return None;
        }
        Some(((y / ROW_HEIGHT) as usize, (x / CHAR_WIDTH) as usize))
    }

    fn put(&mut self, row: usize, col: usize, glyph: char) {
        if let Some(cell) = self.grid.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            *cell = glyph;
        }
    }
}

impl DrawSurface for TextSurface {
    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        let Some((row, col)) = Self::cell(x, y) else {
            log::warn!("Dropping text drawn at negative position ({x}, {y})");
            return;
        };
        for (i, glyph) in text.chars().enumerate() {
            self.put(row, col + i, glyph);
        }
    }

    fn draw_cursor(&mut self, x: i32, y: i32) {
        if let Some((row, col)) = Self::cell(x, y) {
            self.put(row, col, CURSOR_GLYPH);
        }
    }
}
