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

//! The menu container: entries, cursor, and the injected cvar store.

use std::sync::Arc;

use super::surface::{centered_x, row_y, CURSOR_X, LABEL_X, TITLE_Y, VALUE_X};
use super::{
    DrawSurface, KeyOutcome, MenuBounds, MenuEntry, MenuKey, MenuLabel, MenuResult, MenuRow,
};
use crate::cvar::CvarStore;

/// A titled list of rows bound to cvars, driven by discrete key presses.
///
/// The cursor is the only state the menu owns. It is `None` until a
/// selectable entry is added and never rests on a separator.
#[derive(Debug)]
pub struct Menu {
    title: String,
    entries: Vec<MenuEntry>,
    cursor: Option<usize>,
    store: Arc<dyn CvarStore>,
}

impl Menu {
    /// Creates an empty menu that reads and writes cvars through `store`.
    pub fn new(title: impl Into<String>, store: Arc<dyn CvarStore>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
            cursor: None,
            store,
        }
    }

    /// The menu title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// All entries, in display order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// The index of the selected entry.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The selected entry.
    pub fn selected(&self) -> Option<&MenuEntry> {
        self.cursor.map(|index| &self.entries[index])
    }

    /// The store the menu is bound to.
    pub fn store(&self) -> &Arc<dyn CvarStore> {
        &self.store
    }

    /// Appends an on/off row bound to the boolean cvar `cvar`.
    ///
    /// # Errors
    ///
    /// Fails if the label is too wide, or if `cvar` is missing from the store
    /// or is not a boolean.
    pub fn add_toggle(
        &mut self,
        label: impl Into<String>,
        cvar: impl Into<String>,
    ) -> MenuResult<&mut Self> {
        let label = MenuLabel::new(label)?;
        let cvar = cvar.into();
        self.store.get_bool(&cvar)?;
        self.push(MenuEntry::Toggle { label, cvar });
        Ok(self)
    }

    /// Appends a stepped row bound to the float cvar `cvar`.
    ///
    /// # Errors
    ///
    /// Fails if the label is too wide, or if `cvar` is missing from the store
    /// or is not a float.
    pub fn add_slider(
        &mut self,
        label: impl Into<String>,
        cvar: impl Into<String>,
        bounds: MenuBounds,
    ) -> MenuResult<&mut Self> {
        let label = MenuLabel::new(label)?;
        let cvar = cvar.into();
        let current = self.store.get_float(&cvar)?;
        if !(bounds.min()..=bounds.max()).contains(&current) {
            log::debug!(
                "Cvar '{cvar}' = {current} is outside its menu range [{}, {}]",
                bounds.min(),
                bounds.max()
            );
        }
        self.push(MenuEntry::Slider {
            label,
            cvar,
            bounds,
        });
        Ok(self)
    }

    /// Appends a blank, non-selectable row.
    pub fn add_separator(&mut self) -> &mut Self {
        self.push(MenuEntry::Separator);
        self
    }

    fn push(&mut self, entry: MenuEntry) {
        if self.cursor.is_none() && entry.is_selectable() {
            self.cursor = Some(self.entries.len());
        }
        self.entries.push(entry);
    }

    /// Handles one host key code. See [`Menu::handle_key`].
    pub fn dispatch_key(&mut self, code: i32) -> MenuResult<KeyOutcome> {
        self.handle_key(MenuKey::from_code(code))
    }

    /// Handles one key press.
    ///
    /// Up/Down move between selectable entries, wrapping at both ends.
    /// Left/Right step a slider or flip a toggle; Enter flips a toggle.
    /// Escape asks the host to leave the menu.
    ///
    /// # Errors
    ///
    /// Propagates store failures for the selected entry's cvar.
    pub fn handle_key(&mut self, key: MenuKey) -> MenuResult<KeyOutcome> {
        match key {
            MenuKey::Up => Ok(self.move_cursor(false)),
            MenuKey::Down => Ok(self.move_cursor(true)),
            MenuKey::Escape => Ok(KeyOutcome::Exit),
            MenuKey::Left | MenuKey::Right | MenuKey::Enter => {
                let Some(entry) = self.selected() else {
                    return Ok(KeyOutcome::Ignored);
                };
                match entry.apply_key(key, self.store.as_ref())? {
                    Some(value) => {
                        let cvar = entry.cvar().unwrap_or_default().to_string();
                        if let Some(label) = entry.label() {
                            log::debug!("Menu '{}': {label} ({cvar}) = {value}", self.title);
                        }
                        Ok(KeyOutcome::Changed { cvar, value })
                    }
                    None => Ok(KeyOutcome::Ignored),
                }
            }
            MenuKey::Other(_) => Ok(KeyOutcome::Ignored),
        }
    }

    fn move_cursor(&mut self, forward: bool) -> KeyOutcome {
        let Some(mut index) = self.cursor else {
            return KeyOutcome::Ignored;
        };
        let len = self.entries.len();
        for _ in 0..len {
            index = if forward {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };
            if self.entries[index].is_selectable() {
                self.cursor = Some(index);
                log::trace!("Menu '{}' cursor -> {index}", self.title);
                return KeyOutcome::CursorMoved(index);
            }
        }
        KeyOutcome::Ignored
    }

    /// Formats every entry with its current value.
    pub fn rows(&self) -> MenuResult<Vec<MenuRow>> {
        self.entries
            .iter()
            .map(|entry| entry.format_row(self.store.as_ref()))
            .collect()
    }

    /// Draws the title, every row, and the cursor onto `surface`.
    pub fn render(&self, surface: &mut dyn DrawSurface) -> MenuResult<()> {
        let rows = self.rows()?;

        surface.draw_text(centered_x(&self.title), TITLE_Y, &self.title);
        for (index, row) in rows.iter().enumerate() {
            if let Some(value) = &row.value {
                let y = row_y(index);
                surface.draw_text(LABEL_X, y, &row.label);
                surface.draw_text(VALUE_X, y, value);
            }
        }
        if let Some(index) = self.cursor {
            surface.draw_cursor(CURSOR_X, row_y(index));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cvar::{CvarError, CvarKind, CvarResult, CvarValue};
    use crate::menu::MenuError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct MapStore(Mutex<HashMap<String, CvarValue>>);

    impl MapStore {
        fn with(values: &[(&str, CvarValue)]) -> Arc<Self> {
            let map = values
                .iter()
                .map(|(name, value)| (name.to_string(), *value))
                .collect();
            Arc::new(Self(Mutex::new(map)))
        }
    }

    impl CvarStore for MapStore {
        fn get(&self, name: &str) -> CvarResult<CvarValue> {
            self.0
                .lock()
                .unwrap()
                .get(name)
                .copied()
                .ok_or_else(|| CvarError::NotFound(name.to_string()))
        }

        fn set(&self, name: &str, value: CvarValue) -> CvarResult<()> {
            self.0.lock().unwrap().insert(name.to_string(), value);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        texts: Vec<(i32, i32, String)>,
        cursors: Vec<(i32, i32)>,
    }

    impl DrawSurface for RecordingSurface {
        fn draw_text(&mut self, x: i32, y: i32, text: &str) {
            self.texts.push((x, y, text.to_string()));
        }

        fn draw_cursor(&mut self, x: i32, y: i32) {
            self.cursors.push((x, y));
        }
    }

    fn speed_bounds() -> MenuBounds {
        MenuBounds::new(1.0, 0.0, 10.0).unwrap()
    }

    #[test]
    fn test_empty_menu_has_no_selection() {
        let mut menu = Menu::new("Empty", MapStore::with(&[]));
        assert_eq!(menu.cursor(), None);
        assert_eq!(menu.dispatch_key(crate::menu::K_DOWNARROW).unwrap(), KeyOutcome::Ignored);
        assert_eq!(menu.handle_key(MenuKey::Right).unwrap(), KeyOutcome::Ignored);
        assert_eq!(menu.handle_key(MenuKey::Escape).unwrap(), KeyOutcome::Exit);
    }

    #[test]
    fn test_cursor_starts_on_first_selectable() {
        let store = MapStore::with(&[("a", CvarValue::Bool(false))]);
        let mut menu = Menu::new("Test", store);
        menu.add_separator().add_separator();
        assert_eq!(menu.cursor(), None);
        for key in [MenuKey::Up, MenuKey::Down, MenuKey::Left] {
            assert_eq!(menu.handle_key(key).unwrap(), KeyOutcome::Ignored);
        }
        assert_eq!(menu.cursor(), None);
        menu.add_toggle("A", "a").unwrap();
        assert_eq!(menu.cursor(), Some(2));
    }

    #[test]
    fn test_navigation_skips_separators_and_wraps() {
        let store = MapStore::with(&[
            ("a", CvarValue::Bool(false)),
            ("b", CvarValue::Float(1.0)),
        ]);
        let mut menu = Menu::new("Test", store);
        menu.add_toggle("A", "a").unwrap();
        menu.add_separator();
        menu.add_slider("B", "b", speed_bounds()).unwrap();

        assert_eq!(menu.cursor(), Some(0));
        assert_eq!(menu.handle_key(MenuKey::Down).unwrap(), KeyOutcome::CursorMoved(2));
        assert_eq!(menu.handle_key(MenuKey::Down).unwrap(), KeyOutcome::CursorMoved(0));
        assert_eq!(menu.handle_key(MenuKey::Up).unwrap(), KeyOutcome::CursorMoved(2));
        assert_eq!(menu.handle_key(MenuKey::Up).unwrap(), KeyOutcome::CursorMoved(0));
    }

    #[test]
    fn test_slider_clamps_at_max() {
        let store = MapStore::with(&[("speed", CvarValue::Float(9.0))]);
        let mut menu = Menu::new("Test", store.clone());
        menu.add_slider("Speed", "speed", speed_bounds()).unwrap();

        menu.handle_key(MenuKey::Right).unwrap();
        assert_eq!(store.get_float("speed").unwrap(), 10.0);
        let outcome = menu.handle_key(MenuKey::Right).unwrap();
        assert_eq!(store.get_float("speed").unwrap(), 10.0);
        assert_eq!(
            outcome,
            KeyOutcome::Changed {
                cvar: "speed".into(),
                value: CvarValue::Float(10.0)
            }
        );
    }

    #[test]
    fn test_slider_replaces_nan_with_bounded_value() {
        let store = MapStore::with(&[("speed", CvarValue::Float(f32::NAN))]);
        let mut menu = Menu::new("Test", store.clone());
        menu.add_slider("Speed", "speed", speed_bounds()).unwrap();

        menu.handle_key(MenuKey::Right).unwrap();
        assert_eq!(store.get_float("speed").unwrap(), 1.0);
    }

    #[test]
    fn test_slider_ignores_enter() {
        let store = MapStore::with(&[("speed", CvarValue::Float(3.0))]);
        let mut menu = Menu::new("Test", store.clone());
        menu.add_slider("Speed", "speed", speed_bounds()).unwrap();
        assert_eq!(menu.handle_key(MenuKey::Enter).unwrap(), KeyOutcome::Ignored);
        assert_eq!(store.get_float("speed").unwrap(), 3.0);
    }

    #[test]
    fn test_toggle_flips_on_every_value_key() {
        let store = MapStore::with(&[("flag", CvarValue::Bool(false))]);
        let mut menu = Menu::new("Test", store.clone());
        menu.add_toggle("Flag", "flag").unwrap();

        menu.handle_key(MenuKey::Enter).unwrap();
        assert!(store.get_bool("flag").unwrap());
        menu.handle_key(MenuKey::Left).unwrap();
        assert!(!store.get_bool("flag").unwrap());
        menu.handle_key(MenuKey::Right).unwrap();
        assert!(store.get_bool("flag").unwrap());
    }

    #[test]
    fn test_menu_rereads_store_on_every_key() {
        let store = MapStore::with(&[("speed", CvarValue::Float(2.0))]);
        let mut menu = Menu::new("Test", store.clone());
        menu.add_slider("Speed", "speed", speed_bounds()).unwrap();

        store.set_float("speed", 7.0).unwrap();
        menu.handle_key(MenuKey::Left).unwrap();
        assert_eq!(store.get_float("speed").unwrap(), 6.0);
    }

    #[test]
    fn test_add_rejects_unknown_or_mistyped_cvars() {
        let store = MapStore::with(&[("flag", CvarValue::Bool(true))]);
        let mut menu = Menu::new("Test", store);

        assert_eq!(
            menu.add_toggle("Missing", "missing").unwrap_err(),
            MenuError::Cvar(CvarError::NotFound("missing".into()))
        );
        assert_eq!(
            menu.add_slider("Flag", "flag", speed_bounds()).unwrap_err(),
            MenuError::Cvar(CvarError::TypeMismatch {
                name: "flag".into(),
                expected: CvarKind::Float,
                found: CvarKind::Bool,
            })
        );
        assert!(matches!(
            menu.add_toggle("x".repeat(26), "flag"),
            Err(MenuError::LabelTooLong { length: 26, .. })
        ));
        assert!(menu.entries().is_empty());
        assert_eq!(menu.cursor(), None);
    }

    #[test]
    fn test_render_layout() {
        let store = MapStore::with(&[
            ("flag", CvarValue::Bool(true)),
            ("speed", CvarValue::Float(0.5)),
        ]);
        let mut menu = Menu::new("Settings", store);
        menu.add_toggle("Flag", "flag").unwrap();
        menu.add_separator();
        menu.add_slider("Speed", "speed", speed_bounds()).unwrap();
        menu.handle_key(MenuKey::Down).unwrap();

        let mut surface = RecordingSurface::default();
        menu.render(&mut surface).unwrap();

        let title_x = (320 - 8 * 8) / 2;
        assert_eq!(surface.texts[0], (title_x, 4, "Settings".to_string()));
        assert_eq!(surface.texts[1], (16, 32, format!("{:>25}", "Flag")));
        assert_eq!(surface.texts[2], (232, 32, "on".to_string()));
        assert_eq!(surface.texts[3], (16, 48, format!("{:>25}", "Speed")));
        assert_eq!(surface.texts[4], (232, 48, "0.50".to_string()));
        assert_eq!(surface.texts.len(), 5);
        assert_eq!(surface.cursors, vec![(224, 48)]);
    }
}
