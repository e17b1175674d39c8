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

//! Key codes understood by menus and the outcome of handling one.

use crate::cvar::CvarValue;

/// Host key code for Enter.
pub const K_ENTER: i32 = 13;
/// Host key code for Escape.
pub const K_ESCAPE: i32 = 27;
/// Host key code for the up arrow.
pub const K_UPARROW: i32 = 128;
/// Host key code for the down arrow.
pub const K_DOWNARROW: i32 = 129;
/// Host key code for the left arrow.
pub const K_LEFTARROW: i32 = 130;
/// Host key code for the right arrow.
pub const K_RIGHTARROW: i32 = 131;

/// A decoded menu key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKey {
    /// Select the previous entry.
    Up,
    /// Select the next entry.
    Down,
    /// Decrease a slider or flip a toggle.
    Left,
    /// Increase a slider or flip a toggle.
    Right,
    /// Flip a toggle.
    Enter,
    /// Leave the menu.
    Escape,
    /// Any key the menu does not react to.
    Other(i32),
}

impl MenuKey {
    /// Decodes a host key code.
    pub fn from_code(code: i32) -> Self {
        match code {
            K_UPARROW => MenuKey::Up,
            K_DOWNARROW => MenuKey::Down,
            K_LEFTARROW => MenuKey::Left,
            K_RIGHTARROW => MenuKey::Right,
            K_ENTER => MenuKey::Enter,
            K_ESCAPE => MenuKey::Escape,
            other => MenuKey::Other(other),
        }
    }
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// Nothing changed.
    Ignored,
    /// The cursor moved to the given entry index.
    CursorMoved(usize),
    /// A cvar was written.
    Changed {
        /// The name of the cvar.
        cvar: String,
        /// The value written.
        value: CvarValue,
    },
    /// The user asked to leave the menu.
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_mapping() {
        assert_eq!(MenuKey::from_code(128), MenuKey::Up);
        assert_eq!(MenuKey::from_code(129), MenuKey::Down);
        assert_eq!(MenuKey::from_code(130), MenuKey::Left);
        assert_eq!(MenuKey::from_code(131), MenuKey::Right);
        assert_eq!(MenuKey::from_code(13), MenuKey::Enter);
        assert_eq!(MenuKey::from_code(27), MenuKey::Escape);
        assert_eq!(MenuKey::from_code(b'a' as i32), MenuKey::Other(97));
    }
}
