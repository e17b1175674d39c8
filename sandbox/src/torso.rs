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

//! The VR torso settings screen: its cvars and the menu bound to them.

use std::sync::Arc;

use anyhow::Result;
use vesta_core::cvar::{CvarDefinition, CvarStore};
use vesta_core::math::{direction_from_pitch_yaw_roll, EulerAngles, Vec3};
use vesta_core::menu::{Menu, MenuBounds};

pub const ENABLED: &str = "vr_vrtorso_enabled";
pub const X_OFFSET: &str = "vr_vrtorso_x_offset";
pub const Y_OFFSET: &str = "vr_vrtorso_y_offset";
pub const Z_OFFSET: &str = "vr_vrtorso_z_offset";
pub const HEAD_Z_MULT: &str = "vr_vrtorso_head_z_mult";
pub const X_SCALE: &str = "vr_vrtorso_x_scale";
pub const Y_SCALE: &str = "vr_vrtorso_y_scale";
pub const Z_SCALE: &str = "vr_vrtorso_z_scale";
pub const PITCH: &str = "vr_vrtorso_pitch";
pub const YAW: &str = "vr_vrtorso_yaw";
pub const ROLL: &str = "vr_vrtorso_roll";

/// Every cvar the torso screen binds to, with its default.
pub fn cvar_definitions() -> Vec<CvarDefinition> {
    vec![
        CvarDefinition::new(ENABLED, "Draw the VR torso model", false),
        CvarDefinition::new(X_OFFSET, "Torso offset along the view x axis", 0.0_f32),
        CvarDefinition::new(Y_OFFSET, "Torso offset along the view y axis", 0.0_f32),
        CvarDefinition::new(Z_OFFSET, "Torso offset along the view z axis", -24.0_f32),
        CvarDefinition::new(HEAD_Z_MULT, "How strongly head height drags the torso", 32.0_f32),
        CvarDefinition::new(X_SCALE, "Torso model x scale", 0.75_f32),
        CvarDefinition::new(Y_SCALE, "Torso model y scale", 0.75_f32),
        CvarDefinition::new(Z_SCALE, "Torso model z scale", 0.75_f32),
        CvarDefinition::new(PITCH, "Torso pitch, degrees", 0.0_f32),
        CvarDefinition::new(YAW, "Torso yaw, degrees", 0.0_f32),
        CvarDefinition::new(ROLL, "Torso roll, degrees", 0.0_f32),
    ]
}

/// Builds the "VR Torso Settings" menu on top of `store`.
pub fn make_menu(store: Arc<dyn CvarStore>) -> Result<Menu> {
    let offset_bounds = MenuBounds::new(0.5, -100.0, 100.0)?;
    let mult_bounds = MenuBounds::new(1.0, 0.0, 250.0)?;
    let scale_bounds = MenuBounds::new(0.05, 0.1, 2.0)?;
    let rotation_bounds = MenuBounds::new(1.0, -180.0, 180.0)?;

    let mut m = Menu::new("VR Torso Settings", store);

    m.add_toggle("Show VR Torso", ENABLED)?;

    m.add_separator();

    m.add_slider("VR Torso X", X_OFFSET, offset_bounds)?;
    m.add_slider("VR Torso Y", Y_OFFSET, offset_bounds)?;
    m.add_slider("VR Torso Z", Z_OFFSET, offset_bounds)?;
    m.add_slider("VR Torso Head Z Mult", HEAD_Z_MULT, mult_bounds)?;

    m.add_separator();

    m.add_slider("VR Torso Scale X", X_SCALE, scale_bounds)?;
    m.add_slider("VR Torso Scale Y", Y_SCALE, scale_bounds)?;
    m.add_slider("VR Torso Scale Z", Z_SCALE, scale_bounds)?;

    m.add_separator();

    m.add_slider("VR Torso Pitch", PITCH, rotation_bounds)?;
    m.add_slider("VR Torso Yaw", YAW, rotation_bounds)?;
    m.add_slider("VR Torso Roll", ROLL, rotation_bounds)?;

    Ok(m)
}

/// The torso placement derived from the current cvar values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorsoPose {
    pub visible: bool,
    pub offset: Vec3,
    pub scale: Vec3,
    pub angles: EulerAngles,
    pub facing: Vec3,
}

impl TorsoPose {
    /// Reads every torso cvar from `store`.
    pub fn from_store(store: &dyn CvarStore) -> Result<Self> {
        let angles = EulerAngles::new(
            store.get_float(PITCH)?,
            store.get_float(YAW)?,
            store.get_float(ROLL)?,
        );
        Ok(Self {
            visible: store.get_bool(ENABLED)?,
            offset: Vec3::new(
                store.get_float(X_OFFSET)?,
                store.get_float(Y_OFFSET)?,
                store.get_float(Z_OFFSET)?,
            ),
            scale: Vec3::new(
                store.get_float(X_SCALE)?,
                store.get_float(Y_SCALE)?,
                store.get_float(Z_SCALE)?,
            ),
            angles,
            facing: direction_from_pitch_yaw_roll(angles),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vesta_core::menu::{KeyOutcome, MenuKey};
    use vesta_infra::InMemoryCvarStore;

    fn torso_menu() -> (Arc<InMemoryCvarStore>, Menu) {
        let store = Arc::new(InMemoryCvarStore::with_definitions(cvar_definitions()).unwrap());
        let menu = make_menu(store.clone()).unwrap();
        (store, menu)
    }

    #[test]
    fn test_menu_layout() {
        let (_, menu) = torso_menu();
        assert_eq!(menu.entries().len(), 14);
        assert_eq!(menu.cursor(), Some(0));
        let separators = menu.entries().iter().filter(|e| !e.is_selectable()).count();
        assert_eq!(separators, 3);
    }

    #[test]
    fn test_rotation_clamps_at_bound() {
        let (store, mut menu) = torso_menu();
        store.set_float(YAW, 179.5).unwrap();
        // Toggle, then three offsets, head mult, three scales, pitch, yaw.
        for _ in 0..9 {
            menu.handle_key(MenuKey::Down).unwrap();
        }
        assert_eq!(menu.selected().and_then(|e| e.cvar()), Some(YAW));
        let outcome = menu.handle_key(MenuKey::Right).unwrap();
        assert!(matches!(outcome, KeyOutcome::Changed { .. }));
        assert_eq!(store.get_float(YAW).unwrap(), 180.0);
    }

    #[test]
    fn test_pose_follows_store() {
        let (store, _) = torso_menu();
        store.set_float(YAW, 90.0).unwrap();
        let pose = TorsoPose::from_store(store.as_ref()).unwrap();
        assert!(!pose.visible);
        assert_eq!(pose.scale, Vec3::new(0.75, 0.75, 0.75));
        assert!((pose.facing.y - 1.0).abs() < 1e-5);
    }
}
