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

//! Step and range for slider entries.

use super::{MenuError, MenuResult};

/// Which way a slider is nudged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustDirection {
    /// Subtract one step.
    Decrease,
    /// Add one step.
    Increase,
}

/// The `(step, min, max)` triple of a slider.
///
/// Always holds finite values with `step > 0` and `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuBounds {
    step: f32,
    min: f32,
    max: f32,
}

impl MenuBounds {
    /// Validates and creates a bounds triple.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InvalidBounds`] if any value is not finite, if
    /// `step <= 0`, or if `min > max`.
    pub fn new(step: f32, min: f32, max: f32) -> MenuResult<Self> {
        let finite = step.is_finite() && min.is_finite() && max.is_finite();
        if !finite || step <= 0.0 || min > max {
            return Err(MenuError::InvalidBounds { step, min, max });
        }
        Ok(Self { step, min, max })
    }

    /// The lowest reachable value.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// The highest reachable value.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Moves `value` one step in `direction`, clamped to `[min, max]`.
    ///
    /// A value already outside the range is pulled back inside it. A
    /// non-finite value restarts from `min`.
    pub fn adjust(&self, value: f32, direction: AdjustDirection) -> f32 {
        let value = if value.is_finite() { value } else { self.min };
        let moved = match direction {
            AdjustDirection::Decrease => value - self.step,
            AdjustDirection::Increase => value + self.step,
        };
        moved.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_validation() {
        assert!(MenuBounds::new(0.5, -100.0, 100.0).is_ok());
        assert!(MenuBounds::new(1.0, 3.0, 3.0).is_ok());
        assert!(MenuBounds::new(0.0, 0.0, 1.0).is_err());
        assert!(MenuBounds::new(-1.0, 0.0, 1.0).is_err());
        assert!(MenuBounds::new(1.0, f32::NAN, 1.0).is_err());
        assert!(MenuBounds::new(1.0, 0.0, f32::INFINITY).is_err());
        assert_eq!(
            MenuBounds::new(1.0, 5.0, 4.0),
            Err(MenuError::InvalidBounds {
                step: 1.0,
                min: 5.0,
                max: 4.0
            })
        );
    }

    #[test]
    fn test_adjust_pins_at_edges() {
        let bounds = MenuBounds::new(1.0, 0.0, 10.0).unwrap();

        let mut value = 8.0;
        for _ in 0..5 {
            value = bounds.adjust(value, AdjustDirection::Increase);
        }
        assert_eq!(value, 10.0);

        for _ in 0..20 {
            value = bounds.adjust(value, AdjustDirection::Decrease);
        }
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_adjust_fractional_step() {
        let bounds = MenuBounds::new(0.05, 0.1, 2.0).unwrap();
        assert_relative_eq!(bounds.adjust(1.0, AdjustDirection::Increase), 1.05, epsilon = 1e-6);
        assert_relative_eq!(bounds.adjust(0.12, AdjustDirection::Decrease), 0.1);
    }

    #[test]
    fn test_adjust_pulls_out_of_range_value_back() {
        let bounds = MenuBounds::new(1.0, -180.0, 180.0).unwrap();
        assert_eq!(bounds.adjust(500.0, AdjustDirection::Increase), 180.0);
        assert_eq!(bounds.adjust(-500.0, AdjustDirection::Increase), -180.0);
    }

    #[test]
    fn test_adjust_recovers_from_non_finite_value() {
        let bounds = MenuBounds::new(1.0, 0.0, 10.0).unwrap();
        assert_eq!(bounds.adjust(f32::NAN, AdjustDirection::Increase), 1.0);
        assert_eq!(bounds.adjust(f32::NAN, AdjustDirection::Decrease), 0.0);
        assert_eq!(bounds.adjust(f32::INFINITY, AdjustDirection::Increase), 1.0);
        assert_eq!(bounds.adjust(f32::NEG_INFINITY, AdjustDirection::Decrease), 0.0);
    }
}
