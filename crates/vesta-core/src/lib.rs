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

//! # Vesta Core
//!
//! Orientation math, the configuration-variable (cvar) contract, and the
//! menu framework that binds UI rows directly to live cvars.

#![warn(missing_docs)]

pub mod cvar;
pub mod math;
pub mod menu;

pub use cvar::{CvarDefinition, CvarError, CvarKind, CvarResult, CvarStore, CvarValue};
pub use menu::{KeyOutcome, Menu, MenuBounds, MenuEntry, MenuError, MenuKey, MenuResult};
