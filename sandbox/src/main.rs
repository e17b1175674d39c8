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

// Vesta sandbox
// Drives the VR torso settings menu from the terminal.

mod torso;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use vesta_core::cvar::CvarStore;
use vesta_core::math::{pitch_yaw_roll_from_direction, Vec3};
use vesta_core::menu::{KeyOutcome, Menu, MenuKey};
use vesta_infra::{InMemoryCvarStore, TextSurface};

use crate::torso::TorsoPose;

const SCREEN_ROWS: usize = 20;

/// A line typed at the prompt.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Key(MenuKey),
    Aim(Vec3),
    Dump,
    List,
    Reset,
    Quit,
    Help,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let command = match words.next()? {
        "w" | "up" => Command::Key(MenuKey::Up),
        "s" | "down" => Command::Key(MenuKey::Down),
        "a" | "left" => Command::Key(MenuKey::Left),
        "d" | "right" => Command::Key(MenuKey::Right),
        "e" | "enter" => Command::Key(MenuKey::Enter),
        "esc" | "escape" => Command::Key(MenuKey::Escape),
        "aim" => {
            let mut component = || words.next().and_then(|w| w.parse::<f32>().ok());
            Command::Aim(Vec3::new(component()?, component()?, component()?))
        }
        "dump" => Command::Dump,
        "list" => Command::List,
        "reset" => Command::Reset,
        "q" | "quit" => Command::Quit,
        "h" | "help" => Command::Help,
        _ => return None,
    };
    Some(command)
}

fn draw(menu: &Menu, out: &mut impl Write) -> Result<()> {
    let mut surface = TextSurface::for_virtual_screen(SCREEN_ROWS);
    menu.render(&mut surface)?;
    writeln!(out, "{}", surface.framed())?;
    Ok(())
}

/// Mirrors the torso cvars onto the (logged) torso model after every change.
fn update_torso_model(store: &InMemoryCvarStore) -> Result<()> {
    let pose = TorsoPose::from_store(store)?;
    log::info!(
        "Torso visible={} offset={:?} scale={:?} angles={:?} facing={:?}",
        pose.visible,
        pose.offset.to_array(),
        pose.scale.to_array(),
        pose.angles,
        pose.facing.to_array()
    );
    Ok(())
}

/// One `name = value  # description` line per registered cvar, sorted by name.
fn describe_cvars(store: &InMemoryCvarStore) -> Vec<String> {
    store
        .names()
        .into_iter()
        .filter_map(|name| {
            let definition = store.definition(&name)?;
            let value = store.get(&name).ok()?;
            Some(format!("{name} = {value}  # {}", definition.description))
        })
        .collect()
}

fn print_help(out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "keys: w/s select, a/d adjust, e toggle, esc leave\n\
         aim <x> <y> <z>  print pitch/yaw/roll for a direction\n\
         dump             print every cvar as JSON\n\
         list             print every cvar with its description\n\
         reset            restore defaults\n\
         quit"
    )?;
    Ok(())
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let store = Arc::new(
        InMemoryCvarStore::with_definitions(torso::cvar_definitions())
            .context("registering VR torso cvars")?,
    );
    let mut menu = torso::make_menu(store.clone()).context("building VR torso menu")?;
    log::info!(
        "Menu '{}' ready with {} entries",
        menu.title(),
        menu.entries().len()
    );

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    print_help(&mut out)?;
    draw(&menu, &mut out)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                log::warn!("Unknown command: {}", line.trim());
            }
            continue;
        };

        match command {
            Command::Key(key) => match menu.handle_key(key)? {
                KeyOutcome::Exit => break,
                KeyOutcome::Changed { .. } => update_torso_model(&store)?,
                KeyOutcome::CursorMoved(_) | KeyOutcome::Ignored => {}
            },
            Command::Aim(dir) => match pitch_yaw_roll_from_direction(Vec3::Z, dir.normalize()) {
                Ok(angles) => writeln!(
                    out,
                    "pitch {:.2} yaw {:.2} roll {:.2}",
                    angles.pitch, angles.yaw, angles.roll
                )?,
                Err(err) => log::warn!("Cannot derive angles from {:?}: {err}", dir.to_array()),
            },
            Command::Dump => {
                writeln!(out, "{}", serde_json::to_string_pretty(&store.snapshot())?)?;
            }
            Command::List => {
                for line in describe_cvars(&store) {
                    writeln!(out, "{line}")?;
                }
            }
            Command::Reset => {
                store.reset_all();
                update_torso_model(&store)?;
            }
            Command::Help => print_help(&mut out)?,
            Command::Quit => break,
        }
        draw(&menu, &mut out)?;
    }

    log::info!("Leaving '{}'", menu.title());
    Ok(())
}
