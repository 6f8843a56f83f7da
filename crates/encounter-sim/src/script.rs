//! Encounter scripts: task attributes plus the world as seen on each tick.

use std::cell::Cell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use target_of_interest::{Guid, StopHandle, WorldSnapshot, WorldSource};

/// A recorded or hand-written encounter.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Script {
    /// Quest-profile attributes handed to the task verbatim.
    #[serde(default)]
    pub attributes: HashMap<String, String>,

    /// One world snapshot per tick, in order.
    pub frames: Vec<WorldSnapshot>,
}

impl Script {
    pub fn from_ron_str(text: &str) -> Result<Self> {
        let script: Self = ron::from_str(text).context("failed to parse encounter script")?;
        if script.frames.is_empty() {
            bail!("encounter script has no frames");
        }
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_ron_str(&text).with_context(|| format!("in {}", path.display()))
    }
}

/// Player target shared between the simulated combatant and the world source.
pub type SharedTarget = Rc<Cell<Option<Guid>>>;

/// Plays a script's frames back one per tick.
///
/// Target switches made by the combatant carry over into later frames. Once
/// the last frame has been handed out a stop is requested, so the task is torn
/// down even if the script ends before the boss does.
pub struct ScriptedWorld {
    frames: std::vec::IntoIter<WorldSnapshot>,
    last: WorldSnapshot,
    target: SharedTarget,
    stop: StopHandle,
}

impl ScriptedWorld {
    pub fn new(frames: Vec<WorldSnapshot>, target: SharedTarget, stop: StopHandle) -> Self {
        Self {
            frames: frames.into_iter(),
            last: WorldSnapshot::default(),
            target,
            stop,
        }
    }
}

impl WorldSource for ScriptedWorld {
    type World = WorldSnapshot;

    fn snapshot(&mut self) -> WorldSnapshot {
        if let Some(frame) = self.frames.next() {
            self.last = frame;
        }
        if self.frames.as_slice().is_empty() {
            self.stop.stop();
        }

        let mut world = self.last.clone();
        if let Some(guid) = self.target.get() {
            world.current_target = Some(guid);
        }
        world
    }
}
