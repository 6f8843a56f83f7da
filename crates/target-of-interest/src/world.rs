//! Read-only view of the live world.
//!
//! The world itself is owned by the host. Each tick the core receives a
//! [`WorldView`] and borrows unit data from it for the duration of that tick
//! only; nothing here is cached across ticks.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Unique instance identity of a unit in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guid(pub u64);

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// Kind (entry) id shared by every unit spawned from the same template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KindId(pub u32);

impl fmt::Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status-effect id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuraId(pub u32);

impl fmt::Display for AuraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host clock reading in milliseconds.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Self = Self(0);

    /// Returns the timestamp `duration` after this one, saturating at the
    /// maximum representable time.
    #[must_use]
    pub fn saturating_add(self, duration: Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self(self.0.saturating_add(millis))
    }
}

/// A unit as observed during one tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub guid: Guid,
    pub entry: KindId,
    #[serde(default = "default_alive")]
    pub alive: bool,
    /// Distance to the observing player.
    pub distance: f32,
    #[serde(default)]
    pub auras: Vec<AuraId>,
}

fn default_alive() -> bool {
    true
}

impl Unit {
    /// Creates a living unit with no auras.
    pub fn new(guid: Guid, entry: KindId, distance: f32) -> Self {
        Self {
            guid,
            entry,
            alive: true,
            distance,
            auras: Vec::new(),
        }
    }

    /// Marks the unit dead (builder pattern).
    #[must_use]
    pub fn dead(mut self) -> Self {
        self.alive = false;
        self
    }

    /// Adds an active aura (builder pattern).
    #[must_use]
    pub fn with_aura(mut self, aura: AuraId) -> Self {
        self.auras.push(aura);
        self
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        !self.alive
    }

    /// Returns `true` if the unit currently carries `aura`.
    pub fn has_aura(&self, aura: AuraId) -> bool {
        self.auras.contains(&aura)
    }
}

/// Read-only capability supplying the live world to the core.
pub trait WorldView {
    /// Current host clock.
    fn now(&self) -> Timestamp;

    /// All units currently known to the object manager, dead ones included.
    fn units(&self) -> &[Unit];

    /// Identity of the unit the player is currently targeting.
    fn current_target(&self) -> Option<Guid>;
}

/// Owned snapshot of the world, suitable for scripted encounters and tests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    #[serde(default)]
    pub now: Timestamp,
    #[serde(default)]
    pub current_target: Option<Guid>,
    #[serde(default)]
    pub units: Vec<Unit>,
}

impl WorldSnapshot {
    pub fn new(now: Timestamp) -> Self {
        Self {
            now,
            current_target: None,
            units: Vec::new(),
        }
    }

    /// Adds a unit (builder pattern).
    #[must_use]
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.units.push(unit);
        self
    }

    /// Sets the current target (builder pattern).
    #[must_use]
    pub fn targeting(mut self, guid: Guid) -> Self {
        self.current_target = Some(guid);
        self
    }
}

impl WorldView for WorldSnapshot {
    fn now(&self) -> Timestamp {
        self.now
    }

    fn units(&self) -> &[Unit] {
        &self.units
    }

    fn current_target(&self) -> Option<Guid> {
        self.current_target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_adds_milliseconds() {
        let t = Timestamp(1_000).saturating_add(Duration::from_secs(300));
        assert_eq!(t, Timestamp(301_000));
    }

    #[test]
    fn timestamp_saturates() {
        let t = Timestamp(u64::MAX - 1).saturating_add(Duration::from_secs(1));
        assert_eq!(t, Timestamp(u64::MAX));
    }

    #[test]
    fn aura_presence() {
        let unit = Unit::new(Guid(1), KindId(100), 3.0).with_aura(AuraId(7));
        assert!(unit.has_aura(AuraId(7)));
        assert!(!unit.has_aura(AuraId(8)));
    }

    #[test]
    fn unit_defaults_to_alive_when_deserialized() {
        let unit: Unit = ron::from_str("(guid: 5, entry: 300, distance: 4.5)").unwrap();
        assert!(unit.alive);
        assert!(unit.auras.is_empty());
    }
}
