//! Encounter configuration and attribute parsing.
//!
//! Parameters arrive either as a flat attribute map (as written in a quest
//! profile) or as a RON document. Both paths produce an [`EncounterConfig`]
//! validated by the same rules.
//!
//! Attribute names:
//! - `AuraId` - aura on the boss that opens the priority-kill window (default: 0)
//! - `BossId` (aliases `NpcId`, `NpcID`) - kind id of the boss (required)
//! - `IgnoreBoss` - prioritize the kill order regardless of auras (default: false)
//! - `BlacklistMob1..N` - kinds to exclude during the fight, ordered by suffix
//! - `KillOrder1..N` - ranked priority kinds, ordered by suffix

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::world::{AuraId, KindId};

const AURA_ID: &str = "AuraId";
const BOSS_ID: &str = "BossId";
const BOSS_ID_ALIASES: [&str; 2] = ["NpcId", "NpcID"];
const IGNORE_BOSS: &str = "IgnoreBoss";
const BLACKLIST_MOB: &str = "BlacklistMob";
const KILL_ORDER: &str = "KillOrder";

/// Immutable parameters of one encounter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterConfig {
    /// Aura whose presence on the boss opens the priority-kill window.
    #[serde(default)]
    pub aura_id: AuraId,

    /// Kind id of the boss.
    pub boss_id: KindId,

    /// Ignore the boss regardless of auras.
    #[serde(default)]
    pub ignore_boss: bool,

    /// Kinds excluded from consideration during the fight, in order.
    #[serde(default)]
    pub blacklist_mobs: Vec<KindId>,

    /// Priority kinds by rank: earlier entries always win.
    #[serde(default)]
    pub kill_order: Vec<KindId>,
}

impl EncounterConfig {
    /// Creates a config for `boss_id` with every optional parameter at its default.
    pub fn new(boss_id: KindId) -> Self {
        Self {
            aura_id: AuraId::default(),
            boss_id,
            ignore_boss: false,
            blacklist_mobs: Vec::new(),
            kill_order: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_aura(mut self, aura_id: AuraId) -> Self {
        self.aura_id = aura_id;
        self
    }

    #[must_use]
    pub fn with_kill_order(mut self, kill_order: Vec<KindId>) -> Self {
        self.kill_order = kill_order;
        self
    }

    #[must_use]
    pub fn with_blacklist(mut self, blacklist_mobs: Vec<KindId>) -> Self {
        self.blacklist_mobs = blacklist_mobs;
        self
    }

    #[must_use]
    pub fn ignoring_boss(mut self, ignore_boss: bool) -> Self {
        self.ignore_boss = ignore_boss;
        self
    }

    /// Parses a quest-profile attribute map.
    ///
    /// Unknown attributes are logged and ignored.
    pub fn from_attributes(attributes: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut blacklist = Vec::new();
        let mut kill_order = Vec::new();

        for (key, value) in attributes {
            if let Some(index) = numbered(key, BLACKLIST_MOB) {
                blacklist.push((index, key.as_str(), parse_id(key, value)?));
            } else if let Some(index) = numbered(key, KILL_ORDER) {
                kill_order.push((index, key.as_str(), parse_id(key, value)?));
            } else if !is_known(key) {
                tracing::warn!(attribute = %key, value = %value, "ignoring unrecognized attribute");
            }
        }

        let boss_id = std::iter::once(BOSS_ID)
            .chain(BOSS_ID_ALIASES)
            .find_map(|name| attributes.get(name).map(|value| (name, value)))
            .ok_or(ConfigError::Missing { field: BOSS_ID })
            .and_then(|(name, value)| parse_id(name, value))?;

        let aura_id = attributes
            .get(AURA_ID)
            .map(|value| parse_id(AURA_ID, value))
            .transpose()?
            .map_or(AuraId::default(), |KindId(id)| AuraId(id));

        let ignore_boss = attributes
            .get(IGNORE_BOSS)
            .map(|value| parse_bool(IGNORE_BOSS, value))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            aura_id,
            boss_id,
            ignore_boss,
            blacklist_mobs: in_suffix_order(blacklist)?,
            kill_order: in_suffix_order(kill_order)?,
        })
    }

    /// Parses and validates a RON document.
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(content).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a RON document from disk.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_ron_str(&content)
    }

    /// Checks the invariants the attribute parser enforces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boss_id.0 == 0 {
            return Err(invalid("boss_id", "0", "ids must be positive"));
        }
        for (field, ids) in [
            ("blacklist_mobs", &self.blacklist_mobs),
            ("kill_order", &self.kill_order),
        ] {
            if ids.iter().any(|id| id.0 == 0) {
                return Err(invalid(field, "0", "ids must be positive"));
            }
        }
        Ok(())
    }
}

fn is_known(key: &str) -> bool {
    key == AURA_ID || key == BOSS_ID || key == IGNORE_BOSS || BOSS_ID_ALIASES.contains(&key)
}

/// Returns the numeric suffix of `key` if it is `prefix` followed by digits.
fn numbered(key: &str, prefix: &str) -> Option<u32> {
    let suffix = key.strip_prefix(prefix)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

/// Orders numbered entries by suffix. Two keys naming the same index (such as
/// `KillOrder1` and `KillOrder01`) would have no defined rank and are rejected.
fn in_suffix_order(mut entries: Vec<(u32, &str, KindId)>) -> Result<Vec<KindId>, ConfigError> {
    entries.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 == pair[1].0) {
        return Err(invalid(
            pair[1].1,
            &pair[1].2.to_string(),
            "index already used by another attribute",
        ));
    }
    Ok(entries.into_iter().map(|(_, _, id)| id).collect())
}

fn parse_id(field: &str, value: &str) -> Result<KindId, ConfigError> {
    let id: u32 = value
        .trim()
        .parse()
        .map_err(|_| invalid(field, value, "expected a positive integer id"))?;
    if id == 0 {
        return Err(invalid(field, value, "ids must be positive"));
    }
    Ok(KindId(id))
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid(field, value, "expected `true` or `false`")),
    }
}

fn invalid(field: &str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        value: value.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_full_attribute_set() {
        let config = EncounterConfig::from_attributes(&attrs(&[
            ("AuraId", "7"),
            ("BossId", "100"),
            ("IgnoreBoss", "True"),
            ("BlacklistMob1", "300"),
            ("KillOrder2", "201"),
            ("KillOrder1", "200"),
            ("KillOrder10", "210"),
        ]))
        .unwrap();

        assert_eq!(config.aura_id, AuraId(7));
        assert_eq!(config.boss_id, KindId(100));
        assert!(config.ignore_boss);
        assert_eq!(config.blacklist_mobs, vec![KindId(300)]);
        assert_eq!(config.kill_order, vec![KindId(200), KindId(201), KindId(210)]);
    }

    #[test]
    fn defaults_apply_to_optional_attributes() {
        let config = EncounterConfig::from_attributes(&attrs(&[("BossId", "100")])).unwrap();

        assert_eq!(config, EncounterConfig::new(KindId(100)));
    }

    #[test]
    fn boss_id_accepts_npc_id_alias() {
        let config = EncounterConfig::from_attributes(&attrs(&[("NpcId", "42")])).unwrap();
        assert_eq!(config.boss_id, KindId(42));
    }

    #[test]
    fn missing_boss_id_is_an_error() {
        let err = EncounterConfig::from_attributes(&attrs(&[("AuraId", "7")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing { field: "BossId" });
        assert_eq!(err.field(), Some("BossId"));
    }

    #[test]
    fn malformed_values_name_the_field() {
        let err = EncounterConfig::from_attributes(&attrs(&[("BossId", "100"), ("KillOrder1", "abc")]))
            .unwrap_err();
        assert_eq!(err.field(), Some("KillOrder1"));

        let err = EncounterConfig::from_attributes(&attrs(&[("BossId", "0")])).unwrap_err();
        assert_eq!(err.field(), Some("BossId"));

        let err = EncounterConfig::from_attributes(&attrs(&[("BossId", "1"), ("IgnoreBoss", "maybe")]))
            .unwrap_err();
        assert_eq!(err.field(), Some("IgnoreBoss"));
    }

    #[test]
    fn duplicate_rank_index_is_rejected() {
        // Map iteration order varies between fresh maps; the outcome must not.
        for _ in 0..50 {
            let err = EncounterConfig::from_attributes(&attrs(&[
                ("BossId", "100"),
                ("KillOrder1", "200"),
                ("KillOrder01", "201"),
            ]))
            .unwrap_err();

            assert!(matches!(err, ConfigError::Invalid { .. }));
            assert_eq!(err.field(), Some("KillOrder1"));
        }

        let err = EncounterConfig::from_attributes(&attrs(&[
            ("BossId", "100"),
            ("BlacklistMob2", "300"),
            ("BlacklistMob002", "301"),
        ]))
        .unwrap_err();
        assert_eq!(err.field(), Some("BlacklistMob2"));
    }

    #[test]
    fn unknown_attributes_are_ignored() {
        let config = EncounterConfig::from_attributes(&attrs(&[
            ("BossId", "100"),
            ("QuestId", "12345"),
            ("KillOrderX", "5"),
        ]))
        .unwrap();

        assert!(config.kill_order.is_empty());
    }

    #[test]
    fn ron_round_trip_of_defaults() {
        let config = EncounterConfig::from_ron_str("(boss_id: 100, kill_order: [200, 201])").unwrap();

        assert_eq!(
            config,
            EncounterConfig::new(KindId(100)).with_kill_order(vec![KindId(200), KindId(201)])
        );
    }

    #[test]
    fn ron_config_is_validated() {
        let err = EncounterConfig::from_ron_str("(boss_id: 100, blacklist_mobs: [0])").unwrap_err();
        assert_eq!(err.field(), Some("blacklist_mobs"));

        let err = EncounterConfig::from_ron_str("(aura_id: 3)").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn loads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("encounter.ron");
        std::fs::write(&path, "(boss_id: 100, aura_id: 7, ignore_boss: true)").unwrap();

        let config = EncounterConfig::load_from_file(&path).unwrap();
        assert_eq!(config.aura_id, AuraId(7));
        assert!(config.ignore_boss);

        let missing = EncounterConfig::load_from_file(&dir.path().join("nope.ron")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }
}
