//! Mission content: seasons and mission packs loaded from JSON files
//!
//! This sits beside the map core rather than inside it: a mission may carry
//! a [`DeploymentMap`], but layout never reads content files itself.

mod keys;
mod store;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::map::DeploymentMap;

pub use keys::{from_key, to_key};
pub use store::{CONTENT_DIR_ENV, Catalog, ContentStore, content_dir, mission_packs, scan_directory, seasons};

/// Which list a mission is filed under
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionType {
    #[default]
    #[serde(rename = "ITS Scenario")]
    ItsScenario,
    #[serde(rename = "Direct Action")]
    DirectAction,
    #[serde(rename = "Custom")]
    Custom,
}

impl MissionType {
    pub fn label(&self) -> &'static str {
        match self {
            MissionType::ItsScenario => "ITS Scenario",
            MissionType::DirectAction => "Direct Action",
            MissionType::Custom => "Custom",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeploymentTableEntry {
    pub army_points: f64,
    pub swc: f64,
    pub table_size: String,
    pub deployment_zone: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionSkill {
    pub name: String,
    pub skill_type: String,
    pub requirements: String,
    pub effects: String,
}

/// A special rule is prose, a skill block, or a set of named paragraphs
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScenarioSpecialRule {
    Text(String),
    Skill(MissionSkill),
    Sections(BTreeMap<String, String>),
}

/// Objectives are either one flat list or grouped under headings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MissionObjectives {
    List(Vec<String>),
    Grouped(BTreeMap<String, Vec<String>>),
}

impl Default for MissionObjectives {
    fn default() -> Self {
        MissionObjectives::List(Vec::new())
    }
}

impl MissionObjectives {
    /// Total number of objective lines across all groups
    pub fn len(&self) -> usize {
        match self {
            MissionObjectives::List(items) => items.len(),
            MissionObjectives::Grouped(groups) => groups.values().map(Vec::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForcesAndDeployment {
    pub sides: String,
    pub deployment_table: Vec<DeploymentTableEntry>,
    pub special_notes: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionData {
    pub name: String,
    #[serde(rename = "type")]
    pub mission_type: MissionType,
    #[serde(default)]
    pub tables: BTreeMap<String, Vec<Vec<String>>>,
    #[serde(default)]
    pub tactical_support_options: u32,
    #[serde(default)]
    pub suitable_for_reinforcements: bool,
    #[serde(default)]
    pub mission_objectives: MissionObjectives,
    #[serde(default)]
    pub forces_and_deployment: ForcesAndDeployment,
    #[serde(default)]
    pub scenario_special_rules: BTreeMap<String, ScenarioSpecialRule>,
    #[serde(default)]
    pub end_of_mission: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_map: Option<DeploymentMap>,
}

impl MissionData {
    pub fn key(&self) -> String {
        to_key(&self.name)
    }
}

/// A tournament season's missions
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonData {
    pub name: String,
    pub version: String,
    pub missions: Vec<MissionData>,
}

/// A standalone pack of missions; same layout as a season
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionPackData {
    pub name: String,
    pub version: String,
    pub missions: Vec<MissionData>,
}

/// Content documents that a [`ContentStore`] can load
pub trait ContentDocument: serde::de::DeserializeOwned + Clone + Send + 'static {
    /// Shape name used in warnings
    const SHAPE: &'static str;

    fn name(&self) -> &str;

    fn missions(&self) -> &[MissionData];

    /// Loose shape check run before full deserialization
    fn matches_shape(value: &serde_json::Value) -> bool {
        value.get("name").is_some_and(serde_json::Value::is_string)
            && value.get("version").is_some_and(serde_json::Value::is_string)
            && value.get("missions").is_some_and(serde_json::Value::is_array)
    }

    fn mission_by_key(&self, key: &str) -> Option<&MissionData> {
        self.missions().iter().find(|m| m.key() == key)
    }

    fn missions_of_type(&self, mission_type: MissionType) -> Vec<&MissionData> {
        self.missions()
            .iter()
            .filter(|m| m.mission_type == mission_type)
            .collect()
    }
}

impl ContentDocument for SeasonData {
    const SHAPE: &'static str = "SeasonData";

    fn name(&self) -> &str {
        &self.name
    }

    fn missions(&self) -> &[MissionData] {
        &self.missions
    }
}

impl ContentDocument for MissionPackData {
    const SHAPE: &'static str = "MissionPackData";

    fn name(&self) -> &str {
        &self.name
    }

    fn missions(&self) -> &[MissionData] {
        &self.missions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::GameSize;

    const SEASON: &str = r#"{
        "name": "Season 16",
        "version": "1.2",
        "missions": [
            {
                "name": "Supplies",
                "type": "ITS Scenario",
                "tables": {"Classified": [["1", "Test Run"]]},
                "tactical_support_options": 2,
                "suitable_for_reinforcements": true,
                "mission_objectives": {"Main": ["Control a Supply Box"], "Classified": ["1 objective"]},
                "forces_and_deployment": {
                    "sides": "2 players",
                    "deployment_table": [
                        {"army_points": 300, "swc": 6, "table_size": "48 x 48", "deployment_zone": "48 x 12"}
                    ],
                    "special_notes": []
                },
                "scenario_special_rules": {
                    "Tech-Coffins": "Each Tech-Coffin holds one Supply Box.",
                    "Extract": {"name": "Extract", "skill_type": "Short Skill", "requirements": "In base contact", "effects": "Pick up a box"},
                    "Notes": {"Placement": "Centered", "Size": "Small"}
                },
                "end_of_mission": "Round 3",
                "deployment_map": {"gameSizes": "300P / 350P / 400P", "zones": [], "objects": []}
            },
            {
                "name": "Quick Strike",
                "type": "Direct Action",
                "mission_objectives": ["Kill the Lieutenant"]
            }
        ]
    }"#;

    #[test]
    fn season_deserializes() {
        let season: SeasonData = serde_json::from_str(SEASON).unwrap();
        assert_eq!(season.missions.len(), 2);

        let supplies = season.mission_by_key("supplies").unwrap();
        assert_eq!(supplies.mission_type, MissionType::ItsScenario);
        assert_eq!(supplies.mission_objectives.len(), 2);
        assert_eq!(supplies.forces_and_deployment.deployment_table[0].army_points, 300.0);
        assert_eq!(
            supplies.deployment_map.as_ref().map(|m| m.game_size),
            Some(GameSize::Large)
        );
        assert!(matches!(
            supplies.scenario_special_rules["Tech-Coffins"],
            ScenarioSpecialRule::Text(_)
        ));
        assert!(matches!(
            supplies.scenario_special_rules["Extract"],
            ScenarioSpecialRule::Skill(_)
        ));
        assert!(matches!(
            supplies.scenario_special_rules["Notes"],
            ScenarioSpecialRule::Sections(_)
        ));

        assert_eq!(season.missions_of_type(MissionType::DirectAction).len(), 1);
        assert!(season.missions_of_type(MissionType::Custom).is_empty());
    }

    #[test]
    fn mission_type_uses_display_names() {
        let json = serde_json::to_string(&MissionType::DirectAction).unwrap();
        assert_eq!(json, "\"Direct Action\"");
        assert_eq!(MissionType::ItsScenario.label(), "ITS Scenario");
        assert!(serde_json::from_str::<MissionType>("\"Raid\"").is_err());
    }

    #[test]
    fn loose_shape_check() {
        let ok: serde_json::Value = serde_json::from_str(SEASON).unwrap();
        assert!(SeasonData::matches_shape(&ok));

        let bad = serde_json::json!({"name": "Season 1", "missions": []});
        assert!(!SeasonData::matches_shape(&bad));
        assert!(!MissionPackData::matches_shape(&serde_json::json!([])));
    }
}
