use chrono::TimeDelta;
use serde_json::json;
use std::fmt;

use crate::config::{BACKPACK_SLOTS_PER_LEVEL, SKILL_LEVEL_CAP};
use crate::error::SaveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl TryFrom<i64> for Season {
    type Error = SaveError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Season::Spring),
            1 => Ok(Season::Summer),
            2 => Ok(Season::Fall),
            3 => Ok(Season::Winter),
            other => Err(SaveError::SeasonOutOfRange(other)),
        }
    }
}

impl Season {
    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skill {
    Farming,
    Mining,
    Combat,
    Foraging,
    Fishing,
}

impl Skill {
    pub const ALL: [Skill; 5] = [Skill::Farming, Skill::Mining, Skill::Combat, Skill::Foraging, Skill::Fishing];

    pub fn name(self) -> &'static str {
        match self {
            Skill::Farming => "Farming",
            Skill::Mining => "Mining",
            Skill::Combat => "Combat",
            Skill::Foraging => "Foraging",
            Skill::Fishing => "Fishing",
        }
    }

    /// Element name under `Farmer` holding this skill's level.
    pub fn field(self) -> &'static str {
        match self {
            Skill::Farming => "farmingLevel",
            Skill::Mining => "miningLevel",
            Skill::Combat => "combatLevel",
            Skill::Foraging => "foragingLevel",
            Skill::Fishing => "fishingLevel",
        }
    }
}

/// Whole minutes, floored. `None` for negative or out-of-range input.
pub fn minutes_from_millis(ms: i64) -> Option<i64> {
    if ms < 0 {
        return None;
    }
    TimeDelta::try_milliseconds(ms).map(|d| d.num_minutes())
}

/// `maxItems / 12`, rounded half-to-even.
pub fn backpack_level(max_items: u32) -> u32 {
    (max_items as f64 / BACKPACK_SLOTS_PER_LEVEL as f64).round_ties_even() as u32
}

pub fn skill_percent(level: u32) -> f64 {
    level as f64 * 100.0 / SKILL_LEVEL_CAP as f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveOverview {
    pub game_version: String,
    pub farmer_name: String,
    pub farm_name: String,
    pub favorite_thing: String,
    pub year: String,
    pub season: Season,
    pub day_of_month: String,
    pub money: String,
    pub total_money_earned: String,
    pub stamina: String,
    pub max_stamina: String,
    pub health: String,
    pub max_health: String,
    pub qi_gems: String,
    pub position: (String, String),
    pub minutes_played: i64,
    pub backpack_level: u32,
}

impl SaveOverview {
    pub fn backpack_slots(&self) -> u32 {
        self.backpack_level * BACKPACK_SLOTS_PER_LEVEL
    }

    pub fn position_display(&self) -> String {
        format!("{}, {}", self.position.0, self.position.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillProgress {
    pub skill: Skill,
    pub level: u32,
}

impl SkillProgress {
    pub fn percent(&self) -> f64 {
        skill_percent(self.level)
    }
}

/// Outcome of one completion rule.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryResult {
    pub name: String,
    pub percent: f64,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionReport {
    pub overview: SaveOverview,
    pub skills: Vec<SkillProgress>,
    pub categories: Vec<CategoryResult>,
}

impl CompletionReport {
    pub fn to_json(&self) -> serde_json::Value {
        let o = &self.overview;
        json!({
            "overview": {
                "gameVersion": o.game_version,
                "farmerName": o.farmer_name,
                "farmName": o.farm_name,
                "favoriteThing": o.favorite_thing,
                "year": o.year,
                "season": o.season.name(),
                "dayOfMonth": o.day_of_month,
                "money": o.money,
                "totalMoneyEarned": o.total_money_earned,
                "stamina": o.stamina,
                "maxStamina": o.max_stamina,
                "health": o.health,
                "maxHealth": o.max_health,
                "qiGems": o.qi_gems,
                "position": { "x": o.position.0, "y": o.position.1 },
                "minutesPlayed": o.minutes_played,
                "backpackLevel": o.backpack_level,
                "backpackSlots": o.backpack_slots(),
            },
            "skills": self.skills.iter().map(|s| json!({
                "skill": s.skill.name(),
                "level": s.level,
                "percent": format!("{:.2}", s.percent()),
            })).collect::<Vec<_>>(),
            "categories": self.categories.iter().map(|c| json!({
                "name": c.name,
                "percent": format!("{:.2}", c.percent),
                "missing": c.missing,
            })).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for CompletionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = &self.overview;
        writeln!(f, "=== Save Overview ===")?;
        writeln!(f, "Game Version: {}", o.game_version)?;
        writeln!(f, "Farmer Name: {}", o.farmer_name)?;
        writeln!(f, "Farm Name: {}", o.farm_name)?;
        writeln!(f, "Favorite Thing: {}", o.favorite_thing)?;
        writeln!(f, "Year: {}", o.year)?;
        writeln!(f, "Season: {}", o.season)?;
        writeln!(f, "Day: {}", o.day_of_month)?;
        writeln!(f, "Money: {}g", o.money)?;
        writeln!(f, "Total Money Earned: {}g", o.total_money_earned)?;
        writeln!(f, "Stamina: {}/{}", o.stamina, o.max_stamina)?;
        writeln!(f, "Health: {}/{}", o.health, o.max_health)?;
        writeln!(f, "Qi Gems: {}", o.qi_gems)?;
        writeln!(f, "Position: {}", o.position_display())?;
        writeln!(f, "Time Played: {} minutes", o.minutes_played)?;
        writeln!(f, "Backpack Level: {} ({} slots)", o.backpack_level, o.backpack_slots())?;
        writeln!(f)?;
        writeln!(f, "=== Skills Progress ===")?;
        for s in &self.skills {
            writeln!(f, "{}: Level {} ({:.2}%)", s.skill.name(), s.level, s.percent())?;
        }
        if !self.categories.is_empty() {
            writeln!(f)?;
            writeln!(f, "=== Completion Categories ===")?;
            for c in &self.categories {
                writeln!(f, "{}: {:.2}%", c.name, c.percent)?;
                if !c.missing.is_empty() {
                    writeln!(f, "  Missing: {}", c.missing.join(", "))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_maps_only_zero_to_three() {
        assert_eq!(Season::try_from(0i64).unwrap(), Season::Spring);
        assert_eq!(Season::try_from(1i64).unwrap(), Season::Summer);
        assert_eq!(Season::try_from(2i64).unwrap(), Season::Fall);
        assert_eq!(Season::try_from(3i64).unwrap(), Season::Winter);
        assert!(matches!(Season::try_from(4i64), Err(SaveError::SeasonOutOfRange(4))));
        assert!(matches!(Season::try_from(-1i64), Err(SaveError::SeasonOutOfRange(-1))));
    }

    #[test]
    fn minutes_are_floored() {
        assert_eq!(minutes_from_millis(0), Some(0));
        assert_eq!(minutes_from_millis(90_000), Some(1));
        assert_eq!(minutes_from_millis(119_999), Some(1));
        assert_eq!(minutes_from_millis(120_000), Some(2));
        assert_eq!(minutes_from_millis(-5), None);
    }

    #[test]
    fn backpack_levels() {
        assert_eq!(backpack_level(12), 1);
        assert_eq!(backpack_level(36), 3);
        assert_eq!(backpack_level(20), 2);
        // ties go to the even level
        assert_eq!(backpack_level(18), 2);
        assert_eq!(backpack_level(30), 2);
    }

    #[test]
    fn skill_percent_two_decimals() {
        assert_eq!(format!("{:.2}", skill_percent(15)), "100.00");
        assert_eq!(format!("{:.2}", skill_percent(0)), "0.00");
        assert_eq!(format!("{:.2}", skill_percent(7)), "46.67");
    }
}
