// Completion analysis over a parsed SaveGameInfo.
//
// The overview and skills block is always derived. Each further completion
// category is a `CompletionRule` evaluated against the same document, so new
// categories plug in through `with_rule` without touching the traversal here.
use crate::config::SKILL_LEVEL_CAP;
use crate::error::{Result, SaveError};
use crate::model::{
    CategoryResult, CompletionReport, SaveOverview, Season, Skill, SkillProgress, backpack_level,
    minutes_from_millis,
};
use crate::tree::SaveDocument;

const FARMER: &str = "Farmer";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProgress {
    pub percent: f64,
    pub missing: Vec<String>,
}

pub trait CompletionRule {
    fn name(&self) -> &str;
    fn evaluate(&self, doc: &SaveDocument) -> Result<CategoryProgress>;
}

/// Skills that have not yet reached the level cap.
#[derive(Debug, Default, Clone, Copy)]
pub struct SkillMasteryRule;

impl CompletionRule for SkillMasteryRule {
    fn name(&self) -> &str {
        "Skill Mastery"
    }

    fn evaluate(&self, doc: &SaveDocument) -> Result<CategoryProgress> {
        let skills = read_skills(doc)?;
        let total: u32 = skills.iter().map(|s| s.level.min(SKILL_LEVEL_CAP)).sum();
        let max = SKILL_LEVEL_CAP * skills.len() as u32;
        let missing = skills
            .iter()
            .filter(|s| s.level < SKILL_LEVEL_CAP)
            .map(|s| format!("{} (level {}/{})", s.skill.name(), s.level, SKILL_LEVEL_CAP))
            .collect();
        Ok(CategoryProgress { percent: total as f64 * 100.0 / max as f64, missing })
    }
}

pub struct CompletionAnalyzer {
    rules: Vec<Box<dyn CompletionRule>>,
}

impl Default for CompletionAnalyzer {
    fn default() -> Self {
        Self::new().with_rule(SkillMasteryRule)
    }
}

impl CompletionAnalyzer {
    /// Analyzer with no completion categories; overview and skills only.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule(mut self, rule: impl CompletionRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Errors come back wrapped in `SaveError::Document` naming the source file.
    pub fn analyze(&self, doc: &SaveDocument) -> Result<CompletionReport> {
        self.analyze_fields(doc).map_err(|e| e.in_document(doc.source()))
    }

    fn analyze_fields(&self, doc: &SaveDocument) -> Result<CompletionReport> {
        doc.require(&[FARMER])?;
        let overview = read_overview(doc)?;
        let skills = read_skills(doc)?;
        let mut categories = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let progress = rule.evaluate(doc)?;
            log::debug!("rule '{}' -> {:.2}%", rule.name(), progress.percent);
            categories.push(CategoryResult {
                name: rule.name().to_string(),
                percent: progress.percent,
                missing: progress.missing,
            });
        }
        Ok(CompletionReport { overview, skills, categories })
    }
}

fn text(doc: &SaveDocument, field: &str) -> Result<String> {
    doc.text_at(&[FARMER, field]).map(str::to_string)
}

fn read_overview(doc: &SaveDocument) -> Result<SaveOverview> {
    let season = Season::try_from(doc.parse_at::<i64>(&[FARMER, "seasonForSaveGame"])?)?;

    let ms = doc.parse_at::<i64>(&[FARMER, "millisecondsPlayed"])?;
    let minutes_played = minutes_from_millis(ms).ok_or_else(|| SaveError::InvalidNumber {
        field: format!("{}.millisecondsPlayed", FARMER),
        value: ms.to_string(),
    })?;

    let max_items = doc.parse_at::<u32>(&[FARMER, "maxItems"])?;

    Ok(SaveOverview {
        game_version: text(doc, "gameVersion")?,
        farmer_name: text(doc, "name")?,
        farm_name: text(doc, "farmName")?,
        favorite_thing: text(doc, "favoriteThing")?,
        year: text(doc, "yearForSaveGame")?,
        season,
        day_of_month: text(doc, "dayOfMonthForSaveGame")?,
        money: text(doc, "money")?,
        total_money_earned: text(doc, "totalMoneyEarned")?,
        stamina: text(doc, "stamina")?,
        max_stamina: text(doc, "maxStamina")?,
        health: text(doc, "health")?,
        max_health: text(doc, "maxHealth")?,
        qi_gems: text(doc, "qiGems")?,
        position: (
            doc.text_at(&[FARMER, "Position", "X"])?.to_string(),
            doc.text_at(&[FARMER, "Position", "Y"])?.to_string(),
        ),
        minutes_played,
        backpack_level: backpack_level(max_items),
    })
}

fn read_skills(doc: &SaveDocument) -> Result<Vec<SkillProgress>> {
    Skill::ALL
        .iter()
        .map(|&skill| -> Result<SkillProgress> {
            let level = doc.parse_at::<u32>(&[FARMER, skill.field()])?;
            Ok(SkillProgress { skill, level })
        })
        .collect()
}
