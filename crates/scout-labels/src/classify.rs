use scout_scene::PartRef;
use serde::Deserialize;

use crate::Category;

pub const LIGHT_KEYWORDS: &[&str] = &[
    "light", "lamp", "torch", "candle", "fire", "flame", "brazier", "lantern", "sconce",
];
pub const CHEST_KEYWORDS: &[&str] = &["chest", "treasure", "coffer", "box", "crate", "container"];
pub const DROP_KEYWORDS: &[&str] = &["drop", "item", "pickup", "loot", "corpse"];
pub const NPC_KEYWORDS: &[&str] = &["npc", "enemy", "merchant", "blacksmith", "vendor"];
pub const SPECIAL_KEYWORDS: &[&str] = &[
    "door", "lever", "switch", "altar", "bonfire", "grace", "fog", "gate", "elevator", "lift",
    "portal", "statue", "shrine", "waygate", "ladder", "bell", "coffin", "seal",
];

/// Inclusive type-id range that qualifies a part for a category on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct IdRangeRule {
    pub min: u16,
    pub max: u16,
    pub category: Category,
}

impl IdRangeRule {
    pub const fn new(min: u16, max: u16, category: Category) -> Self {
        Self { min, max, category }
    }

    #[inline]
    pub fn matches(&self, id: u16) -> bool {
        (self.min..=self.max).contains(&id)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Classifier {
    id_rules: Vec<IdRangeRule>,
}

impl Classifier {
    pub fn new(id_rules: Vec<IdRangeRule>) -> Self {
        Self { id_rules }
    }

    pub fn id_rules(&self) -> &[IdRangeRule] {
        &self.id_rules
    }

    pub fn classify(
        &self,
        part: Option<&PartRef>,
        model: Option<&str>,
        name: Option<&str>,
    ) -> Category {
        let names = LoweredNames::new(model, name);
        let type_id = part.and_then(PartRef::type_id);
        Category::PRECEDENCE
            .into_iter()
            .find(|&category| {
                names.matches_any(keywords_for(category))
                    || (category == Category::Npc && part.is_some_and(PartRef::is_enemy))
                    || type_id.is_some_and(|id| self.id_matches(id, category))
            })
            .unwrap_or(Category::Generic)
    }

    fn id_matches(&self, id: u16, category: Category) -> bool {
        self.id_rules
            .iter()
            .any(|rule| rule.category == category && rule.matches(id))
    }
}

fn keywords_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Light => LIGHT_KEYWORDS,
        Category::Chest => CHEST_KEYWORDS,
        Category::Drop => DROP_KEYWORDS,
        Category::Npc => NPC_KEYWORDS,
        Category::Special => SPECIAL_KEYWORDS,
        Category::Generic => &[],
    }
}

struct LoweredNames {
    model: Option<String>,
    name: Option<String>,
}

impl LoweredNames {
    fn new(model: Option<&str>, name: Option<&str>) -> Self {
        Self {
            model: model.map(str::to_lowercase),
            name: name.map(str::to_lowercase),
        }
    }

    fn matches_any(&self, keywords: &[&str]) -> bool {
        [self.model.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .any(|s| keywords.iter().any(|k| s.contains(k)))
    }
}
