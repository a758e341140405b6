use crate::{Category, Participant};
use serde::{Deserialize, Serialize};

pub const NORMAL_MIN_WEIGHT: u32 = 5;
pub const PREMIUM_MALE_MIN_WEIGHT: u32 = 35;
pub const PREMIUM_FEMALE_MIN_WEIGHT: u32 = 30;

/// Named eligibility policy selecting which participants qualify for draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Normal,
    Premium,
}

impl Mode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(Self::Normal),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Premium => "premium",
        }
    }

    pub fn admits(self, participant: &Participant) -> bool {
        match self {
            Self::Normal => participant.weight >= NORMAL_MIN_WEIGHT,
            Self::Premium => match participant.category {
                Category::Male => participant.weight >= PREMIUM_MALE_MIN_WEIGHT,
                Category::Female => participant.weight >= PREMIUM_FEMALE_MIN_WEIGHT,
            },
        }
    }
}

/// Recomputes the eligible pool wholesale; there is no incremental diffing
/// against the previous pool. An unset mode admits nobody.
pub fn filter_eligible(roster: &[Participant], mode: Option<Mode>) -> Vec<Participant> {
    let Some(mode) = mode else {
        return Vec::new();
    };
    roster
        .iter()
        .filter(|participant| mode.admits(participant))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str, weight: u32, category: Category) -> Participant {
        Participant::new(name, weight, category)
    }

    #[test]
    fn normal_admits_by_weight_alone() {
        let roster = vec![p("A", 4, Category::Male), p("B", 5, Category::Female)];
        let eligible = filter_eligible(&roster, Some(Mode::Normal));
        assert_eq!(eligible, vec![p("B", 5, Category::Female)]);
    }

    #[test]
    fn premium_thresholds_depend_on_category() {
        let roster = vec![
            p("A", 35, Category::Male),
            p("B", 30, Category::Female),
            p("C", 29, Category::Female),
        ];
        let eligible = filter_eligible(&roster, Some(Mode::Premium));
        assert_eq!(
            eligible,
            vec![p("A", 35, Category::Male), p("B", 30, Category::Female)]
        );
    }

    #[test]
    fn male_below_premium_threshold_is_excluded() {
        let roster = vec![p("A", 34, Category::Male)];
        assert!(filter_eligible(&roster, Some(Mode::Premium)).is_empty());
    }

    #[test]
    fn unset_mode_admits_nobody() {
        let roster = vec![p("A", 50, Category::Male)];
        assert!(filter_eligible(&roster, None).is_empty());
    }

    #[test]
    fn unknown_mode_strings_do_not_parse() {
        assert_eq!(Mode::parse("normal"), Some(Mode::Normal));
        assert_eq!(Mode::parse("premium"), Some(Mode::Premium));
        assert_eq!(Mode::parse("vip"), None);
        assert_eq!(Mode::parse(""), None);
    }
}
