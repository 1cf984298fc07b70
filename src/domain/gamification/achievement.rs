//! Achievements unlocked from aggregate user stats.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate counters an achievement predicate looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_xp: u32,
    pub level: u8,
    pub streak: u32,
    pub posts_count: u32,
    pub conversations_count: u32,
    pub assessments_taken: u32,
    pub lucid_score: u8,
    /// Overall points gained since the first assessment.
    pub lucid_score_improvement: u8,
    pub challenges_completed: u32,
    pub days_active: u32,
}

pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub xp_reward: u32,
    condition: fn(&UserStats) -> bool,
}

impl Achievement {
    pub fn is_met(&self, stats: &UserStats) -> bool {
        (self.condition)(stats)
    }
}

impl fmt::Debug for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Achievement")
            .field("id", &self.id)
            .field("xp_reward", &self.xp_reward)
            .finish()
    }
}

pub static ACHIEVEMENTS: [Achievement; 10] = [
    Achievement {
        id: "first-steps",
        name: "First Steps",
        description: "Complete your first assessment",
        icon: "🎯",
        xp_reward: 50,
        condition: |s| s.assessments_taken >= 1,
    },
    Achievement {
        id: "voice-found",
        name: "Voice Found",
        description: "Have your first conversation with your companion",
        icon: "💬",
        xp_reward: 25,
        condition: |s| s.conversations_count >= 1,
    },
    Achievement {
        id: "showing-up",
        name: "Showing Up",
        description: "Reach a 7-day streak",
        icon: "🔥",
        xp_reward: 100,
        condition: |s| s.streak >= 7,
    },
    Achievement {
        id: "consistent",
        name: "Consistent",
        description: "Reach a 30-day streak",
        icon: "⚡",
        xp_reward: 250,
        condition: |s| s.streak >= 30,
    },
    Achievement {
        id: "unbreakable",
        name: "Unbreakable",
        description: "Reach a 90-day streak",
        icon: "💎",
        xp_reward: 500,
        condition: |s| s.streak >= 90,
    },
    Achievement {
        id: "community-voice",
        name: "Community Voice",
        description: "Create your first post",
        icon: "📝",
        xp_reward: 50,
        condition: |s| s.posts_count >= 1,
    },
    Achievement {
        id: "level-5",
        name: "Disciplined",
        description: "Reach Level 5",
        icon: "🏆",
        xp_reward: 200,
        condition: |s| s.level >= 5,
    },
    Achievement {
        id: "level-10",
        name: "Unlocked",
        description: "Reach Level 10, the highest level",
        icon: "👑",
        xp_reward: 1000,
        condition: |s| s.level >= 10,
    },
    Achievement {
        id: "growth",
        name: "Growth",
        description: "Improve your Lucid Score by 10 points",
        icon: "📈",
        xp_reward: 150,
        condition: |s| s.lucid_score_improvement >= 10,
    },
    Achievement {
        id: "challenger",
        name: "Challenger",
        description: "Complete 5 weekly challenges",
        icon: "🎯",
        xp_reward: 200,
        condition: |s| s.challenges_completed >= 5,
    },
];

/// Achievements whose condition now holds and that are not yet unlocked.
pub fn newly_unlocked(stats: &UserStats, already_unlocked: &[&str]) -> Vec<&'static Achievement> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| !already_unlocked.contains(&a.id) && a.is_met(stats))
        .collect()
}

/// Achievements an event unlocked: met by `after` but not by `before`.
pub fn unlocked_by(before: &UserStats, after: &UserStats) -> Vec<&'static Achievement> {
    let already: Vec<&str> = ACHIEVEMENTS
        .iter()
        .filter(|a| a.is_met(before))
        .map(|a| a.id)
        .collect();
    newly_unlocked(after, &already)
}

pub fn find_achievement(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&Achievement]) -> Vec<&'static str> {
        list.iter().map(|a| a.id).collect()
    }

    #[test]
    fn fresh_user_unlocks_nothing() {
        assert!(newly_unlocked(&UserStats::default(), &[]).is_empty());
    }

    #[test]
    fn first_assessment_unlocks_first_steps() {
        let stats = UserStats {
            assessments_taken: 1,
            ..Default::default()
        };
        assert_eq!(ids(&newly_unlocked(&stats, &[])), vec!["first-steps"]);
    }

    #[test]
    fn already_unlocked_are_skipped() {
        let stats = UserStats {
            streak: 30,
            ..Default::default()
        };
        assert_eq!(
            ids(&newly_unlocked(&stats, &["showing-up"])),
            vec!["consistent"]
        );
    }

    #[test]
    fn unlocked_by_reports_only_the_crossing() {
        let before = UserStats {
            assessments_taken: 1,
            lucid_score_improvement: 4,
            ..Default::default()
        };
        let after = UserStats {
            assessments_taken: 2,
            lucid_score_improvement: 12,
            ..Default::default()
        };
        assert_eq!(ids(&unlocked_by(&before, &after)), vec!["growth"]);
        assert!(unlocked_by(&after, &after).is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let mut all: Vec<_> = ACHIEVEMENTS.iter().map(|a| a.id).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), ACHIEVEMENTS.len());
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(find_achievement("growth").map(|a| a.xp_reward), Some(150));
        assert!(find_achievement("nope").is_none());
    }
}
