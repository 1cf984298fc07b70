//! Daily streaks and their milestone badges.

use serde::Serialize;

use crate::domain::foundation::Timestamp;

pub const STREAK_MILESTONES: [u32; 4] = [7, 30, 90, 365];

/// Badge for a current streak length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakBadge {
    pub milestone: Option<u32>,
    pub next_milestone: Option<u32>,
    pub emoji: &'static str,
}

impl StreakBadge {
    pub fn for_streak(days: u32) -> Self {
        let milestone = STREAK_MILESTONES.iter().copied().filter(|&m| days >= m).last();
        let next_milestone = STREAK_MILESTONES.iter().copied().find(|&m| days < m);

        let emoji = match days {
            365.. => "👑",
            90.. => "💎",
            30.. => "⚡",
            _ => "🔥",
        };

        Self {
            milestone,
            next_milestone,
            emoji,
        }
    }
}

/// Streak length after activity at `now`.
///
/// Activity on the same UTC day keeps the streak, the next day extends it,
/// and any longer gap starts over at 1.
pub fn continue_streak(current: u32, last_active: Option<Timestamp>, now: Timestamp) -> u32 {
    match last_active.map(|last| now.days_since(&last)) {
        Some(days) if days <= 0 => current.max(1),
        Some(1) => current.saturating_add(1),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_activity_starts_a_streak() {
        assert_eq!(continue_streak(0, None, Timestamp::now()), 1);
    }

    #[test]
    fn same_day_keeps_and_next_day_extends() {
        let now = Timestamp::now();
        assert_eq!(continue_streak(6, Some(now), now), 6);
        assert_eq!(continue_streak(6, Some(now.add_days(-1)), now), 7);
    }

    #[test]
    fn gap_resets_to_one() {
        let now = Timestamp::now();
        assert_eq!(continue_streak(40, Some(now.add_days(-2)), now), 1);
    }

    #[test]
    fn before_first_milestone() {
        let badge = StreakBadge::for_streak(3);
        assert_eq!(badge.milestone, None);
        assert_eq!(badge.next_milestone, Some(7));
        assert_eq!(badge.emoji, "🔥");
    }

    #[test]
    fn on_a_milestone() {
        let badge = StreakBadge::for_streak(30);
        assert_eq!(badge.milestone, Some(30));
        assert_eq!(badge.next_milestone, Some(90));
        assert_eq!(badge.emoji, "⚡");
    }

    #[test]
    fn past_last_milestone() {
        let badge = StreakBadge::for_streak(400);
        assert_eq!(badge.milestone, Some(365));
        assert_eq!(badge.next_milestone, None);
        assert_eq!(badge.emoji, "👑");
    }
}
