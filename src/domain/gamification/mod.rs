//! Gamification Module - XP, levels, streaks and achievements.
//!
//! Pure tables and calculations. Counters are owned by whoever tracks
//! engagement; this module only turns them into rewards and badges.

mod achievement;
mod level;
mod streak;
mod xp;

pub use achievement::{
    find_achievement, newly_unlocked, unlocked_by, Achievement, UserStats, ACHIEVEMENTS,
};
pub use level::{Level, LevelProgress, LEVELS};
pub use streak::{continue_streak, StreakBadge, STREAK_MILESTONES};
pub use xp::{apply_daily_cap, format_xp, score_improvement_xp, XpAction, XP_PER_IMPROVEMENT_POINT};
