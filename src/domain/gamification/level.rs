//! Level table and progress within a level.

use serde::Serialize;

/// One row of the level table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Level {
    pub level: u8,
    pub xp_required: u32,
    pub name: &'static str,
}

impl Level {
    const fn new(level: u8, xp_required: u32, name: &'static str) -> Self {
        Self {
            level,
            xp_required,
            name,
        }
    }
}

pub const LEVELS: [Level; 10] = [
    Level::new(1, 0, "Awakening"),
    Level::new(2, 200, "Aware"),
    Level::new(3, 500, "Rising"),
    Level::new(4, 1_000, "Focused"),
    Level::new(5, 2_000, "Disciplined"),
    Level::new(6, 4_000, "Integrated"),
    Level::new(7, 7_500, "Elevated"),
    Level::new(8, 12_000, "Mastering"),
    Level::new(9, 20_000, "Transcendent"),
    Level::new(10, 35_000, "Unlocked"),
];

/// Where a total XP amount sits on the level table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub level: u8,
    pub name: &'static str,
    pub current_xp: u32,
    pub xp_for_current_level: u32,
    pub xp_for_next_level: u32,
    /// Percent through the current level, 100 at the top level.
    pub progress: u8,
}

impl LevelProgress {
    pub fn from_xp(xp: u32) -> Self {
        let index = LEVELS
            .iter()
            .rposition(|l| xp >= l.xp_required)
            .unwrap_or(0);
        let current = LEVELS[index];
        let next = LEVELS.get(index + 1).copied().unwrap_or(current);

        let span = next.xp_required - current.xp_required;
        let progress = if span == 0 {
            100
        } else {
            let into_level = u64::from(xp - current.xp_required);
            (into_level * 100 / u64::from(span)).min(100) as u8
        };

        Self {
            level: current.level,
            name: current.name,
            current_xp: xp,
            xp_for_current_level: current.xp_required,
            xp_for_next_level: next.xp_required,
            progress,
        }
    }

    pub fn is_max_level(&self) -> bool {
        self.xp_for_current_level == self.xp_for_next_level
    }
}
