//! XP rewards and caps.

use serde::{Deserialize, Serialize};

/// Action that earns XP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XpAction {
    CompleteAssessment,
    DailyCheckIn,
    AiConversation,
    CommunityPost,
    Comment,
    ReceiveLike,
    WeeklyChallenge,
    FirstPost,
    FirstConversation,
    ProfileComplete,
}

impl XpAction {
    /// XP granted for one occurrence.
    pub fn reward(&self) -> u32 {
        match self {
            XpAction::CompleteAssessment => 100,
            XpAction::DailyCheckIn => 20,
            XpAction::AiConversation => 10,
            XpAction::CommunityPost => 15,
            XpAction::Comment => 5,
            XpAction::ReceiveLike => 2,
            XpAction::WeeklyChallenge => 100,
            XpAction::FirstPost => 50,
            XpAction::FirstConversation => 25,
            XpAction::ProfileComplete => 30,
        }
    }

    /// Maximum XP this action may earn per day, if capped.
    pub fn daily_cap(&self) -> Option<u32> {
        match self {
            XpAction::AiConversation => Some(50),
            XpAction::ReceiveLike => Some(20),
            _ => None,
        }
    }
}

/// XP per overall point gained between assessments.
pub const XP_PER_IMPROVEMENT_POINT: u32 = 50;

/// XP for one occurrence of `action` given what it already earned today.
pub fn apply_daily_cap(action: XpAction, already_earned_today: u32) -> u32 {
    match action.daily_cap() {
        Some(cap) => action.reward().min(cap.saturating_sub(already_earned_today)),
        None => action.reward(),
    }
}

/// Bonus for raising the overall score. Declines earn nothing.
pub fn score_improvement_xp(previous_overall: u8, new_overall: u8) -> u32 {
    u32::from(new_overall.saturating_sub(previous_overall)) * XP_PER_IMPROVEMENT_POINT
}

/// Short display form: `12.3k` from ten thousand up, `1,250` below.
pub fn format_xp(xp: u32) -> String {
    if xp >= 10_000 {
        let tenths = (u64::from(xp) + 50) / 100;
        return format!("{}.{}k", tenths / 10, tenths % 10);
    }

    let digits = xp.to_string();
    let mut out = String::with_capacity(digits.len() + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
