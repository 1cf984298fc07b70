//! Archetype narratives shown on the result screen.

use serde::Serialize;

use super::Archetype;

/// Fixed copy attached to an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchetypeNarrative {
    pub description: &'static str,
    pub insight: &'static str,
}

/// Narrative for an archetype. Total over every variant.
pub fn describe(archetype: Archetype) -> ArchetypeNarrative {
    let (description, insight) = match archetype {
        Archetype::Overthinker => (
            "High awareness, but you get stuck in your head. You see everything clearly, \
             except the exit from your own mind.",
            "You see everything clearly, except the exit from your own head.",
        ),
        Archetype::Grinder => (
            "You push through anything, but you might be pushing blind. Resilience without \
             awareness can lead to burnout or building the wrong things.",
            "You can survive anything. But are you building the right things?",
        ),
        Archetype::Reactor => (
            "You want to grow and you take action, but your emotions drive the bus. Learning \
             to pause before acting is your edge.",
            "Your fire is real. Learning to direct it? That's the next level.",
        ),
        Archetype::Dormant => (
            "There's potential here, waiting to be activated. You're not broken. You just \
             haven't been shown the way yet.",
            "You're not behind. You're just getting started.",
        ),
        Archetype::Integrated => (
            "Rare balance across all dimensions. You've done the work. Now it's about \
             maintaining and going deeper.",
            "You've built something real. The question now is: what do you do with it?",
        ),
        Archetype::Performer => (
            "You project confidence well, but the version of you others see isn't always \
             the one you live with. The gap between image and self costs energy.",
            "You don't need the mask to be impressive. Try being seen without it.",
        ),
        Archetype::Drifter => (
            "You know yourself reasonably well, but without a clear direction or routine \
             the days decide for you. Momentum comes from choosing one thing.",
            "You're not lost. You just haven't picked a direction yet.",
        ),
        Archetype::Phoenix => (
            "Setbacks don't end you, they refuel you. You grow through hard things and come \
             back stronger than you went in.",
            "You rise every time. Now choose what you're rising toward.",
        ),
    };

    ArchetypeNarrative {
        description,
        insight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_archetype_has_copy() {
        for archetype in Archetype::ALL {
            let narrative = describe(archetype);
            assert!(!narrative.description.is_empty(), "{:?}", archetype);
            assert!(!narrative.insight.is_empty(), "{:?}", archetype);
        }
    }

    #[test]
    fn narratives_are_distinct() {
        let mut insights: Vec<_> = Archetype::ALL.iter().map(|a| describe(*a).insight).collect();
        insights.sort_unstable();
        insights.dedup();
        assert_eq!(insights.len(), Archetype::ALL.len());
    }
}
