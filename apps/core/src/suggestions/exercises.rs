//! Coping exercise catalog and selection.

use serde::Serialize;
use std::fmt;

use crate::brain::{Category, SignalScores, ELEVATED_THRESHOLD};
use crate::random::{choose, RandomSource};

/// A single coping exercise. Static reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "benefits")]
    pub benefit: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Breathing,
    Mindfulness,
    Journaling,
    Physical,
}

impl ExerciseCategory {
    pub const ALL: [ExerciseCategory; 4] = [
        ExerciseCategory::Breathing,
        ExerciseCategory::Mindfulness,
        ExerciseCategory::Journaling,
        ExerciseCategory::Physical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExerciseCategory::Breathing => "breathing",
            ExerciseCategory::Mindfulness => "mindfulness",
            ExerciseCategory::Journaling => "journaling",
            ExerciseCategory::Physical => "physical",
        }
    }

    pub fn exercises(&self) -> &'static [Exercise] {
        match self {
            ExerciseCategory::Breathing => BREATHING_EXERCISES,
            ExerciseCategory::Mindfulness => MINDFULNESS_EXERCISES,
            ExerciseCategory::Journaling => JOURNALING_EXERCISES,
            ExerciseCategory::Physical => PHYSICAL_EXERCISES,
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

pub const BREATHING_EXERCISES: &[Exercise] = &[
    Exercise {
        name: "4-7-8 Breathing",
        description: "Inhale for 4 seconds, hold for 7 seconds, exhale for 8 seconds. Repeat 4 times.",
        benefit: "Helps reduce anxiety and promote sleep",
    },
    Exercise {
        name: "Box Breathing",
        description: "Inhale for 4 seconds, hold for 4 seconds, exhale for 4 seconds, hold for 4 seconds. Repeat for 2-3 minutes.",
        benefit: "Reduces stress and improves concentration",
    },
    Exercise {
        name: "Deep Belly Breathing",
        description: "Place your hand on your belly. Breathe in deeply through your nose for 5 seconds, feeling your hand rise. Exhale slowly through your mouth for 5 seconds. Repeat 10 times.",
        benefit: "Activates relaxation response and reduces anxiety",
    },
    Exercise {
        name: "Alternate Nostril Breathing",
        description: "Close your right nostril with your thumb, inhale through left nostril. Close left nostril with ring finger, exhale through right nostril. Repeat, alternating sides for 5 minutes.",
        benefit: "Balances energy and calms the mind",
    },
];

pub const MINDFULNESS_EXERCISES: &[Exercise] = &[
    Exercise {
        name: "5-4-3-2-1 Grounding",
        description: "Acknowledge 5 things you can see, 4 things you can touch, 3 things you can hear, 2 things you can smell, and 1 thing you can taste.",
        benefit: "Helps bring you back to the present moment during anxiety",
    },
    Exercise {
        name: "Body Scan",
        description: "Lie down and focus your attention on each part of your body, from your toes to your head, noticing any sensations without judgment.",
        benefit: "Reduces tension and increases body awareness",
    },
    Exercise {
        name: "Mindful Observation",
        description: "Choose an object and focus on it for 5 minutes. Notice its color, texture, shape, and other details as if seeing it for the first time.",
        benefit: "Improves focus and presence",
    },
];

pub const JOURNALING_EXERCISES: &[Exercise] = &[
    Exercise {
        name: "Gratitude Journal",
        description: "Write down 3 things you're grateful for today, no matter how small.",
        benefit: "Shifts focus to positive aspects of life",
    },
    Exercise {
        name: "Thought Record",
        description: "Write down a troubling thought, identify the emotion, find evidence for and against it, then create a balanced thought.",
        benefit: "Helps challenge negative thinking patterns",
    },
    Exercise {
        name: "Stream of Consciousness",
        description: "Write continuously for 10 minutes without stopping or judging what comes out.",
        benefit: "Releases mental clutter and provides clarity",
    },
    Exercise {
        name: "Worry Time",
        description: "Schedule 15 minutes to write down all your worries. When worries arise outside this time, note them for your next scheduled worry time.",
        benefit: "Contains worries to a specific time instead of all day",
    },
];

pub const PHYSICAL_EXERCISES: &[Exercise] = &[
    Exercise {
        name: "Progressive Muscle Relaxation",
        description: "Tense and then relax each muscle group in your body, from feet to face.",
        benefit: "Reduces physical tension and promotes relaxation",
    },
    Exercise {
        name: "Gentle Stretching",
        description: "Gently stretch your neck, shoulders, arms, and back for 5-10 minutes.",
        benefit: "Releases physical tension and improves circulation",
    },
    Exercise {
        name: "Quick Walk",
        description: "Take a 10-minute walk, focusing on your surroundings and the sensation of walking.",
        benefit: "Boosts mood and provides a mental break",
    },
];

/// Exercise categories suited to a detected issue. Suicidal signals get no
/// exercise.
pub fn categories_for(issue: Category) -> &'static [ExerciseCategory] {
    match issue {
        Category::Anxiety => &[ExerciseCategory::Breathing, ExerciseCategory::Mindfulness],
        Category::Depression => &[ExerciseCategory::Physical, ExerciseCategory::Journaling],
        Category::Burnout => &[ExerciseCategory::Breathing, ExerciseCategory::Physical],
        Category::Suicidal => &[],
    }
}

/// All exercises applicable to `issue`, in catalog order.
pub fn pool_for(issue: Category) -> Vec<Exercise> {
    categories_for(issue)
        .iter()
        .flat_map(|category| category.exercises().iter().copied())
        .collect()
}

/// Suggest an exercise for the prominent issue, if any issue is elevated.
pub fn select_exercise(scores: &SignalScores, rng: &dyn RandomSource) -> Option<Exercise> {
    let issue = scores.prominent_issue_above(ELEVATED_THRESHOLD)?;
    let pool = pool_for(issue);
    choose(rng, &pool).copied()
}

/// Random exercise from one category, or from the whole catalog.
pub fn random_exercise(category: Option<ExerciseCategory>, rng: &dyn RandomSource) -> Option<Exercise> {
    match category {
        Some(category) => choose(rng, category.exercises()).copied(),
        None => {
            let all: Vec<Exercise> = ExerciseCategory::ALL
                .iter()
                .flat_map(|category| category.exercises().iter().copied())
                .collect();
            choose(rng, &all).copied()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    #[test]
    fn test_no_exercise_below_threshold() {
        let rng = SeededRandom::new(1);
        let scores = SignalScores {
            anxiety: 0.3,
            depression: 0.2,
            burnout: 0.1,
            suicidal: 1.0,
            immediate_help: true,
        };
        assert!(select_exercise(&scores, &rng).is_none());
    }

    #[test]
    fn test_pool_sizes() {
        assert_eq!(pool_for(Category::Anxiety).len(), 7);
        assert_eq!(pool_for(Category::Depression).len(), 7);
        assert_eq!(pool_for(Category::Burnout).len(), 7);
        assert!(pool_for(Category::Suicidal).is_empty());
    }

    #[test]
    fn test_random_exercise_respects_category() {
        let rng = SeededRandom::new(9);
        for _ in 0..20 {
            let exercise = random_exercise(Some(ExerciseCategory::Journaling), &rng).unwrap();
            assert!(JOURNALING_EXERCISES.contains(&exercise));
        }
        assert!(random_exercise(None, &rng).is_some());
    }

    #[test]
    fn test_exercise_serializes_benefits_key() {
        let json = serde_json::to_value(BREATHING_EXERCISES[0]).unwrap();
        assert_eq!(json["benefits"], "Helps reduce anxiety and promote sleep");
        assert!(json.get("benefit").is_none());
    }
}
