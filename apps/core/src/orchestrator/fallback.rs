//! Canned replies used when generation is unavailable or fails.

use serde::Serialize;
use std::fmt;

use crate::brain::{SignalScores, ELEVATED_THRESHOLD};
use crate::random::{choose, RandomSource};

/// Named set of canned replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPool {
    Critical,
    Anxiety,
    Depression,
    Burnout,
    General,
    /// Opening lines. Never chosen by [`select_pool`].
    Greeting,
}

impl FallbackPool {
    pub fn label(&self) -> &'static str {
        match self {
            FallbackPool::Critical => "critical",
            FallbackPool::Anxiety => "anxiety",
            FallbackPool::Depression => "depression",
            FallbackPool::Burnout => "burnout",
            FallbackPool::General => "general",
            FallbackPool::Greeting => "greeting",
        }
    }

    pub fn replies(&self) -> &'static [&'static str] {
        match self {
            FallbackPool::Critical => CRITICAL_REPLIES,
            FallbackPool::Anxiety => ANXIETY_REPLIES,
            FallbackPool::Depression => DEPRESSION_REPLIES,
            FallbackPool::Burnout => BURNOUT_REPLIES,
            FallbackPool::General => GENERAL_REPLIES,
            FallbackPool::Greeting => GREETING_REPLIES,
        }
    }

    /// One reply drawn uniformly from this pool.
    pub fn pick(&self, rng: &dyn RandomSource) -> &'static str {
        let replies = self.replies();
        choose(rng, replies).copied().unwrap_or(replies[0])
    }
}

impl fmt::Display for FallbackPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

const GREETING_REPLIES: &[&str] = &[
    "Hello! I'm Mind Companion, your mental health support chatbot. How are you feeling today?",
    "Hi there! I'm here to **support you**. How are you doing?",
    "Welcome! How can I help support your mental wellbeing today?",
];

const ANXIETY_REPLIES: &[&str] = &[
    "It sounds like you might be experiencing some anxiety.\n\n**Remember to take deep breaths**. Breathing exercises can help ground you in the present moment.",
    "When we feel anxious, our breathing often becomes shallow.\n\nTry taking a few deep breaths with me. Inhale slowly for 4 counts, hold for 2, and exhale for 6. This can help activate your parasympathetic nervous system.",
    "I understand anxiety can be overwhelming. Let's try to ground ourselves in the present moment.\n\nOne technique you might find helpful is the **5-4-3-2-1 exercise**:\n\n- Notice 5 things you can see\n- Notice 4 things you can touch\n- Notice 3 things you can hear\n- Notice 2 things you can smell\n- Notice 1 thing you can taste",
];

const DEPRESSION_REPLIES: &[&str] = &[
    "I'm sorry you're feeling this way. **Remember that you're not alone** in this.\n\nDepression can make even simple tasks feel overwhelming. Be gentle with yourself and acknowledge the small wins.",
    "Depression can make everything feel heavy.\n\n**Small steps forward are still progress**. What's one tiny thing you could do today that might bring even a moment of relief?",
    "It takes courage to share how you're feeling.\n\nI'm here to listen without judgment. Depression is not your fault, and reaching out is a sign of strength, not weakness.",
];

const BURNOUT_REPLIES: &[&str] = &[
    "Feeling burnt out is a sign that you've been pushing yourself hard. **It's okay to rest**.\n\nBurnout isn't just tiredness - it's your body and mind telling you that something needs to change. What small boundaries could you set to protect your energy?",
    "Burnout can be draining. **What's one small thing you could do for yourself today**?\n\nSometimes even 5 minutes of intentional rest can help begin the recovery process.",
    "I hear that you're feeling exhausted. **Remember to be kind to yourself** during this time.\n\nBurnout often happens to people who care deeply and try hard. Your worth isn't tied to your productivity.",
];

const CRITICAL_REPLIES: &[&str] = &[
    "It sounds like you are going through a lot right now. **Please know that there's support available**.\n\nConsider reaching out to a crisis hotline or mental health professional. The **988 Suicide & Crisis Lifeline** is available 24/7 and can be reached by dialing or texting 988.",
    "I'm concerned about what you're saying. **If you're in crisis, please reach out for immediate help**.\n\nThere are people who want to support you. The **Crisis Text Line** can be reached by texting HOME to 741741 anytime.",
    "Your safety is important. **If you feel like you might hurt yourself, please contact a crisis support service now**.\n\nYou deserve support, and trained professionals are available 24/7 to talk with you about what you're experiencing.",
];

const GENERAL_REPLIES: &[&str] = &[
    "Thanks for sharing that with me.\n\nI appreciate your openness. How else can I support you today?",
    "I'm here to listen. **Tell me more about what's on your mind**.\n\nSharing your thoughts and feelings can sometimes help make them feel less overwhelming.",
    "It sounds like you're going through a lot. **How can I best support you right now**?\n\nSometimes just having someone to listen can make a difference.",
];

/// Pool for a fallback reply. First match wins: crisis, then anxiety,
/// depression and burnout above the elevated threshold, then general.
///
/// This is a fixed priority order, not the prominent issue: anxiety at 0.31
/// beats depression at 0.9.
pub fn select_pool(scores: &SignalScores) -> FallbackPool {
    if scores.immediate_help {
        FallbackPool::Critical
    } else if scores.anxiety > ELEVATED_THRESHOLD {
        FallbackPool::Anxiety
    } else if scores.depression > ELEVATED_THRESHOLD {
        FallbackPool::Depression
    } else if scores.burnout > ELEVATED_THRESHOLD {
        FallbackPool::Burnout
    } else {
        FallbackPool::General
    }
}

/// Canned reply for `scores`.
pub fn fallback_reply(scores: &SignalScores, rng: &dyn RandomSource) -> &'static str {
    select_pool(scores).pick(rng)
}
