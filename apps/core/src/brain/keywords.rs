//! Keyword catalogs for mental-health signal detection.
//!
//! All lists are lower-case. Category lists are matched against single
//! whitespace tokens; crisis phrases are matched as substrings of the whole
//! lower-cased message.

/// Anxiety vocabulary
pub const ANXIETY_KEYWORDS: &[&str] = &[
    "anxiety",
    "anxious",
    "worry",
    "worried",
    "panic",
    "fear",
    "scared",
    "nervous",
    "stress",
    "stressed",
    "overwhelming",
    "tension",
    "afraid",
    "frightened",
    "apprehensive",
    "uneasy",
    "restless",
];

/// Depression vocabulary
pub const DEPRESSION_KEYWORDS: &[&str] = &[
    "depression",
    "depressed",
    "sad",
    "unhappy",
    "hopeless",
    "worthless",
    "empty",
    "numb",
    "tired",
    "exhausted",
    "despair",
    "miserable",
    "lonely",
    "alone",
    "grief",
    "down",
    "blue",
    "upset",
    "hurt",
    "lost",
];

/// Burnout vocabulary. Shares "tired", "exhausted" and "stressed" with the
/// other lists; categories are scored independently.
pub const BURNOUT_KEYWORDS: &[&str] = &[
    "burnout",
    "exhausted",
    "tired",
    "fatigue",
    "overwhelmed",
    "drained",
    "overworked",
    "stressed",
    "workload",
    "pressure",
    "deadlines",
    "overload",
];

/// Single-word suicidal vocabulary. Multi-word expressions live in
/// [`CRISIS_PHRASES`].
pub const SUICIDAL_KEYWORDS: &[&str] = &["suicide", "suicidal"];

/// Phrases that force `immediate_help` and a maximal suicidal score.
pub const CRISIS_PHRASES: &[&str] = &[
    "kill myself",
    "end my life",
    "want to die",
    "planning to commit suicide",
    "going to kill myself",
    "no reason to live",
    "better off dead",
    "can't go on anymore",
    "want to end it all",
    "end it all",
    "ready to die",
];
