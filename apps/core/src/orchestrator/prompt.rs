//! Generation directive construction.

use crate::brain::{Category, SignalScores, ELEVATED_THRESHOLD};

/// Fixed behavioural preamble sent with every generation request.
pub const BEHAVIOR_PREAMBLE: &str = "\
You are Mind Companion, an empathetic mental health support chatbot focused on emotional support. \
Follow these guidelines:

1. TONE & STYLE:
- Use a warm, compassionate and understanding tone
- Validate emotions and experiences
- Keep replies to 3-4 sentences unless more is genuinely needed
- Use phrases like 'I understand', 'It's completely normal to feel', 'You're not alone'

2. RESPONSE STRUCTURE:
- If the user describes a problem, first name the difficulty they are facing
- Start with emotional acknowledgment
- Offer gentle guidance and support
- Include one practical suggestion or coping strategy
- End with a supportive statement

3. RESOURCES:
- Only provide resources when the user asks for them
- Then include 1-2 relevant online resources, apps or credible organizations

4. FORMATTING:
- Use Markdown
- Split text into short paragraphs (2-3 sentences each)
- Use **bold** for important words or phrases
- Use bullet points for lists when appropriate

5. SAFETY RULES:
- NEVER diagnose or provide medical advice
- Keep replies conversational yet professional
- Always prioritize user safety
- Encourage professional help when appropriate

";

const CRISIS_CLAUSE: &str = "The user may be in crisis and need immediate help. \
Express concern, validate their feelings, and strongly encourage them to contact a crisis \
service immediately. Be direct but compassionate.";

/// Guidance for one of [`Category::ISSUES`]. Suicidal signals have none of
/// their own; they only surface through [`CRISIS_CLAUSE`].
fn issue_guidance(issue: Category) -> Option<&'static str> {
    match issue {
        Category::Anxiety => Some("Focus on grounding techniques and present moment awareness."),
        Category::Depression => Some("Offer gentle encouragement and validate their feelings."),
        Category::Burnout => Some("Emphasize the importance of rest and boundaries."),
        Category::Suicidal => None,
    }
}

/// Conditional part of the directive. Crisis beats the prominent issue;
/// suicidal signals only reach the directive through the crisis clause.
pub fn situational_clause(scores: &SignalScores) -> Option<String> {
    if scores.immediate_help {
        return Some(CRISIS_CLAUSE.to_string());
    }

    let issue = scores.prominent_issue_above(ELEVATED_THRESHOLD)?;
    let guidance = issue_guidance(issue)?;
    Some(format!("The user may be experiencing {}. {}", issue, guidance))
}

/// Full directive: preamble plus the situational clause, if any.
pub fn build_directive(scores: &SignalScores) -> String {
    let mut directive = String::from(BEHAVIOR_PREAMBLE);
    if let Some(clause) = situational_clause(scores) {
        directive.push_str(&clause);
    }
    directive
}
