//! Support resource catalog and selection by concern level.

use serde::Serialize;

use crate::brain::ConcernLevel;

/// One resource entry. Fields that a given entry lacks are omitted when
/// serialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helpline: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<&'static str>,
}

impl ResourceEntry {
    const fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            contact: None,
            website: None,
            helpline: None,
            author: None,
        }
    }

    const fn contact(mut self, contact: &'static str) -> Self {
        self.contact = Some(contact);
        self
    }

    const fn website(mut self, website: &'static str) -> Self {
        self.website = Some(website);
        self
    }

    const fn helpline(mut self, helpline: &'static str) -> Self {
        self.helpline = Some(helpline);
        self
    }

    const fn author(mut self, author: &'static str) -> Self {
        self.author = Some(author);
        self
    }
}

/// Introductory message plus an ordered list of resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceBundle {
    pub message: &'static str,
    pub resources: Vec<ResourceEntry>,
}

pub const CRISIS_RESOURCES: &[ResourceEntry] = &[
    ResourceEntry::new(
        "National Suicide Prevention Lifeline",
        "24/7, free and confidential support for people in distress",
    )
    .contact("1-800-273-8255")
    .website("https://suicidepreventionlifeline.org/"),
    ResourceEntry::new(
        "Crisis Text Line",
        "Free 24/7 text support for those in crisis",
    )
    .contact("Text HOME to 741741")
    .website("https://www.crisistextline.org/"),
];

pub const GENERAL_RESOURCES: &[ResourceEntry] = &[
    ResourceEntry::new(
        "National Alliance on Mental Illness (NAMI)",
        "Advocacy, education, and support for individuals affected by mental illness",
    )
    .website("https://www.nami.org/")
    .helpline("1-800-950-NAMI (6264)"),
    ResourceEntry::new(
        "Mental Health America",
        "Promotes mental health and provides resources and screenings",
    )
    .website("https://www.mhanational.org/"),
    ResourceEntry::new(
        "Substance Abuse and Mental Health Services Administration (SAMHSA)",
        "Information and treatment referrals",
    )
    .website("https://www.samhsa.gov/")
    .helpline("1-800-662-HELP (4357)"),
];

pub const ONLINE_RESOURCES: &[ResourceEntry] = &[
    ResourceEntry::new("Headspace", "Meditation and mindfulness app")
        .website("https://www.headspace.com/"),
    ResourceEntry::new("Calm", "Sleep, meditation and relaxation app")
        .website("https://www.calm.com/"),
    ResourceEntry::new("7 Cups", "Online therapy and free emotional support")
        .website("https://www.7cups.com/"),
    ResourceEntry::new(
        "Moodfit",
        "Tools to help your mental health, including mood tracking",
    )
    .website("https://www.getmoodfit.com/"),
];

pub const READING_RESOURCES: &[ResourceEntry] = &[
    ResourceEntry::new(
        "The Anxiety and Phobia Workbook",
        "Practical guide with exercises for managing anxiety",
    )
    .author("Edmund J. Bourne"),
    ResourceEntry::new(
        "Feeling Good: The New Mood Therapy",
        "Classic self-help book using cognitive behavioral therapy principles",
    )
    .author("David D. Burns"),
    ResourceEntry::new(
        "The Upward Spiral",
        "Uses neuroscience to explain how to reverse depression",
    )
    .author("Alex Korb"),
];

fn concat(parts: &[&[ResourceEntry]]) -> Vec<ResourceEntry> {
    parts.iter().flat_map(|part| part.iter().copied()).collect()
}

/// Resource bundle for a concern level. Prefix lengths are fixed:
///
/// - critical: all crisis resources
/// - high: crisis resources + first general resource
/// - moderate: all general resources + first two online resources
/// - low: all online resources + first reading resource
pub fn select_resources(level: ConcernLevel) -> ResourceBundle {
    match level {
        ConcernLevel::Critical => ResourceBundle {
            message: "These resources can provide immediate support:",
            resources: concat(&[CRISIS_RESOURCES]),
        },
        ConcernLevel::High => ResourceBundle {
            message: "Here are some helpful mental health resources:",
            resources: concat(&[CRISIS_RESOURCES, &GENERAL_RESOURCES[..1]]),
        },
        ConcernLevel::Moderate => ResourceBundle {
            message: "These resources might be helpful:",
            resources: concat(&[GENERAL_RESOURCES, &ONLINE_RESOURCES[..2]]),
        },
        ConcernLevel::Low => ResourceBundle {
            message: "If you're interested in learning more about mental wellness, check out these resources:",
            resources: concat(&[ONLINE_RESOURCES, &READING_RESOURCES[..1]]),
        },
    }
}
