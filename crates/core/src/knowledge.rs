//! Disease knowledge base.
//!
//! A fixed table of topics, each with the same four text fields. The table is
//! static and its order is the order in which the intent resolver scans topic
//! names.

use serde::Serialize;

/// One of the four facts held per topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    About,
    Symptoms,
    Prevention,
    Treatment,
}

impl Field {
    /// Resolution priority: the first field whose keywords match wins.
    pub const PRIORITY: [Field; 4] = [
        Field::Symptoms,
        Field::Prevention,
        Field::Treatment,
        Field::About,
    ];

    /// Keywords that select this field when found as substrings of a question.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Field::Symptoms => &["symptom", "symptoms"],
            Field::Prevention => &["prevent", "prevention", "avoid"],
            Field::Treatment => &["treat", "treatment", "cure", "medicine"],
            Field::About => &["about", "what", "info", "information"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::About => "about",
            Field::Symptoms => "symptoms",
            Field::Prevention => "prevention",
            Field::Treatment => "treatment",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A disease and its four facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub name: &'static str,
    pub about: &'static str,
    pub symptoms: &'static str,
    pub prevention: &'static str,
    pub treatment: &'static str,
}

impl Topic {
    pub fn field(&self, field: Field) -> &'static str {
        match field {
            Field::About => self.about,
            Field::Symptoms => self.symptoms,
            Field::Prevention => self.prevention,
            Field::Treatment => self.treatment,
        }
    }
}

static TOPICS: [Topic; 4] = [
    Topic {
        name: "dengue",
        about: "Dengue is a viral infection transmitted by Aedes mosquitoes.",
        symptoms: "High fever, severe headache, pain behind eyes, joint pain, rash.",
        prevention: "Use mosquito nets, wear long clothes, avoid stagnant water.",
        treatment: "No specific cure. Rest, fluids, and medical supervision are recommended.",
    },
    Topic {
        name: "malaria",
        about: "Malaria is caused by Plasmodium parasites spread through Anopheles mosquitoes.",
        symptoms: "Fever, chills, sweats, headaches, nausea, vomiting.",
        prevention: "Use insect repellent, mosquito nets, and eliminate stagnant water.",
        treatment: "Antimalarial medicines prescribed by doctors are effective.",
    },
    Topic {
        name: "covid",
        about: "COVID-19 is a respiratory illness caused by the SARS-CoV-2 virus.",
        symptoms: "Fever, cough, fatigue, loss of taste or smell, breathing difficulties.",
        prevention: "Wear masks, wash hands, maintain social distancing, get vaccinated.",
        treatment: "Supportive care, rest, hydration, and prescribed antiviral or oxygen therapy for severe cases.",
    },
    Topic {
        name: "typhoid",
        about: "Typhoid is a bacterial infection caused by Salmonella Typhi, spread through contaminated food and water.",
        symptoms: "Prolonged fever, weakness, stomach pain, headache, constipation or diarrhea.",
        prevention: "Drink clean water, maintain good sanitation, wash hands, and avoid street food.",
        treatment: "Antibiotics prescribed by doctors are the main treatment.",
    },
];

/// Read-only view over the built-in topic table.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    topics: &'static [Topic],
}

impl KnowledgeBase {
    /// The built-in disease table.
    pub fn builtin() -> Self {
        Self { topics: &TOPICS }
    }

    /// Topics in scan order.
    pub fn topics(&self) -> &'static [Topic] {
        self.topics
    }

    /// Find a topic by its exact (lowercase) name.
    pub fn lookup(&self, name: &str) -> Option<&'static Topic> {
        self.topics.iter().find(|t| t.name == name)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}
