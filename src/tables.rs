//! Fixed lookup tables: symptom keywords, category labels and canned replies
//!
//! Everything here is process-wide immutable data. The keyword table is
//! ordered and the order is significant: the matcher reports the first
//! keyword that matches.

/// Category a symptom description is triaged into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Infection,
    Respiratory,
    NeurologicalStress,
    Cardiac,
    Digestive,
    GeneralIllness,
    Musculoskeletal,
    BalanceNeurological,
    RespiratoryCardiac,
    Dermatological,
    Inflammation,
    General,
}

/// Ordered symptom keyword table. First match wins.
pub const KEYWORD_TABLE: &[(&str, Category)] = &[
    ("fever", Category::Infection),
    ("cough", Category::Respiratory),
    ("headache", Category::NeurologicalStress),
    ("chest pain", Category::Cardiac),
    ("nausea", Category::Digestive),
    ("fatigue", Category::GeneralIllness),
    ("joint pain", Category::Musculoskeletal),
    ("dizziness", Category::BalanceNeurological),
    ("shortness of breath", Category::RespiratoryCardiac),
    ("rash", Category::Dermatological),
    ("swelling", Category::Inflammation),
];

/// Label used when no keyword matches
pub const DEFAULT_LABEL: &str = "General health consultation";

/// Reply for a label the response table does not know
pub const FALLBACK_REPLY: &str = "I'm not sure about that. Could you please provide more details?";

/// HTTP reply when the request carries no usable message
pub const EMPTY_MESSAGE_PROMPT: &str = "Please provide symptoms for assistance.";

pub const WELCOME_LINES: &[&str] = &[
    "Welcome to the hospital reception chatbot!",
    "Please describe your symptoms to assist in directing you to the right department.",
];

pub const FAREWELL: &str = "Thank you for using the hospital chatbot. Stay healthy!";

/// Console inputs that end the conversation (compared case-insensitively)
pub const EXIT_WORDS: &[&str] = &["exit", "quit", "stop"];

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Infection,
        Category::Respiratory,
        Category::NeurologicalStress,
        Category::Cardiac,
        Category::Digestive,
        Category::GeneralIllness,
        Category::Musculoskeletal,
        Category::BalanceNeurological,
        Category::RespiratoryCardiac,
        Category::Dermatological,
        Category::Inflammation,
        Category::General,
    ];

    /// Human-readable category label
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Infection => "Infection-related issues",
            Category::Respiratory => "Respiratory issues",
            Category::NeurologicalStress => "Neurological or stress-related issues",
            Category::Cardiac => "Cardiac issues",
            Category::Digestive => "Digestive issues",
            Category::GeneralIllness => "General symptoms of illness",
            Category::Musculoskeletal => "Musculoskeletal issues",
            Category::BalanceNeurological => "Balance and neurological issues",
            Category::RespiratoryCardiac => "Respiratory/Cardiac issues",
            Category::Dermatological => "Dermatological issues",
            Category::Inflammation => "Inflammation-related issues",
            Category::General => DEFAULT_LABEL,
        }
    }

    /// Canned reply for this category
    pub fn reply(&self) -> &'static str {
        match self {
            Category::Infection => {
                "You may have an infection. Please consult a doctor for further diagnosis. You might need tests like blood work."
            }
            Category::Respiratory => {
                "It seems like a respiratory issue. If you're experiencing shortness of breath or persistent cough, please see a pulmonologist."
            }
            Category::NeurologicalStress => {
                "You might be dealing with stress or a neurological issue. A consultation with a neurologist or psychologist could help."
            }
            Category::Cardiac => {
                "Chest pain or shortness of breath could indicate a heart condition. Please consult a cardiologist immediately."
            }
            Category::Digestive => {
                "Nausea and stomach-related issues may require a gastroenterologist's assessment. Please share more details about your symptoms."
            }
            Category::GeneralIllness => {
                "Fatigue can be related to a number of conditions. Please monitor your health and consult a general physician if necessary."
            }
            Category::Musculoskeletal => {
                "Joint pain or muscle discomfort may require an orthopedic or physiotherapy consultation."
            }
            Category::BalanceNeurological => {
                "Dizziness could be related to a number of causes, including neurological issues. Please consult a specialist."
            }
            Category::RespiratoryCardiac => {
                "Shortness of breath can have respiratory or cardiac causes. Please seek medical attention promptly, especially if it came on suddenly."
            }
            Category::Dermatological => {
                "Rashes or skin conditions may require a dermatologist consultation. Do you have any visible rashes?"
            }
            Category::Inflammation => {
                "Swelling can be caused by inflammation. Please share more about the affected area and any additional symptoms."
            }
            Category::General => {
                "It looks like you're describing a general health issue. Please consult a doctor to assess your symptoms."
            }
        }
    }

    /// Reverse lookup from a label string
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the canned reply for a label, falling back for unknown labels
pub fn respond_to_label(label: &str) -> &'static str {
    Category::from_label(label)
        .map(|c| c.reply())
        .unwrap_or(FALLBACK_REPLY)
}

/// True if the console input should end the conversation
pub fn is_exit_word(input: &str) -> bool {
    let trimmed = input.trim();
    EXIT_WORDS.iter().any(|w| trimmed.eq_ignore_ascii_case(w))
}
