//! Keyword-matching canned responses for the chat assistant.
//!
//! No natural-language understanding: the utterance is lowercased and the
//! fixed table is scanned in declaration order, returning the answer of the
//! first entry whose question string is contained in the utterance.
//! Overlapping keywords (a short word inside a longer phrase) resolve by
//! table position, not specificity — that ordering is the contract.

/// A static question→answer pair. Questions are lowercase keywords/phrases.
pub struct QaEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// The fixed response table, scanned top to bottom.
const CHAT_SCRIPT: &[QaEntry] = &[
    QaEntry {
        question: "hi",
        answer: "Hello! 👋 How can I assist you today?",
    },
    QaEntry {
        question: "hello",
        answer: "Hey there! How can I help?",
    },
    QaEntry {
        question: "college name",
        answer: "Our college is Global Institute of Technology, Tumkur.",
    },
    QaEntry {
        question: "library timing",
        answer: "📚 The library is open from 9 AM to 7 PM, Monday to Saturday.",
    },
    QaEntry {
        question: "canteen",
        answer: "🍔 The canteen near Block B serves snacks and meals from 9 AM to 5 PM.",
    },
    QaEntry {
        question: "sports",
        answer: "🏏 We have football, cricket, badminton, and indoor games facilities.",
    },
    QaEntry {
        question: "location",
        answer: "📍 The campus is located at NH-48, Tumkur Road, Karnataka.",
    },
    QaEntry {
        question: "admission process",
        answer: "📝 Admissions are open through CET and management quota.",
    },
    QaEntry {
        question: "bye",
        answer: "Goodbye! 👋 Have a great day ahead!",
    },
    QaEntry {
        question: "how to reach principal office",
        answer: "From collage enterence take left straight upto the end then take right",
    },
];

/// Reply when no table entry matches.
pub const FALLBACK_ANSWER: &str = "🤔 Sorry, I don't have an answer for that yet!";

/// Answer an utterance: first containment match in table order, else the
/// fallback.
pub fn respond(utterance: &str) -> &'static str {
    let lowered = utterance.to_lowercase();
    CHAT_SCRIPT
        .iter()
        .find(|entry| lowered.contains(entry.question))
        .map(|entry| entry.answer)
        .unwrap_or(FALLBACK_ANSWER)
}
