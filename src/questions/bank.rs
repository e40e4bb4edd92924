//! Static local question bank, the fallback when generation is
//! unavailable. Keyed by subject; unknown subjects fall back to the
//! general bank so a pick always succeeds.

use rand::Rng;

use crate::questions::Question;

pub const SUBJECTS: [&str; 10] = [
    "Science",
    "Maths",
    "English",
    "Global Perspective",
    "Russian Language",
    "Russian Literature",
    "German Language",
    "Geography",
    "Kyrgyz Language",
    "Kyrgyz History",
];

struct BankEntry {
    prompt: &'static str,
    options: [&'static str; 4],
    correct: usize,
}

const SCIENCE: [BankEntry; 3] = [
    BankEntry {
        prompt: "Which gas do plants absorb during photosynthesis?",
        options: ["Oxygen", "Carbon dioxide", "Nitrogen", "Hydrogen"],
        correct: 1,
    },
    BankEntry {
        prompt: "What is the chemical symbol for iron?",
        options: ["Ir", "In", "Fe", "I"],
        correct: 2,
    },
    BankEntry {
        prompt: "Which planet is known as the Red Planet?",
        options: ["Venus", "Jupiter", "Saturn", "Mars"],
        correct: 3,
    },
];

const MATHS: [BankEntry; 3] = [
    BankEntry {
        prompt: "What is 12 × 8?",
        options: ["86", "96", "104", "112"],
        correct: 1,
    },
    BankEntry {
        prompt: "What is the value of π rounded to two decimal places?",
        options: ["3.12", "3.14", "3.16", "3.18"],
        correct: 1,
    },
    BankEntry {
        prompt: "A triangle's angles always sum to how many degrees?",
        options: ["90", "180", "270", "360"],
        correct: 1,
    },
];

const ENGLISH: [BankEntry; 3] = [
    BankEntry {
        prompt: "Which part of speech describes an action?",
        options: ["Noun", "Adjective", "Verb", "Preposition"],
        correct: 2,
    },
    BankEntry {
        prompt: "In \"the quick brown fox\", the word \"quick\" is a(n):",
        options: ["Adverb", "Adjective", "Pronoun", "Conjunction"],
        correct: 1,
    },
    BankEntry {
        prompt: "Which word is a pronoun?",
        options: ["Run", "Blue", "They", "Slowly"],
        correct: 2,
    },
];

const GEOGRAPHY: [BankEntry; 3] = [
    BankEntry {
        prompt: "Which is the largest ocean on Earth?",
        options: ["Atlantic", "Indian", "Arctic", "Pacific"],
        correct: 3,
    },
    BankEntry {
        prompt: "What is the capital of Kyrgyzstan?",
        options: ["Osh", "Bishkek", "Almaty", "Tashkent"],
        correct: 1,
    },
    BankEntry {
        prompt: "The Tian Shan mountains run through which region?",
        options: ["Central Asia", "South America", "Scandinavia", "East Africa"],
        correct: 0,
    },
];

const GENERAL: [BankEntry; 2] = [
    BankEntry {
        prompt: "How many minutes are in two hours?",
        options: ["60", "90", "120", "240"],
        correct: 2,
    },
    BankEntry {
        prompt: "Which of these is a primary color?",
        options: ["Green", "Orange", "Blue", "Purple"],
        correct: 2,
    },
];

fn bank_for(subject: &str) -> &'static [BankEntry] {
    match subject {
        "Science" => &SCIENCE,
        "Maths" => &MATHS,
        "English" => &ENGLISH,
        "Geography" => &GEOGRAPHY,
        _ => &GENERAL,
    }
}

/// Picks a random question for the subject from the local bank.
pub fn pick(subject: &str, rng: &mut impl Rng) -> Question {
    let bank = bank_for(subject);
    let entry = &bank[rng.gen_range(0..bank.len())];
    Question {
        subject: subject.to_string(),
        prompt: entry.prompt.to_string(),
        options: entry.options.map(str::to_string),
        correct: entry.correct,
    }
}
