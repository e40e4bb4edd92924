//! Question generation via a hosted language-model API.
//!
//! The model is asked for a rigidly formatted question (`Q:` line, `A)`
//! through `D)` options, `Answer:` letter) which is parsed back into a
//! [`Question`]. Any failure along the way (no key configured, network
//! error, unparseable output) degrades to the local bank.

use std::error::Error;

use rand::Rng;
use serde_json::{json, Value};

use crate::questions::{bank, FetchedQuestion, Question, QuestionSource};

const API_KEY_ENV: &str = "GEMINI_API_KEY";
const MODEL_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

pub struct QuestionGenerator {
    api_key: Option<String>,
}

impl QuestionGenerator {
    /// Reads the API key from the environment; without one, every fetch
    /// serves from the local bank.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        Self { api_key }
    }

    pub fn disabled() -> Self {
        Self { api_key: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetches one question for the subject. Never fails: remote problems
    /// are logged and the local bank answers instead.
    pub fn fetch(&self, subject: &str, rng: &mut impl Rng) -> FetchedQuestion {
        if let Some(api_key) = &self.api_key {
            match generate(api_key, subject) {
                Ok(question) => {
                    return FetchedQuestion {
                        question,
                        source: QuestionSource::Generated,
                    }
                }
                Err(error) => {
                    log::warn!("question generation for '{}' failed: {}", subject, error);
                }
            }
        }
        FetchedQuestion {
            question: bank::pick(subject, rng),
            source: QuestionSource::LocalBank,
        }
    }
}

fn build_prompt(topic: &str) -> String {
    format!(
        "Create one multiple-choice question about \"{}\" with 4 options A-D \
         and mark the correct answer letter. Format:\n\
         Q: <question>\n\
         A) ...\n\
         B) ...\n\
         C) ...\n\
         D) ...\n\
         Answer: <A|B|C|D>",
        topic
    )
}

fn generate(api_key: &str, subject: &str) -> Result<Question, Box<dyn Error>> {
    let url = format!("{}?key={}", MODEL_ENDPOINT, api_key);
    let body = json!({
        "contents": [{ "parts": [{ "text": build_prompt(subject) }] }]
    });

    let response: Value = ureq::post(&url)
        .timeout(std::time::Duration::from_secs(10))
        .send_json(body)?
        .into_json()?;

    let text = response["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or("model response carried no text")?;

    parse_mcq(subject, text).ok_or_else(|| "model output did not match the Q/A format".into())
}

/// Parses the rigid `Q:/A)-D)/Answer:` format. Returns None on any
/// structural problem so the caller can fall back.
fn parse_mcq(subject: &str, text: &str) -> Option<Question> {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let prompt = lines
        .iter()
        .find(|line| line.starts_with("Q:"))?
        .trim_start_matches("Q:")
        .trim()
        .to_string();

    let mut options: [String; 4] = Default::default();
    for (slot, prefix) in ["A)", "B)", "C)", "D)"].iter().enumerate() {
        options[slot] = lines
            .iter()
            .find(|line| line.starts_with(prefix))?
            .trim_start_matches(prefix)
            .trim()
            .to_string();
        if options[slot].is_empty() {
            return None;
        }
    }

    let answer_line = lines
        .iter()
        .find(|line| line.to_lowercase().starts_with("answer"))?;
    let letter = answer_line.split(':').nth(1)?.trim().to_uppercase();
    let correct = match letter.as_str() {
        "A" => 0,
        "B" => 1,
        "C" => 2,
        "D" => 3,
        _ => return None,
    };

    if prompt.is_empty() {
        return None;
    }

    Some(Question {
        subject: subject.to_string(),
        prompt,
        options,
        correct,
    })
}
