use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, AppResult};

pub const MAX_MESSAGE_CHARS: usize = 72;

static CONVENTIONAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(fix|feat|docs|style|refactor|perf|test|build|ci): [a-z].*[^.]$")
        .expect("conventional pattern is valid")
});

static FREE_FORM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+ .*[^.]$").expect("free-form pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFormat {
    FreeForm,
    Conventional,
}

impl MessageFormat {
    pub fn from_conventional_flag(conventional: bool) -> Self {
        if conventional {
            MessageFormat::Conventional
        } else {
            MessageFormat::FreeForm
        }
    }

    pub fn profile(self) -> &'static FormatProfile {
        match self {
            MessageFormat::FreeForm => &FREE_FORM,
            MessageFormat::Conventional => &CONVENTIONAL,
        }
    }
}

/// Fixed prompt material and acceptance rule for one message format.
pub struct FormatProfile {
    pub system_prompt: &'static str,
    lead: &'static str,
    rules: &'static str,
    pattern: &'static LazyLock<Regex>,
}

static CONVENTIONAL: FormatProfile = FormatProfile {
    system_prompt: "You are a commit message generator that creates conventional commit messages \
                    exactly matching Commitizen's format.",
    lead: "Generate a single-line conventional commit message for these changes:",
    rules: "Rules:
1. Message must be in this exact format: <type>: <description>
2. Type must be one of:
   - fix: A bug fix. Correlates with PATCH in SemVer
   - feat: A new feature. Correlates with MINOR in SemVer
   - docs: Documentation only changes
   - style: Changes that do not affect the meaning of the code
   - refactor: A code change that neither fixes a bug nor adds a feature
   - perf: A code change that improves performance
   - test: Adding missing or correcting existing tests
   - build: Changes that affect the build system or external dependencies
   - ci: Changes to CI configuration files and scripts
3. Description must be:
   - Written in lower case
   - Imperative, present tense (e.g., 'add' not 'added')
   - No period at the end
   - Under 72 characters total
   - A short and imperative summary of the code changes
",
    pattern: &CONVENTIONAL_PATTERN,
};

static FREE_FORM: FormatProfile = FormatProfile {
    system_prompt: "You are a commit message generator. Output ONLY the raw message text without \
                    any formatting, quotes, or backticks. For regular commits, create concise \
                    messages without type prefixes. Start with a capital verb in imperative mood.",
    lead: "Generate a short, clear commit message for these changes:",
    rules: "Rules:
1. Return ONLY the message text with no formatting, quotes, or backticks
2. DO NOT use type prefixes (like 'fix:', 'feat:', etc.) - just write a plain message
3. Start with a capitalized verb in imperative form (e.g., 'Add' not 'Added' or 'Adds')
4. No period at the end
5. Under 72 characters total
6. Examples of good messages:
   - Update user authentication logic
   - Add support for dark mode
   - Fix database connection timeout
   NOT:
   - `Fix database timeout` (no backticks!)
   - fix: update user auth (no type prefixes!)
   - Updated user authentication (use imperative!)
",
    pattern: &FREE_FORM_PATTERN,
};

impl FormatProfile {
    pub fn prompt(&self, diff: &str) -> String {
        format!("{}\n\n```diff\n{}\n```\n\n{}", self.lead, diff, self.rules)
    }

    pub fn accepts(&self, message: &str) -> bool {
        message.chars().count() < MAX_MESSAGE_CHARS
            && !message.contains('`')
            && self.pattern.is_match(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    /// Cleans up a raw model response and checks it against the format.
    pub fn from_generated(raw: &str, format: MessageFormat) -> AppResult<Self> {
        let candidate = normalize(raw);
        if candidate.is_empty() {
            return Err(AppError::LanguageModel(
                "language model returned an empty message".to_string(),
            ));
        }
        if !format.profile().accepts(&candidate) {
            return Err(AppError::LanguageModel(format!(
                "generated message does not match the expected format: {candidate:?}"
            )));
        }
        Ok(Self(candidate))
    }

    /// User-edited text is taken as-is; `None` when nothing is left after trimming.
    pub fn from_edit(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize(raw: &str) -> String {
    let line = raw
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default();
    line.trim_matches(|c| c == '`' || c == '"' || c == '\'')
        .trim()
        .to_string()
}
