/// Which changes feed the diff and the commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffScope {
    /// Only changes already added to the index.
    Staged,
    /// Every tracked modification relative to `HEAD`.
    All,
}

impl DiffScope {
    pub fn from_all_flag(all: bool) -> Self {
        if all { DiffScope::All } else { DiffScope::Staged }
    }

    pub fn diff_args(self) -> &'static [&'static str] {
        match self {
            DiffScope::Staged => &["diff", "--cached"],
            DiffScope::All => &["diff", "HEAD"],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    pub text: String,
}

impl Diff {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Abbreviated commit id as printed by `git log --pretty=format:%h`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortHash(pub String);

impl ShortHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
