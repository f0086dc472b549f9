// ============================================================
// Layer 3 — Split Domain Type
// ============================================================
// The named partition a processor works on. Parsing is
// case-insensitive and accepts the common aliases for the
// held-out evaluation split ("valid", "dev").
//
// Aliases are not remembered: a split parsed from "dev" or
// "valid" is Split::Eval, so its example ids and output file use
// the canonical "eval" prefix.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::domain::error::ProcessorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    #[default]
    Train,
    Eval,
    Test,
}

impl Split {
    /// Canonical lowercase name, used as the example id prefix
    /// whatever alias the split was parsed from
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Eval  => "eval",
            Split::Test  => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Split {
    type Err = ProcessorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "train"                    => Ok(Split::Train),
            "eval" | "valid" | "dev"   => Ok(Split::Eval),
            "test"                     => Ok(Split::Test),
            _ => Err(ProcessorError::UnknownSplit(s.to_string())),
        }
    }
}

/// Which label space a vocabulary describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Intent,
    Tag,
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelKind::Intent => f.write_str("intent"),
            LabelKind::Tag    => f.write_str("tag"),
        }
    }
}
