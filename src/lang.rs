//! Target-language identifiers.
use std::fmt;
use std::str::FromStr;

use crate::convert::ConvertError;

/// The eight supported output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum Language {
    #[value(name = "csharp", alias = "c#", alias = "cs")]
    CSharp,
    #[value(alias = "py")]
    Python,
    Java,
    #[value(name = "javascript", alias = "js")]
    JavaScript,
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
    Php,
    #[value(alias = "rb")]
    Ruby,
    Swift,
}

impl Language {
    /// All targets, in menu order.
    pub const ALL: [Language; 8] = [
        Language::CSharp,
        Language::Python,
        Language::Java,
        Language::JavaScript,
        Language::TypeScript,
        Language::Php,
        Language::Ruby,
        Language::Swift,
    ];

    /// Canonical display name (as shown in headers and `languages` output).
    pub fn name(&self) -> &'static str {
        match self {
            Language::CSharp => "CSharp",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Php => "PHP",
            Language::Ruby => "Ruby",
            Language::Swift => "Swift",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "csharp" | "c#" | "cs" => Ok(Language::CSharp),
            "python" | "py" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            "javascript" | "js" => Ok(Language::JavaScript),
            "typescript" | "ts" => Ok(Language::TypeScript),
            "php" => Ok(Language::Php),
            "ruby" | "rb" => Ok(Language::Ruby),
            "swift" => Ok(Language::Swift),
            _ => Err(ConvertError::UnsupportedLanguage(s.to_string())),
        }
    }
}
