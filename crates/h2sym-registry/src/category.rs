//! Symbol categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::table::CodeTable;
use crate::{error_code, frame_type, settings};

/// The kind of code being named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// The type octet of a frame header.
    FrameType,
    /// The identifier of a SETTINGS frame entry.
    SettingsParameter,
    /// The code carried by RST_STREAM and GOAWAY frames.
    ErrorCode,
}

impl Category {
    /// All categories, in table order.
    pub const ALL: [Category; 3] = [
        Category::FrameType,
        Category::SettingsParameter,
        Category::ErrorCode,
    ];

    /// Stable kebab-case label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::FrameType => "frame-type",
            Category::SettingsParameter => "settings-parameter",
            Category::ErrorCode => "error-code",
        }
    }

    /// The table backing this category.
    pub fn table(self) -> &'static CodeTable {
        match self {
            Category::FrameType => &frame_type::TABLE,
            Category::SettingsParameter => &settings::TABLE,
            Category::ErrorCode => &error_code::TABLE,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "frame-type" | "frame" => Ok(Category::FrameType),
            "settings-parameter" | "settings" | "setting" => Ok(Category::SettingsParameter),
            "error-code" | "error" => Ok(Category::ErrorCode),
            _ => Err(RegistryError::UnknownCategory(s.to_string())),
        }
    }
}
