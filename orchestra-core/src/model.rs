use crate::error::InvalidStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a project currently stands. Drives which card buttons are offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Running,
    Review,
    Paused,
    Error,
    Done,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Running,
        ProjectStatus::Review,
        ProjectStatus::Paused,
        ProjectStatus::Error,
        ProjectStatus::Done,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Review => "review",
            Self::Paused => "paused",
            Self::Error => "error",
            Self::Done => "done",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Running => "🟢",
            Self::Review => "🟡",
            Self::Paused => "⏸️",
            Self::Error => "🔴",
            Self::Done => "✅",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Review => "Needs Review",
            Self::Paused => "Paused",
            Self::Error => "Error",
            Self::Done => "Done",
        }
    }

    /// Tailwind border class used to tint the card.
    pub const fn border_class(self) -> &'static str {
        match self {
            Self::Running => "border-green-500",
            Self::Review => "border-yellow-500",
            Self::Paused => "border-gray-500",
            Self::Error => "border-red-500",
            Self::Done => "border-blue-500",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == lower)
            .ok_or_else(|| InvalidStatus(s.to_string()))
    }
}

/// One tracked project. Serialized with the same camelCase keys the browser
/// board has always written to storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    pub last_action: String,
    pub next_step: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<String>,
}

/// A project that has not been assigned an id yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub status: ProjectStatus,
    pub last_action: String,
    pub next_step: String,
    pub port: Option<i64>,
    pub diff: Option<String>,
    pub logs: Option<String>,
}

impl NewProject {
    pub fn into_project(self, id: String) -> Project {
        Project {
            id,
            name: self.name,
            status: self.status,
            last_action: self.last_action,
            next_step: self.next_step,
            port: self.port,
            diff: self.diff,
            logs: self.logs,
        }
    }
}

/// The board shown when nothing has been stored yet.
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            name: "Looomy".into(),
            status: ProjectStatus::Running,
            last_action: "Added YouTube chat integration".into(),
            next_step: "Test with live stream".into(),
            port: Some(3000),
            diff: None,
            logs: None,
        },
        Project {
            id: "2".into(),
            name: "Femora".into(),
            status: ProjectStatus::Review,
            last_action: "Fixed cycle prediction bug".into(),
            next_step: "Deploy to production?".into(),
            port: Some(3100),
            diff: Some("+15 -3 lines in prediction.ts".into()),
            logs: None,
        },
        Project {
            id: "3".into(),
            name: "DhanDiary".into(),
            status: ProjectStatus::Error,
            last_action: "Build failed".into(),
            next_step: "Check TypeScript errors".into(),
            port: Some(3200),
            diff: None,
            logs: Some("Type error: Property \"amount\" does not exist on type...".into()),
        },
        Project {
            id: "4".into(),
            name: "AI Course".into(),
            status: ProjectStatus::Done,
            last_action: "Added Module 3 details".into(),
            next_step: "Start Module 4?".into(),
            port: Some(3300),
            diff: None,
            logs: None,
        },
    ]
}
