use crate::error::InvalidAction;
use crate::model::ProjectStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A status-dependent button on a project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardAction {
    Approve,
    Reject,
    Pause,
    Resume,
    Retry,
    Continue,
}

impl CardAction {
    pub const ALL: [CardAction; 6] = [
        CardAction::Approve,
        CardAction::Reject,
        CardAction::Pause,
        CardAction::Resume,
        CardAction::Retry,
        CardAction::Continue,
    ];

    /// Buttons offered for a record in `status`, in display order.
    pub const fn for_status(status: ProjectStatus) -> &'static [CardAction] {
        match status {
            ProjectStatus::Review => &[CardAction::Approve, CardAction::Reject],
            ProjectStatus::Running => &[CardAction::Pause],
            ProjectStatus::Paused => &[CardAction::Resume],
            ProjectStatus::Error => &[CardAction::Retry],
            ProjectStatus::Done => &[CardAction::Continue],
        }
    }

    pub fn is_offered_for(self, status: ProjectStatus) -> bool {
        Self::for_status(status).contains(&self)
    }

    /// Status a plain transition button moves to. `None` for approve and
    /// reject, which also rewrite the action text.
    pub const fn target_status(self) -> Option<ProjectStatus> {
        match self {
            Self::Approve | Self::Reject => None,
            Self::Pause => Some(ProjectStatus::Paused),
            Self::Resume | Self::Retry | Self::Continue => Some(ProjectStatus::Running),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Retry => "retry",
            Self::Continue => "continue",
        }
    }

    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Approve => "✓ Approve",
            Self::Reject => "✗ Reject",
            Self::Pause => "⏸ Pause",
            Self::Resume => "▶ Resume",
            Self::Retry => "🔄 Retry",
            Self::Continue => "↺ Continue",
        }
    }

    /// Tailwind classes for the button's color scheme.
    pub const fn button_class(self) -> &'static str {
        match self {
            Self::Approve => "bg-green-600 hover:bg-green-500",
            Self::Resume => "bg-blue-600 hover:bg-blue-500",
            Self::Retry => "bg-yellow-600 hover:bg-yellow-500",
            Self::Reject | Self::Pause | Self::Continue => "bg-zinc-700 hover:bg-zinc-600",
        }
    }
}

impl fmt::Display for CardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardAction {
    type Err = InvalidAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == lower)
            .ok_or_else(|| InvalidAction(s.to_string()))
    }
}
