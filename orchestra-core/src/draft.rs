use crate::error::DraftError;
use crate::model::{NewProject, ProjectStatus};

pub const CREATED_ACTION: &str = "Project created";
pub const CREATED_NEXT_STEP: &str = "Start development";

/// Raw input of the "Add Project" dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub port: String,
}

impl ProjectDraft {
    pub fn new(name: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            port: port.into(),
        }
    }

    /// Validate the form. New projects always start paused.
    pub fn submit(&self) -> Result<NewProject, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::EmptyName);
        }

        let port = self.port.trim();
        let port = if port.is_empty() {
            None
        } else {
            Some(
                port.parse::<i64>()
                    .map_err(|_| DraftError::InvalidPort(port.to_string()))?,
            )
        };

        Ok(NewProject {
            name: name.to_string(),
            status: ProjectStatus::Paused,
            last_action: CREATED_ACTION.to_string(),
            next_step: CREATED_NEXT_STEP.to_string(),
            port,
            diff: None,
            logs: None,
        })
    }
}
