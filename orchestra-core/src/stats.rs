use crate::model::{Project, ProjectStatus};
use serde::{Deserialize, Serialize};

/// Header counters. Recomputed from the list on every render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub running: usize,
    pub review: usize,
    pub paused: usize,
    pub error: usize,
    pub done: usize,
}

impl Stats {
    pub fn from_projects(projects: &[Project]) -> Self {
        projects.iter().fold(
            Self {
                total: projects.len(),
                ..Self::default()
            },
            |mut stats, project| {
                *stats.slot_mut(project.status) += 1;
                stats
            },
        )
    }

    pub fn count(&self, status: ProjectStatus) -> usize {
        match status {
            ProjectStatus::Running => self.running,
            ProjectStatus::Review => self.review,
            ProjectStatus::Paused => self.paused,
            ProjectStatus::Error => self.error,
            ProjectStatus::Done => self.done,
        }
    }

    fn slot_mut(&mut self, status: ProjectStatus) -> &mut usize {
        match status {
            ProjectStatus::Running => &mut self.running,
            ProjectStatus::Review => &mut self.review,
            ProjectStatus::Paused => &mut self.paused,
            ProjectStatus::Error => &mut self.error,
            ProjectStatus::Done => &mut self.done,
        }
    }
}
