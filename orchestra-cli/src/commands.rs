use crate::state::AppState;
use anyhow::Context;
use orchestra_core::store::Confirm;
use orchestra_core::{
    CardAction, MemoryStore, Project, ProjectDraft, ProjectStatus, ProjectStore, Stats,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardDto {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    pub label: String,
    pub last_action: String,
    pub next_step: String,
    pub port: Option<i64>,
    pub diff: Option<String>,
    pub logs: Option<String>,
    pub actions: Vec<CardAction>,
}

impl From<&Project> for CardDto {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            status: p.status,
            label: p.status.label().to_string(),
            last_action: p.last_action.clone(),
            next_step: p.next_step.clone(),
            port: p.port,
            diff: p.diff.clone(),
            logs: p.logs.clone(),
            actions: CardAction::for_status(p.status).to_vec(),
        }
    }
}

pub fn list_cards(state: &AppState) -> Vec<CardDto> {
    state.board.projects().iter().map(CardDto::from).collect()
}

pub fn stats(state: &AppState) -> Stats {
    state.board.stats()
}

pub fn add_project(state: &mut AppState, name: &str, port: Option<&str>) -> anyhow::Result<Project> {
    let new = ProjectDraft::new(name, port.unwrap_or_default()).submit()?;
    let project = state.board.add(new).context("saving new project")?;
    tracing::info!(id = %project.id, name = %project.name, "project added");
    Ok(project)
}

pub fn approve(state: &mut AppState, id: &str) -> anyhow::Result<bool> {
    Ok(state.board.approve(id)?)
}

pub fn reject(state: &mut AppState, id: &str) -> anyhow::Result<bool> {
    Ok(state.board.reject(id)?)
}

pub fn set_status(state: &mut AppState, id: &str, status: ProjectStatus) -> anyhow::Result<bool> {
    Ok(state.board.set_status(id, status)?)
}

pub fn act(state: &mut AppState, id: &str, action: CardAction) -> anyhow::Result<bool> {
    Ok(state.board.dispatch(id, action)?)
}

/// Delete after asking `confirm`, unless the config turns the prompt off.
pub fn delete(state: &mut AppState, id: &str, confirm: &mut impl Confirm) -> anyhow::Result<bool> {
    let removed = if state.config.confirm_delete {
        state.board.delete(id, confirm)?
    } else {
        state.board.delete(id, &mut |_: &str| true)?
    };
    if removed {
        tracing::info!(id, "project deleted");
    }
    Ok(removed)
}

/// The seed board, without touching any data file.
pub fn demo_cards() -> Vec<CardDto> {
    let board = ProjectStore::open_or_seed(MemoryStore::new(), "demo");
    board.projects().iter().map(CardDto::from).collect()
}

pub fn render_card(card: &CardDto) -> String {
    let mut lines = vec![format!(
        "{} {} [{}] ({})",
        card.status.emoji(),
        card.name,
        card.label,
        card.id
    )];
    if let Some(port) = card.port {
        lines.push(format!("   localhost:{port}"));
    }
    lines.push(format!("   Last: {}", card.last_action));
    lines.push(format!("   Next: {}", card.next_step));
    if let Some(diff) = &card.diff {
        lines.push(format!("   Diff: {diff}"));
    }
    if let Some(logs) = &card.logs {
        lines.push(format!("   Logs: {logs}"));
    }
    let actions: Vec<&str> = card.actions.iter().map(|a| a.as_str()).collect();
    lines.push(format!("   Actions: {}", actions.join(", ")));
    lines.join("\n")
}

pub fn render_stats(stats: &Stats) -> String {
    format!(
        "Total: {}  Running: {}  Review: {}  Errors: {}",
        stats.total, stats.running, stats.review, stats.error
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::build_state;
    use orchestra_core::DashboardConfig;

    fn temp_state(dir: &tempfile::TempDir) -> AppState {
        build_state(
            Some(dir.path().join("orchestra.json")),
            DashboardConfig::default(),
        )
        .expect("state")
    }

    #[test]
    fn list_cards_maps_seed_with_actions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = temp_state(&dir);

        let cards = list_cards(&state);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[1].label, "Needs Review");
        assert_eq!(cards[1].actions, vec![CardAction::Approve, CardAction::Reject]);
        assert_eq!(cards[2].actions, vec![CardAction::Retry]);
    }

    #[test]
    fn add_then_reload_keeps_project() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut state = temp_state(&dir);
        let project = add_project(&mut state, "Scratch", Some("5173")).expect("add");
        assert_eq!(project.status, ProjectStatus::Paused);

        let reloaded = temp_state(&dir);
        let cards = list_cards(&reloaded);
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[4].port, Some(5173));
    }

    #[test]
    fn add_rejects_blank_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut state = temp_state(&dir);
        let err = add_project(&mut state, " ", None).expect_err("blank");
        assert!(err.to_string().contains("name is required"));
        assert_eq!(state.board.len(), 4);
    }

    #[test]
    fn act_respects_offered_buttons() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut state = temp_state(&dir);
        assert!(!act(&mut state, "1", CardAction::Approve).expect("act"));
        assert!(act(&mut state, "1", CardAction::Pause).expect("act"));
        assert_eq!(stats(&state).running, 0);
    }

    #[test]
    fn delete_honours_confirmation_setting() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut state = temp_state(&dir);
        assert!(!delete(&mut state, "4", &mut |_: &str| false).expect("declined"));
        assert_eq!(state.board.len(), 4);

        state.config.confirm_delete = false;
        assert!(delete(&mut state, "4", &mut |_: &str| false).expect("forced"));
        assert_eq!(state.board.len(), 3);
    }

    #[test]
    fn render_card_shows_optional_fields() {
        let cards = demo_cards();
        let text = render_card(&cards[2]);
        assert!(text.starts_with("🔴 DhanDiary [Error] (3)"));
        assert!(text.contains("localhost:3200"));
        assert!(text.contains("Logs: Type error"));
        assert!(text.ends_with("Actions: retry"));
    }

    #[test]
    fn render_card_lists_fields_in_display_order() {
        let cards = demo_cards();
        let lines: Vec<String> = render_card(&cards[1]).lines().map(str::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "🟡 Femora [Needs Review] (2)",
                "   localhost:3100",
                "   Last: Fixed cycle prediction bug",
                "   Next: Deploy to production?",
                "   Diff: +15 -3 lines in prediction.ts",
                "   Actions: approve, reject",
            ]
        );
    }

    #[test]
    fn render_stats_line() {
        let line = render_stats(&Stats::from_projects(&orchestra_core::seed_projects()));
        assert_eq!(line, "Total: 4  Running: 1  Review: 1  Errors: 1");
    }
}
