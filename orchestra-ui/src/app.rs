use crate::browser::{self, BrowserStorage};
use crate::card::ProjectCard;
use crate::modal::AddProjectModal;
use leptos::*;
use orchestra_core::focus::quick_focus_index;
use orchestra_core::{
    CardAction, DashboardConfig, FocusMarker, NewProject, Project, ProjectStore, StoreError,
};

type Board = ProjectStore<BrowserStorage>;

/// Cards are mounted once per id and follow their record from the board.
fn card_key(project: &Project) -> String {
    project.id.clone()
}

fn mutate<T>(board: RwSignal<Board>, op: &str, f: impl FnOnce(&mut Board) -> Result<T, StoreError>) {
    board.update(|store| {
        if let Err(err) = f(store) {
            logging::warn!("{op} failed: {err}");
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::default();
    let focus_delay = config.focus_delay();

    let board = create_rw_signal(ProjectStore::open_or_seed(
        BrowserStorage::detect(),
        config.storage_key,
    ));
    let focus = create_rw_signal(FocusMarker::new());
    let show_add = create_rw_signal(false);

    let stats = create_memo(move |_| board.with(|store| store.stats()));

    let focus_project = move |id: String| {
        if let Some(ticket) = focus.try_update(|marker| marker.focus(id)) {
            set_timeout(
                move || {
                    focus.update(|marker| {
                        marker.expire(ticket);
                    })
                },
                focus_delay,
            );
        }
    };

    let add_project = move |new: NewProject| mutate(board, "add", |store| store.add(new));

    let keys = window_event_listener(ev::keydown, move |ev| {
        if show_add.get_untracked() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let Some(index) = quick_focus_index(&ev.key()) else {
            return;
        };
        let target = board.with_untracked(|store| store.projects().get(index).map(|p| p.id.clone()));
        if let Some(id) = target {
            focus_project(id);
        }
    });
    on_cleanup(move || keys.remove());

    view! {
      <div class="min-h-screen p-6">
        <div class="max-w-7xl mx-auto mb-8">
          <div class="flex items-center justify-between mb-4">
            <div class="flex items-center gap-3">
              <span class="text-3xl">"🦾"</span>
              <h1 class="text-2xl font-bold">"Agent Orchestra"</h1>
            </div>
            <button
              class="bg-blue-600 hover:bg-blue-500 text-white font-medium py-2 px-4 rounded-lg flex items-center gap-2"
              on:click=move |_| show_add.set(true)
            >
              <span>"+"</span>
              " Add Project"
            </button>
          </div>

          <div class="flex gap-4 text-sm">
            <div class="bg-zinc-900 rounded-lg px-4 py-2">
              <span class="text-zinc-500">"Total:"</span> " " <span class="font-bold">{move || stats.get().total}</span>
            </div>
            <div class="bg-zinc-900 rounded-lg px-4 py-2">
              <span class="text-green-500">"Running:"</span> " " <span class="font-bold">{move || stats.get().running}</span>
            </div>
            <div class="bg-zinc-900 rounded-lg px-4 py-2">
              <span class="text-yellow-500">"Review:"</span> " " <span class="font-bold">{move || stats.get().review}</span>
            </div>
            <div class="bg-zinc-900 rounded-lg px-4 py-2">
              <span class="text-red-500">"Errors:"</span> " " <span class="font-bold">{move || stats.get().error}</span>
            </div>
          </div>
        </div>

        <div class="max-w-7xl mx-auto">
          <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4">
            <For
              each=move || board.with(|store| store.projects().to_vec())
              key=card_key
              children=move |project| {
                let id = card_key(&project);
                let record = {
                  let id = id.clone();
                  Signal::derive(move || board.with(|store| store.get(&id).cloned()))
                };
                let focused = {
                  let id = id.clone();
                  Signal::derive(move || focus.with(|marker| marker.is_focused(&id)))
                };
                let on_action = {
                  let id = id.clone();
                  Callback::new(move |action: CardAction| {
                    mutate(board, action.as_str(), |store| store.dispatch(&id, action))
                  })
                };
                let on_focus = {
                  let id = id.clone();
                  Callback::new(move |()| focus_project(id.clone()))
                };
                let on_delete = Callback::new(move |()| {
                  mutate(board, "delete", |store| store.delete(&id, &mut browser::confirm_dialog))
                });
                view! {
                  <ProjectCard
                    project=record
                    focused=focused
                    on_action=on_action
                    on_focus=on_focus
                    on_delete=on_delete
                  />
                }
              }
            />
          </div>
        </div>

        <div class="fixed bottom-4 right-4 text-xs text-zinc-600">
          "Press 1-9 to quick-focus projects"
        </div>

        <Show when=move || show_add.get() fallback=|| ()>
          <AddProjectModal
            on_add=Callback::new(add_project)
            on_close=Callback::new(move |()| show_add.set(false))
          />
        </Show>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchestra_core::{seed_projects, ProjectStatus};

    #[test]
    fn card_key_survives_status_changes() {
        let mut project = seed_projects().remove(2);
        let before = card_key(&project);
        project.status = ProjectStatus::Running;
        project.last_action = "Retried".into();
        assert_eq!(card_key(&project), before);
    }

    #[test]
    fn card_keys_are_distinct_per_project() {
        let keys: Vec<_> = seed_projects().iter().map(card_key).collect();
        assert_eq!(keys, vec!["1", "2", "3", "4"]);
    }
}
