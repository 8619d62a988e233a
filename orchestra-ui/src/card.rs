use leptos::*;
use orchestra_core::{CardAction, Project};

fn port_label(port: i64) -> String {
    format!("localhost:{port}")
}

fn logs_toggle_label(open: bool) -> &'static str {
    if open {
        "▼ Hide Logs"
    } else {
        "▶ View Logs"
    }
}

fn wrapper_class(focused: bool) -> &'static str {
    if focused {
        "relative ring-2 ring-blue-500 ring-offset-2 ring-offset-zinc-950 rounded-xl"
    } else {
        "relative"
    }
}

/// One project on the board. The card lives as long as its id does; the
/// body re-renders from `project` on every change while the log panel keeps
/// its open/closed state.
#[component]
pub fn ProjectCard(
    #[prop(into)] project: Signal<Option<Project>>,
    #[prop(into)] focused: Signal<bool>,
    #[prop(into)] on_action: Callback<CardAction>,
    #[prop(into)] on_focus: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    let show_logs = create_rw_signal(false);

    view! {
      <div class=move || wrapper_class(focused.get())>
        <button
          class="absolute -top-2 -right-2 z-10 bg-zinc-800 hover:bg-red-600 text-zinc-400 hover:text-white w-6 h-6 rounded-full text-xs opacity-0 hover:opacity-100 transition-opacity"
          title="Delete project"
          on:click=move |_| on_delete.call(())
        >
          "×"
        </button>
        {move || project.get().map(|project| card_body(project, show_logs, on_action, on_focus))}
      </div>
    }
}

fn card_body(
    project: Project,
    show_logs: RwSignal<bool>,
    on_action: Callback<CardAction>,
    on_focus: Callback<()>,
) -> impl IntoView {
    let status = project.status;

    let buttons = CardAction::for_status(status)
        .iter()
        .map(|&action| {
            view! {
              <button
                class=format!(
                    "flex-1 {} text-white text-sm font-medium py-2 px-3 rounded-lg transition-colors",
                    action.button_class(),
                )
                on:click=move |_| on_action.call(action)
              >
                {action.button_label()}
              </button>
            }
        })
        .collect_view();

    let logs = project.logs.map(|logs| {
        view! {
          <div>
            <button
              class="text-xs text-red-400 hover:text-red-300"
              on:click=move |_| show_logs.update(|open| *open = !*open)
            >
              {move || logs_toggle_label(show_logs.get())}
            </button>
            <Show when=move || show_logs.get() fallback=|| ()>
              <div class="mt-2 text-xs bg-red-950 border border-red-900 rounded p-2 font-mono text-red-300 max-h-24 overflow-auto">
                {logs.clone()}
              </div>
            </Show>
          </div>
        }
    });

    view! {
      <div class=format!(
          "bg-zinc-900 rounded-xl border-2 {} p-4 flex flex-col gap-3 min-w-[280px] transition-all hover:scale-[1.02]",
          status.border_class(),
      )>
        <div class="flex items-center justify-between">
          <div class="flex items-center gap-2">
            <span class="text-xl">{status.emoji()}</span>
            <h3 class="font-bold text-lg">{project.name}</h3>
          </div>
          <span class="text-xs px-2 py-1 rounded-full bg-zinc-800 text-zinc-400">
            {status.label()}
          </span>
        </div>

        {project.port.map(|port| view! { <div class="text-xs text-zinc-500">{port_label(port)}</div> })}

        <div>
          <div class="text-xs text-zinc-500 mb-1">"Last:"</div>
          <div class="text-sm text-zinc-300">{project.last_action}</div>
        </div>

        <div>
          <div class="text-xs text-zinc-500 mb-1">"Next:"</div>
          <div class="text-sm text-zinc-200 font-medium">{project.next_step}</div>
        </div>

        {project.diff.map(|diff| view! {
          <div class="text-xs bg-zinc-800 rounded px-2 py-1 font-mono text-green-400">{diff}</div>
        })}

        {logs}

        <div class="flex gap-2 mt-auto pt-2">
          {buttons}
          <button
            class="bg-zinc-800 hover:bg-zinc-700 text-white text-sm py-2 px-3 rounded-lg transition-colors"
            title="Focus this project"
            on:click=move |_| on_focus.call(())
          >
            "🎯"
          </button>
        </div>
      </div>
    }
}
