use leptos::*;
use orchestra_core::{NewProject, ProjectDraft};

#[component]
pub fn AddProjectModal(
    #[prop(into)] on_add: Callback<NewProject>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let name = create_rw_signal(String::new());
    let port = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let draft = ProjectDraft::new(name.get_untracked(), port.get_untracked());
        match draft.submit() {
            Ok(new) => {
                on_add.call(new);
                on_close.call(());
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    view! {
      <div
        class="fixed inset-0 bg-black/50 flex items-center justify-center z-50"
        on:click=move |_| on_close.call(())
      >
        <div class="bg-zinc-900 rounded-xl p-6 w-full max-w-md" on:click=|ev| ev.stop_propagation()>
          <h2 class="text-xl font-bold mb-4">"Add Project"</h2>
          <form class="flex flex-col gap-4" on:submit=submit>
            <div>
              <label class="text-sm text-zinc-400 block mb-1">"Project Name"</label>
              <input
                type="text"
                class="w-full bg-zinc-800 border border-zinc-700 rounded-lg px-3 py-2 text-white"
                placeholder="My Project"
                required=true
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
              />
            </div>
            <div>
              <label class="text-sm text-zinc-400 block mb-1">"Port (optional)"</label>
              <input
                type="number"
                class="w-full bg-zinc-800 border border-zinc-700 rounded-lg px-3 py-2 text-white"
                placeholder="3000"
                prop:value=move || port.get()
                on:input=move |ev| port.set(event_target_value(&ev))
              />
            </div>
            <Show when=move || error.get().is_some() fallback=|| ()>
              <p class="text-sm text-red-400">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="flex gap-2 mt-2">
              <button
                type="submit"
                class="flex-1 bg-blue-600 hover:bg-blue-500 text-white font-medium py-2 px-4 rounded-lg"
              >
                "Add Project"
              </button>
              <button
                type="button"
                class="flex-1 bg-zinc-700 hover:bg-zinc-600 text-white font-medium py-2 px-4 rounded-lg"
                on:click=move |_| on_close.call(())
              >
                "Cancel"
              </button>
            </div>
          </form>
        </div>
      </div>
    }
}
