use leptos::*;
use survey_core::Toast;

#[derive(Clone, Debug, PartialEq)]
struct ToastEntry {
    id: u64,
    toast: Toast,
}

/// App-wide notification queue, shared through context.
#[derive(Clone, Copy)]
pub struct Toaster {
    entries: RwSignal<Vec<ToastEntry>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            entries: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    /// Show `toast` and schedule its removal after `toast.duration`.
    pub fn push(&self, toast: Toast) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let duration = toast.duration;
        self.entries.update(|list| list.push(ToastEntry { id, toast }));

        let this = *self;
        set_timeout(move || this.dismiss(id), duration);
    }

    pub fn dismiss(&self, id: u64) {
        self.entries.try_update(|list| list.retain(|e| e.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
      <div class="toast-host" role="status" aria-live="polite">
        <For
          each=move || toaster.entries.get()
          key=|e| e.id
          children=move |e| {
            let id = e.id;
            let Toast { title, description, status, closable, .. } = e.toast;
            view! {
              <div class=format!("toast {}", status.class())>
                <div class="toast-body">
                  <b>{title}</b>
                  {description.map(|d| view! { <div class="toast-description">{d}</div> })}
                </div>
                <Show when=move || closable fallback=|| ()>
                  <button class="toast-close" aria-label="Fechar" on:click=move |_| toaster.dismiss(id)>
                    "×"
                  </button>
                </Show>
              </div>
            }
          }
        />
      </div>
    }
}
