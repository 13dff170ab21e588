use crate::bridge::HttpCommentClient;
use crate::components::{use_toaster, InputField, TextAreaField};
use leptos::*;
use leptos_router::use_params_map;
use survey_core::{
    begin_submit, finish_submit, validate, AnswerForm, CommentSubmitter, Config, Field,
    SubmitControl, SubmitGuard, SurveyRoute,
};
use wasm_bindgen_futures::spawn_local;

/// `/dashboard/survey/:point_id/:question_id`
#[component]
pub fn SurveyPage() -> impl IntoView {
    let params = use_params_map();
    let route = params.with_untracked(|p| SurveyRoute::from_params(|key| p.get(key).cloned()));
    let config = expect_context::<Config>();
    let toaster = use_toaster();

    let form = create_rw_signal(AnswerForm::new());
    let guard = create_rw_signal(SubmitGuard::default());
    let validation = create_memo(move |_| form.with(validate));
    let control = create_memo(move |_| {
        SubmitControl::derive(&validation.get(), guard.with(SubmitGuard::in_flight))
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let started = form
            .try_update(|f| guard.try_update(|g| begin_submit(f, g, &route)))
            .flatten();
        let payload = match started {
            Some(Ok(payload)) => payload,
            Some(Err(refused)) => {
                log::debug!("submit refused: {refused}");
                return;
            }
            None => return,
        };

        let client = HttpCommentClient::new(config.clone());
        spawn_local(async move {
            let result = client.submit_comment(&payload).await;
            // Page may be gone by now; disposed signals just drop the update.
            let toast = form
                .try_update(|f| guard.try_update(|g| finish_submit(f, g, result)))
                .flatten();
            if let Some(toast) = toast {
                toaster.push(toast);
            }
        });
    };

    let fields = Field::ALL
        .into_iter()
        .map(|field| {
            if field.is_multiline() {
                view! { <TextAreaField form=form validation=validation field=field/> }.into_view()
            } else {
                view! { <InputField form=form validation=validation field=field/> }.into_view()
            }
        })
        .collect_view();

    view! {
      <main class="container">
        <form class="stack" novalidate=true on:submit=on_submit>
          {fields}
          <button
            type="submit"
            class="btn-primary"
            class:loading=move || control.get().is_loading()
            disabled=move || !control.get().is_enabled()
          >
            {move || if control.get().is_loading() { "Enviando..." } else { "Enviar" }}
          </button>
        </form>
      </main>
    }
}
