use leptos::*;
use survey_core::validation::visible_error;
use survey_core::{AnswerForm, Field, Validation};

fn field_error(form: RwSignal<AnswerForm>, validation: Memo<Validation>, field: Field) -> impl IntoView {
    let message = move || form.with(|f| validation.with(|v| visible_error(f, v, field)));
    view! {
      <Show when=move || message().is_some() fallback=|| ()>
        <span class="field-error">{move || message().unwrap_or_default()}</span>
      </Show>
    }
}

fn field_label(field: Field) -> impl IntoView {
    view! {
      <label for=field.key()>
        {field.label()}
        {field.is_required().then(|| view! { <span class="required">" *"</span> })}
      </label>
    }
}

/// Single-line control bound to one field of the form.
#[component]
pub fn InputField(form: RwSignal<AnswerForm>, validation: Memo<Validation>, field: Field) -> impl IntoView {
    view! {
      <div class="field">
        {field_label(field)}
        <input
          id=field.key()
          name=field.key()
          placeholder=field.placeholder()
          required=field.is_required()
          prop:value=move || form.with(|f| f.get(field).to_string())
          on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
          on:blur=move |_| form.update(|f| f.touch(field))
        />
        {field_error(form, validation, field)}
      </div>
    }
}

#[component]
pub fn TextAreaField(form: RwSignal<AnswerForm>, validation: Memo<Validation>, field: Field) -> impl IntoView {
    view! {
      <div class="field">
        {field_label(field)}
        <textarea
          id=field.key()
          name=field.key()
          rows="6"
          placeholder=field.placeholder()
          required=field.is_required()
          prop:value=move || form.with(|f| f.get(field).to_string())
          on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
          on:blur=move |_| form.update(|f| f.touch(field))
        ></textarea>
        {field_error(form, validation, field)}
      </div>
    }
}
