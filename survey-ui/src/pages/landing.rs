use leptos::*;
use leptos_meta::{Meta, Title};
use leptos_router::use_navigate;
use survey_core::Config;

const TITLE: &str = "Strateegia survey";
const TAGLINE: &str = "Faça pesquisas usando o poder de Strateegia";

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();
    let login_path = expect_context::<Config>().login_path;

    view! {
      <Title text=TITLE/>
      <Meta name="description" content=TAGLINE/>
      <main class="full-page">
        <div class="login-wrap">
          <h1>{TITLE}</h1>
          <p class="muted">{TAGLINE}</p>
          <img src="/assets/banner.svg" alt="Survey" width="500" height="500"/>
          <button
            class="btn-primary full"
            on:click=move |_| navigate(&login_path, Default::default())
          >
            "Vamos lá!"
          </button>
        </div>
      </main>
    }
}
