use crate::components::{ToastHost, Toaster};
use crate::pages::{LandingPage, NotFound, SurveyPage};
use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::{Route, Router, Routes};
use survey_core::Config;

fn load_config() -> Config {
    match Config::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}; falling back to defaults");
            Config::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    log::debug!("comments api at {}", config.api_base_url);
    provide_context(config);
    provide_context(Toaster::new());

    view! {
      <Router>
        <Routes>
          <Route path="/" view=LandingPage/>
          <Route path="/dashboard/survey/:point_id/:question_id" view=SurveyPage/>
          <Route path="/*any" view=NotFound/>
        </Routes>
      </Router>
      <ToastHost/>
    }
}
