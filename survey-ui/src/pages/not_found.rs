use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <main class="full-page">
        <div class="card">
          <h1>"Página não encontrada"</h1>
          <A href="/">"Voltar para o início"</A>
        </div>
      </main>
    }
}
