use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"MAIX"</h1>
                <p class="sidebar-subtitle">"Campaign Console"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Dashboard"</a>
                </li>
                <li class="nav-item">
                    <a href="/promotion" class="nav-link">"Promotions"</a>
                </li>
                <li class="nav-item">
                    <a href="/promotion/create" class="nav-link">"New Promotion"</a>
                </li>
                <li class="nav-item">
                    <a href="/rag-db" class="nav-link">"RAG DB"</a>
                </li>
            </ul>
        </nav>
    }
}
