use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::sidebar::Sidebar;
use crate::pages::campaign_create::CampaignCreatePage;
use crate::pages::campaign_detail::CampaignDetailPage;
use crate::pages::campaign_list::CampaignListPage;
use crate::pages::home::HomePage;
use crate::pages::knowledge::KnowledgePage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/promotion") view=CampaignListPage />
                        <Route path=path!("/promotion/create") view=CampaignCreatePage />
                        <Route path=path!("/campaign/:id") view=CampaignDetailPage />
                        <Route path=path!("/rag-db") view=KnowledgePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
