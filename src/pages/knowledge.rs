use leptos::prelude::*;
use maix_core::forms::KnowledgeForm;
use maix_core::listing::{filter_knowledge, format_date, parse_source_filter, truncate_middle};
use maix_core::types::{KnowledgeEntry, SourceType};
use tracing::{info, warn};
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::browser;
use crate::components::knowledge_modal::KnowledgeModal;
use crate::preferences;

const ID_DISPLAY_LEN: usize = 24;

/// Which form the modal is showing.
#[derive(Debug, Clone, PartialEq)]
enum Editing {
    Create,
    Update(KnowledgeEntry),
}

#[component]
pub fn KnowledgePage() -> impl IntoView {
    let (entries, set_entries) = signal::<Vec<KnowledgeEntry>>(vec![]);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (source_filter, set_source_filter) = signal(preferences::load_filters().knowledge_source);
    let (query, set_query) = signal(String::new());
    let (selected, set_selected) = signal::<Option<KnowledgeEntry>>(None);
    let (editing, set_editing) = signal::<Option<Editing>>(None);
    let (busy, set_busy) = signal(false);
    let (reload, set_reload) = signal(0u32);

    let refetch = move || set_reload.update(|n| *n += 1);

    // Source type is filtered by the server; the title search runs locally.
    Effect::new(move |_| {
        reload.track();
        let source = parse_source_filter(&source_filter.get());
        set_loading.set(true);
        spawn_local(async move {
            match api::list_knowledge(source).await {
                Ok(list) => {
                    set_entries.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    warn!("Failed to list knowledge: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let visible = move || entries.with(|list| filter_knowledge(list, &query.get()));

    let on_source_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        preferences::update_filters(|f| f.knowledge_source = value.clone());
        set_selected.set(None);
        set_source_filter.set(value);
    };

    let open_entry = move |id: String| {
        spawn_local(async move {
            match api::get_knowledge(&id).await {
                Ok(entry) => set_selected.set(Some(entry)),
                Err(e) => browser::alert(&format!("Could not load the entry: {}", e)),
            }
        });
    };

    let save = Callback::new(move |form: KnowledgeForm| {
        let Some(mode) = editing.get_untracked() else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            let result = match &mode {
                Editing::Create => api::create_knowledge(form).await,
                Editing::Update(entry) => api::update_knowledge(&entry.id, form).await,
            };
            match result {
                Ok(()) => {
                    info!("Knowledge entry saved");
                    set_editing.set(None);
                    set_selected.set(None);
                    refetch();
                }
                Err(e) => browser::alert(&format!("Could not save the entry: {}", e)),
            }
            set_busy.set(false);
        });
    });

    let delete_entry = move |entry: KnowledgeEntry| {
        let message = format!(
            "Really delete '{}'? This cannot be undone.",
            entry.metadata.title
        );
        if !browser::confirm(&message) {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::delete_knowledge(&entry.id).await {
                Ok(()) => {
                    set_selected.set(None);
                    refetch();
                }
                Err(e) => browser::alert(&format!("Could not delete the entry: {}", e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="page knowledge-page">
            <div class="page-header">
                <h2>"RAG DB"</h2>
                <button class="btn btn-primary" on:click=move |_| set_editing.set(Some(Editing::Create))>
                    "Add knowledge"
                </button>
            </div>
            <p class="page-description">
                "Policies, terms and past campaign cases the AI agent retrieves while drafting messages."
            </p>

            <div class="filter-bar">
                <select class="input" on:change=on_source_change>
                    <option value="all" selected=move || source_filter.get() == "all">
                        "All sources"
                    </option>
                    {SourceType::ALL.into_iter().map(|s| view! {
                        <option value=s.code() selected=move || source_filter.get() == s.code()>
                            {s.label()}
                        </option>
                    }).collect::<Vec<_>>()}
                </select>
                <input
                    type="text"
                    class="input"
                    placeholder="Search by title"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </div>

            {move || error.get().map(|e| view! {
                <p class="status-text status-error">{e}</p>
            })}

            <div class="knowledge-layout">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="page-description">"Loading knowledge..."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Title"</th>
                                <th>"Source"</th>
                                <th>"Registered"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=visible
                                key=|e| e.id.clone()
                                children=move |entry| {
                                    let id = entry.id.clone();
                                    view! {
                                        <tr class="clickable-row" on:click=move |_| open_entry(id.clone())>
                                            <td title=entry.id.clone()>{truncate_middle(&entry.id, ID_DISPLAY_LEN)}</td>
                                            <td>{entry.metadata.title.clone()}</td>
                                            <td>{entry.metadata.source_type.label()}</td>
                                            <td>{format_date(entry.metadata.registration_date.as_deref())}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>

                {move || selected.get().map(|entry| {
                    let for_edit = entry.clone();
                    let for_delete = entry.clone();
                    view! {
                        <aside class="card knowledge-detail">
                            <h3>{entry.metadata.title.clone()}</h3>
                            <div class="preview-row">
                                <span class="preview-label">"Source"</span>
                                <span class="preview-value">{entry.metadata.source_type.label()}</span>
                            </div>
                            <div class="preview-row">
                                <span class="preview-label">"Registered"</span>
                                <span class="preview-value">
                                    {format_date(entry.metadata.registration_date.as_deref())}
                                </span>
                            </div>
                            {entry.metadata.campaign_id.clone().map(|cid| view! {
                                <div class="preview-row">
                                    <span class="preview-label">"Campaign"</span>
                                    <a class="preview-value" href=format!("/campaign/{}", cid)>{cid.clone()}</a>
                                </div>
                            })}
                            <pre class="knowledge-document">{entry.document.clone().unwrap_or_default()}</pre>
                            <div class="form-actions">
                                <button
                                    class="btn btn-secondary"
                                    on:click=move |_| set_editing.set(Some(Editing::Update(for_edit.clone())))
                                >
                                    "Edit"
                                </button>
                                <button
                                    class="btn btn-danger"
                                    disabled=move || busy.get()
                                    on:click=move |_| delete_entry(for_delete.clone())
                                >
                                    "Delete"
                                </button>
                                <button class="btn btn-secondary" on:click=move |_| set_selected.set(None)>
                                    "Close"
                                </button>
                            </div>
                        </aside>
                    }
                })}
            </div>

            {move || editing.get().map(|mode| {
                let (title, initial) = match &mode {
                    Editing::Create => ("Add knowledge", KnowledgeForm::default()),
                    Editing::Update(entry) => ("Edit knowledge", KnowledgeForm::from_entry(entry)),
                };
                view! {
                    <KnowledgeModal
                        initial=initial
                        title=title
                        submitting=busy
                        on_submit=save
                        on_cancel=move |_| set_editing.set(None)
                    />
                }
            })}
        </div>
    }
}
