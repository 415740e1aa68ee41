//! Bug detail page: one bug with its attachments, which can be deleted.

#[cfg(test)]
#[path = "bug_detail_test.rs"]
mod bug_detail_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::bug_table::short_date;
use crate::net::types::{AttachmentKind, Bug};
use crate::routes::AppRoute;
use crate::services::use_services;
use crate::util::dialog;

/// Route parameter as a bug id. Ids are positive.
pub fn parse_bug_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok().filter(|id| *id > 0)
}

pub fn attachment_prompt(kind: AttachmentKind) -> String {
    format!("Are you sure you want to delete this {}?", kind.as_str())
}

pub fn attachment_deleted(kind: AttachmentKind) -> &'static str {
    match kind {
        AttachmentKind::Image => "Image deleted.",
        AttachmentKind::Document => "Document deleted.",
    }
}

#[component]
pub fn BugDetailPage() -> impl IntoView {
    let services = use_services();
    let params = use_params_map();
    let bug_id = Memo::new(move |_| params.with(|p| parse_bug_id(p.get("id").as_deref())));
    let notice = RwSignal::new(None::<String>);

    // `Ok(None)` means the route id was not a bug id.
    let bug = LocalResource::new(move || {
        let id = bug_id.get();
        let bugs = services.with_value(|s| s.bugs.clone());
        async move {
            match id {
                Some(id) => bugs.get_bug(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let on_delete_attachment = Callback::new(move |(filename, kind): (String, AttachmentKind)| {
        let Some(id) = bug_id.get_untracked() else {
            return;
        };
        if !dialog::confirm(&attachment_prompt(kind)) {
            return;
        }
        let bugs = services.with_value(|s| s.bugs.clone());
        leptos::task::spawn_local(async move {
            match bugs.delete_attachment(id, &filename, kind).await {
                Ok(()) => {
                    notice.set(Some(attachment_deleted(kind).to_owned()));
                    bug.refetch();
                }
                Err(err) => notice.set(Some(err.to_string())),
            }
        });
    });

    view! {
        <div class="bug-detail">
            <A href=AppRoute::Home.path()>"Back to bugs"</A>
            <Show when=move || notice.get().is_some()>
                <p class="bug-detail__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading bug details..."</p> }>
                {move || {
                    bug.get()
                        .map(|result| match result {
                            Ok(Some(bug)) => {
                                view! { <BugDetails bug=bug on_delete_attachment=on_delete_attachment/> }.into_any()
                            }
                            Ok(None) => view! { <p class="bug-detail__error">"Bug not found."</p> }.into_any(),
                            Err(err) => view! { <p class="bug-detail__error">{err.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn BugDetails(bug: Bug, on_delete_attachment: Callback<(String, AttachmentKind)>) -> impl IntoView {
    let services = use_services();
    let upload_url = move |name: &str| services.with_value(|s| s.config.upload_url(name));

    let images = bug
        .image_urls
        .iter()
        .map(|name| {
            let src = upload_url(name);
            let name = name.clone();
            view! {
                <div class="bug-detail__image">
                    <img src=src alt=name.clone()/>
                    <button
                        class="bug-detail__remove"
                        title="Delete image"
                        on:click=move |_| on_delete_attachment.run((name.clone(), AttachmentKind::Image))
                    >
                        "×"
                    </button>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let documents = bug
        .document_urls
        .iter()
        .map(|name| {
            let href = upload_url(name);
            let name = name.clone();
            view! {
                <li>
                    <a href=href target="_blank" rel="noopener">{name.clone()}</a>
                    <button
                        class="bug-detail__remove"
                        title="Delete document"
                        on:click=move |_| on_delete_attachment.run((name.clone(), AttachmentKind::Document))
                    >
                        "×"
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let has_images = !images.is_empty();
    let has_documents = !documents.is_empty();
    let or_blank = |value: Option<String>| value.unwrap_or_else(|| "-".to_owned());

    view! {
        <article class="bug-detail__card">
            <h1>{bug.title}</h1>
            <dl class="bug-detail__facts">
                <dt>"ID"</dt>
                <dd>{bug.bug_id.map_or_else(|| "-".to_owned(), |id| format!("#{id}"))}</dd>
                <dt>"Status"</dt>
                <dd>{or_blank(bug.status)}</dd>
                <dt>"Priority"</dt>
                <dd>{or_blank(bug.priority)}</dd>
                <dt>"Reporter"</dt>
                <dd>{or_blank(bug.reporter)}</dd>
                <dt>"Created"</dt>
                <dd>{or_blank(bug.created_date.as_deref().map(|d| short_date(d).to_owned()))}</dd>
            </dl>
            <p class="bug-detail__description">{or_blank(bug.description)}</p>
            <Show when=move || has_images>
                <h2>"Images"</h2>
            </Show>
            <div class="bug-detail__images">{images}</div>
            <Show when=move || has_documents>
                <h2>"Documents"</h2>
            </Show>
            <ul class="bug-detail__documents">{documents}</ul>
        </article>
    }
}
