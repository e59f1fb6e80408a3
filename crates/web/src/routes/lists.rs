//! List page and form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use todolist_core::{Item, ListName, ListTarget, ROOT_LIST_TITLE, TaskList};

use crate::error::Result;
use crate::filters;
use crate::services::todo::{ListView, RootView};
use crate::state::AppState;

// =============================================================================
// Forms
// =============================================================================

/// Add-item form data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemForm {
    pub list_item: String,
    /// Title of the list the form was rendered for.
    pub list: String,
}

/// Delete-item form data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteItemForm {
    /// ID of the checked item.
    pub checkbox: String,
    pub list_name: String,
}

/// Open-or-create list form data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenListForm {
    pub new_list_title: String,
}

// =============================================================================
// Templates
// =============================================================================

/// A list page.
#[derive(Template, WebTemplate)]
#[template(path = "list.html")]
pub struct ListTemplate {
    pub list_title: String,
    pub items: Vec<Item>,
    /// Where the open-list form posts; only named lists show the form.
    pub open_list_action: Option<String>,
}

impl ListTemplate {
    fn root(items: Vec<Item>) -> Self {
        Self {
            list_title: ROOT_LIST_TITLE.to_string(),
            items,
            open_list_action: None,
        }
    }

    fn named(list: TaskList) -> Self {
        Self {
            open_list_action: Some(list_path(&list.name)),
            list_title: list.name.into_inner(),
            items: list.items,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the root list, seeding it on first visit.
#[instrument(skip(state))]
pub async fn root(State(state): State<AppState>) -> Result<Response> {
    match state.todos().open_root().await? {
        RootView::Seeded => Ok(Redirect::to("/").into_response()),
        RootView::Items(items) => Ok(ListTemplate::root(items).into_response()),
    }
}

/// Display a named list, creating it with the default items if needed.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(list_name): Path<String>,
) -> Result<Response> {
    let view = state.todos().open_list(&list_name).await?;
    Ok(render(view))
}

/// Open the list named in the form, creating it empty if needed.
///
/// The list in the path is the page the form was submitted from; only the
/// submitted title matters.
#[instrument(skip(state, _current))]
pub async fn open(
    State(state): State<AppState>,
    Path(_current): Path<String>,
    Form(form): Form<OpenListForm>,
) -> Result<Response> {
    let view = state
        .todos()
        .open_or_create_empty(&form.new_list_title)
        .await?;
    Ok(render(view))
}

/// Add an item to the root list or a named list.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddItemForm>) -> Result<Redirect> {
    let target = state.todos().add_item(&form.list_item, &form.list).await?;
    Ok(Redirect::to(&target_path(&target)))
}

/// Remove the checked item from its list.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Form(form): Form<DeleteItemForm>,
) -> Result<Redirect> {
    let target = state
        .todos()
        .delete_item(&form.checkbox, &form.list_name)
        .await?;
    Ok(Redirect::to(&target_path(&target)))
}

// =============================================================================
// Helpers
// =============================================================================

fn render(view: ListView) -> Response {
    match view {
        ListView::Created(name) => Redirect::to(&list_path(&name)).into_response(),
        ListView::Found(list) => ListTemplate::named(list).into_response(),
    }
}

/// The percent-encoded path of a named list.
fn list_path(name: &ListName) -> String {
    format!("/{}", urlencoding::encode(name.as_str()))
}

fn target_path(target: &ListTarget) -> String {
    match target {
        ListTarget::Root => "/".to_string(),
        ListTarget::Named(name) => list_path(name),
    }
}
