//! Item pages - list, add, edit, delete
//!
//! GET renders a page; POST mutates and answers with a 302 back to the
//! list, carrying a one-shot notice token (redirect-after-POST).

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::db::ItemRepo;
use crate::http::error::AppError;
use crate::http::flash::FlashStore;
use crate::http::server::AppState;
use crate::http::templates::{render, AddTemplate, DeleteTemplate, EditTemplate, IndexTemplate};
use crate::models::Pagination;

/// Query parameters for the list page
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// 1-indexed page number; anything unparseable falls back to page 1
    pub page: Option<String>,
    /// Flash notice token from a prior redirect
    pub notice: Option<String>,
}

impl ListParams {
    fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or(1)
    }

    fn notice_token(&self) -> Option<Uuid> {
        self.notice.as_deref().and_then(|t| Uuid::parse_str(t).ok())
    }
}

/// Form body for create and edit
#[derive(Debug, Deserialize)]
pub struct ItemForm {
    pub name: String,
    pub description: Option<String>,
}

/// GET / - paginated item listing
async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, AppError> {
    let page = Pagination::new(params.page());
    let result = ItemRepo::new(state.pool()).list(page).await?;

    let notice = params
        .notice_token()
        .and_then(|token| state.flash().take(&token));

    render(&IndexTemplate {
        page: result.page,
        total_pages: result.total_pages(),
        has_prev: result.has_prev(),
        has_next: result.has_next(),
        items: result.items,
        notice,
    })
}

/// GET /add - empty create form
async fn show_add_form() -> Result<Html<String>, AppError> {
    render(&AddTemplate)
}

/// POST /add - create an item, redirect to the list
async fn add_item(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> Result<Response, AppError> {
    let item = ItemRepo::new(state.pool())
        .create(&form.name, form.description.as_deref())
        .await?;

    tracing::debug!(id = item.id, "item created");
    Ok(redirect_with_notice(
        state.flash(),
        "Item added successfully!",
    ))
}

/// GET /edit/{id} - pre-filled edit form, 404 when the id is unknown
async fn show_edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let item = ItemRepo::new(state.pool()).get(id).await?;
    render(&EditTemplate { item })
}

/// POST /edit/{id} - overwrite fields in place, redirect to the list
async fn edit_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ItemForm>,
) -> Result<Response, AppError> {
    ItemRepo::new(state.pool())
        .update(id, &form.name, form.description.as_deref())
        .await?;

    tracing::debug!(id, "item updated");
    Ok(redirect_with_notice(
        state.flash(),
        "Item updated successfully!",
    ))
}

/// GET /delete/{id} - confirmation page, 404 when the id is unknown
async fn show_delete_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let item = ItemRepo::new(state.pool()).get(id).await?;
    render(&DeleteTemplate { item })
}

/// POST /delete/{id} - remove the item, redirect to the list
async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    ItemRepo::new(state.pool()).delete(id).await?;

    tracing::debug!(id, "item deleted");
    Ok(redirect_with_notice(
        state.flash(),
        "Item deleted successfully!",
    ))
}

/// 302 back to the list page with a freshly queued notice token.
///
/// Reloading the target page does not resubmit the mutation, and the
/// notice renders at most once.
fn redirect_with_notice(flash: &FlashStore, message: &str) -> Response {
    let token = flash.push(message);
    (
        StatusCode::FOUND,
        [(header::LOCATION, format!("/?notice={token}"))],
    )
        .into_response()
}

/// Item routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items))
        .route("/add", get(show_add_form).post(add_item))
        .route("/edit/{id}", get(show_edit_form).post(edit_item))
        .route("/delete/{id}", get(show_delete_form).post(delete_item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_param_falls_back_to_one() {
        let params = ListParams {
            page: Some("not-a-number".into()),
            notice: None,
        };
        assert_eq!(params.page(), 1);

        let params = ListParams {
            page: Some("3".into()),
            notice: None,
        };
        assert_eq!(params.page(), 3);

        assert_eq!(ListParams::default().page(), 1);
    }

    #[test]
    fn malformed_notice_token_is_ignored() {
        let params = ListParams {
            page: None,
            notice: Some("definitely-not-a-uuid".into()),
        };
        assert_eq!(params.notice_token(), None);
    }

    #[test]
    fn redirect_carries_notice_token() {
        let flash = FlashStore::new();
        let response = redirect_with_notice(&flash, "Item added successfully!");

        assert_eq!(response.status(), StatusCode::FOUND);
        let location = response
            .headers()
            .get(header::LOCATION)
            .expect("location header")
            .to_str()
            .expect("ascii location");
        let token = location
            .strip_prefix("/?notice=")
            .expect("notice query param");
        let token = Uuid::parse_str(token).expect("uuid token");
        assert_eq!(
            flash.take(&token).as_deref(),
            Some("Item added successfully!")
        );
    }
}
