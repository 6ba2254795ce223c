//! Page templates
//!
//! One askama template per page. Handlers render through [`render`], which
//! maps template failures into the handler error type.

use askama::Template;
use axum::response::Html;

use crate::models::Item;

use super::error::AppError;

/// Item listing with pagination controls and an optional notice banner.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub items: Vec<Item>,
    pub page: u32,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
    pub notice: Option<String>,
}

/// Empty create form.
#[derive(Template)]
#[template(path = "add.html")]
pub struct AddTemplate;

/// Edit form pre-filled with the current field values.
#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub item: Item,
}

/// Delete confirmation page.
#[derive(Template)]
#[template(path = "delete.html")]
pub struct DeleteTemplate {
    pub item: Item,
}

/// Render a template to an HTML response.
pub fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_renders_items_and_notice() {
        let template = IndexTemplate {
            items: vec![Item {
                id: 1,
                name: "Widget".into(),
                description: Some("A widget".into()),
            }],
            page: 1,
            total_pages: 1,
            has_prev: false,
            has_next: false,
            notice: Some("Item added successfully!".into()),
        };

        let html = template.render().expect("render failed");
        assert!(html.contains("Items List"));
        assert!(html.contains("Widget"));
        assert!(html.contains("A widget"));
        assert!(html.contains("Item added successfully!"));
        assert!(html.contains("Page 1 of 1"));
    }

    #[test]
    fn index_escapes_markup_in_fields() {
        let template = IndexTemplate {
            items: vec![Item {
                id: 1,
                name: "<script>alert(1)</script>".into(),
                description: None,
            }],
            page: 1,
            total_pages: 1,
            has_prev: false,
            has_next: false,
            notice: None,
        };

        let html = template.render().expect("render failed");
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn index_pagination_links() {
        let template = IndexTemplate {
            items: vec![],
            page: 2,
            total_pages: 3,
            has_prev: true,
            has_next: true,
            notice: None,
        };

        let html = template.render().expect("render failed");
        assert!(html.contains("/?page=1"));
        assert!(html.contains("/?page=3"));
        assert!(html.contains("Page 2 of 3"));
    }

    #[test]
    fn add_renders_form() {
        let html = AddTemplate.render().expect("render failed");
        assert!(html.contains("Add New Item"));
        assert!(html.contains("name=\"name\""));
        assert!(html.contains("name=\"description\""));
    }

    #[test]
    fn edit_prefills_fields() {
        let template = EditTemplate {
            item: Item {
                id: 7,
                name: "Current".into(),
                description: Some("Desc".into()),
            },
        };

        let html = template.render().expect("render failed");
        assert!(html.contains("Edit Item"));
        assert!(html.contains("Current"));
        assert!(html.contains("Desc"));
        assert!(html.contains("/edit/7"));
    }

    #[test]
    fn delete_confirms_by_name() {
        let template = DeleteTemplate {
            item: Item {
                id: 3,
                name: "Doomed".into(),
                description: None,
            },
        };

        let html = template.render().expect("render failed");
        assert!(html.contains("Delete Item"));
        assert!(html.contains("Doomed"));
        assert!(html.contains("/delete/3"));
    }
}
