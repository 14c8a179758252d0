use std::sync::Arc;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use handlebars::{Handlebars, RenderError};
use serde::Deserialize;

use crate::AppState;
use crate::portfolio::PortfolioPage;


#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<usize>,
}

#[axum_macros::debug_handler]
pub async fn get_index(Query(query): Query<PageQuery>, State(state): State<Arc<AppState>>) -> Response {
    let mut page = PortfolioPage::mount(&state.github_service).await;
    page.paginate(query.page.unwrap_or(1));

    match render_page(&state.registry, &page) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            log::error!("Failed to render portfolio page: {}", e);
            super::get_error_page(&state.registry, StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
    }
}

pub fn render_page(registry: &Handlebars<'static>, page: &PortfolioPage) -> Result<String, RenderError> {
    let data = super::TemplateViewModel {
        title: "Portfólio".into(),
        body: registry.render("index", &page.view_model())?,
    };
    registry.render("template", &data)
}
