pub mod index;
pub mod typing;

use axum::http::StatusCode;
use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;



#[derive(Debug, Serialize)]
pub struct TemplateViewModel {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct PortfolioViewModel {
    pub avatar_url: String,
    pub avatar_alt: String,
    pub typing_source: String,
    pub about: Option<AboutViewModel>,
    pub page_groups: Vec<PageGroupViewModel>,
    pub pages: Vec<PageLinkViewModel>,
}

/// Cards of one pagination page.
#[derive(Debug, Serialize)]
pub struct PageGroupViewModel {
    pub number: usize,
    pub active: bool,
    pub projects: Vec<ProjectCardViewModel>,
}

#[derive(Debug, Serialize)]
pub struct AboutViewModel {
    pub name: String,
    pub bio: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectCardViewModel {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub source_url: Option<String>,
    pub live_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PageLinkViewModel {
    pub number: usize,
    pub active: bool,
}

pub fn get_error_page(registry: &Handlebars<'static>, status: StatusCode) -> (StatusCode, Html<String>) {
    let name = format!("errors/{}", status.as_u16());
    let body = registry
        .render(&name, &status.canonical_reason())
        .and_then(|body| registry.render("template", &TemplateViewModel {
            title: status.to_string(),
            body,
        }))
        .unwrap_or_else(|e| {
            log::error!("Failed to render {}: {}", name, e);
            status.to_string()
        });
    (status, Html(body))
}
