use crate::controllers::ProjectCardViewModel;
use crate::models::repository::Repository;
use crate::time;


pub const UNNAMED_PROJECT: &str = "Unnamed project";
pub const NO_DESCRIPTION: &str = "No description available";

pub fn to_card(model: &Repository) -> ProjectCardViewModel {
    ProjectCardViewModel {
        id: model.id,
        name: present(&model.name).unwrap_or(UNNAMED_PROJECT).to_string(),
        description: present(&model.description).unwrap_or(NO_DESCRIPTION).to_string(),
        created_at: time::to_long_date(model.created_at.as_deref().unwrap_or_default()),
        source_url: present(&model.html_url).map(String::from),
        live_url: present(&model.homepage).map(String::from),
    }
}

// Empty strings are as good as missing.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
