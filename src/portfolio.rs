use crate::controllers::{PageGroupViewModel, PageLinkViewModel, PortfolioViewModel};
use crate::mappers::{profile_mapper, repository_mapper};
use crate::models::profile::Profile;
use crate::models::repository::Repository;
use crate::services::github_service::GitHubService;


/// Repository cards shown per page.
pub const PROJECTS_PER_PAGE: usize = 6;

/// State of one page view: fetched data plus the selected page.
///
/// Created by [`PortfolioPage::mount`] once per visit and dropped once
/// rendered. Nothing outlives the request that mounted it.
#[derive(Debug)]
pub struct PortfolioPage {
    handle: String,
    projects: Vec<Repository>,
    user: Option<Profile>,
    current_page: usize,
}

impl PortfolioPage {
    pub fn new(handle: &str, projects: Vec<Repository>, user: Option<Profile>) -> Self {
        PortfolioPage {
            handle: handle.to_string(),
            projects,
            user,
            current_page: 1,
        }
    }

    /// Fetches the repository list and the profile concurrently. Either one
    /// failing leaves its part of the page empty.
    #[tracing::instrument(skip(service), fields(handle = %service.handle))]
    pub async fn mount(service: &GitHubService) -> Self {
        let (projects, user) = tokio::join!(service.fetch_projects(), service.fetch_user());
        PortfolioPage::new(
            &service.handle,
            projects.into_option().unwrap_or_default(),
            user.into_option(),
        )
    }

    /// Selects a 1-based page. Out-of-range pages are kept as given and show
    /// no cards.
    pub fn paginate(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn projects(&self) -> &[Repository] {
        &self.projects
    }

    pub fn user(&self) -> Option<&Profile> {
        self.user.as_ref()
    }

    pub fn total_pages(&self) -> usize {
        (self.projects.len() + PROJECTS_PER_PAGE - 1) / PROJECTS_PER_PAGE
    }

    pub fn has_pagination(&self) -> bool {
        self.projects.len() > PROJECTS_PER_PAGE
    }

    pub fn current_projects(&self) -> &[Repository] {
        page_slice(&self.projects, self.current_page, PROJECTS_PER_PAGE)
    }

    /// Everything the page shows. Cards for every page are included, grouped
    /// by page, so switching pages in the browser needs no new fetch; only
    /// the current page's group starts visible.
    pub fn view_model(&self) -> PortfolioViewModel {
        let page_groups = (1..=self.total_pages())
            .map(|number| PageGroupViewModel {
                number,
                active: number == self.current_page,
                projects: page_slice(&self.projects, number, PROJECTS_PER_PAGE)
                    .iter()
                    .map(repository_mapper::to_card)
                    .collect(),
            })
            .collect();

        let pages = if self.has_pagination() {
            (1..=self.total_pages())
                .map(|number| PageLinkViewModel {
                    number,
                    active: number == self.current_page,
                })
                .collect()
        } else {
            Vec::new()
        };

        let avatar_url = self.user.as_ref()
            .and_then(|user| user.avatar_url.as_deref())
            .filter(|url| !url.is_empty())
            .map(String::from)
            .unwrap_or_else(|| format!("https://github.com/{}.png", self.handle));
        let avatar_alt = self.user.as_ref()
            .and_then(|user| user.login.as_deref())
            .filter(|login| !login.is_empty())
            .unwrap_or(&self.handle)
            .to_string();

        PortfolioViewModel {
            avatar_url,
            avatar_alt,
            typing_source: String::from("/typing"),
            about: self.user.as_ref().map(profile_mapper::to_about),
            page_groups,
            pages,
        }
    }
}

/// Items `[(page-1)*per_page, page*per_page)`, cut short at the end of `items`.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let Some(first) = page.checked_sub(1).and_then(|p| p.checked_mul(per_page)) else {
        return &[];
    };
    if first >= items.len() {
        return &[];
    }
    let last = first.saturating_add(per_page).min(items.len());
    &items[first..last]
}
