//! Home page: category navigation only.

use serde::Serialize;

use crate::model::Category;
use crate::negotiate;
use crate::store::CatalogStore;
use crate::view::ViewResponse;

#[derive(Debug, Clone, Default, Serialize)]
pub struct HomeContext {
    pub categories: Vec<Category>,
    /// Always `None`: no category is selected on the home page.
    pub current_category: Option<String>,
}

pub fn build_home_context<S>(store: &S) -> HomeContext
where
    S: CatalogStore + ?Sized,
{
    HomeContext {
        categories: store.list_categories(),
        current_category: None,
    }
}

pub fn handle_home<S>(store: &S, fragment: bool) -> ViewResponse
where
    S: CatalogStore + ?Sized,
{
    negotiate::home(fragment, build_home_context(store))
}
