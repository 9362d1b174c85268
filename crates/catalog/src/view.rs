//! Response descriptors: which template to render and with what context.

use serde::Serialize;

use crate::detail::DetailContext;
use crate::home::HomeContext;
use crate::listing::ListingContext;

/// Partial-page templates, swapped into the DOM by the front end.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Fragment {
    HomeContent,
    SearchInput,
    SearchButton,
    FilterModal,
    CatalogListing,
    ProductDetail,
}

impl Fragment {
    pub const ALL: [Fragment; 6] = [
        Fragment::HomeContent,
        Fragment::SearchInput,
        Fragment::SearchButton,
        Fragment::FilterModal,
        Fragment::CatalogListing,
        Fragment::ProductDetail,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Fragment::HomeContent => "home-content",
            Fragment::SearchInput => "search-input",
            Fragment::SearchButton => "search-button",
            Fragment::FilterModal => "filter-modal",
            Fragment::CatalogListing => "catalog-listing",
            Fragment::ProductDetail => "product-detail",
        }
    }

    pub const fn template_file(self) -> &'static str {
        match self {
            Fragment::HomeContent => "home_content.html",
            Fragment::SearchInput => "search_input.html",
            Fragment::SearchButton => "search_button.html",
            Fragment::FilterModal => "filter_modal.html",
            Fragment::CatalogListing => "catalog.html",
            Fragment::ProductDetail => "product_detail.html",
        }
    }
}

/// Full pages: the base layout wrapped around one content fragment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Catalog,
    ProductDetail,
}

impl Page {
    pub const LAYOUT_FILE: &'static str = "base.html";

    pub const fn content(self) -> Fragment {
        match self {
            Page::Home => Fragment::HomeContent,
            Page::Catalog => Fragment::CatalogListing,
            Page::ProductDetail => Fragment::ProductDetail,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Template {
    Page(Page),
    Fragment(Fragment),
}

/// Context with no values at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyContext {}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TemplateContext {
    Empty(EmptyContext),
    Home(HomeContext),
    Listing(ListingContext),
    Detail(DetailContext),
}

/// What a handler hands to the renderer.
#[derive(Debug, Clone)]
pub struct ViewResponse {
    pub template: Template,
    pub context: TemplateContext,
}

impl ViewResponse {
    pub fn page(page: Page, context: TemplateContext) -> Self {
        Self {
            template: Template::Page(page),
            context,
        }
    }

    pub fn fragment(fragment: Fragment, context: TemplateContext) -> Self {
        Self {
            template: Template::Fragment(fragment),
            context,
        }
    }
}
