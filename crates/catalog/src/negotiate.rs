//! Content negotiation: full page vs. fragment, and which fragment.

use crate::detail::DetailContext;
use crate::home::HomeContext;
use crate::listing::{ListingContext, SearchIntent};
use crate::view::{EmptyContext, Fragment, Page, TemplateContext, ViewResponse};

/// Outcome of the listing decision table (first match wins).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ListingView {
    FullPage,
    SearchInput,
    /// Rendered with an empty context; the computed listing is discarded.
    SearchButton,
    FilterModal,
    CatalogListing,
}

impl ListingView {
    pub fn negotiate(fragment: bool, intent: SearchIntent, show_filter: bool) -> Self {
        if !fragment {
            return ListingView::FullPage;
        }
        match intent {
            SearchIntent::Show => ListingView::SearchInput,
            SearchIntent::Reset => ListingView::SearchButton,
            SearchIntent::None if show_filter => ListingView::FilterModal,
            SearchIntent::None => ListingView::CatalogListing,
        }
    }

    pub fn respond(self, context: ListingContext) -> ViewResponse {
        let full = TemplateContext::Listing(context);
        match self {
            ListingView::FullPage => ViewResponse::page(Page::Catalog, full),
            ListingView::SearchInput => ViewResponse::fragment(Fragment::SearchInput, full),
            ListingView::SearchButton => ViewResponse::fragment(
                Fragment::SearchButton,
                TemplateContext::Empty(EmptyContext::default()),
            ),
            ListingView::FilterModal => ViewResponse::fragment(Fragment::FilterModal, full),
            ListingView::CatalogListing => ViewResponse::fragment(Fragment::CatalogListing, full),
        }
    }
}

pub fn listing(fragment: bool, context: ListingContext, show_filter: bool) -> ViewResponse {
    ListingView::negotiate(fragment, context.search_intent, show_filter).respond(context)
}

pub fn detail(fragment: bool, context: DetailContext) -> ViewResponse {
    let context = TemplateContext::Detail(context);
    if fragment {
        ViewResponse::fragment(Fragment::ProductDetail, context)
    } else {
        ViewResponse::page(Page::ProductDetail, context)
    }
}

pub fn home(fragment: bool, context: HomeContext) -> ViewResponse {
    let context = TemplateContext::Home(context);
    if fragment {
        ViewResponse::fragment(Fragment::HomeContent, context)
    } else {
        ViewResponse::page(Page::Home, context)
    }
}
