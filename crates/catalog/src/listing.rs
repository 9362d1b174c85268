//! Catalog listing: category scope, search, registered filters.

use serde::{Serialize, Serializer};

use shopfront_core::{CatalogError, CatalogResult};

use crate::filters::{FilterParams, ProductFilter};
use crate::model::{Category, Product, Size};
use crate::negotiate;
use crate::params::QueryParams;
use crate::query::{ProductOrder, SortDirection};
use crate::store::CatalogStore;
use crate::view::ViewResponse;

/// Search-box UI intent carried by `show_search` / `reset_search`.
///
/// A single value, so the two flags can never both be set.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SearchIntent {
    #[default]
    None,
    Show,
    Reset,
}

impl SearchIntent {
    /// `show_search=true` wins; `reset_search` is only consulted otherwise.
    pub fn from_params(params: &QueryParams) -> Self {
        if params.flag("show_search") {
            SearchIntent::Show
        } else if params.flag("reset_search") {
            SearchIntent::Reset
        } else {
            SearchIntent::None
        }
    }

    pub fn show_search(self) -> bool {
        self == SearchIntent::Show
    }

    pub fn reset_search(self) -> bool {
        self == SearchIntent::Reset
    }
}

impl Serialize for SearchIntent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Flags {
            show_search: bool,
            reset_search: bool,
        }

        Flags {
            show_search: self.show_search(),
            reset_search: self.reset_search(),
        }
        .serialize(serializer)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListingContext {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    /// The slug as requested, not re-read from the resolved category.
    pub current_category: Option<String>,
    pub filter_params: FilterParams,
    pub sizes: Vec<Size>,
    pub search_query: String,
    #[serde(flatten)]
    pub search_intent: SearchIntent,
}

#[derive(Debug, Clone, Default)]
pub struct ListingRequest {
    pub category_slug: Option<String>,
    pub params: QueryParams,
    pub fragment: bool,
}

pub fn build_listing_context<S>(
    store: &S,
    category_slug: Option<&str>,
    params: &QueryParams,
) -> CatalogResult<ListingContext>
where
    S: CatalogStore + ?Sized,
{
    let category_slug = category_slug.filter(|s| !s.is_empty());

    let categories = store.list_categories();
    let mut products = store
        .query_products()
        .order_by(ProductOrder::CreatedAt, SortDirection::Descending);

    if let Some(slug) = category_slug {
        let category = store.get_category_by_slug(slug).ok_or_else(|| {
            tracing::debug!(slug, "unknown category slug");
            CatalogError::not_found(format!("category {slug:?}"))
        })?;
        products = products.filter(|p| p.category == category.id);
    }

    let search_query = params.get("q").unwrap_or_default();
    if !search_query.is_empty() {
        let needle = search_query.to_lowercase();
        products = products.filter(|p| p.matches_search(&needle));
    }

    let mut filter_params = FilterParams::default();
    for filter in ProductFilter::ALL {
        if let Some(value) = params.get(filter.key()) {
            products = filter.apply(products, value)?;
            filter_params.set(filter, value);
            tracing::debug!(
                filter = filter.key(),
                value,
                remaining = products.len(),
                "applied filter"
            );
        }
    }
    filter_params.set_query(search_query);

    Ok(ListingContext {
        categories,
        products: products.into_vec(),
        current_category: category_slug.map(str::to_owned),
        filter_params,
        sizes: store.list_sizes(),
        search_query: search_query.to_owned(),
        search_intent: SearchIntent::from_params(params),
    })
}

pub fn handle_listing<S>(store: &S, request: &ListingRequest) -> CatalogResult<ViewResponse>
where
    S: CatalogStore + ?Sized,
{
    let context = build_listing_context(store, request.category_slug.as_deref(), &request.params)?;
    Ok(negotiate::listing(
        request.fragment,
        context,
        request.params.flag("show_filter"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{VecStore, shoe_store};
    use crate::view::{Fragment, Page, Template, TemplateContext};
    use proptest::prelude::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs.iter().copied().collect()
    }

    fn slugs(ctx: &ListingContext) -> Vec<&str> {
        ctx.products.iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn lists_all_products_newest_first() {
        let store = shoe_store();
        let ctx = build_listing_context(&store, None, &QueryParams::new()).unwrap();

        assert_eq!(ctx.products.len(), store.products.len());
        assert!(ctx.products.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(ctx.categories.len(), 3);
        assert_eq!(ctx.sizes.len(), store.sizes.len());
        assert_eq!(ctx.current_category, None);
    }

    #[test]
    fn category_scope_keeps_only_that_category() {
        let store = shoe_store();
        let ctx = build_listing_context(&store, Some("shoes"), &QueryParams::new()).unwrap();

        let shoes = store.category("shoes").id;
        assert_eq!(ctx.products.len(), 6);
        assert!(ctx.products.iter().all(|p| p.category == shoes));
        assert_eq!(ctx.current_category.as_deref(), Some("shoes"));
    }

    #[test]
    fn unknown_category_is_not_found_regardless_of_params() {
        let store = shoe_store();
        let err = build_listing_context(
            &store,
            Some("unknown-slug"),
            &params(&[("min_price", "not-a-number"), ("show_search", "true")]),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn empty_category_slug_means_no_category() {
        let store = shoe_store();
        let ctx = build_listing_context(&store, Some(""), &QueryParams::new()).unwrap();
        assert_eq!(ctx.current_category, None);
        assert_eq!(ctx.products.len(), store.products.len());
    }

    #[test]
    fn search_red_with_black_color_in_shoes() {
        let store = shoe_store();
        let ctx = build_listing_context(
            &store,
            Some("shoes"),
            &params(&[("q", "red"), ("color", "black")]),
        )
        .unwrap();

        // "Red-soled" is in the description of one black shoe; the name of another.
        assert_eq!(slugs(&ctx), vec!["black-redline-runner", "black-derby"]);
        assert_eq!(ctx.search_query, "red");
        assert_eq!(ctx.filter_params.query(), "red");
        assert_eq!(ctx.filter_params.get(ProductFilter::Color), "black");
    }

    #[test]
    fn filter_params_record_supplied_values_and_blank_the_rest() {
        let store = shoe_store();
        let supplied = params(&[("size", "42"), ("max_price", "100")]);
        let ctx = build_listing_context(&store, None, &supplied).unwrap();

        let pairs: Vec<_> = ctx.filter_params.iter().collect();
        assert_eq!(
            pairs,
            vec![("color", ""), ("min_price", ""), ("max_price", "100"), ("size", "42"), ("q", "")]
        );
    }

    #[test]
    fn invalid_price_is_a_validation_error() {
        let store = shoe_store();
        let err = build_listing_context(&store, Some("shoes"), &params(&[("max_price", "cheap")]))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn show_search_wins_over_reset_search() {
        let both = params(&[("show_search", "true"), ("reset_search", "true")]);
        assert_eq!(SearchIntent::from_params(&both), SearchIntent::Show);

        let reset = params(&[("reset_search", "true")]);
        assert_eq!(SearchIntent::from_params(&reset), SearchIntent::Reset);
    }

    #[test]
    fn context_serializes_flat_search_flags() {
        let store = shoe_store();
        let supplied = params(&[("reset_search", "true")]);
        let ctx = build_listing_context(&store, None, &supplied).unwrap();
        let json = serde_json::to_value(&ctx).unwrap();

        assert_eq!(json["show_search"], serde_json::json!(false));
        assert_eq!(json["reset_search"], serde_json::json!(true));
        assert_eq!(json["current_category"], serde_json::Value::Null);
        assert_eq!(json["filter_params"].as_object().unwrap().len(), 5);
    }

    #[test]
    fn fragment_reset_search_renders_search_button_with_empty_context() {
        let store = shoe_store();
        let request = ListingRequest {
            category_slug: None,
            params: params(&[("reset_search", "true")]),
            fragment: true,
        };
        let response = handle_listing(&store, &request).unwrap();

        assert_eq!(response.template, Template::Fragment(Fragment::SearchButton));
        assert!(matches!(response.context, TemplateContext::Empty(_)));
    }

    #[test]
    fn fragment_show_filter_renders_filter_modal() {
        let store = shoe_store();
        let request = ListingRequest {
            category_slug: Some("shoes".to_string()),
            params: params(&[("show_filter", "true")]),
            fragment: true,
        };
        let response = handle_listing(&store, &request).unwrap();
        assert_eq!(response.template, Template::Fragment(Fragment::FilterModal));
        assert!(matches!(response.context, TemplateContext::Listing(_)));
    }

    #[test]
    fn non_fragment_always_renders_full_page() {
        let store = shoe_store();
        let request = ListingRequest {
            category_slug: None,
            params: params(&[("show_search", "true"), ("show_filter", "true")]),
            fragment: false,
        };
        let response = handle_listing(&store, &request).unwrap();
        assert_eq!(response.template, Template::Page(Page::Catalog));
    }

    fn one_of(values: Vec<&'static str>) -> impl Strategy<Value = Option<&'static str>> {
        prop::option::of(prop::sample::select(values))
    }

    fn color_value() -> impl Strategy<Value = Option<&'static str>> {
        one_of(vec!["black", "White", "RED", "blue", "green"])
    }

    fn price_value() -> impl Strategy<Value = Option<&'static str>> {
        one_of(vec!["0", "25", "59.90", "75", "100", "120.00", "250"])
    }

    fn size_value() -> impl Strategy<Value = Option<&'static str>> {
        one_of(vec!["41", "42", "43", "M", "XL", "xl"])
    }

    fn slugs_of(store: &VecStore, category: Option<&str>, p: &QueryParams) -> Vec<String> {
        build_listing_context(store, category, p)
            .map(|ctx| ctx.products.into_iter().map(|p| p.slug).collect())
            .unwrap_or_default()
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: combined filters equal the intersection of each filter alone.
        #[test]
        fn combined_filters_are_an_intersection(
            color in color_value(),
            min_price in price_value(),
            max_price in price_value(),
            size in size_value(),
            q in prop::option::of(prop::sample::select(vec!["red", "RUN", "boot", "zz"])),
        ) {
            let store = shoe_store();
            let supplied: Vec<(&str, &str)> = [
                ("color", color),
                ("min_price", min_price),
                ("max_price", max_price),
                ("size", size),
                ("q", q),
            ]
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect();

            let combined = params(&supplied);
            let all = slugs_of(&store, None, &QueryParams::new());
            let combined_result = build_listing_context(&store, None, &combined);

            let per_filter: Vec<Vec<String>> = supplied
                .iter()
                .map(|pair| slugs_of(&store, None, &params(&[*pair])))
                .collect();

            let combined_slugs: Vec<String> = combined_result
                .unwrap()
                .products
                .into_iter()
                .map(|p| p.slug)
                .collect();

            let expected: Vec<String> = all
                .into_iter()
                .filter(|slug| per_filter.iter().all(|set| set.contains(slug)))
                .collect();

            prop_assert_eq!(combined_slugs, expected);
        }

        /// Property: the two search flags are never both set.
        #[test]
        fn search_flags_are_exclusive(
            show in one_of(vec!["true", "false", "TRUE", ""]),
            reset in one_of(vec!["true", "false", "TRUE", ""]),
        ) {
            let mut p = QueryParams::new();
            if let Some(v) = show { p.insert("show_search", v); }
            if let Some(v) = reset { p.insert("reset_search", v); }

            let intent = SearchIntent::from_params(&p);
            prop_assert!(!(intent.show_search() && intent.reset_search()));
        }

        /// Property: filter_params always carries all five keys.
        #[test]
        fn filter_params_always_complete(
            color in color_value(),
            size in size_value(),
        ) {
            let store = shoe_store();
            let mut p = QueryParams::new();
            if let Some(v) = color { p.insert("color", v); }
            if let Some(v) = size { p.insert("size", v); }

            let ctx = build_listing_context(&store, None, &p).unwrap();
            let keys: Vec<_> = ctx.filter_params.iter().map(|(k, _)| k).collect();
            prop_assert_eq!(keys, vec!["color", "min_price", "max_price", "size", "q"]);
        }
    }
}
