//! HTML rendering over `minijinja`.
//!
//! Templates live as standalone files under `templates/` and are embedded at
//! compile time. A full page is `base.html` with the page's content fragment
//! included via `content_template`.

use minijinja::Environment;
use serde::Serialize;

use shopfront_catalog::{Fragment, Page, Template, TemplateContext, ViewResponse};

pub const ERROR_TEMPLATE: &str = "error.html";

const TEMPLATES: &[(&str, &str)] = &[
    (Page::LAYOUT_FILE, include_str!("../templates/base.html")),
    ("home_content.html", include_str!("../templates/home_content.html")),
    ("catalog.html", include_str!("../templates/catalog.html")),
    ("search_input.html", include_str!("../templates/search_input.html")),
    ("search_button.html", include_str!("../templates/search_button.html")),
    ("filter_modal.html", include_str!("../templates/filter_modal.html")),
    ("product_detail.html", include_str!("../templates/product_detail.html")),
    (ERROR_TEMPLATE, include_str!("../templates/error.html")),
];

#[derive(Serialize)]
struct PageContext<'a> {
    content_template: &'static str,
    #[serde(flatten)]
    inner: &'a TemplateContext,
}

#[derive(Serialize)]
struct ErrorContext<'a> {
    status: u16,
    title: &'a str,
    message: &'a str,
    fragment: bool,
}

#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Registers every template and checks each fragment resolves.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        for fragment in Fragment::ALL {
            env.get_template(fragment.template_file())?;
        }
        Ok(Self { env })
    }

    pub fn render(&self, view: &ViewResponse) -> Result<String, minijinja::Error> {
        match view.template {
            Template::Fragment(fragment) => self
                .env
                .get_template(fragment.template_file())?
                .render(&view.context),
            Template::Page(page) => self.env.get_template(Page::LAYOUT_FILE)?.render(PageContext {
                content_template: page.content().template_file(),
                inner: &view.context,
            }),
        }
    }

    /// Error page; a bare section for fragment requests, a full document otherwise.
    pub fn render_error(
        &self,
        status: u16,
        title: &str,
        message: &str,
        fragment: bool,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template(ERROR_TEMPLATE)?.render(ErrorContext {
            status,
            title,
            message,
            fragment,
        })
    }
}
