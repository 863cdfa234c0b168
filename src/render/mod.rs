//! Include-tag rendering.
//!
//! The dispatcher only knows the [`HtmlRenderer`] seam; [`HtmlBuilder`] is the
//! built-in implementation producing `<script>` and stylesheet `<link>` tags.

use crate::AssetError;
use crate::asset::{AssetKind, Attributes};
use crate::utils::html::{is_void_element, write_attr};

/// Turns a resolved asset URL into markup.
pub trait HtmlRenderer {
    /// Render one include tag. Unsupported `kind`s are an error of the
    /// renderer's own choosing.
    fn render(&self, kind: &str, source: &str, attributes: &Attributes)
    -> Result<String, AssetError>;
}

impl<T: HtmlRenderer + ?Sized> HtmlRenderer for &T {
    fn render(
        &self,
        kind: &str,
        source: &str,
        attributes: &Attributes,
    ) -> Result<String, AssetError> {
        (**self).render(kind, source, attributes)
    }
}

/// Built-in renderer for `script`, `style` and `link`.
///
/// Each tag ends with a newline. Caller attributes come first in their own
/// order; the URL attribute (`src` / `href`) is always written last.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBuilder;

impl HtmlBuilder {
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// `<script ... src="URL"></script>`
    pub fn script(&self, src: &str, attributes: &Attributes) -> String {
        let mut attrs = attributes.clone();
        attrs.remove("src");
        attrs.set("src", src);
        element("script", &attrs)
    }

    /// `<link media="all" type="text/css" rel="stylesheet" ... href="URL">`
    ///
    /// Caller attributes override the defaults in place.
    pub fn style(&self, href: &str, attributes: &Attributes) -> String {
        let mut attrs = Attributes::from([
            ("media", "all"),
            ("type", "text/css"),
            ("rel", "stylesheet"),
        ]);
        for (k, v) in attributes.iter().filter(|(k, _)| *k != "href") {
            attrs.set(k, v);
        }
        attrs.set("href", href);
        element("link", &attrs)
    }
}

impl HtmlRenderer for HtmlBuilder {
    fn render(
        &self,
        kind: &str,
        source: &str,
        attributes: &Attributes,
    ) -> Result<String, AssetError> {
        Ok(match kind.parse::<AssetKind>()? {
            AssetKind::Script => self.script(source, attributes),
            AssetKind::Style => self.style(source, attributes),
        })
    }
}

fn element(tag: &str, attrs: &Attributes) -> String {
    let mut html = String::with_capacity(32 + tag.len() * 2);
    html.push('<');
    html.push_str(tag);
    for (name, value) in attrs.iter() {
        write_attr(&mut html, name, value);
    }
    html.push('>');
    if !is_void_element(tag) {
        html.push_str("</");
        html.push_str(tag);
        html.push('>');
    }
    html.push('\n');
    html
}
