//! Headless page host: parse an HTML document, look elements up by id, and
//! dispatch click events to registered handlers.
//!
//! The page owns its element table; handlers never hold element references
//! between dispatches. On each click the matched element is lent to the
//! handler as a `&mut dyn StyleTarget` for the duration of that call.

use crate::{ClickEvent, Error, PageSnapshot, Result, StyleTarget};
use scraper::{ElementRef, Html, Selector};
use std::path::Path;

type ClickHandler = Box<dyn FnMut(&ClickEvent, &mut dyn StyleTarget)>;

struct HandlerEntry {
    target_id: String,
    callback: ClickHandler,
}

/// An element extracted from the parsed document
///
/// Carries the subset of the source node the harness works with: identity,
/// text, raw attributes, and the two tracked style properties. Initial
/// property values are seeded from an inline `style` attribute when present.
#[derive(Debug, Clone)]
pub struct Element {
    /// Tag name, lowercased by the parser
    pub tag: String,
    /// Value of the `id` attribute, if any
    pub id: Option<String>,
    /// Concatenated text content
    pub text: String,
    /// All attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Tracked corner-rounding value (`border-radius`)
    pub border_radius: Option<String>,
    /// Tracked background-fill value (`background-color`)
    pub background_color: Option<String>,
}

impl Element {
    fn from_node(node: ElementRef<'_>) -> Self {
        let style = node.value().attr("style");
        Self {
            tag: node.value().name().to_string(),
            id: node.value().attr("id").map(|s| s.to_string()),
            text: node.text().collect::<String>(),
            attributes: node
                .value()
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            border_radius: style.and_then(|s| inline_style_value(s, "border-radius")),
            background_color: style.and_then(|s| inline_style_value(s, "background-color")),
        }
    }

    /// Look up a raw attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl StyleTarget for Element {
    fn border_radius(&self) -> Option<&str> {
        self.border_radius.as_deref()
    }

    fn set_border_radius(&mut self, value: &str) {
        self.border_radius = Some(value.to_string());
    }

    fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    fn set_background_color(&mut self, value: &str) {
        self.background_color = Some(value.to_string());
    }
}

// Extract the value of one declaration from an inline style attribute.
fn inline_style_value(style_attr: &str, property: &str) -> Option<String> {
    style_attr.split(';').find_map(|decl| {
        let (name, value) = decl.split_once(':')?;
        if name.trim().eq_ignore_ascii_case(property) {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}

/// A loaded document plus its click-handler registry
///
/// Dispatch is synchronous and serial: `click` runs every matching handler to
/// completion on the calling thread before returning. There is no queue and
/// no cross-thread hand-off.
pub struct Page {
    title: String,
    body_text: String,
    elements: Vec<Element>,
    handlers: Vec<HandlerEntry>,
    clicks_dispatched: u64,
}

impl Page {
    /// Parse an HTML document into a page.
    ///
    /// The parse itself is lenient (best-effort recovery, as browsers do);
    /// only whitespace-only input is rejected.
    pub fn load_html(html: &str) -> Result<Self> {
        if html.trim().is_empty() {
            return Err(Error::ParseError("document is empty".into()));
        }

        let document = Html::parse_document(html);
        let title_sel = Selector::parse("title").unwrap();
        let body_sel = Selector::parse("body").unwrap();

        let title = document
            .select(&title_sel)
            .next()
            .map(|n| n.text().collect::<String>())
            .unwrap_or_default();

        let body_text = document
            .select(&body_sel)
            .next()
            .map(|b| b.text().collect::<String>())
            .unwrap_or_default();

        // Depth-first traversal preserving document order; children are
        // pushed in reverse so the first child is popped first.
        let mut elements = Vec::new();
        let mut stack: Vec<ElementRef<'_>> = vec![document.root_element()];
        while let Some(node) = stack.pop() {
            elements.push(Element::from_node(node));
            let children: Vec<_> = node.children().filter_map(ElementRef::wrap).collect();
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        }

        Ok(Self {
            title,
            body_text,
            elements,
            handlers: Vec::new(),
            clicks_dispatched: 0,
        })
    }

    /// Read a page from disk. No URLs: the harness never touches the network.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let html = std::fs::read_to_string(path)
            .map_err(|e| Error::LoadError(format!("failed to read {}: {}", path.display(), e)))?;
        Self::load_html(&html)
    }

    /// Page title as extracted at load time
    pub fn title(&self) -> &str {
        &self.title
    }

    /// First element whose `id` attribute equals `id`, in document order.
    ///
    /// When several elements share an identifier only the first one is ever
    /// returned, matching standard document semantics.
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id.as_deref() == Some(id))
    }

    fn element_index(&self, id: &str) -> Option<usize> {
        self.elements
            .iter()
            .position(|el| el.id.as_deref() == Some(id))
    }

    /// Register a click handler for the element with the given id.
    ///
    /// Handlers registered for ids with no matching element never fire;
    /// `click` checks element presence before running anything.
    pub fn on_click<F>(&mut self, id: &str, handler: F)
    where
        F: FnMut(&ClickEvent, &mut dyn StyleTarget) + 'static,
    {
        self.handlers.push(HandlerEntry {
            target_id: id.to_string(),
            callback: Box::new(handler),
        });
    }

    /// Number of handlers currently registered for `id`
    pub fn handler_count(&self, id: &str) -> usize {
        self.handlers
            .iter()
            .filter(|entry| entry.target_id == id)
            .count()
    }

    /// Total number of click events dispatched to an existing element
    pub fn clicks_dispatched(&self) -> u64 {
        self.clicks_dispatched
    }

    /// Dispatch one click to the element with the given id.
    ///
    /// Returns the number of handlers invoked. A click on an absent element
    /// has no observable effect and returns 0.
    pub fn click(&mut self, id: &str) -> usize {
        let Some(idx) = self.element_index(id) else {
            log::debug!("click on {:?} ignored: no matching element", id);
            return 0;
        };

        self.clicks_dispatched += 1;
        let event = ClickEvent {
            target_id: id.to_string(),
            sequence: self.clicks_dispatched,
        };

        // Split borrow: handlers and elements are disjoint fields.
        let elements = &mut self.elements;
        let handlers = &mut self.handlers;

        let mut invoked = 0;
        for entry in handlers.iter_mut() {
            if entry.target_id == id {
                (entry.callback)(&event, &mut elements[idx]);
                invoked += 1;
            }
        }
        invoked
    }

    /// Render the page as a text snapshot
    pub fn text_snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            title: self.title.clone(),
            text: self.body_text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const PAGE: &str = r#"<html><head><title>Host</title></head>
<body><p>intro</p><button id="go" style="background-color: gray; border-radius: 4px">Go</button></body></html>"#;

    #[test]
    fn test_load_extracts_title_and_text() {
        let page = Page::load_html(PAGE).expect("parse failed");
        assert_eq!(page.title(), "Host");
        let snap = page.text_snapshot();
        assert!(snap.text.contains("intro"));
        assert!(snap.text.contains("Go"));
    }

    #[test]
    fn test_empty_document_rejected() {
        assert!(Page::load_html("   \n ").is_err());
    }

    #[test]
    fn test_element_lookup() {
        let page = Page::load_html(PAGE).expect("parse failed");
        let el = page.element_by_id("go").expect("missing #go");
        assert_eq!(el.tag, "button");
        assert_eq!(el.text, "Go");
        assert!(page.element_by_id("nope").is_none());
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first_in_document_order() {
        let html = r#"<html><body>
<span id="dup">first</span>
<span id="dup">second</span>
</body></html>"#;
        let page = Page::load_html(html).expect("parse failed");
        assert_eq!(page.element_by_id("dup").unwrap().text, "first");
    }

    #[test]
    fn test_attributes_are_captured() {
        let page = Page::load_html(PAGE).expect("parse failed");
        let el = page.element_by_id("go").unwrap();
        assert_eq!(el.attr("id"), Some("go"));
        assert_eq!(
            el.attr("style"),
            Some("background-color: gray; border-radius: 4px")
        );
        assert_eq!(el.attr("nope"), None);
    }

    #[test]
    fn test_inline_style_seeds_tracked_properties() {
        let page = Page::load_html(PAGE).expect("parse failed");
        let el = page.element_by_id("go").unwrap();
        assert_eq!(el.background_color.as_deref(), Some("gray"));
        assert_eq!(el.border_radius.as_deref(), Some("4px"));
    }

    #[test]
    fn test_inline_style_value_parsing() {
        assert_eq!(
            inline_style_value("border-radius: 9px; color: red", "border-radius").as_deref(),
            Some("9px")
        );
        assert_eq!(
            inline_style_value("BACKGROUND-COLOR:blue", "background-color").as_deref(),
            Some("blue")
        );
        assert_eq!(inline_style_value("color: red", "border-radius"), None);
        assert_eq!(inline_style_value("", "border-radius"), None);
    }

    #[test]
    fn test_click_without_element_is_noop() {
        let mut page = Page::load_html(PAGE).expect("parse failed");
        let fired = Rc::new(Cell::new(0u32));
        let f = fired.clone();
        page.on_click("missing", move |_, _| f.set(f.get() + 1));

        assert_eq!(page.click("missing"), 0);
        assert_eq!(fired.get(), 0);
        assert_eq!(page.clicks_dispatched(), 0);
    }

    #[test]
    fn test_click_runs_registered_handlers_serially() {
        let mut page = Page::load_html(PAGE).expect("parse failed");
        let fired = Rc::new(Cell::new(0u32));
        let f = fired.clone();
        page.on_click("go", move |event, target| {
            f.set(f.get() + 1);
            assert_eq!(event.target_id, "go");
            target.set_background_color("teal");
        });

        assert_eq!(page.handler_count("go"), 1);
        assert_eq!(page.click("go"), 1);
        assert_eq!(page.click("go"), 1);
        assert_eq!(fired.get(), 2);
        assert_eq!(page.clicks_dispatched(), 2);
        assert_eq!(
            page.element_by_id("go").unwrap().background_color.as_deref(),
            Some("teal")
        );
    }

    #[test]
    fn test_click_event_sequence_is_one_based() {
        let mut page = Page::load_html(PAGE).expect("parse failed");
        let last_seq = Rc::new(Cell::new(0u64));
        let s = last_seq.clone();
        page.on_click("go", move |event, _| s.set(event.sequence));

        page.click("go");
        assert_eq!(last_seq.get(), 1);
        page.click("go");
        assert_eq!(last_seq.get(), 2);
    }
}
