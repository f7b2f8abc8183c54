// src/core/html.rs
// Small traversal helpers over `scraper` element handles.
// Names mirror the DOM vocabulary the page specs are written in.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

pub fn parse(body: &str) -> Html {
    Html::parse_document(body)
}

/// First element under `scope` matching `sel`.
pub fn first<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

/// Visible text of one element, whitespace collapsed.
pub fn text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text of every match under `scope`, joined by a space (empty when nothing matches).
pub fn select_text(scope: ElementRef<'_>, sel: &Selector) -> String {
    let parts: Vec<String> = scope
        .select(sel)
        .map(text)
        .filter(|t| !t.is_empty())
        .collect();
    parts.join(" ")
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

pub fn is_tag(el: ElementRef<'_>, tag: &str) -> bool {
    el.value().name().eq_ignore_ascii_case(tag)
}

/// Following element sibling, skipping text and comments.
pub fn next_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// Preceding element siblings, nearest first.
pub fn prev_elements(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.prev_siblings().filter_map(ElementRef::wrap)
}

/// Nearest ancestor with the given tag name (the element itself excluded).
pub fn closest<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| is_tag(*a, tag))
}
