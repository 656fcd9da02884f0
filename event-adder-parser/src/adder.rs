use log::{debug, warn};

use crate::{Error, EventData, FieldReader, LinkBuilder, Marker};

/// A single click handler for every add-event trigger below `root`.
#[derive(Debug, Clone)]
pub struct EventAdder<R> {
    root: R,
    links: LinkBuilder,
}

impl<R: FieldReader> EventAdder<R> {
    pub fn new(root: R) -> Self {
        Self::with_links(root, LinkBuilder::default())
    }

    pub fn with_links(root: R, links: LinkBuilder) -> Self {
        Self { root, links }
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn is_add_event_clicked(target: &R) -> bool {
        target.has_marker(Marker::AddBtn)
    }

    /// Handles a click on `target`.
    ///
    /// Returns `None` if `target` is not an add-event trigger below the root,
    /// otherwise the link to open.
    pub fn on_click(&self, target: &R) -> Option<Result<String, Error>> {
        self.click(target).map(|(_, link)| link)
    }

    /// Like [`on_click`](Self::on_click), also returning the fields the link
    /// was built from.
    pub fn click(&self, target: &R) -> Option<(EventData, Result<String, Error>)> {
        if !target.is_within(&self.root) || !Self::is_add_event_clicked(target) {
            return None;
        }

        let (event, link) = self.links.read_and_build(target);
        match &link {
            Ok(link) => debug!("opening {link}"),
            Err(err) => warn!("failed to build event link: {err}"),
        }

        Some((event, link))
    }
}
