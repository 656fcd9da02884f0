use std::iter;

use log::debug;
use scraper::ElementRef;

use crate::{EventData, Marker};

/// Read access to the markup an event is declared in.
///
/// Lookups below a scope only consider descendants of that scope, never the
/// scope element itself.
pub trait FieldReader: Sized {
    /// Whether this element carries `marker`.
    fn has_marker(&self, marker: Marker) -> bool;

    /// Nearest ancestor-or-self carrying `marker`.
    fn closest(&self, marker: Marker) -> Option<Self>;

    /// Text content of every descendant carrying `marker`, concatenated in
    /// document order. `None` if no descendant carries it.
    fn find_text(&self, marker: Marker) -> Option<String>;

    /// Value of the `marker` attribute on the first descendant carrying it.
    fn find_attr(&self, marker: Marker) -> Option<String>;

    /// Whether this element is `root` or one of its descendants.
    fn is_within(&self, root: &Self) -> bool;
}

impl FieldReader for ElementRef<'_> {
    fn has_marker(&self, marker: Marker) -> bool {
        self.value().attr(marker.attribute()).is_some()
    }

    fn closest(&self, marker: Marker) -> Option<Self> {
        iter::once(*self)
            .chain(self.ancestors().filter_map(ElementRef::wrap))
            .find(|element| element.has_marker(marker))
    }

    fn find_text(&self, marker: Marker) -> Option<String> {
        let mut matches = self.select(marker.selector()).peekable();
        matches.peek()?;
        Some(matches.flat_map(|element| element.text()).collect())
    }

    fn find_attr(&self, marker: Marker) -> Option<String> {
        self.select(marker.selector())
            .next()?
            .value()
            .attr(marker.attribute())
            .map(str::to_owned)
    }

    fn is_within(&self, root: &Self) -> bool {
        self.id() == root.id() || self.ancestors().any(|node| node.id() == root.id())
    }
}

/// Reads the fields of the event enclosing `trigger`.
///
/// Missing container or field markers resolve to empty values.
pub fn get_event_data<R: FieldReader>(trigger: &R) -> EventData {
    let Some(container) = trigger.closest(Marker::Container) else {
        debug!("trigger has no enclosing event container");
        return EventData::default();
    };

    EventData {
        title: container.find_text(Marker::Title).unwrap_or_default(),
        start_date: container.find_attr(Marker::StartDate),
        end_date: container.find_attr(Marker::EndDate),
        start_time: container.find_attr(Marker::StartTime),
        end_time: container.find_attr(Marker::EndTime),
        description: container.find_text(Marker::Description).unwrap_or_default(),
        location: container.find_attr(Marker::Location).unwrap_or_default(),
    }
}
