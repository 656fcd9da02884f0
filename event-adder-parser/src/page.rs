use scraper::{ElementRef, Html};

use crate::{Error, EventAdder, EventData, LinkBuilder, Marker};

/// A parsed HTML document holding event markup.
pub struct Page {
    html: Html,
}

impl Page {
    pub fn parse<S: AsRef<str>>(s: S) -> Self {
        Self {
            html: Html::parse_document(s.as_ref()),
        }
    }

    /// Add-event triggers in document order.
    pub fn triggers(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.select(Marker::AddBtn.selector())
    }

    /// Clicks the `index`-th trigger. `None` if there is no such trigger.
    pub fn click(
        &self,
        index: usize,
        links: &LinkBuilder,
    ) -> Option<(EventData, Result<String, Error>)> {
        let trigger = self.triggers().nth(index)?;
        self.adder(links).click(&trigger)
    }

    /// Clicks every trigger in document order.
    pub fn click_all(&self, links: &LinkBuilder) -> Vec<(EventData, Result<String, Error>)> {
        let adder = self.adder(links);
        self.triggers()
            .filter_map(|trigger| adder.click(&trigger))
            .collect()
    }

    fn adder(&self, links: &LinkBuilder) -> EventAdder<ElementRef<'_>> {
        EventAdder::with_links(self.html.root_element(), links.clone())
    }
}
