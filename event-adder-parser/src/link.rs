use std::borrow::Cow;

use log::debug;
use urlencoding::encode;

use crate::{
    format_event_date, format_event_time, get_event_data, Error, EventData, FieldReader, Marker,
};

/// Google Calendar's prefilled event form.
pub const BASE_URL: &str = "https://calendar.google.com/calendar/render";

/// How field values are embedded into the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Values are inserted verbatim. Reserved characters in a value will
    /// corrupt the query string.
    #[default]
    Raw,
    /// `text`, `details` and `location` are percent-encoded.
    Percent,
}

#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base_url: Cow<'static, str>,
    encoding: Encoding,
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self {
            base_url: Cow::Borrowed(BASE_URL),
            encoding: Encoding::Raw,
        }
    }
}

impl LinkBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn base_url<S: Into<Cow<'static, str>>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// The `dates` parameter, `{start}T{startTime}/{end}T{endTime}`.
    pub fn dates(&self, event: &EventData) -> Result<String, Error> {
        let start_date = format_event_date(required(&event.start_date, Marker::StartDate)?)?;
        let end_date = format_event_date(required(&event.end_date, Marker::EndDate)?)?;
        let start_time = format_event_time(required(&event.start_time, Marker::StartTime)?)?;
        let end_time = format_event_time(required(&event.end_time, Marker::EndTime)?)?;

        Ok(format!("{start_date}T{start_time}/{end_date}T{end_time}"))
    }

    pub fn build(&self, event: &EventData) -> Result<String, Error> {
        let dates = self.dates(event)?;

        Ok(format!(
            "{}?action=TEMPLATE&text={}&dates={dates}&details={}&location={}",
            self.base_url,
            self.value(&event.title),
            self.value(&event.description),
            self.value(&event.location),
        ))
    }

    /// Reads the event enclosing `trigger` and builds its link.
    pub fn for_trigger<R: FieldReader>(&self, trigger: &R) -> Result<String, Error> {
        self.read_and_build(trigger).1
    }

    pub(crate) fn read_and_build<R: FieldReader>(
        &self,
        trigger: &R,
    ) -> (EventData, Result<String, Error>) {
        if trigger.closest(Marker::Container).is_none() {
            return (EventData::default(), Err(Error::NoContainer));
        }

        let event = get_event_data(trigger);
        debug!("building link for event {:?}", event.title);

        let link = self.build(&event);
        (event, link)
    }

    fn value<'v>(&self, value: &'v str) -> Cow<'v, str> {
        match self.encoding {
            Encoding::Raw => Cow::Borrowed(value),
            Encoding::Percent => encode(value),
        }
    }
}

fn required(value: &Option<String>, marker: Marker) -> Result<&str, Error> {
    value.as_deref().ok_or(Error::MissingField(marker))
}

/// Builds the quick-add link for the event enclosing `trigger` with the
/// default [`LinkBuilder`].
pub fn generate_event_link<R: FieldReader>(trigger: &R) -> Result<String, Error> {
    LinkBuilder::default().for_trigger(trigger)
}
