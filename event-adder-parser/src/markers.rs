use std::fmt;

use once_cell::sync::Lazy;
use scraper::Selector;

macro_rules! selector {
    ($query:expr) => {{
        static SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse($query).unwrap());
        &SELECTOR
    }};
}

macro_rules! markers {
    ($($variant:ident => $name:literal, $attribute:literal;)*) => {
        /// Attributes a page uses to declare an event and its fields.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Marker {
            $($variant,)*
        }

        impl Marker {
            pub const ALL: &'static [Marker] = &[$(Marker::$variant,)*];

            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Marker::$variant => $name,)*
                }
            }

            #[must_use]
            pub const fn attribute(self) -> &'static str {
                match self {
                    $(Marker::$variant => $attribute,)*
                }
            }

            pub(crate) fn selector(self) -> &'static Selector {
                match self {
                    $(Marker::$variant => selector!(concat!("[", $attribute, "]")),)*
                }
            }
        }
    };
}

markers! {
    Container => "container", "data-event-container";
    Title => "title", "data-event-title";
    StartDate => "startDate", "data-event-start-date";
    EndDate => "endDate", "data-event-end-date";
    StartTime => "startTime", "data-event-start-time";
    EndTime => "endTime", "data-event-end-time";
    Description => "description", "data-event-description";
    Location => "location", "data-event-location";
    AddBtn => "addBtn", "data-add-event";
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
