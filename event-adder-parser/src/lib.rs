mod adder;
mod error;
mod format;
mod link;
mod markers;
mod page;
mod reader;
mod structs;

pub use adder::EventAdder;
pub use error::Error;
pub use format::{format_event_date, format_event_time};
pub use link::{generate_event_link, Encoding, LinkBuilder, BASE_URL};
pub use markers::Marker;
pub use page::Page;
pub use reader::{get_event_data, FieldReader};
pub use structs::EventData;
