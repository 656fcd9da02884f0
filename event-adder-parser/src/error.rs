use crate::Marker;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("trigger is not inside an element marked `{}`", Marker::Container.attribute())]
    NoContainer,

    #[error("event has no `{}` attribute", .0.attribute())]
    MissingField(Marker),

    #[error("invalid date `{0}`, expected dd.mm.yy")]
    InvalidDate(String),

    #[error("invalid time `{0}`, expected h:mm or hh:mm")]
    InvalidTime(String),
}
