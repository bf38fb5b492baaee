/// Whether a field, argument or enum value is deprecated, and why.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(&'a str),
    NotDeprecated,
}
impl<'a> DeprecationState<'a> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&'a str> {
        match self {
            Self::Deprecated(reason) => Some(reason),
            Self::NotDeprecated => None,
        }
    }
}
impl<'a> From<Option<&'a String>> for DeprecationState<'a> {
    fn from(reason: Option<&'a String>) -> Self {
        match reason {
            Some(reason) => Self::Deprecated(reason.as_str()),
            None => Self::NotDeprecated,
        }
    }
}
