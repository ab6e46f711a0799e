use crate::core::data::viewport::ViewportError;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum NavigatorError {
    SpanOutOfLimits { re_span: f64, im_span: f64 },
    Viewport(ViewportError),
}

impl fmt::Display for NavigatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpanOutOfLimits { re_span, im_span } => {
                write!(
                    f,
                    "viewport span {} x {} is outside the navigation limits",
                    re_span,
                    im_span.abs()
                )
            }
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
        }
    }
}

impl Error for NavigatorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SpanOutOfLimits { .. } => None,
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<ViewportError> for NavigatorError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}
