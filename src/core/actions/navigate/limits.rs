#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorLimits {
    pub min_span: f64,
    pub max_span: f64,
}

impl Default for NavigatorLimits {
    fn default() -> Self {
        Self {
            min_span: 1e-13,
            max_span: 1e6,
        }
    }
}

impl NavigatorLimits {
    /// Whether both axis spans (by magnitude) sit inside the limits.
    #[must_use]
    pub fn allows(&self, re_span: f64, im_span: f64) -> bool {
        let within = |span: f64| {
            let span = span.abs();
            span >= self.min_span && span <= self.max_span
        };

        within(re_span) && within(im_span)
    }
}
