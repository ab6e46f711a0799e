use crate::controllers::startup::errors::ConfigError;
use crate::core::actions::navigate::preset::ViewportPreset;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::fractal_spec::FractalSpec;
use crate::core::actions::render_cells::render_mode::RenderMode;

/// Everything fixed before the first frame is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StartupConfig {
    pub spec: FractalSpec,
    pub preset: ViewportPreset,
    pub render_mode: RenderMode,
}

impl StartupConfig {
    /// Validates the fractal name and its numeric parameters.
    ///
    /// A missing name selects the default fractal. Parameter tokens must parse
    /// as finite numbers and match the fractal's arity exactly.
    pub fn from_tokens<S: AsRef<str>>(
        fractal: Option<&str>,
        params: &[S],
    ) -> Result<Self, ConfigError> {
        let name = fractal.unwrap_or(FractalKind::default().name());
        let kind = FractalKind::from_name(name).ok_or_else(|| ConfigError::UnknownFractal {
            name: name.to_string(),
        })?;

        let expected = kind.parameter_count();
        if params.len() < expected {
            return Err(ConfigError::MissingParameter {
                fractal: kind.name(),
                expected,
                found: params.len(),
            });
        }
        if let Some(extra) = params.get(expected) {
            return Err(ConfigError::UnexpectedParameter {
                token: extra.as_ref().to_string(),
            });
        }

        let values = params
            .iter()
            .map(|token| {
                let token = token.as_ref();
                token
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ConfigError::MalformedParameter {
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<f64>, ConfigError>>()?;

        Ok(Self {
            spec: kind.build(&values)?,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_preset(mut self, preset: ViewportPreset) -> Self {
        self.preset = preset;
        self
    }

    #[must_use]
    pub fn with_render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
        self
    }
}
