// cli.rs - Command-line surface; validation lives in StartupConfig
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::controllers::startup::{ConfigError, StartupConfig};
use crate::core::actions::navigate::preset::ViewportPreset;
use crate::core::actions::render_cells::render_mode::RenderMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "termbrot")]
#[command(about = "Explore escape-time fractals in the terminal", long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Fractal to render: mandelbrot (default) or multibrot
    pub fractal: Option<String>,

    /// Fractal parameters; multibrot takes its exponent
    pub params: Vec<String>,

    /// Starting view, also restored by reset
    #[arg(long, value_enum, default_value_t = PresetArg::Classic)]
    pub preset: PresetArg,

    /// Write log output to this file instead of discarding it
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Render on the main thread only
    #[arg(long)]
    pub serial: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    /// -2+2i to 2-2i
    Classic,
    /// -5+5i to 5-5i
    Wide,
}

impl From<PresetArg> for ViewportPreset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Classic => Self::Classic,
            PresetArg::Wide => Self::Wide,
        }
    }
}

impl Cli {
    pub fn startup_config(&self) -> Result<StartupConfig, ConfigError> {
        let render_mode = if self.serial {
            RenderMode::Serial
        } else {
            RenderMode::Parallel
        };

        Ok(StartupConfig::from_tokens(self.fractal.as_deref(), &self.params)?
            .with_preset(self.preset.into())
            .with_render_mode(render_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::fractal_spec::FractalSpec;

    #[test]
    fn no_arguments_selects_defaults() {
        let cli = Cli::try_parse_from(["termbrot"]).unwrap();
        let config = cli.startup_config().unwrap();

        assert_eq!(config.spec, FractalSpec::Mandelbrot);
        assert_eq!(config.preset, ViewportPreset::Classic);
        assert_eq!(config.render_mode, RenderMode::Parallel);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn negative_exponent_is_a_parameter_not_a_flag() {
        let cli = Cli::try_parse_from(["termbrot", "multibrot", "-3"]).unwrap();

        assert_eq!(cli.params, vec!["-3".to_string()]);
        assert_eq!(cli.startup_config().unwrap().spec.exponent(), -3.0);
    }

    #[test]
    fn options_are_applied() {
        let cli = Cli::try_parse_from([
            "termbrot",
            "--preset",
            "wide",
            "--serial",
            "--log-file",
            "termbrot.log",
            "multibrot",
            "4",
        ])
        .unwrap();
        let config = cli.startup_config().unwrap();

        assert_eq!(config.preset, ViewportPreset::Wide);
        assert_eq!(config.render_mode, RenderMode::Serial);
        assert_eq!(config.spec.exponent(), 4.0);
        assert_eq!(cli.log_file, Some(PathBuf::from("termbrot.log")));
    }

    #[test]
    fn validation_errors_surface_from_startup_config() {
        let cli = Cli::try_parse_from(["termbrot", "bogus"]).unwrap();

        assert_eq!(cli.startup_config().unwrap_err().exit_code(), 1);
    }
}
