pub mod errors;
pub mod fractal_kinds;
pub mod fractal_spec;
pub mod mandelbrot;
pub mod multibrot;
