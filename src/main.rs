mod logging;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use fractal_engine::{ColourMapKinds, ComplexRect, FractalKinds, RenderConfig, render_controller};
use num_complex::Complex64;

/// Render an escape-time or polynomiograph fractal to a PPM image.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// mandelbrot, julia, rational-julia, newton or mandelbrot-pg
    #[arg(short, long, default_value = "mandelbrot")]
    fractal: FractalKinds,

    #[arg(long, default_value_t = 700)]
    width: usize,

    #[arg(long, default_value_t = 400)]
    height: usize,

    #[arg(short = 'i', long, default_value_t = 256, allow_negative_numbers = true)]
    max_iterations: i64,

    /// Bailout radius for the escape-time fractals
    #[arg(short, long, default_value_t = 2.0)]
    radius: f64,

    /// Real part of the view centre (requires --span)
    #[arg(long, requires = "span", allow_negative_numbers = true)]
    centre_re: Option<f64>,

    /// Imaginary part of the view centre (requires --span)
    #[arg(long, requires = "span", allow_negative_numbers = true)]
    centre_im: Option<f64>,

    /// Width of the view in the complex plane; height follows the image aspect
    #[arg(long)]
    span: Option<f64>,

    /// Real part of the Julia parameter
    #[arg(long, default_value_t = -0.7, allow_negative_numbers = true)]
    julia_re: f64,

    /// Imaginary part of the Julia parameter
    #[arg(long, default_value_t = 0.27, allow_negative_numbers = true)]
    julia_im: f64,

    /// Convergence threshold for the polynomiographs
    #[arg(long, default_value_t = 1e-6)]
    epsilon: f64,

    /// Polynomial degree for the Newton polynomiograph
    #[arg(long, default_value_t = 3)]
    newton_degree: u32,

    /// fire, blue-white, spectrum, pretty-bands[-2], bw-bands, pretty-blends[-2],
    /// bw-blends, pretty-periodic[-2] or bw-stripes
    #[arg(short, long, default_value = "fire")]
    colour_map: ColourMapKinds,

    /// Worker threads; defaults to the available parallelism
    #[arg(short, long)]
    workers: Option<NonZeroUsize>,

    #[arg(short, long, default_value = "output/fractal.ppm")]
    output: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all logging
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> Result<RenderConfig, Box<dyn std::error::Error>> {
        let region = match self.span {
            Some(span) => {
                let centre = Complex64::new(self.centre_re.unwrap_or(0.0), self.centre_im.unwrap_or(0.0));
                let aspect = self.height as f64 / self.width.max(1) as f64;
                Some(ComplexRect::centred(centre, span, span * aspect)?)
            }
            None => None,
        };

        Ok(RenderConfig {
            fractal: self.fractal,
            region,
            width: self.width,
            height: self.height,
            max_iterations: self.max_iterations,
            radius: self.radius,
            julia_c: Complex64::new(self.julia_re, self.julia_im),
            epsilon: self.epsilon,
            newton_degree: self.newton_degree,
            colour_map: self.colour_map,
            workers: self.workers,
            output: self.output,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);

    let config = cli.into_config()?;
    let summary = render_controller(&config)?;

    println!(
        "Rendered {} {}x{} in {:?} to {}",
        config.fractal,
        summary.width,
        summary.height,
        summary.elapsed,
        config.output.display()
    );

    Ok(())
}
