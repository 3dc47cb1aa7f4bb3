// ----------------------------------- CLI -----------------------------------
use clap::Parser;

use sinoscope::utils::{parse_pair, parse_range};

#[derive(Parser, Debug, Clone)]
#[command(name = "sinoscope", about = "Forward-project an image into a sinogram")]
pub struct Cli {

    /// Angle range in degrees, half-open, e.g. 0..180
    #[arg(short, long, value_parser = parse_range::<f32>, default_value = "0..180")]
    pub angles: std::ops::Range<f32>,

    /// Number of evenly spaced projection angles
    #[arg(short, long, default_value = "180")]
    pub num_angles: usize,

    /// Side length of the generated Shepp-Logan phantom
    #[arg(short, long, default_value = "400")]
    pub size: usize,

    /// Raw f32 image to project instead of the synthetic phantom
    #[arg(short, long)]
    pub input_file: Option<PathBuf>,

    /// Rows,columns of --input-file
    #[arg(long, value_parser = parse_pair::<usize>, requires = "input_file")]
    pub shape: Option<(usize, usize)>,

    /// Where to write the raw f32 sinogram
    #[arg(short, long, default_value = "data/out/sinogram.raw")]
    pub out_file: PathBuf,

    /// Read all parameters from a TOML file instead of the flags above
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Assemble the sinogram one 1-degree column at a time, the way the
    /// animation loop reveals it (ignores --angles)
    #[arg(long)]
    pub sweep: bool,

    /// Maximum number of rayon threads
    #[arg(short = 'j', long, default_value = "4")]
    pub num_threads: usize,

}

// --------------------------------------------------------------------------------

use std::error::Error;
use std::fs::create_dir_all;
use std::path::PathBuf;

use indicatif::ProgressBar;

use sinoscope::config::read_config_file;
use sinoscope::io::raw;
use sinoscope::phantom;
use sinoscope::projector::radon_transform;
use sinoscope::sweep::SinogramSweep;
use sinoscope::utils::{group_digits, timing::Progress};

fn main() -> Result<(), Box<dyn Error>> {

    let args = Cli::parse();

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.num_threads)
        .build_global()?;

    // A config file replaces the individual flags wholesale
    let (theta_start, theta_end, num_angles, phantom_side, input, out_file) = match &args.config {
        Some(path) => {
            let config = read_config_file(path.clone());
            (config.theta_start, config.theta_end, config.num_angles, config.phantom_side,
             config.input_file.map(|f| (f, config.input_shape.expect("input_file needs input_shape"))),
             config.out_file)
        }
        None => (args.angles.start, args.angles.end, args.num_angles, args.size,
                 args.input_file.clone().map(|f| (f, args.shape.expect("--input-file needs --shape"))),
                 args.out_file.clone()),
    };

    let mut progress = Progress::new();

    progress.start("Preparing input image");
    let image = match input {
        Some((path, shape)) => raw::read_array2(&path, shape)?,
        None                => phantom::shepp_logan(phantom_side),
    };
    progress.done();

    let (height, width) = image.dim();
    println!("Projecting {height}x{width} image at {} angles in [{theta_start}, {theta_end})",
             group_digits(num_angles));

    progress.start("Computing sinogram");
    let sinogram = if args.sweep {
        let mut sweep = SinogramSweep::new(image.view(), num_angles)?;
        let bar = ProgressBar::new(num_angles as u64);
        for _ in 0..num_angles {
            sweep.step()?;
            bar.inc(1);
        }
        bar.finish();
        sweep.columns().to_owned()
    } else {
        radon_transform(image.view(), theta_start, theta_end, num_angles)?.data
    };
    progress.done();

    // If the directory where results will be written does not exist yet, make it
    if let Some(dir) = out_file.parent() {
        if !dir.as_os_str().is_empty() { create_dir_all(dir)?; }
    }
    raw::write_array2(sinogram.view(), &out_file)?;
    println!("Wrote {}x{} sinogram to {}",
             sinogram.nrows(), sinogram.ncols(), out_file.display());

    Ok(())
}
