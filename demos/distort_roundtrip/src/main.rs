use argh::FromArgs;
use std::path::PathBuf;

use lenswarp::image::Image;
use lenswarp::imgproc::calibration::distortion::PolynomialDistortion;
use lenswarp::imgproc::simulation::{simulate_distortion, SimulationConfig};
use lenswarp::io::functional::{read_image_any, GenericImage};
use lenswarp::io::png::{write_image_png_gray8, write_image_png_rgb8};

#[derive(FromArgs)]
/// Distort an image through a pinhole camera model and approximately restore it
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// directory where distorted.png and restored.png are written
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,

    /// first radial distortion coefficient
    #[argh(option, default = "0.2")]
    k1: f64,

    /// second radial distortion coefficient
    #[argh(option, default = "0.0")]
    k2: f64,

    /// third radial distortion coefficient
    #[argh(option, default = "0.0")]
    k3: f64,
}

fn simulate<const C: usize>(
    src: &Image<u8, C>,
    config: &SimulationConfig,
) -> Result<(Image<u8, C>, Image<u8, C>), Box<dyn std::error::Error>> {
    let mut distorted = Image::from_size_val(src.size(), 0)?;
    let mut restored = Image::from_size_val(src.size(), 0)?;
    simulate_distortion(src, &mut distorted, &mut restored, config)?;
    Ok((distorted, restored))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // read the image in its native channel layout
    let image = read_image_any(&args.image_path)?;
    log::info!(
        "Loaded {} with {} channels",
        image.size(),
        image.num_channels()
    );

    let mut config = SimulationConfig::for_size(image.size());
    config.distortion = PolynomialDistortion::radial(args.k1, args.k2, args.k3);
    log::info!(
        "Simulating distortion with k1={}, k2={}, k3={}",
        args.k1,
        args.k2,
        args.k3
    );

    std::fs::create_dir_all(&args.output_dir)?;
    let distorted_path = args.output_dir.join("distorted.png");
    let restored_path = args.output_dir.join("restored.png");

    match image {
        GenericImage::L8(gray) => {
            let (distorted, restored) = simulate(&gray, &config)?;
            write_image_png_gray8(&distorted_path, &distorted)?;
            write_image_png_gray8(&restored_path, &restored)?;
        }
        GenericImage::Rgb8(rgb) => {
            let (distorted, restored) = simulate(&rgb, &config)?;
            write_image_png_rgb8(&distorted_path, &distorted)?;
            write_image_png_rgb8(&restored_path, &restored)?;
        }
    }

    log::info!(
        "Wrote {} and {}",
        distorted_path.display(),
        restored_path.display()
    );

    Ok(())
}
