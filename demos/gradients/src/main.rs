use argh::FromArgs;
use rand::Rng;

use luma::image::ops::cast_and_scale;
use luma::image::{Image, ImageSize};
use luma::imgproc::{metrics, transform};

#[derive(FromArgs)]
/// Compare two synthetic gradient images and apply the geometric transforms
struct Args {
    /// width of the synthetic images
    #[argh(option, default = "64")]
    width: usize,

    /// height of the synthetic images
    #[argh(option, default = "64")]
    height: usize,

    /// amplitude of the noise added to the second image
    #[argh(option, default = "0.1")]
    noise: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();

    let size = ImageSize {
        width: args.width,
        height: args.height,
    };

    // build a horizontal gradient as raw u8 intensities
    let data: Vec<u8> = (0..size.height)
        .flat_map(|_| (0..size.width).map(move |x| (x * 255 / size.width.max(1)) as u8))
        .collect();
    let gradient_u8 = Image::<u8, 1>::new(size, data)?;

    // normalize to [0, 1]
    let mut gradient = Image::<f32, 1>::from_size_val(size, 0.0)?;
    cast_and_scale(&gradient_u8, &mut gradient, 1.0 / 255.0)?;

    // a noisy copy of the gradient
    let mut rng = rand::rng();
    let mut noisy = gradient.clone();
    noisy.as_slice_mut().iter_mut().for_each(|px| {
        *px = (*px + rng.random_range(-args.noise..=args.noise)).clamp(0.0, 1.0);
    });

    let result = metrics::compare(&gradient, &noisy)?;
    println!("gradient vs noisy: {:?}", result);

    let identical = metrics::compare(&gradient, &gradient)?;
    println!("gradient vs itself: {:?}", identical);

    let set = transform::apply_transforms(&gradient)?;
    println!("translated: {}", set.translated.size());
    println!("rotated:    {}", set.rotated.size());
    println!("stretched:  {}", set.stretched.size());
    println!("mirrored:   {}", set.mirrored.size());
    println!("distorted:  {}", set.distorted.size());

    Ok(())
}
