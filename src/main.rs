// Demo runner for the `pixel_sorter` library: decode an image file, apply
// one configured sort, write the result out as a PNG. Everything interesting
// lives in the library; this is the glue an application layer would own.

use std::env;

use pixel_sorter::core_modules::utils::image_helper::image_helper;
use pixel_sorter::{Direction, ParallelPixelSorter, PixelSorter, SortOrder, SorterConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --- 1. Argument Parsing & Setup ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!(
            "Usage: pixel_sorter <input_image> <output_png> \
             [--vertical] [--descending] [--key <hue|saturation|lightness|red|green|blue>] \
             [--min <percent>] [--max <percent>] [--inverted] [--parallel]"
        );
        return Ok(());
    }
    let input_path = &args[1];
    let output_path = &args[2];

    let mut config = SorterConfig::default();
    let mut parallel = false;

    let mut i = 3;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = || -> Result<&String, String> {
            args.get(i + 1).ok_or(format!("missing value for {flag}"))
        };
        match flag {
            "--vertical" => config.direction = Direction::Vertical,
            "--descending" => config.order = SortOrder::Descending,
            "--key" => {
                config.key = value()?.parse()?;
                i += 1;
            }
            "--min" => {
                config.threshold.min = value()?.parse::<f32>()?;
                i += 1;
            }
            "--max" => {
                config.threshold.max = value()?.parse::<f32>()?;
                i += 1;
            }
            "--inverted" => config.threshold.inverted = true,
            "--parallel" => parallel = true,
            other => return Err(format!("unknown flag: {other}").into()),
        }
        i += 1;
    }

    // --- 2. Image Decode ---
    let (width, height, mut buffer) = image_helper::load(input_path)?;
    println!("Loaded {input_path}: {width}x{height}");

    // --- 3. Sort ---
    if parallel {
        ParallelPixelSorter::new(config)
            .sort_frame(&mut buffer, width, height)
            .await?;
    } else {
        PixelSorter::new(config).sort_frame(&mut buffer, width, height)?;
    }

    // --- 4. Encode & Save ---
    image_helper::save(output_path, width, height, &buffer)?;
    println!("Wrote sorted image to {output_path}");

    Ok(())
}
