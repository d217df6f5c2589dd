extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelbrot::{Error, PixelBuffer, RenderParams, Renderer};
use std::fs::File;
use std::io::{self, BufWriter};
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_size(s: &str, err: &str) -> Result<(), String> {
    match parse_pair::<u16>(s, 'x') {
        Some((w, h)) if w > 0 && h > 0 => Ok(()),
        _ => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const COLOR: &str = "color";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Mandelbrot PNG renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output PNG file, or - for stdout"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1024x1024")
                .validator(|s| validate_size(&s, "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(COLOR)
                .long(COLOR)
                .short("c")
                .help("Paint with the hue ramp instead of grayscale"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in renderer"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("20")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        200_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 200000",
                    )
                })
                .help("Maximum number of iterations per point"),
        )
        .get_matches()
}

fn write_image(outfile: &str, image: &PixelBuffer) -> Result<(), Error> {
    if outfile == "-" {
        let stdout = io::stdout();
        let mut output = stdout.lock();
        return image.write_png(&mut output);
    }
    let mut output = BufWriter::new(File::create(outfile)?);
    image.write_png(&mut output)
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let params = RenderParams::from_request(
        matches.value_of(SIZE).and_then(|s| s.split('x').next()),
        matches.value_of(SIZE).and_then(|s| s.split('x').nth(1)),
        matches.is_present(COLOR),
        matches.value_of(ITERATIONS),
    );
    let threads = matches
        .value_of(THREADS)
        .and_then(|s| usize::from_str(s).ok())
        .unwrap_or(1);
    info!(
        "Rendering {}x{} in {:?} with at most {} iterations",
        params.width, params.height, params.mode, params.max_iterations
    );

    let image = Renderer::new(&params)?.render(threads)?;
    let outfile = matches.value_of(OUTPUT).unwrap_or("-");
    info!("Writing {}", outfile);
    write_image(outfile, &image)
}

fn main() {
    env_logger::init();
    let matches = args();

    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
