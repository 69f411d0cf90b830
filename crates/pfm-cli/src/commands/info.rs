//! Image info command.
//!
//! Displays dimensions, header scale and byte order, and the selected channels.

use crate::InfoArgs;
use anyhow::{Context, Result, bail};
use pfm_core::{ImageData, WorkerPool};
use pfm_io::pfm::{self, PfmHeader};
use pfm_io::{ImageLoader, PfmLoader};
use std::fs;
use std::io::{Seek, SeekFrom};
use std::path::Path;

/// Runs the info command.
pub fn run(args: InfoArgs, pool: &WorkerPool, verbose: bool) -> Result<()> {
    let loader = PfmLoader::new();

    for path in &args.input {
        let file_size = fs::metadata(path)?.len();
        let mut reader = super::open(path)?;

        if !loader.can_load(&mut reader) {
            bail!("Not a PFM file: {}", path.display());
        }

        let header = pfm::read_header(&mut reader)
            .with_context(|| format!("Failed to read header: {}", path.display()))?;
        reader.seek(SeekFrom::Start(0))?;

        let image = loader
            .load(&mut reader, &args.channels, pool)
            .with_context(|| format!("Failed to load: {}", path.display()))?;
        tracing::debug!(path = %path.display(), channels = image.channels.len(), "loaded");

        if args.json {
            print_json(&args, path, &header, &image, file_size);
        } else {
            print_text(&args, path, &header, &image, file_size, verbose);
        }

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}

/// Prints info in human-readable text format.
fn print_text(
    args: &InfoArgs,
    path: &Path,
    header: &PfmHeader,
    image: &ImageData,
    file_size: u64,
    verbose: bool,
) {
    let size = image.size();
    println!("{}", path.display());
    println!("  Resolution: {}", size);
    println!("  Channels:   {}", image.channel_names().join(", "));
    println!("  Pixels:     {}", size.width as u64 * size.height as u64);
    println!("  File size:  {}", super::format_size(file_size));

    if verbose {
        println!("  Stored:     {} channel(s)", header.channels);
        println!("  Scale:      {}", header.scale);
        println!("  Byte order: {:?}", header.endianness);
    }

    if args.stats {
        for channel in &image.channels {
            let (min, max, avg) = compute_stats(channel.data());
            println!(
                "  {:<10}  min {:.6}  max {:.6}  avg {:.6}",
                channel.name(),
                min,
                max,
                avg
            );
        }
    }
}

/// Prints info in JSON format.
fn print_json(args: &InfoArgs, path: &Path, header: &PfmHeader, image: &ImageData, file_size: u64) {
    let size = image.size();
    println!("{{");
    println!("  \"file\": \"{}\",", json_escape(&path.display().to_string()));
    println!("  \"width\": {},", size.width);
    println!("  \"height\": {},", size.height);
    println!("  \"scale\": {},", header.scale);
    println!("  \"little_endian\": {},", header.endianness.is_little());
    println!("  \"size_bytes\": {},", file_size);
    println!("  \"channels\": [");
    for (idx, channel) in image.channels.iter().enumerate() {
        let comma = if idx + 1 < image.channels.len() { "," } else { "" };
        if args.stats {
            let (min, max, avg) = compute_stats(channel.data());
            println!(
                "    {{\"name\": \"{}\", \"min\": {}, \"max\": {}, \"avg\": {}}}{}",
                json_escape(channel.name()),
                min,
                max,
                avg,
                comma
            );
        } else {
            println!("    {{\"name\": \"{}\"}}{}", json_escape(channel.name()), comma);
        }
    }
    println!("  ]");
    println!("}}");
}

fn json_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Min, max and mean of the finite samples.
fn compute_stats(data: &[f32]) -> (f32, f32, f32) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    let mut sum = 0.0f64;
    let mut count = 0usize;

    for &v in data.iter().filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
        sum += v as f64;
        count += 1;
    }

    if count == 0 {
        return (0.0, 0.0, 0.0);
    }
    (min, max, (sum / count as f64) as f32)
}
