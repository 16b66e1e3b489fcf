use icon_strip::strip::{is_near_black, load_rgba};
use std::{path::Path, process};

fn main() {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: verify_transparency <png>");
            process::exit(1);
        }
    };

    let img = match load_rgba(Path::new(&path)) {
        Ok(img) => img,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    };

    println!("Checking transparency in: {}", path);
    println!("Image dimensions: {}x{}", img.width(), img.height());

    let transparent = img.pixels().filter(|p| p[3] == 0).count();
    let leftover = img
        .pixels()
        .filter(|p| p[3] != 0 && is_near_black(p))
        .count();

    println!("\nTransparency analysis:");
    println!("  {} fully transparent pixels", transparent);
    println!("  {} visible near-black pixels", leftover);

    if leftover == 0 {
        println!("✓ Background fully stripped!");
    } else {
        println!("⚠ Near-black background pixels remain");
        process::exit(1);
    }
}
