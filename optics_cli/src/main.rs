//! # Dioptra CLI Demonstration
//!
//! Minimal demonstration entry point: computes the dioptric power of a lens
//! with a 0.333 m focal length and prints it in prescription notation.
//! Accepts no arguments.

use optics_core::format::diopter_three_places;
use optics_core::formulas::power::dioptric_power;

fn main() {
    println!("Dioptra - Ophthalmic Optics Calculator");
    println!("======================================");
    println!();

    let focal_m = 0.333;
    match dioptric_power(focal_m) {
        Ok(power) => {
            println!("Focal length:      {} m", focal_m);
            println!("Unformatted value: {}", power);
            println!("Formatted value:   {}", diopter_three_places(power));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
