use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds only compile the portable library and its tests
    let target = env::var("TARGET").unwrap();
    if !target.contains("avr") {
        return;
    }

    // Configure for ATmega328P (Uno class board)
    println!("cargo:rustc-link-arg=-mmcu=atmega328p");

    // Pass CPU frequency for timing calculations
    println!("cargo:rustc-env=MCU_FREQ_HZ=16000000");

    println!("cargo:warning=Building for ATmega328P at 16MHz");
}
