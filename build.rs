use std::env;
use std::f64::consts::PI;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

fn write_atan_table() {
    // The iteration count and the table are coupled: changing one
    // requires regenerating the other.
    const ITERATIONS: usize = 24;

    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("cordic_table.rs");
    let mut file = File::create(dest_path).unwrap();

    writeln!(
        file,
        "pub(crate) const CORDIC_ITERATIONS: usize = {};",
        ITERATIONS
    )
    .unwrap();
    write!(
        file,
        "pub(crate) const CORDIC_ATAN: [i64; CORDIC_ITERATIONS] = ["
    )
    .unwrap();

    // Entry i is atan(2^-i) rescaled so that pi maps to 1 << 24.
    for i in 0..ITERATIONS {
        if i % 4 == 0 {
            write!(file, "\n   ").unwrap();
        }
        let a = ((1u64 << ITERATIONS) as f64 * (2f64.powi(-(i as i32))).atan()
            / PI)
            .round() as i64;
        write!(file, " {},", a).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}

fn main() {
    write_atan_table();
}
