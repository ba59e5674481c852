//! Build script to generate the embedded airport code catalog
//!
//! Reads the catalog resource and generates Rust source code with a const array.
//! Lines are emitted verbatim; normalization happens in the catalog loader so the
//! embedded and file-backed catalogs go through the same filter.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_code_list(
        "data/airport_codes.csv",
        &Path::new(&out_dir).join("airport_codes.rs"),
        "AIRPORT_CODES",
        "Raw lines of the bundled airport code catalog",
    );

    // Rebuild if the catalog changes
    println!("cargo:rerun-if-changed=data/airport_codes.csv");
}

fn generate_code_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let lines: Vec<&str> = content.lines().collect();
    let count = lines.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated airport code list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for line in lines {
        // Debug formatting escapes quotes and backslashes in malformed lines
        writeln!(output, "    {line:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of raw lines in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_LINES: usize = {count};").unwrap();
}
