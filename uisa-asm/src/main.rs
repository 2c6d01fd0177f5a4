#[macro_use]
extern crate clap;

use clap::Arg;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use uisa::memory::DEFAULT_INSTRUCTION_MEMORY_SIZE;
use uisa::LabelResolution;
use uisa_asm::{assemble, default_output_path, CONVENTIONAL_SOURCE_EXTENSION};

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the assembly source file to use")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("OUTPUT")
                .help("Sets the object file to write to"),
        )
        .arg(
            Arg::with_name("legacy_labels")
                .long("legacy-labels")
                .help("Encode an unresolved label as 0xFFFF instead of failing"),
        )
        .arg(
            Arg::with_name("instr_size")
                .long("instr-size")
                .takes_value(true)
                .value_name("BYTES")
                .help("Instruction memory size the program must fit, in bytes"),
        )
        .get_matches();

    let input_path = Path::new(matches.value_of("INPUT").unwrap());
    let output_path: PathBuf = matches
        .value_of("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_path(input_path));

    let mode = if matches.is_present("legacy_labels") {
        LabelResolution::Legacy
    } else {
        LabelResolution::Strict
    };

    let instr_size = match matches.value_of("instr_size") {
        Some(value) => match value.parse::<usize>() {
            Ok(size) => size,
            Err(err) => {
                eprintln!("invalid --instr-size \"{value}\": {err}");
                process::exit(1);
            }
        },
        None => DEFAULT_INSTRUCTION_MEMORY_SIZE,
    };

    if input_path.extension().and_then(|ext| ext.to_str()) != Some(CONVENTIONAL_SOURCE_EXTENSION) {
        eprintln!(
            "warning: \"{}\" does not have a .{} extension",
            input_path.display(),
            CONVENTIONAL_SOURCE_EXTENSION
        );
    }

    let source = match fs::read_to_string(input_path) {
        Ok(source) => source,
        Err(err) => {
            let err = uisa::AssemblerError::InvalidInput(err.to_string());
            eprintln!("{err}");
            process::exit(err.exit_code());
        }
    };

    let bytes = match assemble(&source, mode) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("{err}");
            process::exit(err.exit_code());
        }
    };

    if bytes.len() > instr_size {
        let err = uisa::AssemblerError::InvalidOutput(format!(
            "assembled program is {} bytes, which does not fit a {instr_size}-byte instruction memory",
            bytes.len()
        ));
        eprintln!("{err}");
        process::exit(err.exit_code());
    }

    if let Err(err) = fs::write(&output_path, &bytes) {
        let err = uisa::AssemblerError::WritingFailed(format!(
            "\"{}\": {err}",
            output_path.display()
        ));
        eprintln!("{err}");
        process::exit(err.exit_code());
    }
}
