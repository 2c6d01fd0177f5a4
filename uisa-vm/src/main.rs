#[macro_use]
extern crate clap;

use clap::{Arg, ArgGroup};
use std::fs;
use std::process;

use uisa::memory::{DEFAULT_DATA_MEMORY_SIZE, DEFAULT_INSTRUCTION_MEMORY_SIZE};
use uisa::{Cpu, LabelResolution, Memory};
use uisa_asm::assemble;

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("PROGRAM")
                .help("Sets the assembled object file to run")
                .index(1),
        )
        .arg(
            Arg::with_name("assembly")
                .short("a")
                .long("assembly")
                .takes_value(true)
                .value_name("ASSEMBLY")
                .help("Assembles and runs a source file directly"),
        )
        .group(
            ArgGroup::with_name("input")
                .args(&["PROGRAM", "assembly"])
                .required(true),
        )
        .arg(
            Arg::with_name("legacy_labels")
                .long("legacy-labels")
                .help("When running with --assembly, treat unresolved labels as 0xFFFF"),
        )
        .arg(
            Arg::with_name("instr_size")
                .long("instr-size")
                .takes_value(true)
                .value_name("BYTES")
                .help("Sets the size of instruction memory"),
        )
        .arg(
            Arg::with_name("data_size")
                .long("data-size")
                .takes_value(true)
                .value_name("BYTES")
                .help("Sets the size of data memory"),
        )
        .arg(
            Arg::with_name("dump_registers")
                .long("dump-registers")
                .help("Prints register contents after the program halts"),
        )
        .get_matches();

    let instr_size = parse_size_arg(matches.value_of("instr_size"), DEFAULT_INSTRUCTION_MEMORY_SIZE);
    let data_size = parse_size_arg(matches.value_of("data_size"), DEFAULT_DATA_MEMORY_SIZE);

    let object_bytes = match matches.value_of("PROGRAM") {
        Some(program_path) => match fs::read(program_path) {
            Ok(bytes) => bytes,
            Err(err) => {
                let err = uisa::AssemblerError::InvalidInput(err.to_string());
                eprintln!("{err}");
                process::exit(err.exit_code());
            }
        },
        None => {
            let assembly_path = matches.value_of("assembly").unwrap();
            let source = match fs::read_to_string(assembly_path) {
                Ok(source) => source,
                Err(err) => {
                    let err = uisa::AssemblerError::InvalidInput(err.to_string());
                    eprintln!("{err}");
                    process::exit(err.exit_code());
                }
            };
            let mode = if matches.is_present("legacy_labels") {
                LabelResolution::Legacy
            } else {
                LabelResolution::Strict
            };
            match assemble(&source, mode) {
                Ok(bytes) => bytes,
                Err(err) => {
                    eprintln!("{err}");
                    process::exit(err.exit_code());
                }
            }
        }
    };

    let mut memory = Memory::new(instr_size, data_size);
    if let Err(err) = memory.instructions.load(&object_bytes) {
        eprintln!("loading program failed: {err}");
        process::exit(err.exit_code());
    }

    let mut cpu = Cpu::new();
    if let Err(err) = cpu.run(&mut memory) {
        eprintln!("{err}");
        process::exit(err.exit_code());
    }

    if matches.is_present("dump_registers") {
        dump_registers(&cpu);
    }
}

fn parse_size_arg(value: Option<&str>, default: usize) -> usize {
    match value {
        Some(text) => match text.parse() {
            Ok(size) => size,
            Err(err) => {
                eprintln!("invalid size \"{text}\": {err}");
                process::exit(1);
            }
        },
        None => default,
    }
}

/// Register dump grounded in the original C emulator's
/// `emulator_dump_registers` debug aid.
fn dump_registers(cpu: &Cpu) {
    for (index, value) in cpu.registers.iter().enumerate() {
        println!("R{index:<2} = 0x{value:04X}");
    }
    println!("IP   = 0x{:04X}", cpu.ip);
}
