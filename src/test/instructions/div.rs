use crate::error::EmulatorError;
use crate::test::*;

#[test]
fn truncates_toward_zero() {
    let (cpu, _) = run_program("set_const 17, R1\nset_const 5, R2\ndiv R1, R2, R3\nready\n");
    assert_eq!(cpu.registers[3], 3);
}

#[test]
fn by_zero_is_an_error() {
    run_program_expecting_error(
        "set_const 17, R1\nset_const 0, R2\ndiv R1, R2, R3\nready\n",
        EmulatorError::DivisionByZero,
    );
}
