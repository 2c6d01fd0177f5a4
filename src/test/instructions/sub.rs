use crate::test::*;

#[test]
fn subtracts_two_registers() {
    let (cpu, _) = run_program("set_const 50, R1\nset_const 8, R2\nsub R1, R2, R3\nready\n");
    assert_eq!(cpu.registers[3], 42);
}

#[test]
fn wraps_on_underflow() {
    let (cpu, _) = run_program("set_const 0, R1\nset_const 1, R2\nsub R1, R2, R3\nready\n");
    assert_eq!(cpu.registers[3], 0xFFFF);
}
