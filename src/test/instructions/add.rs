use crate::test::*;

#[test]
fn adds_two_registers() {
    let (cpu, _) = run_program("set_const 20, R1\nset_const 22, R2\nadd R1, R2, R3\nready\n");
    assert_eq!(cpu.registers[3], 42);
}

#[test]
fn wraps_on_overflow() {
    let (cpu, _) =
        run_program("set_const 0xFFFF, R1\nset_const 2, R2\nadd R1, R2, R3\nready\n");
    assert_eq!(cpu.registers[3], 1);
}
