use crate::test::*;

#[test]
fn advances_without_changing_registers() {
    let (cpu, _) = run_program("nop\nready\n");
    assert_eq!(cpu.registers, [0; 16]);
}
