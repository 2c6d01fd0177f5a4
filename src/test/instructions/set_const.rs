use crate::test::*;

#[test]
fn loads_a_sixteen_bit_literal() {
    let (cpu, _) = run_program("set_const 0x1234, R5\nready\n");
    assert_eq!(cpu.registers[5], 0x1234);
}

#[test]
fn decimal_literals_work_too() {
    let (cpu, _) = run_program("set_const 42, R5\nready\n");
    assert_eq!(cpu.registers[5], 42);
}
