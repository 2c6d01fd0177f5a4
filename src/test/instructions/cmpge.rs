use crate::test::*;

#[test]
fn sets_one_when_greater_or_equal() {
    let (cpu, _) = run_program("set_const 5, R1\nset_const 5, R2\ncmpge R1, R2, R3\nready\n");
    assert_eq!(cpu.registers[3], 1);
}

#[test]
fn sets_zero_when_less() {
    let (cpu, _) = run_program("set_const 4, R1\nset_const 5, R2\ncmpge R1, R2, R3\nready\n");
    assert_eq!(cpu.registers[3], 0);
}
