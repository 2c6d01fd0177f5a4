use crate::test::*;

#[test]
fn branches_when_nonzero() {
    let source = "set_const 1, R1\nbnz R1, skip\nset_const 99, R2\nskip: ready\n";
    let (cpu, _) = run_program(source);
    assert_eq!(cpu.registers[2], 0);
}

#[test]
fn falls_through_when_zero() {
    let source = "set_const 0, R1\nbnz R1, skip\nset_const 99, R2\nskip: ready\n";
    let (cpu, _) = run_program(source);
    assert_eq!(cpu.registers[2], 99);
}

#[test]
fn can_branch_to_a_plain_immediate_target() {
    let (cpu, _) = run_program("set_const 1, R1\nbnz R1, 0x000C\nset_const 1, R2\nready\n");
    assert_eq!(cpu.registers[2], 0);
}
