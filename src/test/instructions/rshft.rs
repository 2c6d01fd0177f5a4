use crate::test::*;

#[test]
fn shifts_logically() {
    let (cpu, _) = run_program("set_const 0xFFFF, R1\nset_const 4, R2\nrshft R1, R2, R3\nready\n");
    assert_eq!(cpu.registers[3], 0x0FFF);
}

#[test]
fn count_of_sixteen_or_more_yields_zero() {
    let (cpu, _) =
        run_program("set_const 0xFFFF, R1\nset_const 16, R2\nrshft R1, R2, R3\nready\n");
    assert_eq!(cpu.registers[3], 0);
}
