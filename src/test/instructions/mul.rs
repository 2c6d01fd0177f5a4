use crate::test::*;

#[test]
fn widens_across_two_registers() {
    let (cpu, _) =
        run_program("set_const 0xFFFF, R1\nset_const 2, R2\nmul R1, R2, R3\nready\n");
    assert_eq!(cpu.registers[3], 0xFFFE);
    assert_eq!(cpu.registers[4], 1);
}

#[test]
fn dst_15_wraps_high_word_into_r0() {
    let (cpu, _) =
        run_program("set_const 0xFFFF, R1\nset_const 2, R2\nmul R1, R2, R15\nready\n");
    assert_eq!(cpu.registers[15], 0xFFFE);
    assert_eq!(cpu.registers[0], 1);
}
