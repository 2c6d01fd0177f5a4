use crate::test::*;

#[test]
fn bitwise_ands_two_registers() {
    let (cpu, _) =
        run_program("set_const 0xF0F0, R1\nset_const 0xFF00, R2\nand R1, R2, R3\nready\n");
    assert_eq!(cpu.registers[3], 0xF000);
}
