use crate::test::*;

#[test]
fn bitwise_ors_two_registers() {
    let (cpu, _) =
        run_program("set_const 0xF000, R1\nset_const 0x0F00, R2\nor R1, R2, R3\nready\n");
    assert_eq!(cpu.registers[3], 0xFF00);
}
