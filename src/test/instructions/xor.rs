use crate::test::*;

#[test]
fn bitwise_xors_two_registers() {
    let (cpu, _) =
        run_program("set_const 0xFF00, R1\nset_const 0x0FF0, R2\nxor R1, R2, R3\nready\n");
    assert_eq!(cpu.registers[3], 0xF0F0);
}
