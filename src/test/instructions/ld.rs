use crate::test::*;

#[test]
fn loads_from_a_computed_address() {
    let source = "\
        set_const 0xBEEF, R1\n\
        set_const 0, R2\n\
        set_const 4, R3\n\
        st R1, R2, R3\n\
        ld R2, R3, R4\n\
        ready\n";
    let (cpu, _) = run_program(source);
    assert_eq!(cpu.registers[4], 0xBEEF);
}
