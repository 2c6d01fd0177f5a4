use crate::test::*;

#[test]
fn halts_and_resets_ip() {
    let (cpu, _) = run_program("ready\n");
    assert_eq!(cpu.ip, 0);
    assert!(cpu.is_halted());
}
