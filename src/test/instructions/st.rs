use crate::test::*;

#[test]
fn writes_little_endian_word_to_data_memory() {
    let (_, memory) =
        run_program("set_const 0xABCD, R1\nset_const 0, R2\nset_const 2, R3\nst R1, R2, R3\nready\n");
    assert_eq!(&memory.data.bytes()[2..4], [0xCD, 0xAB]);
}
