// capuchin-bytecode - Property-based tests for the instruction codec
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Property-based tests for the encode/decode round trip.
//!
//! For every opcode and every in-range operand tuple, decoding what `make`
//! encoded must return the original operands and consume exactly the sum of
//! the definition's operand widths.

use capuchin_bytecode::{make, read_operands, Op};
use proptest::prelude::*;

fn any_op() -> impl Strategy<Value = Op> {
    prop::sample::select(Op::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn make_read_operands_round_trip(
        op in any_op(),
        raw in prop::collection::vec(0usize..=u16::MAX as usize, 2),
    ) {
        let def = op.definition();

        // Clamp each drawn operand to its slot's width.
        let operands: Vec<usize> = def
            .operand_widths
            .iter()
            .zip(&raw)
            .map(|(width, value)| match width {
                1 => value & 0xff,
                _ => value & 0xffff,
            })
            .collect();

        let ins = make(op, &operands);
        prop_assert_eq!(ins[0], op as u8);
        prop_assert_eq!(ins.len(), 1 + def.operand_widths.iter().sum::<usize>());

        let (decoded, read) = read_operands(def, &ins[1..]);
        prop_assert_eq!(read, def.operand_widths.iter().sum::<usize>());
        prop_assert_eq!(decoded, operands);
    }

    #[test]
    fn every_opcode_byte_round_trips(op in any_op()) {
        prop_assert_eq!(Op::from_byte(op as u8), Some(op));
        prop_assert_eq!(Op::lookup(op as u8).unwrap().name, op.definition().name);
    }
}
