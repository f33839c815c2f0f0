//! Property tests over arbitrary operation sequences.
//!
//! The invariant under test: across any interleaving of steal, clear, and
//! overwrite, every live value passes through its release function exactly
//! once, the nil value is never released, and a stolen value is never
//! released by the slot it was taken from.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use proptest::prelude::*;

use ebb::{guard, slot};

const NIL: i32 = -1;

#[derive(Debug, Clone, Copy)]
enum SlotOp {
    Clear,
    Steal,
    Set(i32),
}

fn slot_op() -> impl Strategy<Value = SlotOp> {
    prop_oneof![
        Just(SlotOp::Clear),
        Just(SlotOp::Steal),
        (0..64i32).prop_map(SlotOp::Set),
    ]
}

#[derive(Debug, Clone, Copy)]
enum GuardOp {
    Clear,
    Steal,
}

fn guard_op() -> impl Strategy<Value = GuardOp> {
    prop_oneof![Just(GuardOp::Clear), Just(GuardOp::Steal)]
}

proptest! {
    #[test]
    fn raw_slot_releases_each_live_value_exactly_once(
        initial in 0..64i32,
        ops in proptest::collection::vec(slot_op(), 0..24),
    ) {
        let released = Rc::new(RefCell::new(Vec::new()));
        let mut expected: Vec<i32> = Vec::new();

        let mut fd = initial;
        // reference model: what the slot should currently hold, if live
        let mut model = Some(initial);

        for op in &ops {
            match op {
                SlotOp::Clear => {
                    let sink = released.clone();
                    slot::clear_raw(&mut fd, NIL, move |v| sink.borrow_mut().push(v));
                    if let Some(v) = model.take() {
                        expected.push(v);
                    }
                }
                SlotOp::Steal => {
                    let got = slot::steal_raw(&mut fd, NIL);
                    prop_assert_eq!(got, model.take().unwrap_or(NIL));
                }
                SlotOp::Set(v) => {
                    let sink = released.clone();
                    slot::clear_raw(&mut fd, NIL, move |x| sink.borrow_mut().push(x));
                    if let Some(x) = model.take() {
                        expected.push(x);
                    }
                    fd = *v;
                    model = Some(*v);
                }
            }
        }

        // scope exit: whatever is still live gets released
        let sink = released.clone();
        slot::clear_raw(&mut fd, NIL, move |v| sink.borrow_mut().push(v));
        if let Some(v) = model.take() {
            expected.push(v);
        }

        prop_assert_eq!(&*released.borrow(), &expected);
        prop_assert!(!released.borrow().contains(&NIL));
        prop_assert_eq!(fd, NIL);
    }

    #[test]
    fn guard_releases_at_most_once(
        ops in proptest::collection::vec(guard_op(), 0..8),
    ) {
        let count = Rc::new(Cell::new(0u32));
        {
            let hook = {
                let count = count.clone();
                move |_: u32| count.set(count.get() + 1)
            };
            let mut scratch = guard(7u32, hook);
            for op in &ops {
                match op {
                    GuardOp::Clear => scratch.clear(),
                    GuardOp::Steal => {
                        let _ = scratch.steal();
                    }
                }
            }
        }

        // a steal before any clear keeps the value alive past the guard;
        // anything else releases exactly once, at clear or at scope exit
        let expected = match ops.first() {
            Some(GuardOp::Steal) => 0,
            _ => 1,
        };
        prop_assert_eq!(count.get(), expected);
    }
}
