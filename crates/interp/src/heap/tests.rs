use cyclo_sequence::{Sequence, SequenceError};
use pretty_assertions::assert_eq;

use super::Heap;
use crate::error::InterpError;
use crate::value::Value;

fn ints(vals: &[i64], cyclic: bool) -> Sequence<Value> {
	Sequence::from_vec(vals.iter().copied().map(Value::Int).collect(), cyclic)
}

#[test]
fn test_alloc_get_release() {
	let mut heap = Heap::new();
	let id = heap.alloc(ints(&[1, 2], false));
	assert_eq!(heap.len(), 1);
	assert_eq!(heap.get(id).unwrap().len(), 2);

	let seq = heap.release(id).unwrap();
	assert_eq!(seq, ints(&[1, 2], false));
	assert!(heap.is_empty());
	assert_eq!(heap.get(id), Err(InterpError::DanglingSequence(id)));
	assert_eq!(heap.release(id), Err(InterpError::DanglingSequence(id)));
}

#[test]
fn test_set_slice_between_sequences() {
	let mut heap = Heap::new();
	let dst = heap.alloc(ints(&[1, 2, 3], false));
	let src = heap.alloc(ints(&[7, 8, 9], false));

	heap.set_slice(dst, 1, 2, src).unwrap();
	assert_eq!(heap.get(dst).unwrap(), &ints(&[1, 7, 8, 9, 3], false));
	assert_eq!(heap.get(src).unwrap(), &ints(&[7, 8, 9], false));
}

#[test]
fn test_set_slice_aliased_matches_copy() {
	let mut heap = Heap::new();
	let aliased = heap.alloc(ints(&[1, 2, 3, 4], false));
	let target = heap.alloc(ints(&[1, 2, 3, 4], false));
	let copy = heap.alloc(ints(&[1, 2, 3, 4], false));

	heap.set_slice(aliased, 0, 2, aliased).unwrap();
	heap.set_slice(target, 0, 2, copy).unwrap();
	assert_eq!(heap.get(aliased).unwrap(), heap.get(target).unwrap());
}

#[test]
fn test_set_slice_propagates_sequence_errors() {
	let mut heap = Heap::new();
	let dst = heap.alloc(ints(&[1, 2, 3, 4], true));
	let src = heap.alloc(ints(&[9], false));

	assert_eq!(
		heap.set_slice(dst, 3, 5, src),
		Err(InterpError::Sequence(SequenceError::CyclicBridgeSize { expected: 2, actual: 1 }))
	);
	assert_eq!(heap.get(dst).unwrap(), &ints(&[1, 2, 3, 4], true));
}

#[test]
fn test_set_slice_dangling_handles() {
	let mut heap = Heap::new();
	let live = heap.alloc(ints(&[1], false));
	let gone = heap.alloc(ints(&[2], false));
	heap.release(gone).unwrap();

	assert_eq!(heap.set_slice(live, 0, 1, gone), Err(InterpError::DanglingSequence(gone)));
	assert_eq!(heap.set_slice(gone, 0, 1, live), Err(InterpError::DanglingSequence(gone)));
}
