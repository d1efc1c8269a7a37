//! Index normalization.
//!
//! Bounded sequences use a single-pass clamp: a negative index is offset by
//! the length once, and whatever still falls outside `[0, len]` is clamped.
//! Cyclic sequences use floor modulo, so every integer names a position.

/// Length as a signed index. Buffers never exceed `isize::MAX` elements.
#[inline]
fn signed_len(len: usize) -> i64 {
	i64::try_from(len).unwrap_or(i64::MAX)
}

/// Normalizes a bounded slice bound into `[0, len]`.
///
/// Only one wrap is applied: `-1` names the last element, but `-len - 1`
/// clamps to `0` rather than wrapping again.
#[inline]
pub fn clamp_index(index: i64, len: usize) -> usize {
	let len_i = signed_len(len);
	let index = if index < 0 { index + len_i } else { index };
	if index <= 0 {
		0
	} else if index >= len_i {
		len
	} else {
		index as usize
	}
}

/// Floor modulo of `index` by `len`, always in `[0, len)`.
///
/// # Panics
///
/// Panics if `len` is zero.
#[inline]
pub fn wrap_index(index: i64, len: usize) -> usize {
	index.rem_euclid(signed_len(len)) as usize
}

/// Resolves a single-element position.
///
/// Cyclic sequences wrap any index; bounded sequences offset negative
/// indices by the length once and reject anything outside `[0, len)`.
/// Returns `None` when no element is addressed, including every index into
/// an empty sequence.
#[inline]
pub fn element_index(index: i64, len: usize, cyclic: bool) -> Option<usize> {
	if len == 0 {
		return None;
	}
	if cyclic {
		return Some(wrap_index(index, len));
	}
	let len_i = signed_len(len);
	let index = if index < 0 { index + len_i } else { index };
	(0..len_i).contains(&index).then_some(index as usize)
}

/// Resolves an insertion point in `[0, len]`.
///
/// Cyclic sequences wrap (an empty cyclic sequence inserts at `0`); bounded
/// sequences offset negative indices once and reject the rest.
#[inline]
pub(crate) fn insert_index(index: i64, len: usize, cyclic: bool) -> Option<usize> {
	if cyclic {
		return Some(if len == 0 { 0 } else { wrap_index(index, len) });
	}
	let len_i = signed_len(len);
	let index = if index < 0 { index + len_i } else { index };
	(0..=len_i).contains(&index).then_some(index as usize)
}
