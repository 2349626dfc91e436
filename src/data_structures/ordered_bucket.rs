use std::iter::{Copied, Zip};
use std::slice::Iter;

/// A sequence kept sorted by an order key.
///
/// Values are placed with [insert_index] instead of re-sorting the whole sequence,
/// so entries sharing the same order keep the sequence in which they were inserted.
#[derive(Clone, Debug)]
pub struct OrderedBucket<K, T> {
	orders: Vec<K>,
	values: Vec<T>,
}

impl<K, T> Default for OrderedBucket<K, T> {
	fn default() -> Self {
		Self {
			orders: Vec::new(),
			values: Vec::new(),
		}
	}
}

impl<K, T> OrderedBucket<K, T> {
	/// Create a new, empty [OrderedBucket].
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// The order keys, in bucket order.
	pub fn orders(&self) -> &[K] {
		&self.orders
	}

	/// The stored values, in bucket order.
	pub fn values(&self) -> &[T] {
		&self.values
	}
}

impl<K: Ord + Copy, T> OrderedBucket<K, T> {
	/// Insert `value` after every entry whose order is less than or equal to `order`.
	/// Returns the position the value was placed at.
	///
	/// # Arguments
	/// * `order` - The sort key of the new entry
	/// * `value` - The value to store
	pub fn insert(&mut self, order: K, value: T) -> usize {
		let index = insert_index(&self.orders, order);
		self.orders.insert(index, order);
		self.values.insert(index, value);
		index
	}

	/// Iterate over `(order, value)` pairs in bucket order.
	pub fn iter(&self) -> Zip<Copied<Iter<K>>, Iter<T>> {
		self.orders.iter().copied().zip(self.values.iter())
	}
}

/// Compute where `order` has to be inserted into the sorted `orders` so the sequence stays
/// sorted and equal keys stay in insertion sequence.
///
/// The common cases (empty, new front, new back) are answered without scanning;
/// anything else is found with a linear scan for the first bracketing pair.
pub fn insert_index<K: Ord + Copy>(orders: &[K], order: K) -> usize {
	let count = orders.len();

	match (orders.first(), orders.last()) {
		(Some(&first), _) if order < first => return 0,
		(_, Some(&last)) if order >= last => return count,
		(None, _) => return 0,
		_ => {},
	}

	orders
		.windows(2)
		.position(|pair| pair[0] <= order && order < pair[1])
		.map_or(count, |i| i + 1)
}
