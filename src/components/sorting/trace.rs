//! Instrumented sorting algorithms.
//!
//! Each algorithm runs to completion on a private copy of the input and
//! records every comparison, swap and write as a [`SortEvent`]. Replaying the
//! events on a [`SortSnapshot`](super::state::SortSnapshot) reproduces every
//! intermediate state of the array.

/// Sorting algorithms offered by the visualizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
	/// Lomuto-partition quicksort.
	#[default]
	Quick,
	/// Top-down merge sort.
	Merge,
	/// Adjacent swaps, shrinking the unsorted tail.
	Bubble,
	/// Select the minimum of the unsorted tail.
	Selection,
	/// Shift each value left into place.
	Insertion,
	/// Max-heap sort.
	Heap,
	/// LSD radix sort, base 10.
	Radix,
	/// Range buckets, each insertion sorted.
	Bucket,
}

impl SortAlgorithm {
	/// Every algorithm, in menu order.
	pub const ALL: [SortAlgorithm; 8] = [
		SortAlgorithm::Quick,
		SortAlgorithm::Merge,
		SortAlgorithm::Bubble,
		SortAlgorithm::Selection,
		SortAlgorithm::Insertion,
		SortAlgorithm::Heap,
		SortAlgorithm::Radix,
		SortAlgorithm::Bucket,
	];

	/// Stable identifier used as the `<option>` value.
	pub fn id(self) -> &'static str {
		match self {
			SortAlgorithm::Quick => "quick",
			SortAlgorithm::Merge => "merge",
			SortAlgorithm::Bubble => "bubble",
			SortAlgorithm::Selection => "selection",
			SortAlgorithm::Insertion => "insertion",
			SortAlgorithm::Heap => "heap",
			SortAlgorithm::Radix => "radix",
			SortAlgorithm::Bucket => "bucket",
		}
	}

	/// Inverse of [`SortAlgorithm::id`].
	pub fn from_id(id: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|a| a.id() == id)
	}

	/// Display name.
	pub fn name(self) -> &'static str {
		match self {
			SortAlgorithm::Quick => "Quick Sort",
			SortAlgorithm::Merge => "Merge Sort",
			SortAlgorithm::Bubble => "Bubble Sort",
			SortAlgorithm::Selection => "Selection Sort",
			SortAlgorithm::Insertion => "Insertion Sort",
			SortAlgorithm::Heap => "Heap Sort",
			SortAlgorithm::Radix => "Radix Sort",
			SortAlgorithm::Bucket => "Bucket Sort",
		}
	}

	/// Average time complexity, for display.
	pub fn complexity(self) -> &'static str {
		match self {
			SortAlgorithm::Quick | SortAlgorithm::Merge | SortAlgorithm::Heap => "O(n log n)",
			SortAlgorithm::Bubble | SortAlgorithm::Selection | SortAlgorithm::Insertion => "O(n²)",
			SortAlgorithm::Radix => "O(d × n)",
			SortAlgorithm::Bucket => "O(n + k)",
		}
	}
}

/// One atomic step of a sorting run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortEvent {
	/// Indices being compared (or inspected, for the distribution sorts).
	Compare(Vec<usize>),
	/// Exchange two values.
	Swap(usize, usize),
	/// Overwrite one slot, used by merge, insertion and the distribution sorts.
	Write { index: usize, value: u32 },
	/// The slot holds its final value.
	MarkSorted(usize),
	/// Drop comparison and swap highlights.
	ClearHighlights,
	/// Run completed; every index is sorted.
	Finish,
}

struct Recorder {
	values: Vec<u32>,
	events: Vec<SortEvent>,
}

impl Recorder {
	fn compare(&mut self, indices: &[usize]) {
		self.events.push(SortEvent::Compare(indices.to_vec()));
	}

	fn swap(&mut self, i: usize, j: usize) {
		self.values.swap(i, j);
		self.events.push(SortEvent::Swap(i, j));
	}

	fn write(&mut self, index: usize, value: u32) {
		self.values[index] = value;
		self.events.push(SortEvent::Write { index, value });
	}

	fn mark_sorted(&mut self, index: usize) {
		self.events.push(SortEvent::MarkSorted(index));
	}

	fn clear(&mut self) {
		self.events.push(SortEvent::ClearHighlights);
	}
}

/// Run `algorithm` over a copy of `input` and return its event trace.
pub fn trace(algorithm: SortAlgorithm, input: &[u32]) -> Vec<SortEvent> {
	let mut rec = Recorder {
		values: input.to_vec(),
		events: Vec::new(),
	};
	if !rec.values.is_empty() {
		match algorithm {
			SortAlgorithm::Quick => quick_sort(&mut rec),
			SortAlgorithm::Merge => {
				let end = rec.values.len() - 1;
				merge_sort(&mut rec, 0, end);
			}
			SortAlgorithm::Bubble => bubble_sort(&mut rec),
			SortAlgorithm::Selection => selection_sort(&mut rec),
			SortAlgorithm::Insertion => insertion_sort(&mut rec),
			SortAlgorithm::Heap => heap_sort(&mut rec),
			SortAlgorithm::Radix => radix_sort(&mut rec),
			SortAlgorithm::Bucket => bucket_sort(&mut rec),
		}
	}
	debug_assert!(rec.values.is_sorted());
	rec.events.push(SortEvent::Finish);
	rec.events
}

fn quick_sort(rec: &mut Recorder) {
	let high = rec.values.len() - 1;
	quick_sort_range(rec, 0, high);
}

fn quick_sort_range(rec: &mut Recorder, low: usize, high: usize) {
	if low >= high {
		if low == high {
			rec.mark_sorted(low);
		}
		return;
	}
	let pivot = partition(rec, low, high);
	rec.mark_sorted(pivot);
	if pivot > low {
		quick_sort_range(rec, low, pivot - 1);
	}
	quick_sort_range(rec, pivot + 1, high);
}

// Lomuto partition around the last element.
fn partition(rec: &mut Recorder, low: usize, high: usize) -> usize {
	let pivot = rec.values[high];
	let mut store = low;
	for j in low..high {
		rec.compare(&[j, high]);
		if rec.values[j] < pivot {
			if store != j {
				rec.swap(store, j);
			}
			store += 1;
		}
	}
	if store != high {
		rec.swap(store, high);
	}
	rec.clear();
	store
}

fn merge_sort(rec: &mut Recorder, start: usize, end: usize) {
	if start >= end {
		return;
	}
	let mid = start + (end - start) / 2;
	merge_sort(rec, start, mid);
	merge_sort(rec, mid + 1, end);
	merge(rec, start, mid, end);
}

fn merge(rec: &mut Recorder, start: usize, mid: usize, end: usize) {
	let left = rec.values[start..=mid].to_vec();
	let right = rec.values[mid + 1..=end].to_vec();
	let (mut i, mut j, mut k) = (0, 0, start);

	while i < left.len() && j < right.len() {
		rec.compare(&[start + i, mid + 1 + j]);
		if left[i] <= right[j] {
			rec.write(k, left[i]);
			i += 1;
		} else {
			rec.write(k, right[j]);
			j += 1;
		}
		k += 1;
	}
	for &value in left[i..].iter().chain(&right[j..]) {
		rec.write(k, value);
		k += 1;
	}
	rec.clear();
}

fn bubble_sort(rec: &mut Recorder) {
	let n = rec.values.len();
	for i in 0..n - 1 {
		for j in 0..n - i - 1 {
			rec.compare(&[j, j + 1]);
			if rec.values[j] > rec.values[j + 1] {
				rec.swap(j, j + 1);
			}
		}
		rec.mark_sorted(n - 1 - i);
	}
}

fn selection_sort(rec: &mut Recorder) {
	let n = rec.values.len();
	for i in 0..n - 1 {
		let mut min = i;
		for j in i + 1..n {
			rec.compare(&[min, j]);
			if rec.values[j] < rec.values[min] {
				min = j;
			}
		}
		if min != i {
			rec.swap(i, min);
		}
		rec.mark_sorted(i);
	}
}

fn insertion_sort(rec: &mut Recorder) {
	for i in 1..rec.values.len() {
		let key = rec.values[i];
		rec.compare(&[i]);
		let mut j = i;
		while j > 0 && rec.values[j - 1] > key {
			rec.compare(&[j - 1, j]);
			let shifted = rec.values[j - 1];
			rec.write(j, shifted);
			j -= 1;
		}
		if j != i {
			rec.write(j, key);
		}
	}
}

fn heap_sort(rec: &mut Recorder) {
	let n = rec.values.len();
	for i in (0..n / 2).rev() {
		sift_down(rec, n, i);
	}
	for end in (1..n).rev() {
		rec.swap(0, end);
		sift_down(rec, end, 0);
		rec.mark_sorted(end);
	}
}

// Max-heap sift over the first `len` slots.
fn sift_down(rec: &mut Recorder, len: usize, mut root: usize) {
	loop {
		let (left, right) = (2 * root + 1, 2 * root + 2);
		let inspected: Vec<usize> = [root, left, right].into_iter().filter(|&i| i < len).collect();
		rec.compare(&inspected);

		let mut largest = root;
		if left < len && rec.values[left] > rec.values[largest] {
			largest = left;
		}
		if right < len && rec.values[right] > rec.values[largest] {
			largest = right;
		}
		if largest == root {
			return;
		}
		rec.swap(root, largest);
		root = largest;
	}
}

fn radix_sort(rec: &mut Recorder) {
	let max = rec.values.iter().copied().max().unwrap_or(0) as u64;
	let mut exp: u64 = 1;
	while max / exp > 0 {
		counting_pass(rec, exp);
		exp *= 10;
	}
}

// Stable counting sort on one decimal digit.
fn counting_pass(rec: &mut Recorder, exp: u64) {
	let n = rec.values.len();
	let digit = |v: u32| ((v as u64 / exp) % 10) as usize;
	let mut count = [0usize; 10];
	for i in 0..n {
		count[digit(rec.values[i])] += 1;
		rec.compare(&[i]);
	}
	for d in 1..10 {
		count[d] += count[d - 1];
	}
	let mut output = vec![0; n];
	for &value in rec.values.iter().rev() {
		let d = digit(value);
		count[d] -= 1;
		output[count[d]] = value;
	}
	for (i, value) in output.into_iter().enumerate() {
		rec.write(i, value);
	}
	rec.clear();
}

fn bucket_sort(rec: &mut Recorder) {
	let n = rec.values.len();
	let min = rec.values.iter().copied().min().unwrap_or(0);
	let max = rec.values.iter().copied().max().unwrap_or(0);
	let bucket_count = ((n as f64).sqrt() as usize).max(1);
	let bucket_size = ((max - min) as usize + 1).div_ceil(bucket_count);

	let mut buckets: Vec<Vec<u32>> = vec![Vec::new(); bucket_count];
	for i in 0..n {
		let value = rec.values[i];
		let bucket = ((value - min) as usize / bucket_size).min(bucket_count - 1);
		buckets[bucket].push(value);
		rec.compare(&[i]);
	}

	let mut index = 0;
	for mut bucket in buckets {
		bucket.sort_unstable();
		for value in bucket {
			rec.write(index, value);
			index += 1;
		}
	}
	rec.clear();
}

#[cfg(test)]
mod tests {
	use super::*;

	fn final_values(algorithm: SortAlgorithm, input: &[u32]) -> Vec<u32> {
		let mut values = input.to_vec();
		for event in trace(algorithm, input) {
			match event {
				SortEvent::Swap(i, j) => values.swap(i, j),
				SortEvent::Write { index, value } => values[index] = value,
				_ => {}
			}
		}
		values
	}

	#[test]
	fn every_algorithm_sorts_small_input() {
		let input = [64, 34, 25, 12, 22, 11, 90, 25];
		let mut expected = input.to_vec();
		expected.sort_unstable();
		for algorithm in SortAlgorithm::ALL {
			assert_eq!(final_values(algorithm, &input), expected, "{}", algorithm.name());
		}
	}

	#[test]
	fn empty_input_only_finishes() {
		for algorithm in SortAlgorithm::ALL {
			assert_eq!(trace(algorithm, &[]), vec![SortEvent::Finish]);
		}
	}

	#[test]
	fn single_element_needs_no_moves() {
		for algorithm in SortAlgorithm::ALL {
			let events = trace(algorithm, &[42]);
			assert!(
				!events
					.iter()
					.any(|e| matches!(e, SortEvent::Swap(..))),
				"{}",
				algorithm.name()
			);
			assert_eq!(events.last(), Some(&SortEvent::Finish));
		}
	}

	#[test]
	fn bubble_compares_adjacent_pairs() {
		let events = trace(SortAlgorithm::Bubble, &[3, 2, 1]);
		assert_eq!(events[0], SortEvent::Compare(vec![0, 1]));
		assert_eq!(events[1], SortEvent::Swap(0, 1));
		let compares = events
			.iter()
			.filter(|e| matches!(e, SortEvent::Compare(_)))
			.count();
		assert_eq!(compares, 3);
	}

	#[test]
	fn ids_round_trip() {
		for algorithm in SortAlgorithm::ALL {
			assert_eq!(SortAlgorithm::from_id(algorithm.id()), Some(algorithm));
		}
		assert_eq!(SortAlgorithm::from_id("bogo"), None);
	}
}
