//! Greedy walkthroughs. Each function returns its answer together with the
//! narrated steps shown in the lesson player.

/// US coin denominations, largest first.
pub const US_COINS: [u32; 4] = [25, 10, 5, 1];

/// Coins used for an amount, largest denomination first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoinChange {
	/// `(coin, count)` for every coin actually used.
	pub counts: Vec<(u32, u32)>,
	/// Coins used in total.
	pub total_coins: u32,
	/// Narration of each choice.
	pub steps: Vec<String>,
}

fn coin_name(coin: u32) -> &'static str {
	match coin {
		25 => "quarters",
		10 => "dimes",
		5 => "nickels",
		1 => "pennies",
		_ => "coins",
	}
}

/// Take as many of each coin as fit, largest first. `coins` must be sorted
/// in descending order.
pub fn coin_change(amount: u32, coins: &[u32]) -> CoinChange {
	let mut steps = vec![format!("Starting with amount: ${}.{:02}", amount / 100, amount % 100)];
	let mut counts = Vec::new();
	let mut remaining = amount;
	for &coin in coins {
		if coin == 0 || remaining < coin {
			continue;
		}
		let count = remaining / coin;
		remaining -= coin * count;
		counts.push((coin, count));
		steps.push(format!(
			"Use {count} {} ({coin}¢ each): {count} × {coin}¢ = {}¢",
			coin_name(coin),
			coin * count
		));
		steps.push(format!("Remaining: {remaining}¢"));
	}
	let total_coins = counts.iter().map(|(_, count)| count).sum();
	CoinChange {
		counts,
		total_coins,
		steps,
	}
}

/// An activity occupying `start..finish`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity {
	/// Identifier shown in the steps.
	pub id: u32,
	/// Start time.
	pub start: u32,
	/// Finish time.
	pub finish: u32,
}

const fn activity(id: u32, start: u32, finish: u32) -> Activity {
	Activity { id, start, finish }
}

/// The classroom example set.
pub const ACTIVITIES: [Activity; 10] = [
	activity(1, 1, 4),
	activity(2, 3, 5),
	activity(3, 0, 6),
	activity(4, 5, 7),
	activity(5, 8, 9),
	activity(6, 5, 9),
	activity(7, 6, 10),
	activity(8, 8, 11),
	activity(9, 11, 12),
	activity(10, 2, 14),
];

/// Activities chosen by earliest finish.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivitySelection {
	/// Chosen activities in finish order.
	pub selected: Vec<Activity>,
	/// Narration of each choice.
	pub steps: Vec<String>,
}

/// Earliest-finish-first selection of non-overlapping activities.
pub fn activity_selection(activities: &[Activity]) -> ActivitySelection {
	let mut sorted = activities.to_vec();
	sorted.sort_by_key(|a| a.finish);
	let mut steps = vec![
		"Activities sorted by finish time:".to_string(),
		sorted
			.iter()
			.map(|a| format!("Activity {}: [{}, {}]", a.id, a.start, a.finish))
			.collect::<Vec<_>>()
			.join(", "),
	];
	let mut selected: Vec<Activity> = Vec::new();
	for a in sorted {
		match selected.last() {
			Some(last) if a.start < last.finish => {
				steps.push(format!(
					"Rejected Activity {}: [{}, {}] (conflicts with previous selection)",
					a.id, a.start, a.finish
				));
			}
			Some(last) => {
				steps.push(format!(
					"Selected Activity {}: [{}, {}] (starts after {})",
					a.id, a.start, a.finish, last.finish
				));
				selected.push(a);
			}
			None => {
				steps.push(format!("Selected Activity {}: [{}, {}]", a.id, a.start, a.finish));
				selected.push(a);
			}
		}
	}
	ActivitySelection { selected, steps }
}

/// Knapsack item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Item {
	/// Identifier shown in the steps.
	pub id: u32,
	/// Weight of the whole item.
	pub weight: u32,
	/// Value of the whole item.
	pub value: u32,
}

impl Item {
	/// Value per unit of weight.
	pub fn ratio(&self) -> f64 {
		self.value as f64 / self.weight as f64
	}
}

/// Items of the sample fractional knapsack.
pub const KNAPSACK_ITEMS: [Item; 3] = [
	Item { id: 1, weight: 20, value: 100 },
	Item { id: 2, weight: 30, value: 120 },
	Item { id: 3, weight: 10, value: 60 },
];

/// Capacity of the sample fractional knapsack.
pub const KNAPSACK_CAPACITY: u32 = 50;

/// Items taken, possibly in part, by value density.
#[derive(Clone, Debug, PartialEq)]
pub struct FractionalKnapsack {
	/// `(item id, fraction taken)`.
	pub taken: Vec<(u32, f64)>,
	/// Value packed, counting partial items.
	pub total_value: f64,
	/// Narration of each choice.
	pub steps: Vec<String>,
}

/// Fill by best value per weight, splitting the last item that fits.
pub fn fractional_knapsack(items: &[Item], capacity: u32) -> FractionalKnapsack {
	let mut sorted: Vec<Item> = items.iter().copied().filter(|i| i.weight > 0).collect();
	sorted.sort_by(|a, b| b.ratio().total_cmp(&a.ratio()));
	let mut steps = vec![
		format!("Knapsack capacity: {capacity}"),
		"Items sorted by value/weight ratio:".to_string(),
		sorted
			.iter()
			.map(|i| format!("Item {}: value={}, weight={}, ratio={}", i.id, i.value, i.weight, i.ratio()))
			.collect::<Vec<_>>()
			.join("; "),
	];
	let mut remaining = capacity;
	let mut total_value = 0.0;
	let mut taken = Vec::new();
	for item in sorted {
		if remaining >= item.weight {
			remaining -= item.weight;
			total_value += item.value as f64;
			taken.push((item.id, 1.0));
			steps.push(format!(
				"Take complete Item {}: weight={}, value={}",
				item.id, item.weight, item.value
			));
		} else if remaining > 0 {
			let fraction = remaining as f64 / item.weight as f64;
			total_value += item.value as f64 * fraction;
			taken.push((item.id, fraction));
			steps.push(format!(
				"Take {:.1}% of Item {}: weight={remaining}, value={:.1}",
				fraction * 100.0,
				item.id,
				item.value as f64 * fraction
			));
			remaining = 0;
		} else {
			steps.push(format!("Cannot take Item {}: no remaining capacity", item.id));
		}
		steps.push(format!("Remaining capacity: {remaining}, Total value: {total_value:.1}"));
	}
	FractionalKnapsack {
		taken,
		total_value,
		steps,
	}
}

/// Symbol frequencies of the Huffman sample.
pub const HUFFMAN_FREQUENCIES: [(char, u32); 6] =
	[('A', 45), ('B', 13), ('C', 12), ('D', 16), ('E', 9), ('F', 5)];

enum HuffmanNode {
	Leaf(char),
	Branch(Box<HuffmanNode>, Box<HuffmanNode>),
}

/// Huffman codes for a frequency table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Huffman {
	/// `(symbol, code)` in tree order, left branches first.
	pub codes: Vec<(char, String)>,
	/// Narration of each merge.
	pub steps: Vec<String>,
}

/// Repeatedly merge the two least frequent subtrees. Ties keep their
/// current order, and merged subtrees queue behind existing ones.
pub fn huffman(frequencies: &[(char, u32)]) -> Huffman {
	let mut steps = vec![
		"Initial frequencies:".to_string(),
		frequencies
			.iter()
			.map(|(c, f)| format!("{c}: {f}"))
			.collect::<Vec<_>>()
			.join(", "),
	];
	let mut queue: Vec<(String, u32, HuffmanNode)> = frequencies
		.iter()
		.map(|&(c, f)| (c.to_string(), f, HuffmanNode::Leaf(c)))
		.collect();

	while queue.len() > 1 {
		queue.sort_by_key(|(_, freq, _)| *freq);
		let left = queue.remove(0);
		let right = queue.remove(0);
		let label = format!("({}+{})", left.0, right.0);
		let freq = left.1 + right.1;
		steps.push(format!(
			"Merge {}({}) + {}({}) = {label}({freq})",
			left.0, left.1, right.0, right.1
		));
		queue.push((label, freq, HuffmanNode::Branch(Box::new(left.2), Box::new(right.2))));
	}

	let mut codes = Vec::new();
	if let Some((_, _, root)) = queue.pop() {
		collect_codes(&root, String::new(), &mut codes);
	}
	steps.push("Final Huffman codes:".to_string());
	steps.extend(codes.iter().map(|(c, code)| format!("{c}: {code}")));
	Huffman { codes, steps }
}

fn collect_codes(node: &HuffmanNode, prefix: String, out: &mut Vec<(char, String)>) {
	match node {
		HuffmanNode::Leaf(c) => {
			// A lone symbol still needs a one-bit code.
			let code = if prefix.is_empty() { "0".to_string() } else { prefix };
			out.push((*c, code));
		}
		HuffmanNode::Branch(left, right) => {
			collect_codes(left, format!("{prefix}0"), out);
			collect_codes(right, format!("{prefix}1"), out);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn coin_change_67() {
		let change = coin_change(67, &US_COINS);
		assert_eq!(change.counts, vec![(25, 2), (10, 1), (5, 1), (1, 2)]);
		assert_eq!(change.total_coins, 6);
		assert_eq!(change.steps[0], "Starting with amount: $0.67");
		assert_eq!(change.steps.last().map(String::as_str), Some("Remaining: 0¢"));
	}

	#[test]
	fn coin_change_zero() {
		let change = coin_change(0, &US_COINS);
		assert!(change.counts.is_empty());
		assert_eq!(change.total_coins, 0);
		assert_eq!(change.steps.len(), 1);
	}

	#[test]
	fn activity_selection_classic() {
		let result = activity_selection(&ACTIVITIES);
		let ids: Vec<u32> = result.selected.iter().map(|a| a.id).collect();
		assert_eq!(ids, vec![1, 4, 5, 9]);
		assert!(result.selected.windows(2).all(|w| w[1].start >= w[0].finish));
	}

	#[test]
	fn fractional_knapsack_splits_last_item() {
		let result = fractional_knapsack(&KNAPSACK_ITEMS, KNAPSACK_CAPACITY);
		assert!((result.total_value - 240.0).abs() < 1e-9);
		assert_eq!(result.taken[0], (3, 1.0));
		assert_eq!(result.taken[1], (1, 1.0));
		assert_eq!(result.taken[2].0, 2);
		assert!((result.taken[2].1 - 2.0 / 3.0).abs() < 1e-9);
	}

	#[test]
	fn huffman_codes() {
		let result = huffman(&HUFFMAN_FREQUENCIES);
		let codes: Vec<(char, &str)> = result.codes.iter().map(|(c, s)| (*c, s.as_str())).collect();
		assert_eq!(
			codes,
			vec![('A', "0"), ('C', "100"), ('B', "101"), ('F', "1100"), ('E', "1101"), ('D', "111")]
		);
		assert!(result.steps.contains(&"Merge F(5) + E(9) = (F+E)(14)".to_string()));
	}

	#[test]
	fn huffman_single_symbol() {
		assert_eq!(huffman(&[('Z', 3)]).codes, vec![('Z', "0".to_string())]);
	}
}
