/// Problem set and its test cases.
pub mod catalogue;
mod component;
/// Reference solutions the test cases run against.
pub mod solutions;

pub use catalogue::{Answer, CaseInput, CaseOutcome, Problem, catalogue};
pub use component::ProblemSolver;
pub use solutions::{inorder_traversal, tree_from_level_order, two_sum, valid_parentheses};
