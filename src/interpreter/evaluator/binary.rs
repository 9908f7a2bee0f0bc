/// Dispatch of binary operators to their handlers.
pub mod core;
/// Logical `&` and `|`.
pub mod logic;
/// Equality and relational comparisons.
pub mod comparison;
/// Arithmetic on numbers.
pub mod arithmetic;
