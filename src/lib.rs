pub mod arith;

pub use arith::add;
