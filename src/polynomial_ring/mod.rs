pub mod operand;
pub mod poly;
