pub mod formatting;
pub mod table;
