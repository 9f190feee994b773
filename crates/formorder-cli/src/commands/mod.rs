pub mod check;
pub mod layout;
pub mod output;
pub mod reorder;
