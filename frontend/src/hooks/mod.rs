pub mod use_duplicate_check;

pub use use_duplicate_check::use_duplicate_check;
