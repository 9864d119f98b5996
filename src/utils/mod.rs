pub mod paths;
pub mod string;

pub use paths::exe_dir;
pub use string::{format_number_with_separators, format_two_decimals, to_title_case};
