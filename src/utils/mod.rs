pub mod fs;
pub mod test_utils;
pub mod url;
