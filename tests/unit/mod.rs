mod test_error;
mod utils;
