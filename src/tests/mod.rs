mod utils;

mod filter_tests;
