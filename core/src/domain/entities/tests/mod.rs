mod account_tests;
mod token_tests;
