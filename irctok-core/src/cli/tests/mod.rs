mod args_tests;
mod run_tests;
