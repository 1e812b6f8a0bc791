mod helpers;
mod mention_tests;
mod unk_tests;
