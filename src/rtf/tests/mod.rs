mod test_utils;
mod picture_tests;
mod decoder_tests;
