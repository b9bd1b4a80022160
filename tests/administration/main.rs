
mod cloud_administration_tests;
