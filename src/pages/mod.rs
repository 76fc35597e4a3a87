pub mod home;
pub mod lessons;
pub mod mentor;
pub mod not_found;
pub mod practice;
pub mod problems;
