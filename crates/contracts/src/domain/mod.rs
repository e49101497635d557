pub mod a001_business;
