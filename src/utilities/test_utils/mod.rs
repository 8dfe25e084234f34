pub mod drng;
pub mod random_poly;
