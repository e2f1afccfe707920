pub mod constants;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;
