pub mod constants;
pub mod lifecycle;
pub mod repository;
pub mod slug;
pub mod types;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;
