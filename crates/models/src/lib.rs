pub mod db;
pub mod errors;
pub mod form;
pub mod source_data;
pub mod source_record;

#[cfg(test)]
mod tests;
