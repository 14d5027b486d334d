pub mod json_file_availability_repo;
pub mod memory_availability_repo;
