pub mod bigquery;
pub mod user_groups_table_repository;
