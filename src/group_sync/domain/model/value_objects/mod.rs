pub mod customer_id;
pub mod destination_table_id;
