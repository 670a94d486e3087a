pub mod bigquery_user_groups_table_repository_impl;
