pub mod check_principal_access_query;
