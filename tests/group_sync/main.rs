mod bigquery_repository_tests;
