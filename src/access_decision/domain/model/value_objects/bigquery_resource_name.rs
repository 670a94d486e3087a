use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BigQueryResourceName(String);

impl BigQueryResourceName {
    pub fn new(project_id: &str, dataset: &str, view: &str) -> Self {
        Self(format!(
            "//bigquery.googleapis.com/projects/{project_id}/datasets/{dataset}/tables/{view}"
        ))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BigQueryResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
