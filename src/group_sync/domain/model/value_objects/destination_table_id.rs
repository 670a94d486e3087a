use regex::Regex;

use crate::group_sync::domain::model::enums::group_sync_domain_error::GroupSyncDomainError;

lazy_static::lazy_static! {
    static ref DATASET_ID_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_]{1,1024}$").expect("valid regex");
    static ref TABLE_ID_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_\- ]{1,1024}$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DestinationTableId {
    project_id: String,
    dataset_id: String,
    table_id: String,
}

impl DestinationTableId {
    pub fn new(
        project_id: String,
        dataset_id: String,
        table_id: String,
    ) -> Result<Self, GroupSyncDomainError> {
        let project_id = project_id.trim().to_string();
        let dataset_id = dataset_id.trim().to_string();
        let table_id = table_id.trim().to_string();

        if project_id.is_empty() {
            return Err(GroupSyncDomainError::InvalidDestinationTable(
                "project id is empty".to_string(),
            ));
        }
        if !DATASET_ID_REGEX.is_match(&dataset_id) {
            return Err(GroupSyncDomainError::InvalidDatasetId(dataset_id));
        }
        if !TABLE_ID_REGEX.is_match(&table_id) {
            return Err(GroupSyncDomainError::InvalidTableId(table_id));
        }

        Ok(Self {
            project_id,
            dataset_id,
            table_id,
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }
    pub fn dataset_id(&self) -> &str {
        &self.dataset_id
    }
    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}.{}", self.project_id, self.dataset_id, self.table_id)
    }
}
