use uuid::Uuid;

use crate::group_sync::domain::model::value_objects::{
    customer_id::CustomerId, destination_table_id::DestinationTableId,
};

#[derive(Clone, Debug)]
pub struct SyncUserGroupsCommand {
    run_id: Uuid,
    customer_id: CustomerId,
    destination: DestinationTableId,
}

impl SyncUserGroupsCommand {
    pub fn new(customer_id: CustomerId, destination: DestinationTableId) -> Self {
        Self {
            run_id: Uuid::now_v7(),
            customer_id,
            destination,
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }
    pub fn destination(&self) -> &DestinationTableId {
        &self.destination
    }
}
