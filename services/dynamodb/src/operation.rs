use std::fmt::{Display, Formatter};

/// API version prefix of every `x-amz-target` value.
const TARGET_PREFIX: &str = "DynamoDB_20120810";

/// DynamoDB operations, selected through the `x-amz-target` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Read a single item.
    GetItem,
    /// Create or replace an item.
    PutItem,
    /// Update attributes of an item.
    UpdateItem,
    /// Delete a single item.
    DeleteItem,
    /// Read every item of a table.
    Scan,
    /// Create a table.
    CreateTable,
    /// Delete a table.
    DeleteTable,
    /// Change table settings.
    UpdateTable,
}

impl Operation {
    /// Operation name: `GetItem`
    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetItem => "GetItem",
            Operation::PutItem => "PutItem",
            Operation::UpdateItem => "UpdateItem",
            Operation::DeleteItem => "DeleteItem",
            Operation::Scan => "Scan",
            Operation::CreateTable => "CreateTable",
            Operation::DeleteTable => "DeleteTable",
            Operation::UpdateTable => "UpdateTable",
        }
    }

    /// Value of the `x-amz-target` header: `DynamoDB_20120810.GetItem`
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}.{}", self.name())
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
