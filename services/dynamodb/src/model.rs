//! Request bodies for item operations.
//!
//! Every operation has its own input type. [`ItemRequest`] is the tagged
//! union handed to the client, which only sees the serialized bytes.

use crate::Operation;
use kvsign_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attributes of an item, keyed by attribute name.
pub type Item = BTreeMap<String, AttributeValue>;

/// DynamoDB attribute value in its JSON wire shape, e.g. `{"S": "42"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// String
    S(String),
    /// Number, sent as its decimal text
    N(String),
    /// Boolean
    #[serde(rename = "BOOL")]
    Bool(bool),
    /// Null
    #[serde(rename = "NULL")]
    Null(bool),
    /// List
    L(Vec<AttributeValue>),
    /// Map
    M(BTreeMap<String, AttributeValue>),
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::S(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::S(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::N(v.to_string())
    }
}

/// Table layout: name and primary key attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Table name.
    pub name: String,
    /// Partition key attribute name.
    pub partition_key: String,
    /// Sort key attribute name, for tables with a composite primary key.
    pub sort_key: Option<String>,
}

impl Table {
    /// Create a table with a simple primary key.
    pub fn new(name: impl Into<String>, partition_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            partition_key: partition_key.into(),
            sort_key: None,
        }
    }

    /// Add a sort key to the primary key.
    pub fn with_sort_key(mut self, sort_key: impl Into<String>) -> Self {
        self.sort_key = Some(sort_key.into());
        self
    }

    /// Build the `Key` map for the given key values.
    pub fn key(&self, values: &KeyValues) -> Result<Item> {
        if self.name.is_empty() {
            return Err(Error::request_invalid("table name is empty"));
        }

        let mut key = Item::new();
        key.insert(self.partition_key.clone(), values.partition.clone());

        match (&self.sort_key, &values.sort) {
            (Some(name), Some(value)) => {
                key.insert(name.clone(), value.clone());
            }
            (None, None) => {}
            (Some(name), None) => {
                return Err(Error::request_invalid(format!(
                    "table {} requires a value for sort key {name}",
                    self.name
                )));
            }
            (None, Some(_)) => {
                return Err(Error::request_invalid(format!(
                    "table {} has no sort key",
                    self.name
                )));
            }
        }

        Ok(key)
    }

    fn check_item(&self, item: &Item) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::request_invalid("table name is empty"));
        }
        for name in std::iter::once(&self.partition_key).chain(self.sort_key.iter()) {
            if !item.contains_key(name) {
                return Err(Error::request_invalid(format!(
                    "item for table {} misses key attribute {name}",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

/// Values of the primary key attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValues {
    /// Partition key value.
    pub partition: AttributeValue,
    /// Sort key value.
    pub sort: Option<AttributeValue>,
}

impl KeyValues {
    /// Key values for a table with a simple primary key.
    pub fn new(partition: impl Into<AttributeValue>) -> Self {
        Self {
            partition: partition.into(),
            sort: None,
        }
    }

    /// Add the sort key value.
    pub fn with_sort(mut self, sort: impl Into<AttributeValue>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

/// Which item attributes a write returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnValue {
    /// Nothing is returned.
    None,
    /// All attributes as they were before the write.
    AllOld,
    /// Updated attributes as they were before the write.
    UpdatedOld,
    /// All attributes as they are after the write.
    AllNew,
    /// Updated attributes as they are after the write.
    UpdatedNew,
}

/// Input of `GetItem`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetItemInput {
    /// Table name.
    pub table_name: String,
    /// Primary key of the item.
    pub key: Item,
}

impl GetItemInput {
    /// Read the item with the given key.
    pub fn new(table: &Table, key: &KeyValues) -> Result<Self> {
        Ok(Self {
            table_name: table.name.clone(),
            key: table.key(key)?,
        })
    }
}

/// Input of `PutItem`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutItemInput {
    /// Table name.
    pub table_name: String,
    /// Item to write, including its primary key attributes.
    pub item: Item,
    /// Condition that must hold for the write to happen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_expression: Option<String>,
    /// Values referenced from the condition as `:name`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub expression_attribute_values: Item,
}

impl PutItemInput {
    /// Write `item`, which must carry the table's key attributes.
    pub fn new(table: &Table, item: Item) -> Result<Self> {
        table.check_item(&item)?;
        Ok(Self {
            table_name: table.name.clone(),
            item,
            condition_expression: None,
            expression_attribute_values: Item::new(),
        })
    }

    /// Only write when `expression` holds.
    pub fn with_condition(mut self, expression: impl Into<String>, values: Item) -> Self {
        self.condition_expression = Some(expression.into());
        self.expression_attribute_values = values;
        self
    }
}

/// Input of `DeleteItem`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteItemInput {
    /// Table name.
    pub table_name: String,
    /// Primary key of the item.
    pub key: Item,
    /// Condition that must hold for the delete to happen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_expression: Option<String>,
    /// Attributes to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_values: Option<ReturnValue>,
}

impl DeleteItemInput {
    /// Delete the item with the given key.
    pub fn new(table: &Table, key: &KeyValues) -> Result<Self> {
        Ok(Self {
            table_name: table.name.clone(),
            key: table.key(key)?,
            condition_expression: None,
            return_values: None,
        })
    }

    /// Only delete when `expression` holds.
    pub fn with_condition(mut self, expression: impl Into<String>) -> Self {
        self.condition_expression = Some(expression.into());
        self
    }

    /// Return item attributes in the response.
    pub fn with_return_values(mut self, return_values: ReturnValue) -> Self {
        self.return_values = Some(return_values);
        self
    }
}

/// Item request, one variant per operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRequest {
    /// `GetItem`
    GetItem(GetItemInput),
    /// `PutItem`
    PutItem(PutItemInput),
    /// `DeleteItem`
    DeleteItem(DeleteItemInput),
}

impl ItemRequest {
    /// Operation this request invokes.
    pub fn operation(&self) -> Operation {
        match self {
            ItemRequest::GetItem(_) => Operation::GetItem,
            ItemRequest::PutItem(_) => Operation::PutItem,
            ItemRequest::DeleteItem(_) => Operation::DeleteItem,
        }
    }

    /// Table this request targets.
    pub fn table_name(&self) -> &str {
        match self {
            ItemRequest::GetItem(v) => &v.table_name,
            ItemRequest::PutItem(v) => &v.table_name,
            ItemRequest::DeleteItem(v) => &v.table_name,
        }
    }

    /// Serialize the request body.
    pub fn to_body(&self) -> Result<Vec<u8>> {
        let body = match self {
            ItemRequest::GetItem(v) => serde_json::to_vec(v),
            ItemRequest::PutItem(v) => serde_json::to_vec(v),
            ItemRequest::DeleteItem(v) => serde_json::to_vec(v),
        };
        body.map_err(|e| {
            Error::encoding_failure(format!("failed to serialize {} body", self.operation()))
                .with_source(e)
        })
    }
}

impl From<GetItemInput> for ItemRequest {
    fn from(v: GetItemInput) -> Self {
        ItemRequest::GetItem(v)
    }
}

impl From<PutItemInput> for ItemRequest {
    fn from(v: PutItemInput) -> Self {
        ItemRequest::PutItem(v)
    }
}

impl From<DeleteItemInput> for ItemRequest {
    fn from(v: DeleteItemInput) -> Self {
        ItemRequest::DeleteItem(v)
    }
}
