//! Request model: operation names, named parameters, and the attribute bags
//! that RAMCO expects as comma-separated strings.

use std::fmt;

use ramco_core::constants::{FIELD_KEY, FIELD_OPERATION};
use ramco_core::errors::RequestError;

/// Wire names of request parameters.
pub mod param {
    pub const ENTITY: &str = "Entity";
    pub const GUID: &str = "GUID";
    pub const ATTRIBUTE: &str = "Attribute";
    pub const ATTRIBUTES: &str = "Attributes";
    pub const ATTRIBUTE_VALUES: &str = "AttributeValues";
    pub const FILTER: &str = "Filter";
    pub const STRING_DELIMITER: &str = "StringDelimiter";
    pub const MAX_RESULTS: &str = "MaxResults";
    pub const STREAM_TOKEN: &str = "StreamToken";
    pub const USERNAME: &str = "cobalt_username";
    pub const PASSWORD: &str = "cobalt_password";
}

/// Operations the RAMCO v2 API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetEntityTypes,
    GetEntityMetadata,
    GetOptionSet,
    ClearCache,
    GetEntity,
    GetEntities,
    ValidateUser,
    UpdateEntity,
    CreateEntity,
    DeleteEntity,
}

impl Operation {
    pub const ALL: [Operation; 10] = [
        Self::GetEntityTypes,
        Self::GetEntityMetadata,
        Self::GetOptionSet,
        Self::ClearCache,
        Self::GetEntity,
        Self::GetEntities,
        Self::ValidateUser,
        Self::UpdateEntity,
        Self::CreateEntity,
        Self::DeleteEntity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetEntityTypes => "GetEntityTypes",
            Self::GetEntityMetadata => "GetEntityMetadata",
            Self::GetOptionSet => "GetOptionSet",
            Self::ClearCache => "ClearCache",
            Self::GetEntity => "GetEntity",
            Self::GetEntities => "GetEntities",
            Self::ValidateUser => "ValidateUser",
            Self::UpdateEntity => "UpdateEntity",
            Self::CreateEntity => "CreateEntity",
            Self::DeleteEntity => "DeleteEntity",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of attribute names, e.g. `FirstName,LastName`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeList {
    names: Vec<String>,
}

impl AttributeList {
    pub fn new<I, S>(names: I) -> Result<Self, RequestError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Vec::new();
        for name in names {
            out.push(checked_name(name.into())?);
        }
        if out.is_empty() {
            return Err(RequestError::Empty {
                field: param::ATTRIBUTES,
            });
        }
        Ok(Self { names: out })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn encode(&self) -> String {
        self.names.join(",")
    }
}

/// Ordered `name=value` pairs for CreateEntity/UpdateEntity.
///
/// Without a delimiter, values may not contain commas. With one, every value
/// is wrapped in it and may not contain the delimiter itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValues {
    pairs: Vec<(String, String)>,
    delimiter: Option<char>,
}

impl AttributeValues {
    pub fn new<I, K, V>(pairs: I) -> Result<Self, RequestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::build(pairs, None)
    }

    pub fn with_delimiter<I, K, V>(pairs: I, delimiter: char) -> Result<Self, RequestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::build(pairs, Some(checked_delimiter(delimiter)?))
    }

    fn build<I, K, V>(pairs: I, delimiter: Option<char>) -> Result<Self, RequestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut out = Vec::new();
        for (name, value) in pairs {
            let name = checked_name(name.into())?;
            let value = value.into();
            match delimiter {
                Some(d) if value.contains(d) => {
                    return Err(RequestError::DelimiterInValue { name, delimiter: d });
                }
                None if value.contains(',') => {
                    return Err(RequestError::UndelimitedComma { name });
                }
                _ => {}
            }
            out.push((name, value));
        }
        if out.is_empty() {
            return Err(RequestError::Empty {
                field: param::ATTRIBUTE_VALUES,
            });
        }
        Ok(Self {
            pairs: out,
            delimiter,
        })
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn delimiter(&self) -> Option<char> {
        self.delimiter
    }

    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(name, value)| match self.delimiter {
                Some(d) => format!("{name}={d}{value}{d}"),
                None => format!("{name}={value}"),
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Parameters of a GetEntities query.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityQuery {
    entity: String,
    attributes: AttributeList,
    filter: Option<String>,
    string_delimiter: Option<char>,
    max_results: Option<u32>,
}

impl EntityQuery {
    pub fn new(entity: impl Into<String>, attributes: AttributeList) -> Self {
        Self {
            entity: entity.into(),
            attributes,
            filter: None,
            string_delimiter: None,
            max_results: None,
        }
    }

    /// RAMCO filter expression, e.g. `LastName<eq>#Smith#`.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn string_delimiter(mut self, delimiter: char) -> Result<Self, RequestError> {
        self.string_delimiter = Some(checked_delimiter(delimiter)?);
        Ok(self)
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }
}

/// One operation with its named parameters, ready to be form-encoded.
#[derive(Clone, PartialEq)]
pub struct Request {
    operation: Operation,
    params: Vec<(&'static str, String)>,
}

impl Request {
    fn new(operation: Operation) -> Self {
        Self {
            operation,
            params: Vec::new(),
        }
    }

    fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    fn opt_param(self, name: &'static str, value: Option<String>) -> Self {
        match value {
            Some(v) => self.param(name, v),
            None => self,
        }
    }

    pub fn get_entity_types() -> Self {
        Self::new(Operation::GetEntityTypes)
    }

    pub fn get_entity_metadata(entity: &str) -> Self {
        Self::new(Operation::GetEntityMetadata).param(param::ENTITY, entity)
    }

    pub fn get_option_set(entity: &str, attribute: &str) -> Self {
        Self::new(Operation::GetOptionSet)
            .param(param::ENTITY, entity)
            .param(param::ATTRIBUTE, attribute)
    }

    pub fn clear_cache() -> Self {
        Self::new(Operation::ClearCache)
    }

    pub fn get_entity(entity: &str, guid: &str, attributes: &AttributeList) -> Self {
        Self::new(Operation::GetEntity)
            .param(param::ENTITY, entity)
            .param(param::GUID, guid)
            .param(param::ATTRIBUTES, attributes.encode())
    }

    pub fn get_entities(query: &EntityQuery) -> Self {
        Self::new(Operation::GetEntities)
            .param(param::ENTITY, query.entity.as_str())
            .param(param::ATTRIBUTES, query.attributes.encode())
            .opt_param(param::FILTER, query.filter.clone())
            .opt_param(
                param::STRING_DELIMITER,
                query.string_delimiter.map(String::from),
            )
            .opt_param(param::MAX_RESULTS, query.max_results.map(|n| n.to_string()))
    }

    /// GetEntities resumed from a StreamToken.
    pub fn resume(stream_token: &str) -> Self {
        Self::new(Operation::GetEntities).param(param::STREAM_TOKEN, stream_token)
    }

    pub fn validate_user(username: &str, password: &str) -> Self {
        Self::new(Operation::ValidateUser)
            .param(param::USERNAME, username)
            .param(param::PASSWORD, password)
    }

    pub fn update_entity(entity: &str, guid: &str, values: &AttributeValues) -> Self {
        Self::new(Operation::UpdateEntity)
            .param(param::ENTITY, entity)
            .param(param::GUID, guid)
            .param(param::ATTRIBUTE_VALUES, values.encode())
            .opt_param(param::STRING_DELIMITER, values.delimiter.map(String::from))
    }

    pub fn create_entity(entity: &str, values: &AttributeValues) -> Self {
        Self::new(Operation::CreateEntity)
            .param(param::ENTITY, entity)
            .param(param::ATTRIBUTE_VALUES, values.encode())
            .opt_param(param::STRING_DELIMITER, values.delimiter.map(String::from))
    }

    pub fn delete_entity(entity: &str, guid: &str) -> Self {
        Self::new(Operation::DeleteEntity)
            .param(param::ENTITY, entity)
            .param(param::GUID, guid)
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Full form body: access key, operation name, then the parameters in order.
    pub fn form_fields(&self, api_key: &str) -> Vec<(String, String)> {
        let mut fields = Vec::with_capacity(self.params.len() + 2);
        fields.push((FIELD_KEY.to_string(), api_key.to_string()));
        fields.push((FIELD_OPERATION.to_string(), self.operation.as_str().to_string()));
        fields.extend(
            self.params
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone())),
        );
        fields
    }
}

// Passwords never reach logs.
impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<(&str, &str)> = self
            .params
            .iter()
            .map(|(name, value)| {
                if *name == param::PASSWORD {
                    (*name, "<redacted>")
                } else {
                    (*name, value.as_str())
                }
            })
            .collect();
        f.debug_struct("Request")
            .field("operation", &self.operation)
            .field("params", &params)
            .finish()
    }
}

fn checked_name(name: String) -> Result<String, RequestError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(RequestError::Empty {
            field: "attribute name",
        });
    }
    if let Some(ch) = name.chars().find(|&c| matches!(c, ',' | '=')) {
        return Err(RequestError::ReservedCharacter { name, ch });
    }
    Ok(name)
}

fn checked_delimiter(delimiter: char) -> Result<char, RequestError> {
    if matches!(delimiter, ',' | '=') || delimiter.is_whitespace() {
        return Err(RequestError::InvalidDelimiter { delimiter });
    }
    Ok(delimiter)
}
