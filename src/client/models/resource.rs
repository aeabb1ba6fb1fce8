//! Resource and method models from `GetResources` with embedded methods

/// One resource path of a REST API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResource {
    /// Full resource path, e.g. `/items/{id}`
    pub path: String,

    /// Embedded method detail, in provider order.
    ///
    /// `None` when the provider omitted `resourceMethods`, which means the
    /// resource defines no methods at all.
    pub resource_methods: Option<Vec<RawMethod>>,
}

/// Method detail embedded in a resource listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMethod {
    /// Key of the entry in `resourceMethods`
    pub key: String,

    /// HTTP verb (`httpMethod`)
    pub http_method: Option<String>,

    /// Authorization mechanism (`authorizationType`)
    pub authorization_type: Option<String>,

    /// Whether an API key is required (`apiKeyRequired`)
    pub api_key_required: Option<bool>,
}

impl RawMethod {
    /// Build a complete method entry keyed by its verb.
    #[cfg(test)]
    pub fn new(http_method: &str, authorization_type: &str, api_key_required: bool) -> Self {
        Self {
            key: http_method.to_string(),
            http_method: Some(http_method.to_string()),
            authorization_type: Some(authorization_type.to_string()),
            api_key_required: Some(api_key_required),
        }
    }
}
