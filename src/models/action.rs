//! Wire models of the Actions contract: the descriptor returned by `GET`, the
//! body and response of `POST`, and the `actions.json` manifest.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Kind of document returned by a descriptor request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DescriptorType {
    Action,
}

/// Metadata describing an action and the links a client may follow to build it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionDescriptor {
    #[serde(rename = "type")]
    pub kind: DescriptorType,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub label: String,
    pub links: ActionLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionLinks {
    pub actions: Vec<LinkAction>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LinkActionType {
    Transaction,
}

/// A link the client renders as a button. `href` may embed `{param}`
/// placeholders filled from `parameters`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkAction {
    #[serde(rename = "type")]
    pub kind: LinkActionType,
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterSpec>,
}

impl LinkAction {
    /// Names of the `{placeholder}`s embedded in `href`, in order.
    pub fn href_placeholders(&self) -> Vec<&str> {
        self.href
            .split('{')
            .skip(1)
            .filter_map(|segment| segment.split_once('}').map(|(name, _)| name))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    Text,
    Number,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterSpec {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ParameterType,
    pub required: bool,
}

impl ParameterSpec {
    pub fn number(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: ParameterType::Number,
            required: false,
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: ParameterType::Text,
            required: false,
        }
    }
}

/// Body of a build request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionPostRequest {
    pub account: String,
}

/// Body of a successful build response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionPostResponse {
    #[serde(rename = "type")]
    pub kind: LinkActionType,
    /// Base64 encoded, partially signed transaction.
    pub transaction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `actions.json` document mapping website paths to action API paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionsManifest {
    pub rules: Vec<ActionRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionRule {
    pub path_pattern: String,
    pub api_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_serializes_to_actions_shape() {
        let descriptor = ActionDescriptor {
            kind: DescriptorType::Action,
            icon: "https://example.com/icon.png".to_string(),
            title: "Title".to_string(),
            description: "Description".to_string(),
            label: "Label".to_string(),
            links: ActionLinks {
                actions: vec![LinkAction {
                    kind: LinkActionType::Transaction,
                    label: "Go".to_string(),
                    href: "https://example.com/api?amount={amount}".to_string(),
                    parameters: vec![ParameterSpec::number("amount", "Amount")],
                }],
            },
        };

        let value = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(value["type"], "action");
        assert_eq!(value["links"]["actions"][0]["type"], "transaction");
        assert_eq!(
            value["links"]["actions"][0]["parameters"][0],
            json!({"name": "amount", "label": "Amount", "type": "number", "required": false})
        );
    }

    #[test]
    fn test_link_without_parameters_omits_field() {
        let link = LinkAction {
            kind: LinkActionType::Transaction,
            label: "Send".to_string(),
            href: "https://example.com/api?amount=0.1".to_string(),
            parameters: vec![],
        };

        let value = serde_json::to_value(&link).unwrap();

        assert!(value.get("parameters").is_none());
    }

    #[test]
    fn test_href_placeholders() {
        let link = LinkAction {
            kind: LinkActionType::Transaction,
            label: "Mint".to_string(),
            href: "https://x.io/api/actions/compress?amount={amount}&decimals={decimals}".to_string(),
            parameters: vec![],
        };

        assert_eq!(link.href_placeholders(), vec!["amount", "decimals"]);
    }

    #[test]
    fn test_post_response_omits_empty_message() {
        let response = ActionPostResponse {
            kind: LinkActionType::Transaction,
            transaction: "AQID".to_string(),
            message: None,
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"type": "transaction", "transaction": "AQID"})
        );
    }

    #[test]
    fn test_manifest_uses_camel_case() {
        let manifest = ActionsManifest {
            rules: vec![ActionRule {
                path_pattern: "/api/actions/**".to_string(),
                api_path: "/api/actions/**".to_string(),
            }],
        };

        let value = serde_json::to_value(&manifest).unwrap();

        assert_eq!(value["rules"][0]["pathPattern"], "/api/actions/**");
        assert_eq!(value["rules"][0]["apiPath"], "/api/actions/**");
    }
}
