use crate::{
    constants::DEFAULT_TRANSFER_AMOUNT_SOL,
    models::{
        ActionDescriptor, ActionLinks, BuildStrategy, DescriptorType, LinkAction, LinkActionType,
        ParameterSpec,
    },
};

/// Builds the descriptor for `strategy`.
///
/// `base_url` is the URL the descriptor was requested at, without its query
/// string; every `href` is built from it so that the descriptor points back at
/// whichever host served it.
pub fn describe(strategy: BuildStrategy, base_url: &str, icon: &str) -> ActionDescriptor {
    let (title, description, label) = match strategy {
        BuildStrategy::SimpleTransfer => (
            "Send SOL",
            "Send SOL to the action's recipient",
            "Send",
        ),
        BuildStrategy::MintAndCompressBasic => (
            "Compress your token",
            "Compress your token using blink",
            "Compress",
        ),
        BuildStrategy::MintAndCompressWithMetadata => (
            "Compress your token with metadata",
            "Mint a token with on-chain metadata and compress it using blink",
            "Compress",
        ),
    };

    let mut actions = Vec::new();
    if strategy == BuildStrategy::SimpleTransfer {
        actions.push(LinkAction {
            kind: LinkActionType::Transaction,
            label: format!("Send {DEFAULT_TRANSFER_AMOUNT_SOL} SOL"),
            href: format!("{base_url}?amount={DEFAULT_TRANSFER_AMOUNT_SOL}"),
            parameters: vec![],
        });
    }
    actions.push(parameterized_link(strategy, base_url, label));

    ActionDescriptor {
        kind: DescriptorType::Action,
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        label: label.to_string(),
        links: ActionLinks { actions },
    }
}

/// A link exposing every query parameter the build handler reads.
fn parameterized_link(strategy: BuildStrategy, base_url: &str, label: &str) -> LinkAction {
    let names = strategy.query_parameters();
    let query = names
        .iter()
        .map(|name| format!("{name}={{{name}}}"))
        .collect::<Vec<_>>()
        .join("&");
    let parameters = names
        .iter()
        .map(|name| parameter_spec(strategy, name))
        .collect();

    LinkAction {
        kind: LinkActionType::Transaction,
        label: label.to_string(),
        href: format!("{base_url}?{query}"),
        parameters,
    }
}

fn parameter_spec(strategy: BuildStrategy, name: &str) -> ParameterSpec {
    match name {
        "amount" if strategy == BuildStrategy::SimpleTransfer => {
            ParameterSpec::number(name, "Amount in SOL")
        }
        "amount" => ParameterSpec::number(name, "Amount to compress"),
        "decimals" => ParameterSpec::number(name, "Decimals"),
        "supply" => ParameterSpec::number(name, "Total supply"),
        "name" => ParameterSpec::text(name, "Token name"),
        "symbol" => ParameterSpec::text(name, "Token symbol"),
        other => ParameterSpec::text(other, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const BASE: &str = "https://actions.example.com/api/actions/compress";

    #[test]
    fn test_every_descriptor_has_transaction_link_matching_handler() {
        for strategy in BuildStrategy::iter() {
            let descriptor = describe(strategy, BASE, "icon");

            let link = descriptor
                .links
                .actions
                .iter()
                .find(|link| !link.parameters.is_empty())
                .expect("parameterized link");
            let names: Vec<&str> = link.parameters.iter().map(|p| p.name.as_str()).collect();

            assert_eq!(link.kind, LinkActionType::Transaction);
            assert_eq!(names, strategy.query_parameters());
            assert_eq!(link.href_placeholders(), strategy.query_parameters());
        }
    }

    #[test]
    fn test_hrefs_use_request_base_url() {
        let descriptor = describe(BuildStrategy::SimpleTransfer, BASE, "icon");

        assert_eq!(descriptor.links.actions.len(), 2);
        assert_eq!(
            descriptor.links.actions[0].href,
            format!("{BASE}?amount=0.1")
        );
        assert!(descriptor
            .links
            .actions
            .iter()
            .all(|link| link.href.starts_with(BASE)));
    }

    #[test]
    fn test_metadata_descriptor_has_text_parameters() {
        let descriptor = describe(BuildStrategy::MintAndCompressWithMetadata, BASE, "icon");
        let link = &descriptor.links.actions[0];

        assert_eq!(descriptor.icon, "icon");
        assert_eq!(link.parameters[3], ParameterSpec::text("name", "Token name"));
        assert_eq!(
            link.parameters[4],
            ParameterSpec::text("symbol", "Token symbol")
        );
    }
}
