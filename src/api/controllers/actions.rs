//! Request handling for the action endpoints.
//!
//! Controllers receive already extracted values from the routes and return an
//! `HttpResponse` or an [`ActionError`] that renders as plain text.
use actix_web::HttpResponse;
use log::info;
use std::str::FromStr;

use crate::{
    constants::ACTIONS_PATH_PREFIX,
    domain::describe,
    models::{
        ActionError, ActionPostRequest, ActionPostResponse, ActionRule, ActionsManifest,
        AppState, BuildQuery, BuildStrategy, LinkActionType,
    },
    services::SolanaProviderTrait,
};

/// Parses the `{action}` path segment.
pub fn parse_strategy(action: &str) -> Result<BuildStrategy, ActionError> {
    BuildStrategy::from_str(action)
        .map_err(|_| ActionError::NotFound(format!("Unknown action: {action}")))
}

/// Returns the descriptor of `strategy`, with links rooted at `base_url`.
pub fn describe_action<P: SolanaProviderTrait>(
    strategy: BuildStrategy,
    base_url: &str,
    state: &AppState<P>,
) -> Result<HttpResponse, ActionError> {
    let descriptor = describe(strategy, base_url, &state.icon_url);

    Ok(HttpResponse::Ok().json(descriptor))
}

/// Builds the transaction of `strategy` for the account in `request`.
pub async fn build_action<P: SolanaProviderTrait>(
    strategy: BuildStrategy,
    request: ActionPostRequest,
    query: BuildQuery,
    state: &AppState<P>,
) -> Result<HttpResponse, ActionError> {
    let built = state
        .builder
        .build(strategy, &request.account, &query)
        .await?;

    if let Some(mint) = built.mint {
        info!("Prepared mint {mint} for {}", request.account);
    }

    Ok(HttpResponse::Ok().json(ActionPostResponse {
        kind: LinkActionType::Transaction,
        message: Some(built.message()),
        transaction: built.transaction.into_inner(),
    }))
}

/// `actions.json`: every action path is served by this API under the same path.
pub fn actions_manifest() -> HttpResponse {
    let pattern = format!("{ACTIONS_PATH_PREFIX}/**");

    HttpResponse::Ok().json(ActionsManifest {
        rules: vec![ActionRule {
            path_pattern: pattern.clone(),
            api_path: pattern,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!(
            parse_strategy("compress-metadata").unwrap(),
            BuildStrategy::MintAndCompressWithMetadata
        );
        assert!(matches!(
            parse_strategy("burn"),
            Err(ActionError::NotFound(ref msg)) if msg.contains("burn")
        ));
    }
}
