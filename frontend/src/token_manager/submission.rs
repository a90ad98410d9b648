//! Requests produced by the token manager and their outcomes.

use shared::{
    ApiError, ApiTokensApi, CreateApiTokenRequest, CreateApiTokenResponse, NamedRoute,
    UpdateApiTokenRequest,
};

/// A request the token manager wants sent
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(CreateApiTokenRequest),
    Update {
        id: u64,
        request: UpdateApiTokenRequest,
    },
    Delete {
        id: u64,
    },
}

impl Submission {
    pub fn route(&self) -> NamedRoute {
        match self {
            Submission::Create(_) => NamedRoute::ApiTokensStore,
            Submission::Update { id, .. } => NamedRoute::ApiTokensUpdate { id: *id },
            Submission::Delete { id } => NamedRoute::ApiTokensDestroy { id: *id },
        }
    }
}

/// The settled result of a [`Submission`]
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Created(Result<CreateApiTokenResponse, ApiError>),
    Updated { id: u64, result: Result<(), ApiError> },
    Deleted { id: u64, result: Result<(), ApiError> },
}

impl Completion {
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Completion::Created(result) => result.as_ref().err(),
            Completion::Updated { result, .. } | Completion::Deleted { result, .. } => {
                result.as_ref().err()
            }
        }
    }
}

/// Send a submission through any API implementation
pub async fn perform<A: ApiTokensApi>(api: &A, submission: Submission) -> Completion {
    match submission {
        Submission::Create(request) => Completion::Created(api.create_api_token(&request).await),
        Submission::Update { id, request } => Completion::Updated {
            id,
            result: api.update_api_token(id, &request).await,
        },
        Submission::Delete { id } => Completion::Deleted {
            id,
            result: api.delete_api_token(id).await,
        },
    }
}
