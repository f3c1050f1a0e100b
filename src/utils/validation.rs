use crate::utils::error::ApiError;
use axum::{
    async_trait,
    extract::{
        rejection::JsonRejection, FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    Json, RequestPartsExt,
};
use serde::{de::DeserializeOwned, Serialize};
use validator::{Validate, ValidationErrors};

/// One failed check, flattened from the validator error tree.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    pub path: String,
    pub message: String,
}

/// Flattens [`ValidationErrors`] into a list of issues ordered by field path.
pub fn issues(errors: &ValidationErrors) -> Vec<Issue> {
    let mut issues = errors
        .field_errors()
        .iter()
        .flat_map(|(path, errors)| {
            errors.iter().map(move |error| Issue {
                path: path.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string()),
            })
        })
        .collect::<Vec<_>>();

    // field_errors iterates a HashMap, so order the output deterministically
    issues.sort_by(|a, b| a.path.cmp(&b.path));
    issues
}

fn deserialization_issue(message: String) -> Vec<Issue> {
    vec![Issue {
        path: String::new(),
        message,
    }]
}

/// JSON body extractor that rejects with a validation error response
/// instead of axum's plain-text rejections.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::JsonDataError(inner) => {
                    ApiError::validation(deserialization_issue(inner.body_text()))
                }
                JsonRejection::JsonSyntaxError(inner) => {
                    ApiError::validation(deserialization_issue(inner.body_text()))
                }
                JsonRejection::MissingJsonContentType(inner) => {
                    ApiError::validation(deserialization_issue(inner.body_text()))
                }
                _ => ApiError::server_error(),
            })?;

        body.validate()
            .map_err(|errors| ApiError::validation(issues(&errors)))?;

        Ok(Self(body))
    }
}

/// Query string extractor that applies validator rules after deserialization.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = parts
            .extract::<Query<T>>()
            .await
            .map_err(|rejection| ApiError::validation(deserialization_issue(rejection.body_text())))?;

        query
            .validate()
            .map_err(|errors| ApiError::validation(issues(&errors)))?;

        Ok(Self(query))
    }
}

/// Path parameter extractor that applies validator rules after deserialization.
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = parts
            .extract::<Path<T>>()
            .await
            .map_err(|rejection| ApiError::validation(deserialization_issue(rejection.body_text())))?;

        params
            .validate()
            .map_err(|errors| ApiError::validation(issues(&errors)))?;

        Ok(Self(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 2, message = "Name is too short"))]
        name: String,
        #[validate(range(min = 0.0, message = "Price must not be negative"))]
        price: f64,
    }

    #[test]
    fn issues_are_ordered_by_path() {
        let sample = Sample {
            name: String::from("x"),
            price: -1.0,
        };

        let errors = sample.validate().unwrap_err();
        let issues = issues(&errors);

        assert_eq!(
            issues,
            vec![
                Issue {
                    path: String::from("name"),
                    message: String::from("Name is too short"),
                },
                Issue {
                    path: String::from("price"),
                    message: String::from("Price must not be negative"),
                },
            ]
        );
    }

    #[test]
    fn valid_value_produces_no_issues() {
        let sample = Sample {
            name: String::from("Dwarven Spring"),
            price: 0.8,
        };

        assert!(sample.validate().is_ok());
    }
}
