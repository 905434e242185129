use crate::dtos::RecipeRequest;
use crate::error::RecipeError;
use axum::http::{header, HeaderMap};
use serde_json::Value;

/// True when the request declares an `application/json` body. Parameters such
/// as `charset` are ignored.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// True when `body` is an object whose `diet` and `protein` are both strings.
/// Emptiness is not checked.
pub fn is_valid_recipe_request(body: &Value) -> bool {
    body.as_object().is_some_and(|fields| {
        fields.get("diet").is_some_and(Value::is_string)
            && fields.get("protein").is_some_and(Value::is_string)
    })
}

/// Decodes a raw request body into a [`RecipeRequest`].
///
/// Unparsable bodies, failed validation, and mistyped optional fields all
/// produce [`RecipeError::Validation`].
pub fn parse_recipe_request(body: &[u8]) -> Result<RecipeRequest, RecipeError> {
    let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

    if !is_valid_recipe_request(&value) {
        return Err(RecipeError::Validation);
    }

    serde_json::from_value(value).map_err(|e| {
        tracing::debug!(error = %e, "Recipe request has mistyped optional fields");
        RecipeError::Validation
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_string_diet_and_protein() {
        assert!(is_valid_recipe_request(&json!({"diet": "vegan", "protein": "tofu"})));
    }

    #[test]
    fn empty_strings_still_pass() {
        assert!(is_valid_recipe_request(&json!({"diet": "", "protein": ""})));
    }

    #[test]
    fn rejects_missing_or_mistyped_fields() {
        let bodies = [
            json!(null),
            json!([]),
            json!("vegan"),
            json!({}),
            json!({"diet": "vegan"}),
            json!({"protein": "tofu"}),
            json!({"diet": 1, "protein": "tofu"}),
            json!({"diet": "vegan", "protein": null}),
            json!({"diet": ["vegan"], "protein": "tofu"}),
        ];

        for body in bodies {
            assert!(!is_valid_recipe_request(&body), "accepted {body}");
        }
    }

    #[test]
    fn parses_full_request() {
        let req = parse_recipe_request(
            br#"{"diet":"paleo","protein":"salmon","preferences":["lunch","quick"],"research":"omega-3"}"#,
        )
        .unwrap();

        assert_eq!(req.diet, "paleo");
        assert_eq!(req.protein, "salmon");
        assert_eq!(req.preferences, vec!["lunch", "quick"]);
        assert_eq!(req.research, "omega-3");
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let req = parse_recipe_request(br#"{"diet":"vegan","protein":"tofu"}"#).unwrap();
        assert!(req.preferences.is_empty());
        assert!(req.research.is_empty());
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        assert!(matches!(
            parse_recipe_request(b"{diet: vegan"),
            Err(RecipeError::Validation)
        ));
        assert!(matches!(parse_recipe_request(b""), Err(RecipeError::Validation)));
    }

    #[test]
    fn mistyped_optional_fields_are_rejected() {
        let bodies: [&[u8]; 3] = [
            br#"{"diet":"vegan","protein":"tofu","preferences":"dinner"}"#,
            br#"{"diet":"vegan","protein":"tofu","research":42}"#,
            br#"{"diet":"vegan","protein":"tofu","preferences":[1,"a"]}"#,
        ];

        for body in bodies {
            assert!(matches!(
                parse_recipe_request(body),
                Err(RecipeError::Validation)
            ));
        }
    }

    #[test]
    fn only_json_content_type_is_accepted() {
        let mut headers = HeaderMap::new();
        assert!(!is_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, "text/plain".parse().unwrap());
        assert!(!is_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        assert!(is_json_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            "Application/JSON; charset=utf-8".parse().unwrap(),
        );
        assert!(is_json_content_type(&headers));
    }
}
