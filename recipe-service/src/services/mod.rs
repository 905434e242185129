pub mod prompt;
pub mod providers;
pub mod response_parser;
pub mod validator;

pub use prompt::build_recipe_prompt;
pub use providers::{InferenceProvider, ProviderError};
pub use response_parser::{parse_model_output, ParseError};
pub use validator::{is_json_content_type, is_valid_recipe_request, parse_recipe_request};
