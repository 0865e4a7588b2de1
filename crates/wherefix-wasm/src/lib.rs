use wasm_bindgen::prelude::*;
use wherefix_core::{clean, issue_codes, CleanRequest, CleanResult};

/// Installs the panic hook (and the tracing subscriber when enabled) once the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    #[cfg(feature = "tracing")]
    tracing_wasm::set_as_global_default();
}

/// Request entry point - accepts a JSON `CleanRequest`, returns a JSON `CleanResult`.
/// This function never throws - errors are returned in the result's issues array
#[wasm_bindgen]
pub fn clean_json(request_json: &str) -> String {
    let request: CleanRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            let result = CleanResult::from_error(
                issue_codes::REQUEST_PARSE_ERROR,
                format!("Invalid request format: {e}"),
            );
            return serialize_result(&result);
        }
    };

    serialize_result(&clean(&request))
}

fn serialize_result(result: &CleanResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| {
        let error_result =
            CleanResult::from_error("SERIALIZATION_ERROR", "Failed to serialize result");
        serde_json::to_string(&error_result)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize error result"}"#.to_string())
    })
}

/// Cleans a raw filter clause. Returns an empty string for blank input.
#[wasm_bindgen]
pub fn clean_where_clause(raw: &str) -> String {
    wherefix_core::clean_where_clause(raw)
}

/// Cleans a raw filter clause and prefixes it with `WHERE` when non-empty.
#[wasm_bindgen]
pub fn format_where_input_string(raw: &str) -> String {
    wherefix_core::format_where_input_string(raw)
}

/// Get version information
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
