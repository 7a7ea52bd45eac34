use thiserror::Error;

/// Every way a weather request can fail. `Display` yields the exact message
/// shown to the user.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The city field was empty after trimming.
    #[error("Please enter a city name.")]
    EmptyInput,

    /// No API key is stored, so no request can be authorised.
    #[error("No OpenWeather API key configured — run `weather configure` first.")]
    MissingApiKey,

    /// The server answered with a 4xx or 5xx status.
    #[error("{}", http_status_message(.status, .city, .detail))]
    HttpStatus {
        status: u16,
        city: String,
        /// Status error text from the HTTP client, without the request URL.
        detail: String,
    },

    /// The JSON body carried a `cod` other than 200.
    #[error("Unexpected API response: {0}")]
    ApplicationStatus(String),

    #[error("Connection Error — Check your internet.")]
    Connection,

    #[error("Timeout — Server did not respond.")]
    Timeout,

    /// Any other transport failure.
    #[error("Network error:\n{0}")]
    Network(String),

    /// The body was not JSON or lacked a required field.
    #[error("Unreadable weather data — {0}")]
    MalformedResponse(String),
}

fn http_status_message(status: &u16, city: &str, detail: &str) -> String {
    match status {
        400 => "Bad request — Check your input.".to_string(),
        401 => format!("Unauthorized ({detail}) — Invalid API key."),
        403 => format!("Forbidden ({detail}) — Insufficient permissions."),
        404 => format!("City '{city}' not found."),
        500 => "Internal Server Error.".to_string(),
        502 => "Bad Gateway.".to_string(),
        503 => "Service Unavailable.".to_string(),
        504 => "Gateway Timeout.".to_string(),
        _ => format!("Unknown HTTP error: {detail}"),
    }
}
