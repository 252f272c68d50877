use reqwest::multipart::Form;
use reqwest::Method;
use serde_json::Value;

/// Request body variants understood by the client.
pub enum RequestBody {
    None,
    /// Serialized to JSON.
    Json(Value),
    /// Sent as multipart/form-data, untouched.
    Form(Form),
}

impl RequestBody {
    pub fn is_form(&self) -> bool {
        matches!(self, Self::Form(_))
    }
}

/// Method, extra headers and body of a single request.
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

impl RequestOptions {
    pub fn new(method: Method, body: RequestBody) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET, RequestBody::None)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE, RequestBody::None)
    }

    pub fn post_json(body: Value) -> Self {
        Self::new(Method::POST, RequestBody::Json(body))
    }

    pub fn put_json(body: Value) -> Self {
        Self::new(Method::PUT, RequestBody::Json(body))
    }

    pub fn delete_json(body: Value) -> Self {
        Self::new(Method::DELETE, RequestBody::Json(body))
    }

    pub fn post_form(form: Form) -> Self {
        Self::new(Method::POST, RequestBody::Form(form))
    }

    /// Adds a header; later values for the same name win.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}
