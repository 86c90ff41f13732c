/// Methods that resolve to a file.
///
/// Any other token parses to `None` and the request is answered with 400.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyweb::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// assert_eq!(Method::from_str("POST"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "HEAD" => Some(Method::HEAD),
            _ => None,
        }
    }
}

/// A request line plus the line following it.
///
/// Built fresh for every connection; nothing is carried over between
/// requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Method token exactly as received
    pub method: String,
    /// Requested path, e.g. "/index.html"
    pub resource: String,
    /// Protocol token, e.g. "HTTP/1.0"
    pub version: String,
    /// Second line of the request, if any. Only used for the Host check.
    pub host_line: Option<String>,
}

impl Request {
    /// The method as a known [`Method`], or `None` for unknown tokens.
    pub fn method(&self) -> Option<Method> {
        Method::from_str(&self.method)
    }

    /// HEAD responses carry headers only.
    pub fn is_head(&self) -> bool {
        self.method() == Some(Method::HEAD)
    }
}
