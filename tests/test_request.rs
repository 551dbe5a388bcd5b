use staticd::http::request::{Method, Request};

#[test]
fn test_method_from_token_case_insensitive() {
    assert_eq!(Method::from_token("GET"), Method::GET);
    assert_eq!(Method::from_token("get"), Method::GET);
    assert_eq!(Method::from_token("HeAd"), Method::HEAD);
}

#[test]
fn test_method_other_is_uppercased() {
    assert_eq!(Method::from_token("post"), Method::Other("POST".to_string()));
    assert_eq!(Method::from_token("Delete").as_str(), "DELETE");
}

#[test]
fn test_supported_methods() {
    assert!(Method::GET.is_supported());
    assert!(Method::HEAD.is_supported());
    assert!(!Method::from_token("PUT").is_supported());
    assert!(!Method::from_token("OPTIONS").is_supported());
}

#[test]
fn test_method_display() {
    assert_eq!(Method::GET.to_string(), "GET");
    assert_eq!(Method::Other("PATCH".to_string()).to_string(), "PATCH");
}

#[test]
fn test_wants_body() {
    let get = Request {
        method: Method::GET,
        path: "/".to_string(),
    };
    let head = Request {
        method: Method::HEAD,
        path: "/".to_string(),
    };

    assert!(get.wants_body());
    assert!(!head.wants_body());
}
